use core::fmt;
use grid_util::point::Point;
use itertools::{iproduct, Itertools};
use log::{debug, warn};
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::cell::{Cell, CellKind};
use crate::config::GridConfig;
use crate::error::GridError;
use crate::solver::SearchResult;
use crate::{
    grid_point, manhattan_distance, END_COL, END_ROW, GRID_COLS, GRID_ROWS, START_COL, START_ROW,
};

/// Offsets `(dx, dy)` of the 4-neighbourhood in canonical order: up, down, left, right. Every
/// algorithm iterates neighbours in this order, so it decides traversal order and tie-breaks.
const NEUMANN_OFFSETS: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// [PathingGrid] is a fixed-size, row-major arena of [Cell]s with exactly one start and one end.
/// Obstacles stay in the arena but are excluded from adjacency. In addition it maintains
/// connected components in a [UnionFind] so that reachability can be checked without searching.
#[derive(Clone, Debug)]
pub struct PathingGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    start: Point,
    end: Point,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Default for PathingGrid {
    fn default() -> PathingGrid {
        PathingGrid::build(
            GRID_ROWS,
            GRID_COLS,
            grid_point(START_ROW, START_COL),
            grid_point(END_ROW, END_COL),
        )
    }
}

impl PathingGrid {
    /// Creates a `rows` x `cols` grid without obstacles. Fails if a dimension is zero, if start or
    /// end lies outside the grid or if both share a cell.
    pub fn new(
        rows: usize,
        cols: usize,
        start: Point,
        end: Point,
    ) -> Result<PathingGrid, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        for p in [start, end] {
            if p.x < 0 || p.y < 0 || p.x as usize >= cols || p.y as usize >= rows {
                return Err(GridError::OutOfBounds(p));
            }
        }
        if start == end {
            return Err(GridError::SameStartAndEnd(start));
        }
        Ok(PathingGrid::build(rows, cols, start, end))
    }

    pub fn from_config(config: &GridConfig) -> Result<PathingGrid, GridError> {
        PathingGrid::new(config.rows, config.cols, config.start, config.end)
    }

    fn build(rows: usize, cols: usize, start: Point, end: Point) -> PathingGrid {
        let cells = iproduct!(0..rows as i32, 0..cols as i32)
            .map(|(row, col)| {
                let pos = grid_point(row, col);
                let kind = if pos == start {
                    CellKind::Start
                } else if pos == end {
                    CellKind::End
                } else {
                    CellKind::Empty
                };
                Cell::new(pos, kind)
            })
            .collect::<Vec<Cell>>();
        let mut grid = PathingGrid {
            rows,
            cols,
            cells,
            start,
            end,
            components: UnionFind::new(rows * cols),
            components_dirty: false,
        };
        grid.generate_components();
        grid
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn start(&self) -> Point {
        self.start
    }
    pub fn end(&self) -> Point {
        self.end
    }
    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
    pub fn cell(&self, pos: &Point) -> Option<&Cell> {
        self.ix(pos).map(|ix| &self.cells[ix])
    }
    fn cell_mut(&mut self, pos: &Point) -> Option<&mut Cell> {
        let ix = self.ix(pos)?;
        self.cells.get_mut(ix)
    }
    pub fn in_bounds(&self, pos: &Point) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.cols && (pos.y as usize) < self.rows
    }
    /// Whether `pos` is inside the grid and not an obstacle.
    pub fn can_move_to(&self, pos: &Point) -> bool {
        self.cell(pos).is_some_and(|cell| !cell.is_obstacle())
    }
    fn ix(&self, pos: &Point) -> Option<usize> {
        self.in_bounds(pos).then(|| self.get_ix(pos))
    }
    /// Row-major index of a point known to be in bounds.
    pub(crate) fn get_ix(&self, pos: &Point) -> usize {
        pos.y as usize * self.cols + pos.x as usize
    }

    /// The traversable neighbours of `pos`, ordered up, down, left, right.
    pub fn neighbours(&self, pos: &Point) -> SmallVec<[Point; 4]> {
        NEUMANN_OFFSETS
            .iter()
            .map(|&(dx, dy)| Point::new(pos.x + dx, pos.y + dy))
            .filter(|p| self.can_move_to(p))
            .collect()
    }

    /// Neutralizes the transient fields of every cell while keeping the roles. Must be called
    /// before applying a new [SearchResult] so no marks from an earlier run survive.
    pub fn reset_transient(&mut self) {
        self.cells.iter_mut().for_each(Cell::reset);
    }

    /// Removes every obstacle, leaving all other state untouched.
    pub fn clear_obstacles(&mut self) {
        for cell in self.cells.iter_mut().filter(|c| c.is_obstacle()) {
            cell.kind = CellKind::Empty;
        }
        self.generate_components();
    }

    /// Blocks or unblocks a cell. Start and end cannot be blocked. Joins newly connected
    /// components and flags the components as dirty if they are (potentially) split.
    pub fn set_obstacle(&mut self, pos: Point, blocked: bool) -> Result<(), GridError> {
        let ix = self.ix(&pos).ok_or(GridError::OutOfBounds(pos))?;
        let cell = &mut self.cells[ix];
        if cell.is_start() || cell.is_end() {
            return Err(GridError::RoleConflict(pos));
        }
        let was_blocked = cell.is_obstacle();
        cell.kind = if blocked {
            CellKind::Obstacle
        } else {
            CellKind::Empty
        };
        cell.visited = false;
        cell.on_path = false;
        if blocked && !was_blocked {
            self.components_dirty = true;
        } else if !blocked && was_blocked {
            for n in self.neighbours(&pos) {
                let n_ix = self.get_ix(&n);
                self.components.union(ix, n_ix);
            }
        }
        Ok(())
    }

    /// Flips the obstacle flag of a cell and returns the new flag.
    pub fn toggle_obstacle(&mut self, pos: Point) -> Result<bool, GridError> {
        let blocked = !self
            .cell(&pos)
            .ok_or(GridError::OutOfBounds(pos))?
            .is_obstacle();
        self.set_obstacle(pos, blocked)?;
        Ok(blocked)
    }

    /// Moves the start marker onto an empty cell.
    pub fn move_start(&mut self, pos: Point) -> Result<(), GridError> {
        self.move_endpoint(pos, CellKind::Start)
    }

    /// Moves the end marker onto an empty cell.
    pub fn move_end(&mut self, pos: Point) -> Result<(), GridError> {
        self.move_endpoint(pos, CellKind::End)
    }

    fn move_endpoint(&mut self, pos: Point, kind: CellKind) -> Result<(), GridError> {
        let ix = self.ix(&pos).ok_or(GridError::OutOfBounds(pos))?;
        match self.cells[ix].kind {
            k if k == kind => return Ok(()),
            CellKind::Empty => {}
            _ => return Err(GridError::RoleConflict(pos)),
        }
        let old = if kind == CellKind::Start {
            std::mem::replace(&mut self.start, pos)
        } else {
            std::mem::replace(&mut self.end, pos)
        };
        debug!("Moving {:?} from {:?} to {:?}", kind, old, pos);
        let old_ix = self.get_ix(&old);
        self.cells[old_ix].kind = CellKind::Empty;
        let cell = &mut self.cells[ix];
        cell.kind = kind;
        cell.visited = false;
        cell.on_path = false;
        Ok(())
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> Option<usize> {
        self.ix(point).map(|ix| self.components.find(ix))
    }

    /// Checks if start and goal are traversable and on the same component. Call
    /// [update](Self::update) after blocking cells, otherwise the answer may be stale.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        if self.components_dirty {
            warn!("Checking reachability on dirty components");
        }
        self.can_move_to(start)
            && self.can_move_to(goal)
            && self
                .components
                .equiv(self.get_ix(start), self.get_ix(goal))
    }

    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        !self.reachable(start, goal)
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up traversable neighbours to the same
    /// components.
    pub fn generate_components(&mut self) {
        debug!("Generating connected components");
        self.components = UnionFind::new(self.cells.len());
        self.components_dirty = false;
        for ix in 0..self.cells.len() {
            if self.cells[ix].is_obstacle() {
                continue;
            }
            let point = self.cells[ix].pos;
            // Linking down and right covers every edge of the 4-neighbourhood once.
            for n in [Point::new(point.x, point.y + 1), Point::new(point.x + 1, point.y)] {
                if self.can_move_to(&n) {
                    let n_ix = self.get_ix(&n);
                    self.components.union(ix, n_ix);
                }
            }
        }
    }

    /// Whether consecutive points of `path` are adjacent, in bounds and free of obstacles.
    pub fn is_valid_path(&self, path: &[Point]) -> bool {
        path.iter().all(|p| self.can_move_to(p))
            && path
                .iter()
                .tuple_windows()
                .all(|(a, b)| manhattan_distance(a, b) == 1)
    }

    /// Projects the bookkeeping of a finished search onto the cells so a presentation layer can
    /// read `visited`, `distance`, `previous` and `on_path` from the grid itself.
    pub fn apply_result(&mut self, result: &SearchResult) {
        self.reset_transient();
        for (pos, record) in &result.records {
            let previous = result.records.get_index(record.parent).map(|(p, _)| *p);
            if let Some(cell) = self.cell_mut(pos) {
                cell.distance = Some(record.distance);
                cell.heuristic = record.heuristic;
                cell.previous = previous;
                cell.visited = record.visited;
            }
        }
        for p in &result.path {
            if let Some(cell) = self.cell_mut(p) {
                cell.on_path = true;
            }
        }
    }
}

impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            let line = row
                .iter()
                .map(|cell| match cell.kind {
                    CellKind::Start => 'S',
                    CellKind::End => 'E',
                    CellKind::Obstacle => '#',
                    CellKind::Empty if cell.on_path => '*',
                    CellKind::Empty if cell.visited => 'o',
                    CellKind::Empty => '.',
                })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
