use grid_util::point::Point;

/// The role a cell plays on the grid. Start, end and obstacle exclude each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CellKind {
    #[default]
    Empty,
    Start,
    End,
    Obstacle,
}

/// A single node of the grid graph.
///
/// `pos` and `kind` are owned by the editor. The remaining fields are transient: they are
/// neutral after [PathingGrid::reset_transient](crate::pathing_grid::PathingGrid::reset_transient)
/// and only filled in when a [SearchResult](crate::solver::SearchResult) is applied to the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub pos: Point,
    pub kind: CellKind,
    pub visited: bool,
    pub on_path: bool,
    /// Cost from the start, [None] while unreached.
    pub distance: Option<u32>,
    pub heuristic: u32,
    pub previous: Option<Point>,
}

impl Cell {
    pub fn new(pos: Point, kind: CellKind) -> Cell {
        Cell {
            pos,
            kind,
            visited: false,
            on_path: false,
            distance: None,
            heuristic: 0,
            previous: None,
        }
    }
    pub fn row(&self) -> i32 {
        self.pos.y
    }
    pub fn col(&self) -> i32 {
        self.pos.x
    }
    pub fn is_start(&self) -> bool {
        self.kind == CellKind::Start
    }
    pub fn is_end(&self) -> bool {
        self.kind == CellKind::End
    }
    pub fn is_obstacle(&self) -> bool {
        self.kind == CellKind::Obstacle
    }
    /// Distance plus heuristic, the key best-first search orders its frontier by.
    pub fn total_cost(&self) -> Option<u32> {
        self.distance.map(|d| d + self.heuristic)
    }
    /// Restores every transient field to its neutral value.
    pub fn reset(&mut self) {
        *self = Cell::new(self.pos, self.kind);
    }
}
