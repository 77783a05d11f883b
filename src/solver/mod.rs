use core::fmt;
use grid_util::point::Point;
use log::{debug, warn};
use smallvec::SmallVec;

use crate::error::GridError;
use crate::pathing_grid::PathingGrid;
use crate::search_context::{self, reconstruct_path, SearchRecords, Trace};
use crate::STEP_COST;

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;

use astar::AstarSolver;
use bfs::BfsSolver;
use dfs::DfsSolver;
use dijkstra::DijkstraSolver;

/// Output of a single search run. `visited` is the order in which cells were settled and `path`
/// runs from start to end, or is empty if the end could not be reached. Both are meant to be
/// replayed by a presentation layer; `records` keeps the per-cell bookkeeping of the run.
#[derive(Clone, Debug)]
pub struct SearchResult {
    pub algorithm: Algorithm,
    pub visited: Vec<Point>,
    pub path: Vec<Point>,
    pub records: SearchRecords<Point, u32>,
}

impl SearchResult {
    pub(crate) fn empty(algorithm: Algorithm) -> SearchResult {
        SearchResult {
            algorithm,
            visited: Vec::new(),
            path: Vec::new(),
            records: SearchRecords::default(),
        }
    }

    pub(crate) fn from_trace(algorithm: Algorithm, trace: Trace<Point, u32>) -> SearchResult {
        let path = trace
            .goal
            .map(|goal| reconstruct_path(&trace.records, goal))
            .unwrap_or_default();
        debug!(
            "{}: {} cells settled, {} reached",
            algorithm,
            trace.visited.len(),
            trace.records.len()
        );
        SearchResult {
            algorithm,
            visited: trace.visited,
            path,
            records: trace.records,
        }
    }

    /// Whether a path to the end was found.
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }
    /// Number of steps along the path.
    pub fn path_len(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }
    /// Whether the run reached `pos` at all, settled or not.
    pub fn reached(&self, pos: &Point) -> bool {
        self.records.contains_key(pos)
    }
    pub fn was_visited(&self, pos: &Point) -> bool {
        self.records.get(pos).is_some_and(|r| r.visited)
    }
    /// Best known distance from the start, [None] if `pos` was never reached.
    pub fn distance(&self, pos: &Point) -> Option<u32> {
        self.records.get(pos).map(|r| r.distance)
    }
    pub fn previous(&self, pos: &Point) -> Option<Point> {
        let record = self.records.get(pos)?;
        self.records.get_index(record.parent).map(|(p, _)| *p)
    }
    /// The path from the start to any reached cell. Returns [None] for cells the run never
    /// reached rather than a path consisting of the cell alone.
    pub fn path_to(&self, goal: &Point) -> Option<Vec<Point>> {
        search_context::path_to(&self.records, goal)
    }
}

pub trait GridSolver {
    fn algorithm(&self) -> Algorithm;

    /// Estimated remaining cost from `p1` to `p2`. Zero unless the solver is guided.
    fn heuristic(&self, _p1: &Point, _p2: &Point) -> u32 {
        0
    }

    fn successors(&self, grid: &PathingGrid, node: &Point) -> SmallVec<[(Point, u32); 4]> {
        grid.neighbours(node)
            .into_iter()
            .map(|p| (p, STEP_COST))
            .collect()
    }

    /// Runs the search without validating the endpoints. Obstacles, the start included, are never
    /// settled.
    fn explore(&self, grid: &PathingGrid, start: Point, end: Point) -> SearchResult;

    /// Checks the endpoints and runs the search. A start on an obstacle yields an empty result;
    /// an end on an obstacle is explored towards but never reached.
    fn search(
        &self,
        grid: &PathingGrid,
        start: Point,
        end: Point,
    ) -> Result<SearchResult, GridError> {
        for p in [start, end] {
            if !grid.in_bounds(&p) {
                return Err(GridError::OutOfBounds(p));
            }
        }
        if start == end {
            return Err(GridError::SameStartAndEnd(start));
        }
        if !grid.can_move_to(&start) {
            warn!("Start {:?} is an obstacle, nothing to explore", start);
            return Ok(SearchResult::empty(self.algorithm()));
        }
        let result = self.explore(grid, start, end);
        if !result.found() {
            warn!("{:?} is not reachable from {:?}", end, start);
        }
        Ok(result)
    }

    /// Searches between the grid's own start and end cells.
    fn search_grid(&self, grid: &PathingGrid) -> SearchResult {
        // A grid's own endpoints are distinct and in bounds.
        self.search(grid, grid.start(), grid.end())
            .unwrap_or_else(|_| SearchResult::empty(self.algorithm()))
    }
}

/// The closed set of algorithms a driver can pick from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// A*, ordered by distance plus Manhattan distance to the end.
    #[default]
    BestFirst,
    /// Dijkstra, ordered by distance alone.
    UniformCost,
    BreadthFirst,
    DepthFirst,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::BestFirst,
        Algorithm::UniformCost,
        Algorithm::BreadthFirst,
        Algorithm::DepthFirst,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::BestFirst => "best-first",
            Algorithm::UniformCost => "uniform-cost",
            Algorithm::BreadthFirst => "breadth-first",
            Algorithm::DepthFirst => "depth-first",
        }
    }

    /// Looks an algorithm up by name. The short names `astar`, `dijkstra`, `bfs` and `dfs` are
    /// accepted too. Anything else falls back to best-first search.
    pub fn from_name(name: &str) -> Algorithm {
        match name.trim().to_ascii_lowercase().as_str() {
            "best-first" | "astar" | "a*" => Algorithm::BestFirst,
            "uniform-cost" | "dijkstra" => Algorithm::UniformCost,
            "breadth-first" | "bfs" => Algorithm::BreadthFirst,
            "depth-first" | "dfs" => Algorithm::DepthFirst,
            other => {
                warn!("Unknown algorithm {:?}, falling back to best-first", other);
                Algorithm::BestFirst
            }
        }
    }

    pub fn search(
        &self,
        grid: &PathingGrid,
        start: Point,
        end: Point,
    ) -> Result<SearchResult, GridError> {
        match self {
            Algorithm::BestFirst => AstarSolver.search(grid, start, end),
            Algorithm::UniformCost => DijkstraSolver.search(grid, start, end),
            Algorithm::BreadthFirst => BfsSolver.search(grid, start, end),
            Algorithm::DepthFirst => DfsSolver.search(grid, start, end),
        }
    }

    pub fn search_grid(&self, grid: &PathingGrid) -> SearchResult {
        match self {
            Algorithm::BestFirst => AstarSolver.search_grid(grid),
            Algorithm::UniformCost => DijkstraSolver.search_grid(grid),
            Algorithm::BreadthFirst => BfsSolver.search_grid(grid),
            Algorithm::DepthFirst => DfsSolver.search_grid(grid),
        }
    }
}

impl From<&str> for Algorithm {
    fn from(name: &str) -> Algorithm {
        Algorithm::from_name(name)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}
