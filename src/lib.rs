//! # grid_search
//!
//! The search engine behind a grid pathfinding visualizer. Four interchangeable algorithms,
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm),
//! [Dijkstra](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm),
//! [breadth-first](https://en.wikipedia.org/wiki/Breadth-first_search) and
//! [depth-first](https://en.wikipedia.org/wiki/Depth-first_search) search, explore a
//! 4-connected unweighted [PathingGrid](pathing_grid::PathingGrid). Each run returns the order in
//! which cells were settled together with the path it found, so that a presentation layer can
//! replay both at its own pace.
//!
//! Coordinates are [Point]s with `x` the column and `y` the row; [grid_point] builds one from a
//! (row, column) pair.
pub mod cell;
pub mod config;
pub mod error;
pub mod pathing_grid;
pub mod search_context;
pub mod solver;

use grid_util::point::Point;
use log::info;

pub use crate::config::GridConfig;
pub use crate::error::GridError;
pub use crate::pathing_grid::PathingGrid;
pub use crate::solver::{Algorithm, GridSolver, SearchResult};

pub const GRID_ROWS: usize = 25;
pub const GRID_COLS: usize = 50;
pub const START_ROW: i32 = 12;
pub const START_COL: i32 = 10;
pub const END_ROW: i32 = 12;
pub const END_COL: i32 = 40;

/// Cost of a single step between adjacent cells.
pub const STEP_COST: u32 = 1;

/// Builds the [Point] of the cell at (`row`, `col`).
pub fn grid_point(row: i32, col: i32) -> Point {
    Point::new(col, row)
}

/// The [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) between two cells.
/// Admissible and consistent on a 4-connected unit-cost grid.
pub fn manhattan_distance(a: &Point, b: &Point) -> u32 {
    (a.x - b.x).unsigned_abs() + (a.y - b.y).unsigned_abs()
}

/// Runs the algorithm called `algorithm_name` between the grid's own start and end cells.
/// Unknown names fall back to best-first search.
pub fn run_search(algorithm_name: &str, grid: &PathingGrid) -> SearchResult {
    let algorithm = Algorithm::from_name(algorithm_name);
    let result = algorithm.search_grid(grid);
    info!(
        "{} settled {} cells, path of {} cells",
        algorithm,
        result.visited.len(),
        result.path.len()
    );
    result
}
