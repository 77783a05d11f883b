use grid_util::point::Point;

use crate::{
    manhattan_distance,
    pathing_grid::PathingGrid,
    search_context::best_first,
    solver::{Algorithm, GridSolver, SearchResult},
};

/// Best-first search guided by the Manhattan distance to the end (A*).
#[derive(Clone, Debug)]
pub struct AstarSolver;

impl GridSolver for AstarSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::BestFirst
    }

    /// Never overestimates on a unit-cost grid, so the first path to the end is a shortest one.
    fn heuristic(&self, p1: &Point, p2: &Point) -> u32 {
        manhattan_distance(p1, p2)
    }

    fn explore(&self, grid: &PathingGrid, start: Point, end: Point) -> SearchResult {
        let trace = best_first(
            &start,
            |node| self.successors(grid, node),
            |point| self.heuristic(point, &end),
            |point| grid.can_move_to(point),
            |point| *point == end,
        );
        SearchResult::from_trace(self.algorithm(), trace)
    }
}
