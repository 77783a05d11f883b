use grid_util::point::Point;

use crate::{
    pathing_grid::PathingGrid,
    search_context::best_first,
    solver::{Algorithm, GridSolver, SearchResult},
};

/// Uniform-cost search (Dijkstra). Uses the default zero heuristic, so the frontier is ordered by
/// distance alone and grows in rings around the start.
#[derive(Clone, Debug)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::UniformCost
    }

    fn explore(&self, grid: &PathingGrid, start: Point, end: Point) -> SearchResult {
        let trace = best_first(
            &start,
            |node| self.successors(grid, node),
            |_| 0,
            |point| grid.can_move_to(point),
            |point| *point == end,
        );
        SearchResult::from_trace(self.algorithm(), trace)
    }
}
