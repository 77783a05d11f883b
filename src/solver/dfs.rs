use grid_util::point::Point;

use crate::{
    pathing_grid::PathingGrid,
    search_context::depth_first,
    solver::{Algorithm, GridSolver, SearchResult},
};

/// Depth-first search. Explores up first, then down, left and right; the path is simply the first
/// route found and not necessarily the shortest.
#[derive(Clone, Debug)]
pub struct DfsSolver;

impl GridSolver for DfsSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::DepthFirst
    }

    fn explore(&self, grid: &PathingGrid, start: Point, end: Point) -> SearchResult {
        let trace = depth_first(
            &start,
            |node| self.successors(grid, node),
            |point| grid.can_move_to(point),
            |point| *point == end,
        );
        SearchResult::from_trace(self.algorithm(), trace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid_point;

    /// Up is preferred, so from the bottom row the search climbs to the top before turning.
    #[test]
    fn explores_up_first() {
        let grid = PathingGrid::new(3, 3, grid_point(2, 0), grid_point(2, 2)).unwrap();
        let result = DfsSolver.search_grid(&grid);
        assert_eq!(
            result.path,
            vec![
                grid_point(2, 0),
                grid_point(1, 0),
                grid_point(0, 0),
                grid_point(0, 1),
                grid_point(1, 1),
                grid_point(2, 1),
                grid_point(2, 2)
            ]
        );
        assert_eq!(result.visited, result.path);
        assert!(grid.is_valid_path(&result.path));
    }

    #[test]
    fn cells_are_settled_once() {
        let mut grid = PathingGrid::new(4, 4, grid_point(0, 0), grid_point(3, 3)).unwrap();
        grid.set_obstacle(grid_point(2, 2), true).unwrap();
        let result = DfsSolver.search(&grid, grid_point(0, 0), grid_point(2, 2)).unwrap();
        let mut seen = result.visited.clone();
        seen.sort_by_key(|p| (p.y, p.x));
        seen.dedup();
        assert_eq!(seen.len(), result.visited.len());
        assert_eq!(result.visited.len(), 15);
        assert!(result.path.is_empty());
    }
}
