use grid_util::point::Point;

use crate::{
    pathing_grid::PathingGrid,
    search_context::breadth_first,
    solver::{Algorithm, GridSolver, SearchResult},
};

/// Breadth-first search. Cells are settled layer by layer, so the path has the fewest steps.
#[derive(Clone, Debug)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::BreadthFirst
    }

    fn explore(&self, grid: &PathingGrid, start: Point, end: Point) -> SearchResult {
        let trace = breadth_first(
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

    #[test]
    fn three_by_three_corner_to_corner() {
        let grid = PathingGrid::new(3, 3, grid_point(0, 0), grid_point(2, 2)).unwrap();
        let result = BfsSolver.search_grid(&grid);
        assert_eq!(result.path_len(), Some(4));
        assert!(grid.is_valid_path(&result.path));
        // The end is the only cell at distance 4, so it is dequeued last.
        assert_eq!(result.visited.len(), 9);
        assert_eq!(result.visited.last(), Some(&grid.end()));
    }

    #[test]
    fn visit_order_is_layered() {
        let mut grid = PathingGrid::new(5, 5, grid_point(0, 0), grid_point(4, 4)).unwrap();
        grid.set_obstacle(grid_point(1, 1), true).unwrap();
        grid.set_obstacle(grid_point(3, 2), true).unwrap();
        let result = BfsSolver.search_grid(&grid);
        let distances = result
            .visited
            .iter()
            .map(|p| result.distance(p).unwrap())
            .collect::<Vec<_>>();
        assert!(distances.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(distances[0], 0);
    }

    /// Neighbours are enqueued up, down, left, right.
    #[test]
    fn follows_neighbour_order() {
        let grid = PathingGrid::new(3, 3, grid_point(1, 1), grid_point(0, 0)).unwrap();
        let result = BfsSolver.search_grid(&grid);
        assert_eq!(
            result.visited[..5].to_vec(),
            vec![
                grid_point(1, 1),
                grid_point(0, 1),
                grid_point(2, 1),
                grid_point(1, 0),
                grid_point(1, 2)
            ]
        );
        assert_eq!(
            result.path,
            vec![grid_point(1, 1), grid_point(0, 1), grid_point(0, 0)]
        );
    }
}
