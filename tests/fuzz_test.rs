/// Fuzzes the search engine by checking on many random grids that every algorithm finds a path
/// exactly when the end is reachable according to the connected components, and that the optimal
/// algorithms agree on the path length.
use grid_search::{grid_point, Algorithm, PathingGrid, SearchResult};
use itertools::Itertools;
use rand::prelude::*;

fn random_grid(rows: usize, cols: usize, rng: &mut StdRng) -> PathingGrid {
    let start = grid_point(0, 0);
    let end = grid_point(rows as i32 - 1, cols as i32 - 1);
    let mut grid = PathingGrid::new(rows, cols, start, end).unwrap();
    for row in 0..rows as i32 {
        for col in 0..cols as i32 {
            let p = grid_point(row, col);
            if p != start && p != end && rng.gen_bool(0.4) {
                grid.set_obstacle(p, true).unwrap();
            }
        }
    }
    grid.update();
    grid
}

fn reachable_cells(grid: &PathingGrid) -> usize {
    grid.cells()
        .iter()
        .filter(|c| grid.reachable(&grid.start(), &c.pos))
        .count()
}

fn run_all(grid: &PathingGrid) -> Vec<SearchResult> {
    Algorithm::ALL
        .iter()
        .map(|algorithm| algorithm.search_grid(grid))
        .collect()
}

#[test]
fn fuzz() {
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..N_GRIDS {
        let grid = random_grid(10, 10, &mut rng);
        let reachable = grid.reachable(&grid.start(), &grid.end());
        for result in run_all(&grid) {
            // Show the grid if the search disagrees with the components
            if result.found() != reachable {
                print!("{}", grid);
            }
            assert_eq!(result.found(), reachable, "{}", result.algorithm);
            if reachable {
                assert!(grid.is_valid_path(&result.path));
                assert_eq!(result.path.first(), Some(&grid.start()));
                assert_eq!(result.path.last(), Some(&grid.end()));
            } else {
                assert_eq!(result.visited.len(), reachable_cells(&grid));
            }
        }
    }
}

#[test]
fn fuzz_optimality() {
    const N_GRIDS: usize = 1000;
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..N_GRIDS {
        let grid = random_grid(8, 12, &mut rng);
        if grid.unreachable(&grid.start(), &grid.end()) {
            continue;
        }
        let results = run_all(&grid);
        for result in &results {
            assert!(result.visited.iter().all_unique(), "{}", result.algorithm);
        }
        let [best_first, uniform_cost, breadth_first, depth_first] = &results[..] else {
            unreachable!()
        };
        assert_eq!(best_first.path_len(), breadth_first.path_len());
        assert_eq!(uniform_cost.path_len(), breadth_first.path_len());
        assert!(breadth_first.path_len() <= depth_first.path_len());
        assert!(best_first.visited.len() <= uniform_cost.visited.len());
        assert!(uniform_cost.visited.len() <= reachable_cells(&grid));
    }
}

/// Walking the predecessors back from the end reproduces the returned path, both from the
/// result itself and after projecting it onto the grid.
#[test]
fn fuzz_predecessor_walk() {
    const N_GRIDS: usize = 300;
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..N_GRIDS {
        let mut grid = random_grid(7, 7, &mut rng);
        for result in run_all(&grid) {
            let Some(&last) = result.path.last() else {
                continue;
            };
            let mut walk = vec![last];
            while let Some(prev) = result.previous(walk.last().unwrap()) {
                walk.push(prev);
            }
            walk.reverse();
            assert_eq!(walk, result.path);

            grid.apply_result(&result);
            let mut walk = vec![last];
            while let Some(prev) = grid.cell(walk.last().unwrap()).unwrap().previous {
                walk.push(prev);
            }
            walk.reverse();
            assert_eq!(walk, result.path);
            assert_eq!(
                grid.cells().iter().filter(|c| c.on_path).count(),
                result.path.len()
            );
        }
    }
}
