use grid_search::{grid_point, run_search, Algorithm, PathingGrid};

// In this example every algorithm searches a 5x7 grid with shape
//  _______
// |       |
// |S  #  E|
// |   #   |
// |   #   |
// |       |
//  _______
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Afterwards the grid is printed with settled cells as o and the path as *.

fn main() {
    let mut pathing_grid = PathingGrid::new(5, 7, grid_point(1, 0), grid_point(1, 6)).unwrap();
    for row in 1..4 {
        pathing_grid.set_obstacle(grid_point(row, 3), true).unwrap();
    }
    for algorithm in Algorithm::ALL {
        let result = run_search(algorithm.name(), &pathing_grid);
        println!(
            "{}: {} cells settled, {:?} steps",
            algorithm,
            result.visited.len(),
            result.path_len()
        );
        pathing_grid.apply_result(&result);
        println!("{}", pathing_grid);
    }
}
