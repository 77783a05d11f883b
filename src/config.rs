use grid_util::point::Point;

use crate::{
    error::GridError, grid_point, pathing_grid::PathingGrid, END_COL, END_ROW, GRID_COLS,
    GRID_ROWS, START_COL, START_ROW,
};

/// Construction parameters for a [PathingGrid]. Defaults to a 25x50 grid with the start at
/// (12, 10) and the end at (12, 40).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    pub start: Point,
    pub end: Point,
}

impl Default for GridConfig {
    fn default() -> GridConfig {
        GridConfig {
            rows: GRID_ROWS,
            cols: GRID_COLS,
            start: grid_point(START_ROW, START_COL),
            end: grid_point(END_ROW, END_COL),
        }
    }
}

impl GridConfig {
    pub fn with_size(mut self, rows: usize, cols: usize) -> GridConfig {
        self.rows = rows;
        self.cols = cols;
        self
    }
    pub fn with_start(mut self, start: Point) -> GridConfig {
        self.start = start;
        self
    }
    pub fn with_end(mut self, end: Point) -> GridConfig {
        self.end = end;
        self
    }
    pub fn build(&self) -> Result<PathingGrid, GridError> {
        PathingGrid::from_config(self)
    }
}
