use grid_util::point::Point;
use thiserror::Error;

/// Errors raised when a grid is built or edited with invalid coordinates.
///
/// An unreachable goal is not an error: searches report it as an empty path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("{0:?} lies outside the grid")]
    OutOfBounds(Point),
    #[error("start and end both placed at {0:?}")]
    SameStartAndEnd(Point),
    /// The cell already holds a start, end or obstacle that the edit would clobber.
    #[error("cell {0:?} is occupied by another role")]
    RoleConflict(Point),
}
