use thiserror::Error;

pub type Result<T, E = PercolationError> = std::result::Result<T, E>;

/// Errors surfaced by the grid, the union-find and the Monte Carlo runner.
///
/// Every check runs before any state is touched, so a returned error means
/// the receiver is exactly as it was before the call.
#[derive(Error, Debug)]
pub enum PercolationError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("site ({row}, {col}) is outside the grid, row and col must be between 1 and {size}")]
    InvalidCoordinate { row: usize, col: usize, size: usize },
    #[error("element {index} is out of range for a union-find of {len} elements")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
