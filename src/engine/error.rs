use thiserror::Error;

/// Errors raised while constructing a grid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// The side length must be a positive integer.
    #[error("invalid grid size: {0} (side length must be positive)")]
    InvalidSize(usize),

    /// The number of cells does not fit in memory addressing.
    #[error("grid too large: {0}x{0} cells overflow usize")]
    TooLarge(usize),
}

pub type GridResult<T> = Result<T, GridError>;
