use thiserror::Error;

/// Errors returned by the solver and the spline builder.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Augmented matrix does not have `columns == rows + 1`.
    #[error("malformed augmented matrix: {rows} rows need {expected} columns, got {columns}", expected = .rows + 1)]
    InvalidShape { rows: usize, columns: usize },

    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRows { row: usize, expected: usize, found: usize },

    /// No nonzero pivot candidate was found at or below the diagonal.
    #[error("unsolvable system: no nonzero pivot in column {column}")]
    UnsolvableSystem { column: usize },

    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    #[error("x = {x} is out of range [{min}, {max}]")]
    OutOfRange { x: f64, min: f64, max: f64 },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    #[error("spline needs at least 2 points, got {got}")]
    InsufficientPoints { got: usize },

    #[error("non-finite coordinate at point {index}")]
    NonFinite { index: usize },

    #[error("x values must be strictly increasing: x[{index}] = {current} follows {previous}")]
    NonIncreasingX { index: usize, previous: f64, current: f64 },

    /// Distance between knots ending at point `index` overflows.
    #[error("knot spacing overflows at point {index}")]
    NonFiniteSpacing { index: usize },

    #[error("segment {segment} has non-finite coefficients")]
    NonFiniteCoefficients { segment: usize },

    #[error("point index {index} out of bounds for {len} points")]
    IndexOutOfBounds { index: usize, len: usize },
}
