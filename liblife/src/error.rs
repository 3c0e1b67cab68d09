use thiserror::Error;

/// Failures of grid construction and access. All are synchronous and
/// final; none leaves a partially built grid behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("coordinate ({row}, {col}) lies outside a {rows}x{cols} grid")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("malformed grid data: {0}")]
    MalformedInput(String),
}
