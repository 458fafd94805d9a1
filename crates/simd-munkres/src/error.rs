//! Error types for assignment solving.

use thiserror::Error;

/// Errors that can occur while solving an assignment problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignmentError {
    /// No cost data was supplied for a non-empty matrix.
    #[error("No cost matrix supplied for `{param}`")]
    AbsentInput {
        /// Name of the offending parameter.
        param: &'static str,
    },

    /// More rows than columns, so not every row can receive a distinct column.
    #[error("Invalid shape for `{param}`: {rows} rows exceed {cols} columns")]
    InvalidShape {
        /// Name of the offending parameter.
        param: &'static str,
        /// Number of rows (agents).
        rows: usize,
        /// Number of columns (tasks).
        cols: usize,
    },

    /// Data length does not match the declared dimensions.
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// The solver reached a state its invariants rule out.
    #[error("Internal solver defect: {0}")]
    Internal(String),
}

impl AssignmentError {
    /// Whether the error was caused by the caller's input rather than the solver.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, AssignmentError::Internal(_))
    }
}

/// Result type for assignment operations.
pub type Result<T> = std::result::Result<T, AssignmentError>;
