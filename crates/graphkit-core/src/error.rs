//! Error types and exit codes for graphkit
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (bad vertex index, missing edge, unreachable vertex)
//!
//! Rejected duplicates (vertex labels, edges) are not errors: the insertion
//! methods report them with `false`.

mod macros;

use thiserror::Error;

/// Exit codes for the graphkit binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - bad index, missing edge, unreachable vertex (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graph operations
#[derive(Error, Debug)]
pub enum GraphError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("no such index: {index} (graph has {size} vertices)")]
    IndexOutOfRange { index: usize, size: usize },

    #[error("edge does not exist: ({from}, {to})")]
    EdgeNotFound { from: usize, to: usize },

    #[error("vertex {index} is not reachable from root {root}")]
    Unreachable { index: usize, root: usize },

    // Generic failures (exit code 1)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GraphError {
    /// Create an error for a vertex index outside `[0, size)`
    pub fn index_out_of_range(index: usize, size: usize) -> Self {
        GraphError::IndexOutOfRange { index, size }
    }

    /// Create an error for a weight lookup on a non-adjacent pair
    pub fn edge_not_found(from: usize, to: usize) -> Self {
        GraphError::EdgeNotFound { from, to }
    }

    /// Create an error for an invalid value or argument
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UsageError(_) | GraphError::InvalidValue { .. } => ExitCode::Usage,

            GraphError::IndexOutOfRange { .. }
            | GraphError::EdgeNotFound { .. }
            | GraphError::Unreachable { .. } => ExitCode::Data,

            GraphError::Json(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::UsageError(_) => "usage_error",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::IndexOutOfRange { .. } => "index_out_of_range",
            GraphError::EdgeNotFound { .. } => "edge_not_found",
            GraphError::Unreachable { .. } => "unreachable",
            GraphError::Json(_) => "json_error",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;
