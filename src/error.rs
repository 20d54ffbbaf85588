//! Error types for the simulation engine.

use thiserror::Error;

use crate::validation::ValidationError;

/// Result type alias for simulation operations.
pub type Result<T> = std::result::Result<T, SimulationError>;

/// Errors raised at the engine boundary, before any policy runs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// One or more processes carry invalid parameters.
    ///
    /// All detected problems are reported together.
    #[error("invalid process input: {}", join_messages(.0))]
    InvalidProcessInput(Vec<ValidationError>),

    /// Round Robin quantum is not positive.
    #[error("invalid quantum: {0} (must be > 0)")]
    InvalidQuantum(i64),

    /// No processes were supplied.
    #[error("empty input: no processes to schedule")]
    EmptyInput,
}

impl SimulationError {
    /// Validation errors carried by this error, if any.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidProcessInput(errors) => errors,
            _ => &[],
        }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
