//! Error types for the filtering engine.

use thiserror::Error;

/// Errors produced by strikeview operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FilterError {
    /// No dataset has been loaded yet.
    #[error("Dataset is not available")]
    AbsentData,

    /// The dataset is loaded but empty, so its time range is `(+inf, -inf)`.
    #[error("Dataset is empty; time range is degenerate")]
    DegenerateRange,

    /// A numeric parameter was non-positive or non-finite.
    #[error("Invalid {field}: {value} (must be a positive, finite number)")]
    Validation { field: &'static str, value: f64 },

    /// A filter was requested without an effective range. Callers must check
    /// availability first.
    #[error("Filter requested without an effective time range")]
    NullRange,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    SerializationErrorWithContext(String),
}

impl FilterError {
    /// True for the expected "nothing to show yet" states, which callers
    /// handle by hiding dependent controls rather than reporting a failure.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, FilterError::AbsentData | FilterError::DegenerateRange)
    }
}

pub type Result<T> = std::result::Result<T, FilterError>;
