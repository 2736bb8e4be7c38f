//! Error types for resampling inference
//!
//! Provides a unified error type for all resample crates, plus the
//! recoverable [`CompilationUnsupported`] condition used by the
//! compiled/interpreted evaluation split.

use thiserror::Error;

/// Core error type for resampling operations
#[derive(Error, Debug)]
pub enum Error {
    /// Replicate count cannot be represented (negative or out of range)
    #[error("Invalid size: {0} (replicate count must be non-negative)")]
    InvalidSize(i64),

    /// Two samples that must correspond index-by-index have different lengths
    #[error("Shape mismatch: x has {x_len} observations, y has {y_len}")]
    ShapeMismatch { x_len: usize, y_len: usize },

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Statistic does not fit the call it was handed to
    #[error("Invalid statistic: {0}")]
    InvalidStatistic(String),

    /// A user-supplied statistic failed while evaluating a replicate
    #[error("Statistic failed: {0}")]
    Statistic(#[from] anyhow::Error),

    /// Event delivery or other bookkeeping failed
    #[error("Execution error: {0}")]
    Execution(String),

    /// Configuration could not be parsed
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for empty input
    pub fn empty_input() -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for samples of unequal length
    pub fn shape_mismatch(x_len: usize, y_len: usize) -> Self {
        Self::ShapeMismatch { x_len, y_len }
    }

    /// Create an error for a quantile probability outside [0, 1]
    pub fn invalid_quantile(p: f64) -> Self {
        Self::InvalidStatistic(format!("Quantile {p} must be in [0, 1]"))
    }
}

/// A statistic could not be lowered to the compiled representation
///
/// This is not an [`Error`]: callers recover by evaluating the same
/// statistic through the interpreted path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Compilation unsupported: {reason}")]
pub struct CompilationUnsupported {
    reason: String,
}

impl CompilationUnsupported {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Opaque user closures have no lowered form
    pub fn opaque(name: &str) -> Self {
        Self::new(format!("opaque function `{name}` cannot be lowered"))
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidSize(-3);
        assert_eq!(
            err.to_string(),
            "Invalid size: -3 (replicate count must be non-negative)"
        );

        let err = Error::shape_mismatch(10, 12);
        assert_eq!(
            err.to_string(),
            "Shape mismatch: x has 10 observations, y has 12"
        );

        let err = Error::empty_input();
        assert_eq!(
            err.to_string(),
            "Insufficient data: expected at least 1 samples, got 0"
        );

        let err = Error::invalid_quantile(1.5);
        assert_eq!(
            err.to_string(),
            "Invalid statistic: Quantile 1.5 must be in [0, 1]"
        );
    }

    #[test]
    fn test_error_from_anyhow() {
        let err: Error = anyhow::anyhow!("division by zero").into();
        match err {
            Error::Statistic(_) => assert!(err.to_string().contains("division by zero")),
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_error_from_serde_json() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_compilation_unsupported() {
        let cu = CompilationUnsupported::opaque("polyfit");
        assert_eq!(cu.reason(), "opaque function `polyfit` cannot be lowered");
        assert_eq!(
            cu.to_string(),
            "Compilation unsupported: opaque function `polyfit` cannot be lowered"
        );
    }
}
