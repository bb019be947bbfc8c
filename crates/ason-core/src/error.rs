//! Error types for ASON conversion.

use thiserror::Error;

/// Errors that can occur while converting between ASON and JSON.
#[derive(Error, Debug)]
pub enum AsonError {
    /// The input violated the indentation grammar. Fatal in both strict and
    /// lenient mode. Includes the 1-based line number where the violation
    /// was detected.
    #[error("structural error at line {line}: {message}")]
    Structural { line: usize, message: String },

    /// The input was rejected by a rule that is only enforced in strict mode.
    #[error("strict mode violation at line {line}: {message}")]
    StrictViolation { line: usize, message: String },

    /// The JSON side of a conversion failed (invalid JSON input).
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AsonError {
    pub(crate) fn structural(line: usize, message: impl Into<String>) -> Self {
        AsonError::Structural {
            line,
            message: message.into(),
        }
    }

    pub(crate) fn strict(line: usize, message: impl Into<String>) -> Self {
        AsonError::StrictViolation {
            line,
            message: message.into(),
        }
    }
}

/// Convenience alias used throughout ason-core.
pub type Result<T> = std::result::Result<T, AsonError>;
