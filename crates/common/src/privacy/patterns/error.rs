use thiserror::Error;

use crate::error::{CommonError, ErrorSeverity};
use crate::{impl_error_classification, impl_error_conversion};

/// Error types for PII pattern processing
#[derive(Debug, Error)]
pub enum PiiError {
    // Common errors (Config, Validation, Persistence, Serialization)
    #[error(transparent)]
    Common(#[from] CommonError),

    #[error("Invalid redaction mode: '{0}' (expected replace, mask, or fake)")]
    InvalidMode(String),

    #[error("Unknown PII category: '{0}'")]
    UnknownCategory(String),

    #[error("Invalid span {start}..{end} for text of {len} bytes")]
    InvalidSpan { start: usize, end: usize, len: usize },

    #[error("Pattern compilation error: {0}")]
    PatternCompilation(String),
}

pub type PiiResult<T> = Result<T, PiiError>;

impl PiiError {
    pub(crate) fn invalid_mode(value: String) -> Self {
        Self::InvalidMode(value)
    }

    pub(crate) fn unknown_category(value: String) -> Self {
        Self::UnknownCategory(value)
    }
}

// Auto-convert std and format errors via CommonError
impl_error_conversion!(PiiError, Common);

impl_error_classification!(PiiError, Common,
    Self::InvalidMode(_) => {
        retryable: false,  // Caller bug, same input fails again
        severity: ErrorSeverity::Error,
        critical: false,
    },
    Self::UnknownCategory(_) => {
        retryable: false,
        severity: ErrorSeverity::Error,
        critical: false,
    },
    Self::InvalidSpan { .. } => {
        retryable: false,
        severity: ErrorSeverity::Error,
        critical: false,
    },
    Self::PatternCompilation(_) => {
        retryable: false,  // Compilation errors are permanent
        severity: ErrorSeverity::Critical,
        critical: true,
    }
);

impl From<PiiError> for CommonError {
    fn from(err: PiiError) -> Self {
        match err {
            PiiError::Common(e) => e,
            PiiError::InvalidMode(mode) => {
                CommonError::validation_with_value("mode", "unsupported redaction mode", mode)
            }
            PiiError::UnknownCategory(category) => {
                CommonError::validation_with_value("category", "unknown PII category", category)
            }
            PiiError::InvalidSpan { start, end, len } => CommonError::validation(
                "span",
                format!("span {}..{} is outside text of {} bytes", start, end, len),
            ),
            PiiError::PatternCompilation(msg) => {
                CommonError::internal(format!("Pattern compilation: {}", msg))
            }
        }
    }
}
