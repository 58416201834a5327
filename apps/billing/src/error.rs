//! # App Error Type
//!
//! Unified error type for billing commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in RairaTech Billing                      │
//! │                                                                         │
//! │  Input line / CLI flag                                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, AppError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Cart / catalog error? ─── CoreError::LineNotInCart ──┐          │  │
//! │  │         │                                             ▼          │  │
//! │  │  File write failed? ───── io::Error ─────────────── AppError ───►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  interactive: "error: Item 3 is not in the cart" and keep going         │
//! │  one-shot:    same line on stderr, exit code 1                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use raira_core::CoreError;
use serde::Serialize;

/// Error returned from billing commands.
///
/// ## Serialization
/// `--json` output reports failures in this shape:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Catalog item not found: 9"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Catalog item or cart line not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Cart operation failed
    CartError,

    /// Writing the print document failed
    PrintError,

    /// Unexpected failure (logging setup, output serialization, ...)
    Internal,
}

impl AppError {
    /// Creates a new error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Internal, message)
    }

    /// Creates a print error.
    pub fn print(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::PrintError, message)
    }
}

/// Converts core errors to app errors.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        let message = err.to_string();
        match err {
            CoreError::UnknownCatalogItem(_) | CoreError::LineNotInCart(_) => {
                AppError::new(ErrorCode::NotFound, message)
            }
            CoreError::QuantityOverflow { .. } => AppError::new(ErrorCode::CartError, message),
            CoreError::Validation(e) => AppError::validation(e.to_string()),
        }
    }
}

impl From<raira_core::ValidationError> for AppError {
    fn from(err: raira_core::ValidationError) -> Self {
        AppError::validation(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("I/O failure: {}", err);
        AppError::print(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::internal(format!("JSON output failed: {}", err))
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

/// Convenience type alias for command results.
pub type AppResult<T> = Result<T, AppError>;
