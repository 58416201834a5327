//! # Error Types
//!
//! Domain-specific error types for raira-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  raira-core errors (this file)                                         │
//! │  ├── CoreError        - Cart / catalog failures                        │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  raira-billing errors (in app)                                         │
//! │  └── AppError         - What the user sees (code + message)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → terminal               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::types::CatalogId;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// Every variant leaves the cart untouched: transitions either apply fully
/// or not at all.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// The requested id is not part of the catalog.
    #[error("Catalog item not found: {0}")]
    UnknownCatalogItem(CatalogId),

    /// Quantity change targeted a line that is not in the cart.
    #[error("Item {0} is not in the cart")]
    LineNotInCart(CatalogId),

    /// Quantity arithmetic would overflow.
    ///
    /// ## When This Occurs
    /// Only with absurd inputs: repeated adds or a delta close to `i64::MAX`.
    #[error("Quantity for item {id} would overflow")]
    QuantityOverflow { id: CatalogId },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., non-numeric quantity).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
