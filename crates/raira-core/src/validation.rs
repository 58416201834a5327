//! # Validation Module
//!
//! Input validation for values typed at the counter.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Input parsing (billing app)                                  │
//! │  ├── "qty abc" → parse_quantity → InvalidFormat                        │
//! │  └── Immediate feedback, session continues                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Cart transition (THIS MODULE)                                │
//! │  └── validate_quantity before any line is touched                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use raira_core::validation::{parse_quantity, validate_quantity};
//!
//! assert!(validate_quantity(5).is_ok());
//! assert!(validate_quantity(0).is_err());
//! assert_eq!(parse_quantity(" 3 ").unwrap(), 3);
//! ```

use crate::error::ValidationError;
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a quantity passed to a single add.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Parses a quantity as typed by the user.
///
/// Only checks that the text is an integer; range checks happen in
/// [`validate_quantity`] when the quantity is actually used, so a pending
/// quantity of 0 can be stored and rejected later.
pub fn parse_quantity(input: &str) -> ValidationResult<i64> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ValidationError::Required {
            field: "quantity".to_string(),
        });
    }

    input
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidFormat {
            field: "quantity".to_string(),
            reason: format!("'{}' is not a whole number", input),
        })
}

// =============================================================================
// Unit Tests
// =============================================================================
