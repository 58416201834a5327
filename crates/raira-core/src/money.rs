//! # Money Module
//!
//! Provides the `Money` type for handling rupee amounts safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Paise (1 rupee = 100 paise)                      │
//! │    ₹50.00 × 2 = 10000 paise, 10% GST = 1000 paise, exactly             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use raira_core::money::Money;
//!
//! let price = Money::from_rupees(50);  // ₹50.00
//! let doubled = price * 2;             // ₹100.00
//! assert_eq!(doubled.to_string(), "₹100.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::types::TaxRate;

/// Symbol printed in front of every formatted amount.
pub const RUPEE_SYMBOL: &str = "₹";

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in paise (the smallest rupee unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: arithmetic stays closed under subtraction
/// - **Single field tuple struct**: Zero-cost abstraction over i64, and
///   serializes as a plain integer
///
/// ## Where Money is Used
/// ```text
/// CatalogItem.unit_price ──► CartLine.line_total ──► Invoice.subtotal
///                                                        │
///                                   GST (10%) ◄──────────┤
///                                                        ▼
///                                                   Invoice.total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paise.
    ///
    /// ## Example
    /// ```rust
    /// use raira_core::money::Money;
    ///
    /// let price = Money::from_paise(1099); // ₹10.99
    /// assert_eq!(price.paise(), 1099);
    /// ```
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Creates a Money value from whole rupees.
    ///
    /// ## Example
    /// ```rust
    /// use raira_core::money::Money;
    ///
    /// assert_eq!(Money::from_rupees(350).paise(), 35_000);
    /// ```
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees * 100)
    }

    /// Returns the value in paise.
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion (truncated toward zero).
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the paise portion (always 0-99).
    ///
    /// ## Example
    /// ```rust
    /// use raira_core::money::Money;
    ///
    /// assert_eq!(Money::from_paise(1099).paise_part(), 99);
    /// assert_eq!(Money::from_paise(-550).paise_part(), 50);
    /// ```
    #[inline]
    pub const fn paise_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Calculates tax with half-up rounding to the nearest paisa.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000`.
    /// The +5000 provides rounding (5000/10000 = 0.5). i128 keeps large
    /// amounts from overflowing.
    ///
    /// ## Example
    /// ```rust
    /// use raira_core::money::Money;
    /// use raira_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_rupees(100);
    /// let tax = subtotal.calculate_tax(TaxRate::from_bps(1000)); // 10%
    /// assert_eq!(tax, Money::from_rupees(10));
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        let tax_paise = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_paise(tax_paise as i64)
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use raira_core::money::Money;
    ///
    /// let line_total = Money::from_rupees(70).multiply_quantity(3);
    /// assert_eq!(line_total, Money::from_rupees(210));
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Multiplies by a quantity, `None` on overflow.
    #[inline]
    pub const fn checked_multiply_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(paise) => Some(Money(paise)),
            None => None,
        }
    }

    /// Adds two amounts, `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(paise) => Some(Money(paise)),
            None => None,
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Indian Rupee display: `₹` symbol, lakh/crore digit grouping, two
/// fractional digits.
///
/// ```text
///   100       → ₹100.00
///   1000      → ₹1,000.00
///   123456    → ₹1,23,456.00
///   12345678  → ₹1,23,45,678.00
/// ```
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let whole = (self.0 / 100).unsigned_abs();
        write!(
            f,
            "{}{}{}.{:02}",
            sign,
            RUPEE_SYMBOL,
            group_indian(whole),
            self.paise_part()
        )
    }
}

/// Groups digits the Indian way: the last three together, then pairs.
fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::with_capacity(head.len() / 2 + 2);
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    groups.push(tail);
    groups.join(",")
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_paise_and_rupees() {
        let money = Money::from_paise(1099);
        assert_eq!(money.paise(), 1099);
        assert_eq!(money.rupees(), 10);
        assert_eq!(money.paise_part(), 99);

        assert_eq!(Money::from_rupees(50).paise(), 5000);
    }

    #[test]
    fn test_display_small_amounts() {
        assert_eq!(Money::from_paise(0).to_string(), "₹0.00");
        assert_eq!(Money::from_paise(5).to_string(), "₹0.05");
        assert_eq!(Money::from_rupees(110).to_string(), "₹110.00");
        assert_eq!(Money::from_paise(99_999).to_string(), "₹999.99");
    }

    #[test]
    fn test_display_indian_grouping() {
        assert_eq!(Money::from_rupees(1_000).to_string(), "₹1,000.00");
        assert_eq!(Money::from_rupees(12_345).to_string(), "₹12,345.00");
        assert_eq!(Money::from_rupees(123_456).to_string(), "₹1,23,456.00");
        assert_eq!(Money::from_rupees(1_234_567).to_string(), "₹12,34,567.00");
        assert_eq!(
            Money::from_paise(1_234_567_850).to_string(),
            "₹1,23,45,678.50"
        );
    }

    #[test]
    fn test_display_negative() {
        assert_eq!(Money::from_paise(-550).to_string(), "-₹5.50");
        assert_eq!(Money::from_rupees(-123_456).to_string(), "-₹1,23,456.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_rupees(10);
        let b = Money::from_rupees(5);

        assert_eq!((a + b).paise(), 1500);
        assert_eq!((a - b).paise(), 500);
        assert_eq!((a * 3).paise(), 3000);

        let total: Money = [a, b, b].into_iter().sum();
        assert_eq!(total, Money::from_rupees(20));
    }

    #[test]
    fn test_tax_calculation_ten_percent() {
        let rate = TaxRate::from_bps(1000);
        assert_eq!(Money::from_rupees(100).calculate_tax(rate), Money::from_rupees(10));
        assert_eq!(Money::from_rupees(550).calculate_tax(rate), Money::from_rupees(55));
    }

    #[test]
    fn test_tax_calculation_with_rounding() {
        // ₹0.05 at 10% = 0.5 paise → rounds half up to 1 paisa
        let rate = TaxRate::from_bps(1000);
        assert_eq!(Money::from_paise(5).calculate_tax(rate).paise(), 1);
        assert_eq!(Money::from_paise(4).calculate_tax(rate).paise(), 0);
    }

    #[test]
    fn test_checked_arithmetic() {
        let price = Money::from_rupees(50);
        assert_eq!(price.checked_multiply_quantity(3), Some(Money::from_rupees(150)));
        assert_eq!(price.checked_multiply_quantity(i64::MAX), None);
        assert_eq!(price.checked_add(price), Some(Money::from_rupees(100)));
        assert_eq!(Money::from_paise(i64::MAX).checked_add(price), None);
    }

    #[test]
    fn test_zero_checks() {
        assert!(Money::zero().is_zero());
        assert!(!Money::zero().is_negative());
        assert!(Money::from_paise(-1).is_negative());
        assert_eq!(Money::default(), Money::zero());
    }

    #[test]
    fn test_group_indian() {
        assert_eq!(group_indian(0), "0");
        assert_eq!(group_indian(999), "999");
        assert_eq!(group_indian(1000), "1,000");
        assert_eq!(group_indian(100_000), "1,00,000");
        assert_eq!(group_indian(10_000_000), "1,00,00,000");
    }
}
