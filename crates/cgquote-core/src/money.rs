//! # Money Module
//!
//! Provides the `Yen` type for whole-yen quote amounts.
//!
//! ## Why Two Representations?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ENGINE: f64                                                            │
//! │    Hours × rate × 1.15 approval × 1.3 rush × 18% profit share          │
//! │    Fractions everywhere; the invariants hold within 1e-6.              │
//! │                                                                         │
//! │  QUOTE: Yen (i64)                                                       │
//! │    A client-facing quote is in whole yen. Rounding each line           │
//! │    separately loses or gains a yen or two, so the quote stage          │
//! │    KNOWS where the residual went and assigns it explicitly.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cgquote_core::money::Yen;
//!
//! let fee = Yen::from_amount(1234.5); // rounds half away from zero
//! assert_eq!(fee.yen(), 1235);
//!
//! let total = fee + Yen::from_yen(765);
//! assert_eq!(total.yen(), 2000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use ts_rs::TS;

use crate::types::BasisPoints;

// =============================================================================
// Yen Type
// =============================================================================

/// A monetary value in whole yen (JPY has no minor unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: rounding residuals can be negative
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support for JSON serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Yen(i64);

impl Yen {
    /// Creates a value from whole yen.
    #[inline]
    pub const fn from_yen(yen: i64) -> Self {
        Yen(yen)
    }

    /// Rounds an engine amount to whole yen, half away from zero.
    ///
    /// ## Example
    /// ```rust
    /// use cgquote_core::money::Yen;
    ///
    /// assert_eq!(Yen::from_amount(99.49).yen(), 99);
    /// assert_eq!(Yen::from_amount(99.5).yen(), 100);
    /// assert_eq!(Yen::from_amount(-0.5).yen(), -1);
    /// ```
    #[inline]
    pub fn from_amount(amount: f64) -> Self {
        Yen(amount.round() as i64)
    }

    /// Returns the value in yen.
    #[inline]
    pub const fn yen(&self) -> i64 {
        self.0
    }

    /// Returns zero yen.
    #[inline]
    pub const fn zero() -> Self {
        Yen(0)
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

    /// Calculates tax on this amount, rounding half up.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000`.
    /// The +5000 provides rounding (5000/10000 = 0.5).
    ///
    /// ## Example
    /// ```rust
    /// use cgquote_core::money::Yen;
    /// use cgquote_core::types::BasisPoints;
    ///
    /// let before_tax = Yen::from_yen(12_345);
    /// let tax = before_tax.calculate_tax(BasisPoints::from_bps(1000)); // 10%
    /// // 1234.5 → 1235
    /// assert_eq!(tax.yen(), 1235);
    /// ```
    pub fn calculate_tax(&self, rate: BasisPoints) -> Yen {
        // i128 keeps large productions from overflowing
        let tax = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Yen(tax as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-oriented display (`¥12345`). Locale formatting belongs to the caller.
impl fmt::Display for Yen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}¥{}", sign, self.0.abs())
    }
}

impl Default for Yen {
    fn default() -> Self {
        Yen::zero()
    }
}

impl Add for Yen {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Yen(self.0 + other.0)
    }
}

impl AddAssign for Yen {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Yen {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Yen(self.0 - other.0)
    }
}

impl SubAssign for Yen {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Sum for Yen {
    fn sum<I: Iterator<Item = Yen>>(iter: I) -> Self {
        iter.fold(Yen::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_amount_rounding() {
        assert_eq!(Yen::from_amount(0.0).yen(), 0);
        assert_eq!(Yen::from_amount(10.4).yen(), 10);
        assert_eq!(Yen::from_amount(10.5).yen(), 11);
        assert_eq!(Yen::from_amount(-10.5).yen(), -11);
    }

    #[test]
    fn test_display() {
        assert_eq!(Yen::from_yen(12345).to_string(), "¥12345");
        assert_eq!(Yen::from_yen(-500).to_string(), "-¥500");
        assert_eq!(Yen::zero().to_string(), "¥0");
    }

    #[test]
    fn test_arithmetic() {
        let a = Yen::from_yen(1000);
        let b = Yen::from_yen(300);
        assert_eq!((a + b).yen(), 1300);
        assert_eq!((a - b).yen(), 700);

        let mut c = a;
        c += b;
        c -= Yen::from_yen(100);
        assert_eq!(c.yen(), 1200);

        let total: Yen = [a, b, c].into_iter().sum();
        assert_eq!(total.yen(), 2500);
    }

    #[test]
    fn test_tax_calculation() {
        let consumption = BasisPoints::from_bps(1000);
        assert_eq!(Yen::from_yen(1000).calculate_tax(consumption).yen(), 100);
        assert_eq!(Yen::from_yen(1004).calculate_tax(consumption).yen(), 100);
        assert_eq!(Yen::from_yen(1005).calculate_tax(consumption).yen(), 101);
    }

    #[test]
    fn test_tax_on_large_amount_does_not_overflow() {
        let big = Yen::from_yen(i64::MAX / 2);
        let tax = big.calculate_tax(BasisPoints::from_bps(1000));
        assert!(tax.yen() > 0);
    }

    /// Rounding three equal shares of ¥1000 gives ¥999 back.
    /// The quote stage has to put that yen somewhere on purpose.
    #[test]
    fn test_rounding_residual_documented() {
        let share = Yen::from_amount(1000.0 / 3.0);
        let reconstructed: Yen = [share, share, share].into_iter().sum();
        assert_eq!(reconstructed.yen(), 999);
        assert_eq!((Yen::from_yen(1000) - reconstructed).yen(), 1);
    }
}
