//! # Amount Module
//!
//! Provides the `Msat` type for handling millisatoshi amounts safely.
//!
//! ## Integer Amounts Only
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  f64 represents integers exactly only up to 2^53.                       │
//! │  Offer amounts are msat and routinely exceed that:                      │
//! │    2_100_000_000_000_000 msat × 1000 = 2.1e18 > 2^53                    │
//! │                                                                         │
//! │  OUR SOLUTION: u64 msat, products widened to u128                       │
//! │    Every u64 × u64 product is exact in u128 — no approximation,         │
//! │    no rounding, ever.                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use offerform_core::Msat;
//!
//! // Create from msat (the smallest unit)
//! let per_unit = Msat::from_msat(1000);
//!
//! // Exact line total for a quantity
//! let total = per_unit.total(3).unwrap();
//! assert_eq!(total.msat(), 3000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Msat Type
// =============================================================================

/// A monetary amount in millisatoshi, the smallest unit of the payment
/// currency.
///
/// All internal arithmetic uses this unit; only the injected unit formatter
/// ever converts to a display denomination.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(transparent)]
pub struct Msat(u64);

impl Msat {
    /// Creates an amount from millisatoshi.
    ///
    /// ## Example
    /// ```rust
    /// use offerform_core::Msat;
    ///
    /// let amount = Msat::from_msat(50_000);
    /// assert_eq!(amount.msat(), 50_000);
    /// ```
    #[inline]
    pub const fn from_msat(msat: u64) -> Self {
        Msat(msat)
    }

    /// Returns the value in millisatoshi.
    #[inline]
    pub const fn msat(&self) -> u64 {
        self.0
    }

    /// Zero amount.
    #[inline]
    pub const fn zero() -> Self {
        Msat(0)
    }

    /// Checks if the amount is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns the exact total for `quantity` units priced at this amount.
    ///
    /// ## Rules
    /// - `quantity == 1` returns the amount unchanged (fast path, and the
    ///   correctness baseline: `a.total(1) == a`)
    /// - Otherwise the product is computed in u128, where every u64 × u64
    ///   multiplication is exact, and narrowed back to u64 msat
    /// - A product beyond `u64::MAX` msat is a contract error; no real
    ///   offer prices that high, the encoding cannot carry it
    ///
    /// ## Example
    /// ```rust
    /// use offerform_core::Msat;
    ///
    /// let per_unit = Msat::from_msat(2_100_000_000_000_000);
    /// let total = per_unit.total(1000).unwrap();
    /// assert_eq!(total.msat(), 2_100_000_000_000_000_000);
    /// ```
    pub fn total(&self, quantity: u64) -> CoreResult<Msat> {
        if quantity == 1 {
            return Ok(*self);
        }

        let product = self.0 as u128 * quantity as u128;
        u64::try_from(product)
            .map(Msat)
            .map_err(|_| CoreError::AmountOverflow {
                base_msat: self.0,
                quantity,
            })
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the raw msat value.
///
/// This is for debugging and logs. User-facing display goes through the
/// injected unit formatter, which owns denomination and localization.
impl fmt::Display for Msat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}msat", self.0)
    }
}

impl Default for Msat {
    fn default() -> Self {
        Msat::zero()
    }
}

impl From<u64> for Msat {
    #[inline]
    fn from(msat: u64) -> Self {
        Msat(msat)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_msat() {
        let amount = Msat::from_msat(50_000);
        assert_eq!(amount.msat(), 50_000);
    }

    #[test]
    fn test_total_quantity_one_is_identity() {
        for msat in [0, 1, 50_000, u64::MAX] {
            let amount = Msat::from_msat(msat);
            assert_eq!(amount.total(1).unwrap(), amount);
        }
    }

    #[test]
    fn test_total_small_product() {
        let per_unit = Msat::from_msat(1000);
        assert_eq!(per_unit.total(3).unwrap().msat(), 3000);
    }

    /// Products beyond the f64-exact integer range (2^53) must still be
    /// exact to the last msat.
    #[test]
    fn test_total_beyond_float_safe_range() {
        let per_unit = Msat::from_msat(2_100_000_000_000_000);
        let total = per_unit.total(1000).unwrap();
        assert_eq!(total.msat(), 2_100_000_000_000_000_000);
    }

    #[test]
    fn test_total_quantity_zero() {
        let per_unit = Msat::from_msat(1000);
        assert_eq!(per_unit.total(0).unwrap(), Msat::zero());
    }

    #[test]
    fn test_total_overflow_is_error() {
        let per_unit = Msat::from_msat(u64::MAX);
        let err = per_unit.total(2).unwrap_err();
        assert!(matches!(err, CoreError::AmountOverflow { quantity: 2, .. }));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Msat::from_msat(1234)), "1234msat");
    }

    #[test]
    fn test_zero_and_default() {
        assert!(Msat::zero().is_zero());
        assert_eq!(Msat::default(), Msat::zero());
        assert!(!Msat::from_msat(1).is_zero());
    }
}
