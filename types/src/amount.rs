//! 256-bit amount type for fractional units and payments.
//!
//! Amounts are fixed-point integers (U256) to avoid floating-point errors.
//! The smallest unit is 1 raw. All arithmetic on protocol paths is checked.

use primitive_types::U256;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A protocol amount — fractional units, prices, or payment value.
///
/// Internally stored as raw units (U256) for precision. Supplies of
/// 10^25 raw and beyond multiplied by 10^18-scaled prices exceed u128,
/// so the full 256-bit width is required.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Amount(U256);

impl Amount {
    pub const ZERO: Self = Self(U256([0u64; 4]));

    pub fn new(raw: U256) -> Self {
        Self(raw)
    }

    /// Convenience constructor for amounts that fit in a machine word.
    pub fn from_raw(raw: u128) -> Self {
        Self(U256::from(raw))
    }

    pub fn raw(&self) -> U256 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    pub fn checked_mul(self, other: Self) -> Option<Self> {
        self.0.checked_mul(other.0).map(Self)
    }

    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u128> for Amount {
    fn from(raw: u128) -> Self {
        Self::from_raw(raw)
    }
}

impl From<U256> for Amount {
    fn from(raw: U256) -> Self {
        Self(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_add_detects_overflow() {
        let max = Amount::new(U256::MAX);
        assert!(max.checked_add(Amount::from_raw(1)).is_none());
        assert_eq!(
            Amount::from_raw(2).checked_add(Amount::from_raw(3)),
            Some(Amount::from_raw(5))
        );
    }

    #[test]
    fn checked_sub_detects_underflow() {
        assert!(Amount::ZERO.checked_sub(Amount::from_raw(1)).is_none());
        assert_eq!(
            Amount::from_raw(5).checked_sub(Amount::from_raw(3)),
            Some(Amount::from_raw(2))
        );
    }

    #[test]
    fn checked_mul_handles_wide_products() {
        // 21,000,000 * 10^18 units at 0.1 * 10^18 per unit — wider than u128.
        let supply = Amount::new(U256::from(21_000_000u64) * U256::exp10(18));
        let price = Amount::new(U256::exp10(17));
        let product = supply.checked_mul(price).unwrap();
        assert_eq!(product.raw(), U256::from(21_000_000u64) * U256::exp10(35));
    }

    #[test]
    fn zero_is_zero() {
        assert!(Amount::ZERO.is_zero());
        assert!(!Amount::from_raw(1).is_zero());
    }
}
