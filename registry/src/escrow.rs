//! Per-ledger accounting of payment value retained in escrow.

use std::collections::HashMap;

use facet_types::{Amount, LedgerId};

/// Tracks, per ledger, the total payment value the registry holds in escrow.
///
/// Monotonically non-decreasing: the core defines no payout path, so value
/// only ever flows in. For every ledger the held amount equals
/// `total_sold * price_per_unit` of its record.
///
/// The two methods split validation from commit: callers compute the new
/// total with [`credited`] alongside their other precondition checks, and
/// only once everything has passed do they write it back with [`hold`],
/// which cannot fail.
///
/// [`credited`]: EscrowBook::credited
/// [`hold`]: EscrowBook::hold
#[derive(Clone, Debug, Default)]
pub struct EscrowBook {
    held: HashMap<LedgerId, Amount>,
}

impl EscrowBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Payment value currently held for `ledger_id`.
    pub fn held(&self, ledger_id: &LedgerId) -> Amount {
        self.held.get(ledger_id).copied().unwrap_or(Amount::ZERO)
    }

    /// The total that would be held for `ledger_id` after adding `amount`,
    /// or `None` if the sum does not fit in 256 bits. Does not mutate.
    pub fn credited(&self, ledger_id: &LedgerId, amount: Amount) -> Option<Amount> {
        self.held(ledger_id).checked_add(amount)
    }

    /// Record `total` as the value held for `ledger_id`.
    pub fn hold(&mut self, ledger_id: LedgerId, total: Amount) {
        self.held.insert(ledger_id, total);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facet_types::{Address, AssetHandle, U256};

    fn test_id() -> LedgerId {
        LedgerId::for_asset(&AssetHandle::new(Address::new("collection_a"), 0))
    }

    #[test]
    fn credited_then_hold_accumulates() {
        let mut book = EscrowBook::new();
        let id = test_id();
        assert_eq!(book.held(&id), Amount::ZERO);

        let total = book.credited(&id, Amount::from_raw(3)).unwrap();
        book.hold(id, total);
        let total = book.credited(&id, Amount::from_raw(4)).unwrap();
        book.hold(id, total);

        assert_eq!(book.held(&id), Amount::from_raw(7));
    }

    #[test]
    fn credited_detects_overflow_without_mutating() {
        let mut book = EscrowBook::new();
        let id = test_id();
        book.hold(id, Amount::from_raw(1));

        let max = Amount::new(U256::MAX);
        assert!(book.credited(&id, max).is_none());
        assert_eq!(book.held(&id), Amount::from_raw(1));
    }
}
