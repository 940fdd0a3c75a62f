//! Per-asset fungible accounting ledger.

use std::collections::HashMap;

use facet_types::{Address, Amount, LedgerId};
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// A fungible ledger for one fractionalised asset.
///
/// Holds per-address balances and the running total of units issued.
/// The `creator` recorded at construction is the only account allowed to
/// mint; everyone else is rejected with [`LedgerError::NotCreator`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FractionalLedger {
    ledger_id: LedgerId,
    creator: Address,
    balances: HashMap<Address, Amount>,
    total_issued: Amount,
}

impl FractionalLedger {
    /// Construct a ledger with zero issuance. Only the [`LedgerFactory`]
    /// calls this; everything else receives ledgers by reference.
    ///
    /// [`LedgerFactory`]: crate::LedgerFactory
    pub(crate) fn new(ledger_id: LedgerId, creator: Address) -> Self {
        Self {
            ledger_id,
            creator,
            balances: HashMap::new(),
            total_issued: Amount::ZERO,
        }
    }

    pub fn ledger_id(&self) -> &LedgerId {
        &self.ledger_id
    }

    /// The account that created this ledger and holds mint authority.
    pub fn creator(&self) -> &Address {
        &self.creator
    }

    /// Issue `amount` new units to `to`.
    ///
    /// Rejected unless `caller` is the recorded creator.
    pub fn mint(
        &mut self,
        caller: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        if caller != &self.creator {
            return Err(LedgerError::NotCreator {
                caller: caller.clone(),
            });
        }
        let new_total = self
            .total_issued
            .checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow)?;
        let balance = self.balances.entry(to.clone()).or_insert(Amount::ZERO);
        let new_balance = balance
            .checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow)?;
        *balance = new_balance;
        self.total_issued = new_total;
        Ok(())
    }

    /// Move `amount` units from `from` to `to`.
    pub fn transfer(
        &mut self,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let available = self.balance_of(from);
        let remaining = available
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientBalance {
                needed: amount,
                available,
            })?;
        if from == to {
            return Ok(());
        }
        self.balances.insert(from.clone(), remaining);
        let credit = self.balance_of(to)
            .checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow)?;
        self.balances.insert(to.clone(), credit);
        Ok(())
    }

    /// Current balance of `holder` (zero if the ledger has never seen it).
    pub fn balance_of(&self, holder: &Address) -> Amount {
        self.balances.get(holder).copied().unwrap_or(Amount::ZERO)
    }

    /// Total units issued over the ledger's lifetime.
    pub fn total_issued(&self) -> Amount {
        self.total_issued
    }

    /// Number of addresses holding a recorded balance.
    pub fn holder_count(&self) -> usize {
        self.balances.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facet_types::AssetHandle;

    fn test_ledger() -> FractionalLedger {
        let asset = AssetHandle::new(Address::new("collection_a"), 0);
        FractionalLedger::new(LedgerId::for_asset(&asset), Address::new("registry_escrow"))
    }

    #[test]
    fn mint_by_creator_updates_balance_and_total() {
        let mut ledger = test_ledger();
        let creator = ledger.creator().clone();
        let buyer = Address::new("wallet_1");
        ledger.mint(&creator, &buyer, Amount::from_raw(10)).unwrap();
        assert_eq!(ledger.balance_of(&buyer), Amount::from_raw(10));
        assert_eq!(ledger.total_issued(), Amount::from_raw(10));
    }

    #[test]
    fn mint_by_anyone_else_is_rejected() {
        let mut ledger = test_ledger();
        let intruder = Address::new("wallet_2");
        let result = ledger.mint(&intruder, &intruder, Amount::from_raw(10));
        assert!(matches!(result, Err(LedgerError::NotCreator { .. })));
        assert_eq!(ledger.total_issued(), Amount::ZERO);
    }

    #[test]
    fn transfer_moves_units_between_holders() {
        let mut ledger = test_ledger();
        let creator = ledger.creator().clone();
        let a = Address::new("wallet_a");
        let b = Address::new("wallet_b");
        ledger.mint(&creator, &a, Amount::from_raw(100)).unwrap();
        ledger.transfer(&a, &b, Amount::from_raw(40)).unwrap();
        assert_eq!(ledger.balance_of(&a), Amount::from_raw(60));
        assert_eq!(ledger.balance_of(&b), Amount::from_raw(40));
        // Transfers never change the issued total.
        assert_eq!(ledger.total_issued(), Amount::from_raw(100));
    }

    #[test]
    fn transfer_beyond_balance_is_rejected() {
        let mut ledger = test_ledger();
        let creator = ledger.creator().clone();
        let a = Address::new("wallet_a");
        let b = Address::new("wallet_b");
        ledger.mint(&creator, &a, Amount::from_raw(5)).unwrap();
        let result = ledger.transfer(&a, &b, Amount::from_raw(6));
        assert!(matches!(
            result,
            Err(LedgerError::InsufficientBalance { .. })
        ));
        assert_eq!(ledger.balance_of(&a), Amount::from_raw(5));
        assert_eq!(ledger.balance_of(&b), Amount::ZERO);
    }

    #[test]
    fn self_transfer_is_a_no_op() {
        let mut ledger = test_ledger();
        let creator = ledger.creator().clone();
        let a = Address::new("wallet_a");
        ledger.mint(&creator, &a, Amount::from_raw(5)).unwrap();
        ledger.transfer(&a, &a, Amount::from_raw(5)).unwrap();
        assert_eq!(ledger.balance_of(&a), Amount::from_raw(5));
    }
}
