//! Factory owning every fractional ledger by deterministic identifier.

use std::collections::HashMap;

use facet_types::{Address, LedgerId};
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;
use crate::ledger::FractionalLedger;

/// Creates fractional ledgers at caller-supplied deterministic identifiers
/// and owns them for their lifetime.
///
/// Creation at an occupied identifier is rejected, which keeps the factory's
/// idempotency boundary aligned with the registry's already-locked check:
/// the two are evaluated under the same serialization point and can never
/// diverge.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LedgerFactory {
    ledgers: HashMap<LedgerId, FractionalLedger>,
}

impl LedgerFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new ledger at `ledger_id` with zero issuance, handing mint
    /// authority to `creator`.
    pub fn create(
        &mut self,
        ledger_id: LedgerId,
        creator: Address,
    ) -> Result<&mut FractionalLedger, LedgerError> {
        if self.ledgers.contains_key(&ledger_id) {
            return Err(LedgerError::LedgerExists(ledger_id));
        }
        Ok(self
            .ledgers
            .entry(ledger_id)
            .or_insert_with(|| FractionalLedger::new(ledger_id, creator)))
    }

    /// Remove the ledger at `ledger_id`, if any.
    ///
    /// Rollback hook for a lock operation whose record commit failed after
    /// the ledger was created; never called on a committed ledger.
    pub fn remove(&mut self, ledger_id: &LedgerId) -> Option<FractionalLedger> {
        self.ledgers.remove(ledger_id)
    }

    pub fn contains(&self, ledger_id: &LedgerId) -> bool {
        self.ledgers.contains_key(ledger_id)
    }

    pub fn get(&self, ledger_id: &LedgerId) -> Option<&FractionalLedger> {
        self.ledgers.get(ledger_id)
    }

    pub fn get_mut(&mut self, ledger_id: &LedgerId) -> Option<&mut FractionalLedger> {
        self.ledgers.get_mut(ledger_id)
    }

    pub fn ledger_count(&self) -> usize {
        self.ledgers.len()
    }
}
