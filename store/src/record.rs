//! Fractionalisation record storage trait.

use crate::StoreError;
use facet_types::{Address, Amount, AssetHandle, LedgerId};
use serde::{Deserialize, Serialize};

/// Persisted state describing one locked asset's fractionalisation terms
/// and sales progress.
///
/// A record is created exactly once by a successful lock and never deleted.
/// `total_sold` is the only field that mutates afterwards, and only through
/// accepted purchases.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FractionalisationRecord {
    /// The escrowed asset this record describes.
    pub asset: AssetHandle,

    /// The account that performed the lock. Only this account is entitled
    /// to any unsold remainder.
    pub original_owner: Address,

    /// Deterministic identity of the fractional ledger; also the store key.
    pub ledger_id: LedgerId,

    /// Total fractional units available. Fixed for the life of the record.
    pub total_supply: Amount,

    /// Price per fractional unit. Fixed at creation.
    pub price_per_unit: Amount,

    /// Units sold so far. Monotonically non-decreasing, never exceeds
    /// `total_supply`.
    pub total_sold: Amount,

    /// True from creation onward; there is no unlock path.
    pub is_locked: bool,
}

impl FractionalisationRecord {
    /// Units still available for purchase.
    pub fn remaining_supply(&self) -> Amount {
        self.total_supply.saturating_sub(self.total_sold)
    }

    /// Whether every unit has been sold.
    pub fn is_sold_out(&self) -> bool {
        self.total_sold == self.total_supply
    }
}

/// Trait for fractionalisation-record storage.
///
/// Keyed by `LedgerId`. Absence is an ordinary outcome (the registry probes
/// for existing records during lock validation), so lookups return `Option`
/// rather than treating a miss as an error.
pub trait RecordStore {
    /// Fetch the record stored under `id`, if any.
    fn get_record(&self, id: &LedgerId) -> Result<Option<FractionalisationRecord>, StoreError>;

    /// Insert or overwrite the record stored under its own `ledger_id`.
    fn put_record(&self, record: &FractionalisationRecord) -> Result<(), StoreError>;

    /// Whether a record exists under `id`.
    fn exists(&self, id: &LedgerId) -> Result<bool, StoreError> {
        Ok(self.get_record(id)?.is_some())
    }

    /// Total number of records.
    fn record_count(&self) -> Result<u64, StoreError>;

    /// All records, in no particular order.
    fn iter_records(&self) -> Result<Vec<FractionalisationRecord>, StoreError>;
}
