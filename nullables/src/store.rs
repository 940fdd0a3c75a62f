//! Nullable record store — thread-safe in-memory storage for testing.

use std::collections::HashMap;
use std::sync::Mutex;

use facet_store::{FractionalisationRecord, RecordStore, StoreError};
use facet_types::LedgerId;

/// An in-memory fractionalisation-record store.
pub struct NullRecordStore {
    records: Mutex<HashMap<LedgerId, FractionalisationRecord>>,
}

impl NullRecordStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for NullRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for NullRecordStore {
    fn get_record(&self, id: &LedgerId) -> Result<Option<FractionalisationRecord>, StoreError> {
        Ok(self.records.lock().unwrap().get(id).cloned())
    }

    fn put_record(&self, record: &FractionalisationRecord) -> Result<(), StoreError> {
        self.records
            .lock()
            .unwrap()
            .insert(record.ledger_id, record.clone());
        Ok(())
    }

    fn record_count(&self) -> Result<u64, StoreError> {
        Ok(self.records.lock().unwrap().len() as u64)
    }

    fn iter_records(&self) -> Result<Vec<FractionalisationRecord>, StoreError> {
        Ok(self.records.lock().unwrap().values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facet_types::{Address, Amount, AssetHandle};

    fn test_record(asset_id: u64) -> FractionalisationRecord {
        let asset = AssetHandle::new(Address::new("collection_a"), asset_id);
        FractionalisationRecord {
            ledger_id: LedgerId::for_asset(&asset),
            asset,
            original_owner: Address::new("wallet_1"),
            total_supply: Amount::from_raw(100),
            price_per_unit: Amount::from_raw(2),
            total_sold: Amount::ZERO,
            is_locked: true,
        }
    }

    #[test]
    fn put_then_get_round_trips() {
        let store = NullRecordStore::new();
        let record = test_record(0);
        store.put_record(&record).unwrap();
        let fetched = store.get_record(&record.ledger_id).unwrap().unwrap();
        assert_eq!(fetched, record);
        assert!(store.exists(&record.ledger_id).unwrap());
    }

    #[test]
    fn missing_record_is_none() {
        let store = NullRecordStore::new();
        let id = LedgerId::for_asset(&AssetHandle::new(Address::new("collection_a"), 7));
        assert!(store.get_record(&id).unwrap().is_none());
        assert!(!store.exists(&id).unwrap());
    }

    #[test]
    fn put_overwrites_in_place() {
        let store = NullRecordStore::new();
        let mut record = test_record(0);
        store.put_record(&record).unwrap();
        record.total_sold = Amount::from_raw(10);
        store.put_record(&record).unwrap();
        assert_eq!(store.record_count().unwrap(), 1);
        let fetched = store.get_record(&record.ledger_id).unwrap().unwrap();
        assert_eq!(fetched.total_sold, Amount::from_raw(10));
    }

    #[test]
    fn iter_returns_every_record() {
        let store = NullRecordStore::new();
        store.put_record(&test_record(0)).unwrap();
        store.put_record(&test_record(1)).unwrap();
        assert_eq!(store.iter_records().unwrap().len(), 2);
    }
}
