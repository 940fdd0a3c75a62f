//! Nullable asset registry — an in-memory non-fungible registry for testing.

use std::collections::HashMap;
use std::sync::Mutex;

use facet_store::{AssetRegistry, TransferRejected};
use facet_types::{Address, AssetHandle};

/// An in-memory non-fungible asset registry with owner/approval semantics.
/// Thread-safe so concurrent registry tests can share one instance.
///
/// `transfer_from` enforces the rights the real collaborator is required to
/// enforce: the caller must be the current owner or the account approved
/// for that specific asset, and `from` must match the current owner.
pub struct NullAssetRegistry {
    owners: Mutex<HashMap<AssetHandle, Address>>,
    approvals: Mutex<HashMap<AssetHandle, Address>>,
    next_ids: Mutex<HashMap<Address, u64>>,
}

impl NullAssetRegistry {
    pub fn new() -> Self {
        Self {
            owners: Mutex::new(HashMap::new()),
            approvals: Mutex::new(HashMap::new()),
            next_ids: Mutex::new(HashMap::new()),
        }
    }

    /// Mint the next sequential asset in `collection` to `owner` and return
    /// its handle. Ids start at 0 per collection.
    pub fn mint(&self, collection: &Address, owner: &Address) -> AssetHandle {
        let mut next_ids = self.next_ids.lock().unwrap();
        let next = next_ids.entry(collection.clone()).or_insert(0);
        let asset = AssetHandle::new(collection.clone(), *next);
        *next += 1;
        self.owners
            .lock()
            .unwrap()
            .insert(asset.clone(), owner.clone());
        asset
    }

    /// Approve `operator` to transfer `asset`. Only the current owner may
    /// approve; the call is rejected otherwise.
    pub fn approve(
        &self,
        caller: &Address,
        operator: &Address,
        asset: &AssetHandle,
    ) -> Result<(), TransferRejected> {
        let owners = self.owners.lock().unwrap();
        match owners.get(asset) {
            Some(owner) if owner == caller => {
                self.approvals
                    .lock()
                    .unwrap()
                    .insert(asset.clone(), operator.clone());
                Ok(())
            }
            _ => Err(TransferRejected(format!(
                "{caller} may not approve transfers of {asset}"
            ))),
        }
    }

    /// Number of assets ever minted across all collections.
    pub fn asset_count(&self) -> u64 {
        self.owners.lock().unwrap().len() as u64
    }
}

impl Default for NullAssetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetRegistry for NullAssetRegistry {
    fn owner_of(&self, asset: &AssetHandle) -> Option<Address> {
        self.owners.lock().unwrap().get(asset).cloned()
    }

    fn transfer_from(
        &self,
        caller: &Address,
        from: &Address,
        to: &Address,
        asset: &AssetHandle,
    ) -> Result<(), TransferRejected> {
        let mut owners = self.owners.lock().unwrap();
        let owner = owners
            .get(asset)
            .ok_or_else(|| TransferRejected(format!("unknown asset {asset}")))?
            .clone();
        if &owner != from {
            return Err(TransferRejected(format!(
                "{from} is not the owner of {asset}"
            )));
        }
        let mut approvals = self.approvals.lock().unwrap();
        let approved = approvals.get(asset) == Some(caller);
        if caller != &owner && !approved {
            return Err(TransferRejected(format!(
                "{caller} has no rights over {asset}"
            )));
        }
        // Approvals do not survive a custody change.
        approvals.remove(asset);
        owners.insert(asset.clone(), to.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(s: &str) -> Address {
        Address::new(s)
    }

    #[test]
    fn mint_assigns_sequential_ids_per_collection() {
        let registry = NullAssetRegistry::new();
        let collection = addr("collection_a");
        let owner = addr("wallet_1");
        let a0 = registry.mint(&collection, &owner);
        let a1 = registry.mint(&collection, &owner);
        assert_eq!(a0.asset_id, 0);
        assert_eq!(a1.asset_id, 1);
        assert_eq!(registry.owner_of(&a0), Some(owner));
    }

    #[test]
    fn owner_can_transfer_directly() {
        let registry = NullAssetRegistry::new();
        let owner = addr("wallet_1");
        let recipient = addr("wallet_2");
        let asset = registry.mint(&addr("collection_a"), &owner);
        registry
            .transfer_from(&owner, &owner, &recipient, &asset)
            .unwrap();
        assert_eq!(registry.owner_of(&asset), Some(recipient));
    }

    #[test]
    fn stranger_cannot_transfer() {
        let registry = NullAssetRegistry::new();
        let owner = addr("wallet_1");
        let thief = addr("wallet_2");
        let asset = registry.mint(&addr("collection_a"), &owner);
        let result = registry.transfer_from(&thief, &owner, &thief, &asset);
        assert!(result.is_err());
        assert_eq!(registry.owner_of(&asset), Some(owner));
    }

    #[test]
    fn approved_operator_can_transfer_once() {
        let registry = NullAssetRegistry::new();
        let owner = addr("wallet_1");
        let operator = addr("escrow");
        let asset = registry.mint(&addr("collection_a"), &owner);
        registry.approve(&owner, &operator, &asset).unwrap();
        registry
            .transfer_from(&operator, &owner, &operator, &asset)
            .unwrap();
        assert_eq!(registry.owner_of(&asset), Some(operator.clone()));
        // The approval was consumed by the transfer.
        let result = registry.transfer_from(&operator, &operator, &owner, &asset);
        assert!(result.is_ok(), "owner may always move their own asset");
        let result = registry.transfer_from(&operator, &owner, &operator, &asset);
        assert!(result.is_err());
    }

    #[test]
    fn only_owner_may_approve() {
        let registry = NullAssetRegistry::new();
        let owner = addr("wallet_1");
        let stranger = addr("wallet_2");
        let asset = registry.mint(&addr("collection_a"), &owner);
        assert!(registry.approve(&stranger, &stranger, &asset).is_err());
    }
}
