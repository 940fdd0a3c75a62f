//! Handle for one non-fungible asset.

use crate::Address;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one non-fungible asset: the external collection that issued it
/// plus its identifier within that collection.
///
/// Used only as a lookup key; the asset itself lives in the external registry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetHandle {
    /// Address of the external collection / asset registry.
    pub collection: Address,
    /// Identifier of the asset within its collection.
    pub asset_id: u64,
}

impl AssetHandle {
    pub fn new(collection: Address, asset_id: u64) -> Self {
        Self {
            collection,
            asset_id,
        }
    }
}

impl fmt::Display for AssetHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.collection, self.asset_id)
    }
}
