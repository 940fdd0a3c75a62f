//! Deterministic fractional-ledger identity.

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::AssetHandle;

type Blake2b256 = Blake2b<U32>;

/// Domain tag mixed into every derivation so ledger ids can never collide
/// with hashes computed for other purposes.
const DERIVATION_TAG: &[u8] = b"FACET_LEDGER_V1";

/// The 32-byte identity of a fractional ledger.
///
/// Derived from the asset handle via Blake2b-256 — a pure function, so any
/// client can recompute the id offline without consulting the registry, and
/// no two distinct assets map to the same ledger.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LedgerId([u8; 32]);

impl LedgerId {
    pub const ZERO: Self = Self([0u8; 32]);

    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Derive the ledger identity for an asset.
    ///
    /// The collection address is length-prefixed so no two distinct
    /// (collection, asset_id) pairs produce the same preimage.
    pub fn for_asset(asset: &AssetHandle) -> Self {
        let collection = asset.collection.as_bytes();
        let mut hasher = Blake2b256::new();
        hasher.update(DERIVATION_TAG);
        hasher.update((collection.len() as u64).to_be_bytes());
        hasher.update(collection);
        hasher.update(asset.asset_id.to_be_bytes());
        let result = hasher.finalize();
        let mut output = [0u8; 32];
        output.copy_from_slice(&result);
        Self(output)
    }
}

impl fmt::Debug for LedgerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LedgerId({})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for LedgerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0))
    }
}

// Inline hex encoding to avoid adding the `hex` crate as a dependency of types.
mod hex {
    pub fn encode(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Address;

    fn asset(collection: &str, id: u64) -> AssetHandle {
        AssetHandle::new(Address::new(collection), id)
    }

    #[test]
    fn derivation_is_deterministic() {
        let a = asset("collection_alpha", 0);
        assert_eq!(LedgerId::for_asset(&a), LedgerId::for_asset(&a));
    }

    #[test]
    fn distinct_assets_get_distinct_ids() {
        let id_a = LedgerId::for_asset(&asset("collection_alpha", 0));
        let id_b = LedgerId::for_asset(&asset("collection_alpha", 1));
        let id_c = LedgerId::for_asset(&asset("collection_beta", 0));
        assert_ne!(id_a, id_b);
        assert_ne!(id_a, id_c);
        assert_ne!(id_b, id_c);
    }

    #[test]
    fn length_prefix_separates_boundary_cases() {
        // Without the length prefix these two could share a preimage suffix.
        let id_a = LedgerId::for_asset(&asset("ab", 0));
        let id_b = LedgerId::for_asset(&asset("a", 0));
        assert_ne!(id_a, id_b);
    }

    #[test]
    fn derived_id_is_never_zero() {
        assert!(!LedgerId::for_asset(&asset("c", 42)).is_zero());
    }
}
