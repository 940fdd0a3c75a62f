//! Capability interface onto the external non-fungible asset registry.

use facet_types::{Address, AssetHandle};
use thiserror::Error;

/// Rejection returned by the external registry when a custody transfer is
/// not permitted.
#[derive(Debug, Error)]
#[error("asset transfer rejected: {0}")]
pub struct TransferRejected(pub String);

/// The external registry holding the non-fungible assets themselves.
///
/// The core depends only on this interface. Implementations must make
/// `transfer_from` reject any transfer the caller has no rights over —
/// the registry relies on that rejection for its rollback guarantee.
pub trait AssetRegistry {
    /// Current owner of `asset`, or `None` if the asset does not exist.
    fn owner_of(&self, asset: &AssetHandle) -> Option<Address>;

    /// Move custody of `asset` from `from` to `to` on behalf of `caller`.
    ///
    /// `caller` must be the current owner or an account the owner has
    /// approved for this asset.
    fn transfer_from(
        &self,
        caller: &Address,
        from: &Address,
        to: &Address,
        asset: &AssetHandle,
    ) -> Result<(), TransferRejected>;
}

impl<T: AssetRegistry + ?Sized> AssetRegistry for std::sync::Arc<T> {
    fn owner_of(&self, asset: &AssetHandle) -> Option<Address> {
        (**self).owner_of(asset)
    }

    fn transfer_from(
        &self,
        caller: &Address,
        from: &Address,
        to: &Address,
        asset: &AssetHandle,
    ) -> Result<(), TransferRejected> {
        (**self).transfer_from(caller, from, to, asset)
    }
}
