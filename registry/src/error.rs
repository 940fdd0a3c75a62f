//! Registry error taxonomy.
//!
//! Every variant is a rejection of the requested operation with full
//! rollback; no partial effects ever persist. Errors surface synchronously
//! to the caller and are never retried by the core.

use facet_ledger::LedgerError;
use facet_store::StoreError;
use facet_types::{Address, Amount, AssetHandle, LedgerId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    /// The caller does not own the asset it is trying to lock.
    #[error("{caller} is not the owner of {asset}")]
    Unauthorized { caller: Address, asset: AssetHandle },

    /// A fractionalisation record already exists for the asset.
    #[error("asset {0} is already locked")]
    AlreadyLocked(AssetHandle),

    /// The operation references a ledger with no active record.
    #[error("no locked record for ledger {0}")]
    NotLocked(LedgerId),

    /// The requested record does not exist.
    #[error("no record for ledger {0}")]
    NotFound(LedgerId),

    /// A lock was requested with zero total supply.
    #[error("total supply must be non-zero")]
    ZeroSupply,

    /// A purchase was requested for zero units.
    #[error("quantity must be non-zero")]
    ZeroQuantity,

    /// The supplied payment does not exactly equal quantity x price.
    #[error("invalid payment: expected {expected}, paid {paid}")]
    InvalidAmount { expected: Amount, paid: Amount },

    /// The purchase would push total sold above total supply.
    #[error("purchase of {requested} units exceeds remaining supply {remaining}")]
    SupplyExceeded { requested: Amount, remaining: Amount },

    /// The external asset registry rejected the custody transfer.
    #[error("asset custody transfer failed: {0}")]
    TransferFailed(String),

    /// 256-bit arithmetic overflowed; no payment could have matched.
    #[error("amount overflow")]
    Overflow,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
