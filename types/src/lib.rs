//! Fundamental types for the FACET fractionalisation protocol.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: addresses, amounts, asset handles, and the deterministic
//! fractional-ledger identity.

pub mod address;
pub mod amount;
pub mod asset;
pub mod ledger_id;

pub use address::Address;
/// Re-exported so downstream crates can construct raw 256-bit values
/// without importing `primitive-types` themselves.
pub use primitive_types::U256;
pub use amount::Amount;
pub use asset::AssetHandle;
pub use ledger_id::LedgerId;
