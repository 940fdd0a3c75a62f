//! Nullable (in-memory) implementations of the FACET collaborator and
//! storage traits, for testing.

pub mod asset_registry;
pub mod store;

pub use asset_registry::NullAssetRegistry;
pub use store::NullRecordStore;
