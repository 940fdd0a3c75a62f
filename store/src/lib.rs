//! Abstract storage and collaborator traits for the FACET protocol.
//!
//! Storage backends (in-memory for testing, embedded databases later) and
//! external collaborators implement these traits. The rest of the workspace
//! depends only on the traits, never on a concrete implementation.

pub mod asset_registry;
pub mod error;
pub mod record;

pub use asset_registry::{AssetRegistry, TransferRejected};
pub use error::StoreError;
pub use record::{FractionalisationRecord, RecordStore};
