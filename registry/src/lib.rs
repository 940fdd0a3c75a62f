//! The FACET escrow/registry state machine.
//!
//! The registry owns the mapping from asset to fractionalisation record.
//! It locks an asset into escrow exactly once, derives the deterministic
//! identity of the fractional ledger created for it, and mediates purchases
//! of fractional units against that record with exact-payment and
//! supply-bound enforcement.
//!
//! Every state-mutating operation runs under a single serialization point
//! (one mutex over the world state), so check-then-commit races — double
//! locks, oversold supply — cannot occur. Accepted operations commit fully;
//! rejected operations leave no observable effects.

pub mod error;
pub mod escrow;
pub mod registry;

pub use error::RegistryError;
pub use escrow::EscrowBook;
pub use registry::FractionalisationRegistry;
