//! The fractional fungible ledger.
//!
//! One ledger exists per fractionalised asset. It tracks per-holder balances
//! of fractional units and the total issued so far. Minting authority is a
//! capability: the ledger remembers the account that created it and rejects
//! mint calls from anyone else.
//!
//! Ledgers are created through the [`LedgerFactory`] at caller-supplied
//! deterministic identifiers; a second creation at an occupied identifier
//! is rejected, so the factory can never diverge from the registry's
//! already-locked check.

pub mod error;
pub mod factory;
pub mod ledger;

pub use error::LedgerError;
pub use factory::LedgerFactory;
pub use ledger::FractionalLedger;
