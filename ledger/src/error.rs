//! Ledger-specific errors.

use facet_types::{Address, Amount, LedgerId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("ledger {0} already exists")]
    LedgerExists(LedgerId),

    #[error("ledger {0} not found")]
    LedgerNotFound(LedgerId),

    #[error("mint denied: {caller} is not the creator of this ledger")]
    NotCreator { caller: Address },

    #[error("insufficient balance: need {needed}, have {available}")]
    InsufficientBalance { needed: Amount, available: Amount },

    #[error("balance overflow")]
    BalanceOverflow,
}
