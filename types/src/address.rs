//! Opaque account and collection addresses.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An address identifying an account, an asset collection, or the registry
/// escrow itself.
///
/// The protocol never interprets the contents beyond equality and hashing;
/// addresses are issued by the surrounding platform (wallet layer, chain).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Address(String);

impl Address {
    /// Create a new address from a raw string.
    ///
    /// # Panics
    /// Panics if the string is empty.
    pub fn new(raw: impl Into<String>) -> Self {
        let s = raw.into();
        assert!(!s.is_empty(), "address must not be empty");
        Self(s)
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Raw bytes, used for deterministic ledger-identity derivation.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Address {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
