//! Identifiers used throughout QuadMarket.
//!
//! Market ids are small sequential integers assigned at creation time.
//! Users are keyed by their unique username string.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a market, assigned at creation and immutable.
///
/// Serializes as a plain integer; when used as a JSON object key (the
/// history payload) `serde_json` renders it as the decimal string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct MarketId(pub u64);

impl MarketId {
    /// The id after this one in creation order.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for MarketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "market:{}", self.0)
    }
}

/// Type alias for usernames. Uniqueness is enforced by the account registry.
pub type Username = String;
