//! The trade journal: append-only purchase history per (user, market).
//!
//! Every accepted trade produces exactly one record here, in acceptance
//! order. Records are never corrected or removed — the journal reflects
//! what was accepted, not what the ledger currently holds.

use std::collections::HashMap;

use parking_lot::RwLock;
use quadmarket_types::{MarketId, PurchaseRecord, QuadmarketError, Result, TradeHistory, Username};

/// Owns every user's purchase sequences, keyed by market id.
///
/// The journal distinguishes "registered but never traded" (empty history)
/// from "unknown user" (error), so the orchestrator registers each user here
/// once at account creation.
pub struct TradeJournal {
    histories: RwLock<HashMap<Username, TradeHistory>>,
}

impl TradeJournal {
    /// Create an empty journal.
    #[must_use]
    pub fn new() -> Self {
        Self {
            histories: RwLock::new(HashMap::new()),
        }
    }

    /// Start tracking a user with zero trade history. Idempotent.
    pub fn track_user(&self, username: &str) {
        self.histories
            .write()
            .entry(username.to_string())
            .or_default();
    }

    /// Append a purchase record for `(username, market_id)`, creating the
    /// sequence lazily. Never fails: callers validate market and user
    /// existence before appending.
    pub fn append(&self, username: &str, market_id: MarketId, record: PurchaseRecord) {
        let mut histories = self.histories.write();
        histories
            .entry(username.to_string())
            .or_default()
            .entry(market_id)
            .or_default()
            .push(record);
    }

    /// A user's full history: every market they traded in, each with its
    /// time-ordered records. Empty map if they never traded.
    ///
    /// # Errors
    /// Returns [`QuadmarketError::UserNotFound`] for unknown usernames.
    pub fn history(&self, username: &str) -> Result<TradeHistory> {
        self.histories
            .read()
            .get(username)
            .cloned()
            .ok_or_else(|| QuadmarketError::UserNotFound(username.to_string()))
    }
}

impl Default for TradeJournal {
    fn default() -> Self {
        Self::new()
    }
}
