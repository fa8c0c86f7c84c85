//! The market ledger: share balances and the one-way resolution transition.
//!
//! Each market moves through exactly two states: **Open -> Resolved**.
//! Trades are valid only while open; resolution fixes the outcome once and
//! is terminal. Shares are purely additive per (user, side) — there is no
//! sell or cancel.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::{Mutex, RwLock};
use quadmarket_types::{
    MarketId, MarketOutcome, MarketView, QuadmarketError, Result, Side, Username,
};

/// A single binary-outcome market and its per-user share balances.
///
/// `resolution` is `None` while the market is open and `Some(side)` once
/// resolved — the outcome cannot be read before it exists. The ledger sets
/// it exactly once.
#[derive(Debug)]
pub struct Market {
    id: MarketId,
    title: String,
    resolution: Option<Side>,
    yes_shares: HashMap<Username, i64>,
    no_shares: HashMap<Username, i64>,
    created_at: DateTime<Utc>,
}

impl Market {
    fn new(id: MarketId, title: String) -> Self {
        Self {
            id,
            title,
            resolution: None,
            yes_shares: HashMap::new(),
            no_shares: HashMap::new(),
            created_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn id(&self) -> MarketId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.resolution.is_some()
    }

    #[must_use]
    pub fn outcome(&self) -> MarketOutcome {
        MarketOutcome::from(self.resolution)
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// A user's total quantity on one side. Absent entry reads as zero.
    #[must_use]
    pub fn shares(&self, user: &str, side: Side) -> i64 {
        let book = match side {
            Side::Yes => &self.yes_shares,
            Side::No => &self.no_shares,
        };
        book.get(user).copied().unwrap_or(0)
    }

    /// Read-only snapshot for market listings.
    #[must_use]
    pub fn view(&self) -> MarketView {
        MarketView {
            id: self.id,
            title: self.title.clone(),
            resolved: self.is_resolved(),
            outcome: self.outcome(),
        }
    }

    fn apply_trade(&mut self, user: &str, side: Side, quantity: i64) {
        let book = match side {
            Side::Yes => &mut self.yes_shares,
            Side::No => &mut self.no_shares,
        };
        *book.entry(user.to_string()).or_default() += quantity;
    }

    fn resolve(&mut self, outcome: Side) -> Result<()> {
        if self.resolution.is_some() {
            return Err(QuadmarketError::MarketAlreadyResolved(self.id));
        }
        self.resolution = Some(outcome);
        Ok(())
    }
}

struct LedgerInner {
    /// Markets in creation order. Lookups scan linearly; the market count
    /// in this service is small and the listing order must be stable.
    markets: Vec<(MarketId, Arc<Mutex<Market>>)>,
    next_id: u64,
}

/// Owns the full set of markets.
///
/// The market list sits behind a `RwLock`; each market's mutable state has
/// its own `Mutex`, held for the whole read-modify-write of a trade or
/// resolution. Trades on one market never block reads or trades on another.
pub struct MarketLedger {
    inner: RwLock<LedgerInner>,
}

impl MarketLedger {
    /// Create an empty ledger. Ids start at 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(LedgerInner {
                markets: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Create a new open market and return its id.
    pub fn create_market(&self, title: impl Into<String>) -> MarketId {
        let title = title.into();
        let mut inner = self.inner.write();
        let id = MarketId(inner.next_id);
        inner.next_id += 1;
        inner
            .markets
            .push((id, Arc::new(Mutex::new(Market::new(id, title)))));
        tracing::info!(market_id = %id, "market created");
        id
    }

    /// Clone out the handle for a market, releasing the list lock before
    /// the caller takes the market's own lock.
    fn find(&self, id: MarketId) -> Option<Arc<Mutex<Market>>> {
        self.inner
            .read()
            .markets
            .iter()
            .find(|(mid, _)| *mid == id)
            .map(|(_, market)| Arc::clone(market))
    }

    /// Snapshot a single market.
    ///
    /// # Errors
    /// [`QuadmarketError::MarketNotFound`] if no market has `id`.
    pub fn market(&self, id: MarketId) -> Result<MarketView> {
        let handle = self
            .find(id)
            .ok_or(QuadmarketError::MarketNotFound(id))?;
        let market = handle.lock();
        Ok(market.view())
    }

    /// Snapshot every market, in creation order.
    #[must_use]
    pub fn list(&self) -> Vec<MarketView> {
        let inner = self.inner.read();
        inner
            .markets
            .iter()
            .map(|(_, market)| market.lock().view())
            .collect()
    }

    /// Record a trade: add `quantity` to `user`'s balance on `side`.
    ///
    /// Does not validate that `user` is registered — the orchestrator checks
    /// that before calling in.
    ///
    /// # Errors
    /// [`QuadmarketError::MarketNotFound`] if no market has `id`;
    /// [`QuadmarketError::MarketAlreadyResolved`] if the market is closed.
    pub fn record_trade(&self, id: MarketId, user: &str, side: Side, quantity: i64) -> Result<()> {
        let handle = self
            .find(id)
            .ok_or(QuadmarketError::MarketNotFound(id))?;
        let mut market = handle.lock();
        if market.is_resolved() {
            return Err(QuadmarketError::MarketAlreadyResolved(id));
        }
        market.apply_trade(user, side, quantity);
        tracing::debug!(market_id = %id, user, side = %side, quantity, "trade recorded");
        Ok(())
    }

    /// Resolve a market to its final outcome. One-way and irreversible.
    ///
    /// # Errors
    /// [`QuadmarketError::MarketNotFound`] if no market has `id`;
    /// [`QuadmarketError::MarketAlreadyResolved`] on a repeat resolution.
    pub fn resolve(&self, id: MarketId, outcome: Side) -> Result<()> {
        let handle = self
            .find(id)
            .ok_or(QuadmarketError::MarketNotFound(id))?;
        let mut market = handle.lock();
        market.resolve(outcome)?;
        tracing::info!(market_id = %id, outcome = %outcome, "market resolved");
        Ok(())
    }

    /// A user's position on one side of a market. Zero if they never traded.
    ///
    /// # Errors
    /// [`QuadmarketError::MarketNotFound`] if no market has `id`.
    pub fn shares(&self, id: MarketId, user: &str, side: Side) -> Result<i64> {
        let handle = self
            .find(id)
            .ok_or(QuadmarketError::MarketNotFound(id))?;
        let market = handle.lock();
        Ok(market.shares(user, side))
    }

    /// Number of markets ever created.
    #[must_use]
    pub fn market_count(&self) -> usize {
        self.inner.read().markets.len()
    }
}

impl Default for MarketLedger {
    fn default() -> Self {
        Self::new()
    }
}
