//! The orchestrator over accounts, ledger, and journal.

use quadmarket_accounts::AccountRegistry;
use quadmarket_ledger::{MarketLedger, TradeJournal};
use quadmarket_types::{
    MarketId, MarketView, PurchaseRecord, QuadmarketError, Result, ServiceConfig, Side,
    TradeHistory, TradeRequest,
};

/// The composed prediction-market service.
///
/// Owns one registry, one ledger, and one journal. Each component is
/// internally synchronized, so every operation here takes `&self`.
pub struct MarketService {
    accounts: AccountRegistry,
    ledger: MarketLedger,
    journal: TradeJournal,
}

impl MarketService {
    /// Build a service and open the configured seed markets, in order.
    /// Seeded markets receive ids 1, 2, ...
    #[must_use]
    pub fn new(config: &ServiceConfig) -> Self {
        let ledger = MarketLedger::new();
        for title in &config.seed_markets {
            ledger.create_market(title.clone());
        }
        Self {
            accounts: AccountRegistry::new(),
            ledger,
            journal: TradeJournal::new(),
        }
    }

    /// Register a new user with zero trade history.
    ///
    /// # Errors
    /// [`QuadmarketError::UsernameTaken`] if the name exists.
    pub fn register(&self, username: &str, password: &str) -> Result<()> {
        self.accounts.register(username, password)?;
        self.journal.track_user(username);
        tracing::info!(username, "registered");
        Ok(())
    }

    /// Verify a user's credentials.
    ///
    /// # Errors
    /// [`QuadmarketError::InvalidCredentials`] for unknown username or
    /// wrong password alike.
    pub fn login(&self, username: &str, password: &str) -> Result<()> {
        self.accounts.login(username, password)
    }

    /// Snapshot every market in creation order.
    #[must_use]
    pub fn list_markets(&self) -> Vec<MarketView> {
        self.ledger.list()
    }

    /// Open a new market (administrative).
    pub fn create_market(&self, title: impl Into<String>) -> MarketId {
        self.ledger.create_market(title)
    }

    /// Accept a trade: update the ledger, then journal the purchase.
    ///
    /// The journal append runs strictly after a successful ledger update
    /// and cannot fail, so a caller observes either both effects or, on any
    /// error, neither.
    ///
    /// # Errors
    /// [`QuadmarketError::UserNotFound`] if `req.user` is unregistered;
    /// [`QuadmarketError::MarketNotFound`] /
    /// [`QuadmarketError::MarketAlreadyResolved`] from the ledger.
    pub fn trade(&self, req: &TradeRequest) -> Result<()> {
        if !self.accounts.exists(&req.user) {
            return Err(QuadmarketError::UserNotFound(req.user.clone()));
        }
        self.ledger
            .record_trade(req.id, &req.user, req.side, req.quantity)?;
        self.journal.append(&req.user, req.id, PurchaseRecord::from(req));
        tracing::info!(
            market_id = %req.id,
            user = %req.user,
            side = %req.side,
            amount = req.amount,
            quantity = req.quantity,
            "trade accepted"
        );
        Ok(())
    }

    /// Resolve a market to its final outcome (administrative). One-way.
    ///
    /// # Errors
    /// [`QuadmarketError::MarketNotFound`] /
    /// [`QuadmarketError::MarketAlreadyResolved`] from the ledger.
    pub fn resolve(&self, id: MarketId, outcome: Side) -> Result<()> {
        self.ledger.resolve(id, outcome)
    }

    /// A user's full trade history, grouped by market id.
    ///
    /// # Errors
    /// [`QuadmarketError::UserNotFound`] for unknown usernames.
    pub fn history(&self, username: &str) -> Result<TradeHistory> {
        self.journal.history(username)
    }

    /// A user's position on one side of a market.
    ///
    /// # Errors
    /// [`QuadmarketError::MarketNotFound`] if no market has `id`.
    pub fn shares(&self, id: MarketId, user: &str, side: Side) -> Result<i64> {
        self.ledger.shares(id, user, side)
    }
}

impl Default for MarketService {
    fn default() -> Self {
        Self::new(&ServiceConfig::default())
    }
}
