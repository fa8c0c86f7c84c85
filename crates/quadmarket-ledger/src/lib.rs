//! # quadmarket-ledger
//!
//! **Market Ledger** and **Trade Journal** — the stateful core of QuadMarket.
//!
//! - [`MarketLedger`]: owns every market, its per-user YES/NO share balances,
//!   and its resolution state. Each market's mutable state sits behind its
//!   own lock, so trades on unrelated markets never contend.
//! - [`TradeJournal`]: owns the append-only purchase history kept per
//!   `(user, market)`.
//!
//! Neither component validates user existence — that is the orchestrator's
//! job (`quadmarket-service`), which keeps the ledger decoupled from the
//! account model.

pub mod journal;
pub mod ledger;

pub use journal::TradeJournal;
pub use ledger::{Market, MarketLedger};
