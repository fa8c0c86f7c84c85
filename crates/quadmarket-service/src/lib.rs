//! # quadmarket-service
//!
//! **Market Service**: composes the account registry, market ledger, and
//! trade journal into the user-facing operation set, and enforces the
//! cross-component invariants no single component can enforce alone
//! (a trade requires a registered user, an existing market, and an open
//! market, and every accepted trade is journaled exactly once).
//!
//! All operations take `&self`; a [`MarketService`] behind an `Arc` can be
//! called from any number of transport workers concurrently.

pub mod service;

pub use service::MarketService;
