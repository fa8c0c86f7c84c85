//! # quadmarket-types
//!
//! Shared types, errors, and configuration for the **QuadMarket**
//! campus prediction-market service.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`MarketId`], [`Username`]
//! - **Market model**: [`Side`], [`MarketOutcome`], [`MarketView`]
//! - **Trade model**: [`TradeRequest`], [`PurchaseRecord`], [`TradeHistory`]
//! - **Configuration**: [`ServiceConfig`]
//! - **Errors**: [`QuadmarketError`] with `QM_ERR_` prefix codes

pub mod config;
pub mod error;
pub mod ids;
pub mod market;
pub mod trade;

// Re-export all primary types at crate root for ergonomic imports:
//   use quadmarket_types::{MarketId, Side, TradeRequest, ...};

pub use config::*;
pub use error::*;
pub use ids::*;
pub use market::*;
pub use trade::*;
