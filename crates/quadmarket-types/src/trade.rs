//! Trade request and purchase-record types.
//!
//! A trade is a request to increase a user's share count on one side of an
//! open market. `amount` is the caller-declared monetary value and
//! `quantity` the number of units; neither is range-checked and no price is
//! derived from their ratio — the service records exactly what was sent.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{MarketId, Side, Username};

/// A request to buy shares on one side of a market.
///
/// Field names follow the original JSON API (`id`, `buyYes`, `user`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeRequest {
    /// The market to trade in.
    pub id: MarketId,
    /// Which side to buy.
    #[serde(rename = "buyYes")]
    pub side: Side,
    /// The acting user.
    pub user: Username,
    /// Caller-declared monetary value. Unvalidated.
    pub amount: i64,
    /// Units to add to the chosen side. Unvalidated, any sign.
    pub quantity: i64,
}

/// One accepted trade, as journaled. Immutable once appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    #[serde(rename = "buyYes")]
    pub side: Side,
    pub amount: i64,
    pub quantity: i64,
}

impl PurchaseRecord {
    #[must_use]
    pub fn new(side: Side, amount: i64, quantity: i64) -> Self {
        Self {
            side,
            amount,
            quantity,
        }
    }
}

impl From<&TradeRequest> for PurchaseRecord {
    fn from(req: &TradeRequest) -> Self {
        Self::new(req.side, req.amount, req.quantity)
    }
}

/// A user's full trade history: every market they have traded in, each with
/// its time-ordered purchase records. `BTreeMap` keeps market ids in
/// ascending order so the serialized payload is deterministic.
pub type TradeHistory = BTreeMap<MarketId, Vec<PurchaseRecord>>;
