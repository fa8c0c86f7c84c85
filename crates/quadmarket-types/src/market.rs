//! Market-facing types: trade sides, outcome rendering, and list views.
//!
//! A market is a single binary-outcome event. While open it accepts trades
//! on either side; resolution fixes the final outcome exactly once.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::MarketId;

/// The side of a binary market a position is held on.
///
/// On the wire this is the `buyYes` boolean of the original API, so it
/// serializes as a plain `bool`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "bool", into = "bool")]
pub enum Side {
    Yes,
    No,
}

impl Side {
    #[must_use]
    pub fn is_yes(self) -> bool {
        matches!(self, Self::Yes)
    }

    /// The opposing side.
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Yes => Self::No,
            Self::No => Self::Yes,
        }
    }
}

impl From<bool> for Side {
    fn from(buy_yes: bool) -> Self {
        if buy_yes { Self::Yes } else { Self::No }
    }
}

impl From<Side> for bool {
    fn from(side: Side) -> Self {
        side.is_yes()
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yes => write!(f, "YES"),
            Self::No => write!(f, "NO"),
        }
    }
}

/// Rendered resolution state of a market, as shown in market listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketOutcome {
    Unresolved,
    #[serde(rename = "YES")]
    Yes,
    #[serde(rename = "NO")]
    No,
}

impl From<Option<Side>> for MarketOutcome {
    fn from(resolution: Option<Side>) -> Self {
        match resolution {
            None => Self::Unresolved,
            Some(Side::Yes) => Self::Yes,
            Some(Side::No) => Self::No,
        }
    }
}

impl fmt::Display for MarketOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unresolved => write!(f, "Unresolved"),
            Self::Yes => write!(f, "YES"),
            Self::No => write!(f, "NO"),
        }
    }
}

/// Read-only snapshot of one market for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketView {
    pub id: MarketId,
    pub title: String,
    pub resolved: bool,
    pub outcome: MarketOutcome,
}
