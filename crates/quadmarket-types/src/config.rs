//! Configuration for a QuadMarket service instance.

use serde::{Deserialize, Serialize};

/// Configuration for the market service.
///
/// State is process-lifetime only, so the whole configuration is the set of
/// markets to open at startup. Titles are created in order, so seeded
/// markets receive ids 1, 2, ...
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Titles of the markets to create at startup, in creation order.
    pub seed_markets: Vec<String>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            seed_markets: vec![
                "Will the fest happen this year?".to_string(),
                "Will the cricket team win the final?".to_string(),
            ],
        }
    }
}

impl ServiceConfig {
    /// A configuration with no seed markets.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            seed_markets: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_seeds_two_markets() {
        let cfg = ServiceConfig::default();
        assert_eq!(cfg.seed_markets.len(), 2);
        assert!(cfg.seed_markets[0].contains("fest"));
    }

    #[test]
    fn empty_has_no_markets() {
        assert!(ServiceConfig::empty().seed_markets.is_empty());
    }

    #[test]
    fn config_serde_roundtrip() {
        let cfg = ServiceConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let back: ServiceConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg.seed_markets, back.seed_markets);
    }
}
