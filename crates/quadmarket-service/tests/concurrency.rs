//! Concurrency tests for the composed service.
//!
//! The original system mutated shared maps from concurrent request handlers
//! with no synchronization; these tests pin down the guarantees the rewrite
//! adds: no lost share increments, no trade recorded after resolution, and
//! ledger totals always equal to the sum of journaled accepted trades.

use std::sync::Arc;
use std::thread;

use quadmarket_service::MarketService;
use quadmarket_types::{MarketId, QuadmarketError, ServiceConfig, Side, TradeRequest};

fn trade_req(id: u64, side: Side, user: &str, quantity: i64) -> TradeRequest {
    TradeRequest {
        id: MarketId(id),
        side,
        user: user.to_string(),
        amount: quantity,
        quantity,
    }
}

#[test]
fn parallel_trades_on_one_market_all_counted() {
    let svc = Arc::new(MarketService::new(&ServiceConfig::default()));
    svc.register("alice", "pw1").unwrap();

    // 8 threads x 100 trades of quantity 3 each.
    let mut handles = Vec::new();
    for _ in 0..8 {
        let svc = Arc::clone(&svc);
        handles.push(thread::spawn(move || {
            for _ in 0..100 {
                svc.trade(&trade_req(1, Side::Yes, "alice", 3)).unwrap();
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(svc.shares(MarketId(1), "alice", Side::Yes).unwrap(), 2400);

    let history = svc.history("alice").unwrap();
    assert_eq!(history[&MarketId(1)].len(), 800);
}

#[test]
fn trades_on_different_markets_do_not_interfere() {
    let svc = Arc::new(MarketService::new(&ServiceConfig::default()));
    svc.register("alice", "pw1").unwrap();
    svc.register("bob", "pw2").unwrap();

    let svc_a = Arc::clone(&svc);
    let alice = thread::spawn(move || {
        for _ in 0..200 {
            svc_a.trade(&trade_req(1, Side::Yes, "alice", 1)).unwrap();
        }
    });
    let svc_b = Arc::clone(&svc);
    let bob = thread::spawn(move || {
        for _ in 0..200 {
            svc_b.trade(&trade_req(2, Side::No, "bob", 1)).unwrap();
        }
    });
    alice.join().unwrap();
    bob.join().unwrap();

    assert_eq!(svc.shares(MarketId(1), "alice", Side::Yes).unwrap(), 200);
    assert_eq!(svc.shares(MarketId(2), "bob", Side::No).unwrap(), 200);
    assert_eq!(svc.shares(MarketId(1), "bob", Side::No).unwrap(), 0);
}

#[test]
fn resolve_racing_traders_leaves_consistent_state() {
    let svc = Arc::new(MarketService::new(&ServiceConfig::default()));
    let users = ["alice", "bob", "carol", "dave"];
    for user in users {
        svc.register(user, "pw").unwrap();
    }

    let mut handles = Vec::new();
    for user in users {
        let svc = Arc::clone(&svc);
        handles.push(thread::spawn(move || {
            // Trade until the resolver closes the market.
            loop {
                match svc.trade(&trade_req(1, Side::Yes, user, 2)) {
                    Ok(()) => {}
                    Err(QuadmarketError::MarketAlreadyResolved(_)) => break,
                    Err(other) => panic!("unexpected error: {other}"),
                }
            }
        }));
    }

    let resolver = {
        let svc = Arc::clone(&svc);
        thread::spawn(move || {
            // Let the traders get going before closing the market.
            thread::sleep(std::time::Duration::from_millis(10));
            svc.resolve(MarketId(1), Side::No).unwrap();
        })
    };

    resolver.join().unwrap();
    for handle in handles {
        handle.join().unwrap();
    }

    // Every journaled trade was accepted before resolution; the ledger
    // total must equal the journaled sum exactly — no trade slipped in
    // after the market closed, and none was dropped.
    for user in users {
        let journaled: i64 = svc
            .history(user)
            .unwrap()
            .get(&MarketId(1))
            .map_or(0, |records| records.iter().map(|r| r.quantity).sum());
        let held = svc.shares(MarketId(1), user, Side::Yes).unwrap();
        assert_eq!(held, journaled, "ledger/journal mismatch for {user}");
    }

    // Resolution is terminal.
    let err = svc.resolve(MarketId(1), Side::Yes).unwrap_err();
    assert!(matches!(err, QuadmarketError::MarketAlreadyResolved(_)));
}

#[test]
fn concurrent_listing_during_trading_is_safe() {
    let svc = Arc::new(MarketService::new(&ServiceConfig::default()));
    svc.register("alice", "pw1").unwrap();

    let svc_t = Arc::clone(&svc);
    let trader = thread::spawn(move || {
        for _ in 0..500 {
            svc_t.trade(&trade_req(1, Side::Yes, "alice", 1)).unwrap();
        }
    });
    let svc_l = Arc::clone(&svc);
    let lister = thread::spawn(move || {
        for _ in 0..500 {
            let views = svc_l.list_markets();
            assert_eq!(views.len(), 2);
        }
    });

    trader.join().unwrap();
    lister.join().unwrap();
    assert_eq!(svc.shares(MarketId(1), "alice", Side::Yes).unwrap(), 500);
}
