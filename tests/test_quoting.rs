//! Integration tests for the quoting seam against catalog routes.
//!
//! Run with: `cargo test --test test_quoting`

mod common;

use alloy::primitives::U256;
use arb_routes::catalog::RouteCatalog;
use arb_routes::quoting::{Quoter, RouteQuote};
use arb_routes::types::{Chain, Route};
use async_trait::async_trait;

use common::two_route_base_file;

/// Quoter that loses a flat number of basis points per hop, roughly what an
/// unbalanced pool pair would do.
struct LossyQuoter {
    per_hop_bps: u64,
}

impl LossyQuoter {
    fn hop(&self, amount: U256) -> U256 {
        amount - amount * U256::from(self.per_hop_bps) / U256::from(10_000u64)
    }
}

#[async_trait]
impl Quoter for LossyQuoter {
    type Error = std::convert::Infallible;

    async fn quote(&self, _route: &Route, amount_in: U256) -> Result<RouteQuote, Self::Error> {
        let amount_mid = self.hop(amount_in);
        let amount_out = self.hop(amount_mid);
        Ok(RouteQuote { amount_in, amount_mid, amount_out })
    }
}

#[test]
fn test_quote_every_catalog_route() {
    let catalog = RouteCatalog::from_routes_file(two_route_base_file()).unwrap();
    let quoter = LossyQuoter { per_hop_bps: 5 };

    tokio_test::block_on(async {
        for route in catalog.routes_for_chain(Chain::Base) {
            let quote = quoter.quote(route, U256::from(1_000_000u64)).await.unwrap();
            assert!(quote.amount_out < quote.amount_in, "lossy quoter cannot profit");
            assert_eq!(quote.gross_profit(), None);
        }
    });
}
