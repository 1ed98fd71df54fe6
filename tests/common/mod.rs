//! Shared test helpers.

#![allow(dead_code)]

use arb_routes::config::{RouteSpec, RoutesFile};
use arb_routes::types::Chain;

/// Base-chain contract addresses used across tests.
pub const BASE_USDC: &str = "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913";
pub const BASE_WETH: &str = "0x4200000000000000000000000000000000000006";
pub const BASE_QUOTER: &str = "0x3d4e44Eb1374240CE5F1B871ab261CD16335B76a";
pub const BASE_ROUTER: &str = "0x2626664c2603336E57B271c5C0b26F421741e481";

/// A well-formed USDC round-trip route spec through WETH.
pub fn usdc_weth_spec(name: &str, fee1: u32, fee2: u32) -> RouteSpec {
    RouteSpec {
        name: name.to_string(),
        token_in: BASE_USDC.to_string(),
        token_mid: BASE_WETH.to_string(),
        token_out: BASE_USDC.to_string(),
        fee1,
        fee2,
        quoter: BASE_QUOTER.to_string(),
        router: BASE_ROUTER.to_string(),
        description: "fee tier arbitrage".to_string(),
    }
}

/// The two-route Base document from the quoting scenario.
pub fn two_route_base_file() -> RoutesFile {
    let mut file = RoutesFile::default();
    file.chains.insert(
        Chain::Base,
        vec![
            usdc_weth_spec("USDC-WETH-USDC 500/3000", 500, 3000),
            usdc_weth_spec("USDC-WETH-USDC 3000/500", 3000, 500),
        ],
    );
    file
}
