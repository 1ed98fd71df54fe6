//! Builtin production route tables.
//!
//! Token and DEX contract addresses per chain, and the default candidate
//! routes built from them. Uniswap V3 with USDC as the base asset on Base,
//! Arbitrum, Optimism, and Polygon. The tables go through the same validating
//! builder as externally supplied configuration.

use alloy::primitives::{address, Address};

use crate::error::Result;
use crate::types::{Chain, FeeTier, Route};

use super::{CatalogBuilder, RouteCatalog};

// ============================================================================
// Token Addresses — Base
// ============================================================================

/// WETH on Base.
pub const BASE_WETH: Address = address!("4200000000000000000000000000000000000006");

/// Native USDC on Base.
pub const BASE_USDC: Address = address!("833589fCD6eDb6E08f4c7C32D4f71b54bdA02913");

/// Bridged USDbC on Base.
pub const BASE_USDBC: Address = address!("d9aAEc86B65D86f6A7B5B1b0c42FFA531710b6CA");

/// DAI on Base.
pub const BASE_DAI: Address = address!("50c5725949A6F0c72E6C4a641F24049A917DB0Cb");

/// Coinbase wrapped staked ETH on Base.
pub const BASE_CBETH: Address = address!("2Ae3F1Ec7F1F5012CFEab0185bfc7aa3cf0DEc22");

// ============================================================================
// Token Addresses — Arbitrum
// ============================================================================

/// WETH on Arbitrum.
pub const ARBITRUM_WETH: Address = address!("82aF49447D8a07e3bd95BD0d56f35241523fBab1");

/// Native USDC on Arbitrum.
pub const ARBITRUM_USDC: Address = address!("af88d065e77c8cC2239327C5EDb3A432268e5831");

/// Bridged USDC.e on Arbitrum.
pub const ARBITRUM_USDCE: Address = address!("FF970A61A04b1cA14834A43f5dE4533eBDDB5CC8");

/// USDT on Arbitrum.
pub const ARBITRUM_USDT: Address = address!("Fd086bC7CD5C481DCC9C85ebE478A1C0b69FCbb9");

/// ARB token.
pub const ARBITRUM_ARB: Address = address!("912CE59144191C1204E64559FE8253a0e49E6548");

/// GMX token.
pub const ARBITRUM_GMX: Address = address!("fc5A1A6EB076a2C7aD06eD22C90d7E710E35ad0a");

// ============================================================================
// Token Addresses — Optimism
// ============================================================================

/// WETH on Optimism.
pub const OPTIMISM_WETH: Address = address!("4200000000000000000000000000000000000006");

/// Native USDC on Optimism.
pub const OPTIMISM_USDC: Address = address!("0b2C639c533813f4Aa9D7837CAf62653d097Ff85");

/// Bridged USDC.e on Optimism.
pub const OPTIMISM_USDCE: Address = address!("7F5c764cBc14f9669B88837ca1490cCa17c31607");

/// OP token.
pub const OPTIMISM_OP: Address = address!("4200000000000000000000000000000000000042");

/// Lido wrapped staked ETH on Optimism.
pub const OPTIMISM_WSTETH: Address = address!("1F32b1c2345538c0c6f582fCB022739c4A194Ebb");

// ============================================================================
// Token Addresses — Polygon
// ============================================================================

/// WETH on Polygon.
pub const POLYGON_WETH: Address = address!("7ceB23fD6bC0adD59E62ac25578270cFf1b9f619");

/// WMATIC on Polygon.
pub const POLYGON_WMATIC: Address = address!("0d500B1d8E8eF31E21C99d1Db9A6444d3ADf1270");

/// Native USDC on Polygon.
pub const POLYGON_USDC: Address = address!("3c499c542cEF5E3811e1192ce70d8cC03d5c3359");

/// Bridged USDC.e on Polygon.
pub const POLYGON_USDCE: Address = address!("2791Bca1f2de4661ED88A30C99A7a9449Aa84174");

/// USDT on Polygon.
pub const POLYGON_USDT: Address = address!("c2132D05D31c914a87C6611C10748AEb04B58e8F");

/// WBTC on Polygon.
pub const POLYGON_WBTC: Address = address!("1BFD67037B42Cf73acF2047067bd4F2C47D9BfD6");

// ============================================================================
// Uniswap V3 Contract Addresses
// ============================================================================

/// QuoterV2 on Base.
pub const BASE_QUOTER_V2: Address = address!("3d4e44Eb1374240CE5F1B871ab261CD16335B76a");

/// SwapRouter02 on Base.
pub const BASE_SWAP_ROUTER: Address = address!("2626664c2603336E57B271c5C0b26F421741e481");

/// QuoterV2 on Arbitrum, Optimism, and Polygon (canonical deployment).
pub const CANONICAL_QUOTER_V2: Address = address!("61fFE014bA17989E743c5F6cB21bF9697530B21e");

/// SwapRouter02 on Arbitrum, Optimism, and Polygon (canonical deployment).
pub const CANONICAL_SWAP_ROUTER: Address = address!("68b3465833fb72A70ecDF485E0e4C7bD8665Fc45");

/// QuoterV2 address for `chain`.
pub const fn quoter_for(chain: Chain) -> Address {
    match chain {
        Chain::Base => BASE_QUOTER_V2,
        _ => CANONICAL_QUOTER_V2,
    }
}

/// SwapRouter address for `chain`.
pub const fn router_for(chain: Chain) -> Address {
    match chain {
        Chain::Base => BASE_SWAP_ROUTER,
        _ => CANONICAL_SWAP_ROUTER,
    }
}

fn route(
    chain: Chain,
    name: &str,
    token_in: Address,
    token_mid: Address,
    token_out: Address,
    fee1: FeeTier,
    fee2: FeeTier,
    description: &str,
) -> Route {
    Route {
        name: name.to_string(),
        token_in,
        token_mid,
        token_out,
        fee1,
        fee2,
        quoter: quoter_for(chain),
        router: router_for(chain),
        description: description.to_string(),
    }
}

/// Build the builtin production catalog.
///
/// Infallible in practice (the tables are fixed), but routed through the
/// validating builder so a bad edit to this file fails loudly at startup
/// instead of surfacing as a wrong quote later.
pub fn default_catalog() -> Result<RouteCatalog> {
    use FeeTier::{High, Low, Lowest, Medium};

    let mut b = CatalogBuilder::new();

    // Base
    b.add_route(
        Chain::Base,
        route(
            Chain::Base,
            "USDC-WETH-USDC 500/3000",
            BASE_USDC,
            BASE_WETH,
            BASE_USDC,
            Low,
            Medium,
            "Buy WETH cheap (0.05%), sell expensive (0.30%)",
        ),
    );
    b.add_route(
        Chain::Base,
        route(
            Chain::Base,
            "USDC-WETH-USDC 3000/500",
            BASE_USDC,
            BASE_WETH,
            BASE_USDC,
            Medium,
            Low,
            "Buy WETH (0.30%), sell cheap (0.05%)",
        ),
    );
    b.add_route(
        Chain::Base,
        route(
            Chain::Base,
            "USDC-WETH-USDbC 500/500",
            BASE_USDC,
            BASE_WETH,
            BASE_USDBC,
            Low,
            Low,
            "Native USDC to bridged USDbC via WETH",
        ),
    );
    b.add_route(
        Chain::Base,
        route(
            Chain::Base,
            "USDC-DAI-USDC 100/100",
            BASE_USDC,
            BASE_DAI,
            BASE_USDC,
            Lowest,
            Lowest,
            "Stable swap USDC/DAI",
        ),
    );
    b.add_route(
        Chain::Base,
        route(
            Chain::Base,
            "USDC-cbETH-USDC 500/500",
            BASE_USDC,
            BASE_CBETH,
            BASE_USDC,
            Low,
            Low,
            "USDC round trip through cbETH",
        ),
    );

    // Arbitrum
    b.add_route(
        Chain::Arbitrum,
        route(
            Chain::Arbitrum,
            "USDC-WETH-USDC 500/3000",
            ARBITRUM_USDC,
            ARBITRUM_WETH,
            ARBITRUM_USDC,
            Low,
            Medium,
            "Fee tier arb USDC/WETH",
        ),
    );
    b.add_route(
        Chain::Arbitrum,
        route(
            Chain::Arbitrum,
            "USDC-WETH-USDC 3000/500",
            ARBITRUM_USDC,
            ARBITRUM_WETH,
            ARBITRUM_USDC,
            Medium,
            Low,
            "Reverse fee tier arb",
        ),
    );
    b.add_route(
        Chain::Arbitrum,
        route(
            Chain::Arbitrum,
            "USDC-WETH-USDCe 500/500",
            ARBITRUM_USDC,
            ARBITRUM_WETH,
            ARBITRUM_USDCE,
            Low,
            Low,
            "Native USDC to bridged USDC.e via WETH",
        ),
    );
    b.add_route(
        Chain::Arbitrum,
        route(
            Chain::Arbitrum,
            "USDC-USDT-USDC 100/100",
            ARBITRUM_USDC,
            ARBITRUM_USDT,
            ARBITRUM_USDC,
            Lowest,
            Lowest,
            "Stable swap USDC/USDT",
        ),
    );
    b.add_route(
        Chain::Arbitrum,
        route(
            Chain::Arbitrum,
            "USDC-ARB-USDC 3000/3000",
            ARBITRUM_USDC,
            ARBITRUM_ARB,
            ARBITRUM_USDC,
            Medium,
            Medium,
            "ARB token arbitrage",
        ),
    );
    b.add_route(
        Chain::Arbitrum,
        route(
            Chain::Arbitrum,
            "USDC-GMX-USDC 10000/10000",
            ARBITRUM_USDC,
            ARBITRUM_GMX,
            ARBITRUM_USDC,
            High,
            High,
            "GMX exotic pair arbitrage",
        ),
    );

    // Optimism
    b.add_route(
        Chain::Optimism,
        route(
            Chain::Optimism,
            "USDC-WETH-USDC 500/3000",
            OPTIMISM_USDC,
            OPTIMISM_WETH,
            OPTIMISM_USDC,
            Low,
            Medium,
            "Fee tier arb USDC/WETH",
        ),
    );
    b.add_route(
        Chain::Optimism,
        route(
            Chain::Optimism,
            "USDC-WETH-USDC 3000/500",
            OPTIMISM_USDC,
            OPTIMISM_WETH,
            OPTIMISM_USDC,
            Medium,
            Low,
            "Reverse fee tier arb",
        ),
    );
    b.add_route(
        Chain::Optimism,
        route(
            Chain::Optimism,
            "USDC-WETH-USDCe 500/500",
            OPTIMISM_USDC,
            OPTIMISM_WETH,
            OPTIMISM_USDCE,
            Low,
            Low,
            "Native USDC to bridged USDC.e via WETH",
        ),
    );
    b.add_route(
        Chain::Optimism,
        route(
            Chain::Optimism,
            "USDC-OP-USDC 3000/3000",
            OPTIMISM_USDC,
            OPTIMISM_OP,
            OPTIMISM_USDC,
            Medium,
            Medium,
            "OP token arbitrage",
        ),
    );
    b.add_route(
        Chain::Optimism,
        route(
            Chain::Optimism,
            "USDC-wstETH-USDC 500/500",
            OPTIMISM_USDC,
            OPTIMISM_WSTETH,
            OPTIMISM_USDC,
            Low,
            Low,
            "Lido wstETH arbitrage",
        ),
    );

    // Polygon
    b.add_route(
        Chain::Polygon,
        route(
            Chain::Polygon,
            "USDC-WETH-USDC 500/3000",
            POLYGON_USDC,
            POLYGON_WETH,
            POLYGON_USDC,
            Low,
            Medium,
            "Fee tier arb USDC/WETH",
        ),
    );
    b.add_route(
        Chain::Polygon,
        route(
            Chain::Polygon,
            "USDC-WMATIC-USDC 500/3000",
            POLYGON_USDC,
            POLYGON_WMATIC,
            POLYGON_USDC,
            Low,
            Medium,
            "MATIC fee tier arb",
        ),
    );
    b.add_route(
        Chain::Polygon,
        route(
            Chain::Polygon,
            "USDC-WMATIC-USDCe 500/500",
            POLYGON_USDC,
            POLYGON_WMATIC,
            POLYGON_USDCE,
            Low,
            Low,
            "Native USDC to bridged USDC.e",
        ),
    );
    b.add_route(
        Chain::Polygon,
        route(
            Chain::Polygon,
            "USDC-USDT-USDC 100/100",
            POLYGON_USDC,
            POLYGON_USDT,
            POLYGON_USDC,
            Lowest,
            Lowest,
            "Stable swap USDC/USDT",
        ),
    );
    b.add_route(
        Chain::Polygon,
        route(
            Chain::Polygon,
            "USDC-WBTC-USDC 3000/3000",
            POLYGON_USDC,
            POLYGON_WBTC,
            POLYGON_USDC,
            Medium,
            Medium,
            "WBTC arbitrage",
        ),
    );

    b.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_builds() {
        let catalog = default_catalog().expect("builtin tables must validate");
        assert_eq!(catalog.total_route_count(), 21);
    }

    #[test]
    fn test_default_catalog_per_chain_counts() {
        let catalog = default_catalog().unwrap();
        assert_eq!(catalog.routes_for_chain(Chain::Base).len(), 5);
        assert_eq!(catalog.routes_for_chain(Chain::Arbitrum).len(), 6);
        assert_eq!(catalog.routes_for_chain(Chain::Optimism).len(), 5);
        assert_eq!(catalog.routes_for_chain(Chain::Polygon).len(), 5);
    }

    #[test]
    fn test_default_routes_use_chain_local_contracts() {
        let catalog = default_catalog().unwrap();
        for route in catalog.routes_for_chain(Chain::Base) {
            assert_eq!(route.quoter, BASE_QUOTER_V2);
            assert_eq!(route.router, BASE_SWAP_ROUTER);
        }
        for chain in [Chain::Arbitrum, Chain::Optimism, Chain::Polygon] {
            for route in catalog.routes_for_chain(chain) {
                assert_eq!(route.quoter, CANONICAL_QUOTER_V2);
                assert_eq!(route.router, CANONICAL_SWAP_ROUTER);
            }
        }
    }

    #[test]
    fn test_default_usdc_weth_routes_exist_everywhere() {
        let catalog = default_catalog().unwrap();
        for chain in Chain::ALL {
            assert!(
                catalog.route_by_name(chain, "USDC-WETH-USDC 500/3000").is_some(),
                "missing USDC/WETH fee tier arb on {chain}"
            );
        }
    }
}
