//! Route and fee-tier types.

use alloy::primitives::Address;
use serde::Serialize;

/// Uniswap V3 pool fee tier, in hundredths of a basis point.
///
/// The protocol deploys pools at exactly these four tiers; any other value in
/// configuration is a typo, not a new tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u32")]
pub enum FeeTier {
    /// 0.01% — ultra stable pairs.
    Lowest,
    /// 0.05% — stable pairs (USDC/USDT, USDC/DAI).
    Low,
    /// 0.30% — most pairs (ETH/USDC).
    Medium,
    /// 1.00% — exotic pairs.
    High,
}

impl FeeTier {
    /// The canonical tiers, ascending.
    pub const ALL: [FeeTier; 4] = [FeeTier::Lowest, FeeTier::Low, FeeTier::Medium, FeeTier::High];

    /// Raw fee value as encoded on-chain (uint24 in pool contracts).
    pub const fn as_u24(self) -> u32 {
        match self {
            FeeTier::Lowest => 100,
            FeeTier::Low => 500,
            FeeTier::Medium => 3000,
            FeeTier::High => 10000,
        }
    }

    /// Parse a raw fee value, rejecting anything outside the canonical set.
    pub const fn from_raw(raw: u32) -> Option<FeeTier> {
        match raw {
            100 => Some(FeeTier::Lowest),
            500 => Some(FeeTier::Low),
            3000 => Some(FeeTier::Medium),
            10000 => Some(FeeTier::High),
            _ => None,
        }
    }
}

impl From<FeeTier> for u32 {
    fn from(tier: FeeTier) -> u32 {
        tier.as_u24()
    }
}

impl std::fmt::Display for FeeTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_u24())
    }
}

/// A candidate two-hop swap path: `token_in` → `token_mid` → `token_out`.
///
/// `token_in` may equal `token_out` (round-trip arbitrage); `token_mid` must
/// differ from both, which [`crate::catalog::CatalogBuilder`] enforces.
/// Routes are immutable once the catalog is built.
#[derive(Debug, Clone, Serialize)]
pub struct Route {
    /// Human-readable identifier, unique within its chain.
    pub name: String,
    /// Input token of hop 1.
    pub token_in: Address,
    /// Intermediate token between the hops.
    pub token_mid: Address,
    /// Output token of hop 2.
    pub token_out: Address,
    /// Pool fee tier for hop 1.
    pub fee1: FeeTier,
    /// Pool fee tier for hop 2.
    pub fee2: FeeTier,
    /// QuoterV2 contract to ask for expected output.
    pub quoter: Address,
    /// SwapRouter contract to execute against.
    pub router: Address,
    /// Free-text rationale for the route.
    pub description: String,
}

impl Route {
    /// Whether the path returns to its starting token.
    pub fn is_round_trip(&self) -> bool {
        self.token_in == self.token_out
    }
}
