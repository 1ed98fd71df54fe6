//! Collaborator seams for live quoting and execution.
//!
//! The catalog itself performs no I/O. Components that do — asking a
//! QuoterV2 for expected output, or submitting a swap to the router — plug in
//! behind these traits. Implementations own all RPC concerns: transport,
//! retries, timeouts, and (for executors) credentials. Nothing in this crate
//! reads or stores signing keys.

use alloy::primitives::U256;
use alloy::sol;
use async_trait::async_trait;

use crate::types::Route;

/// Expected outcome of quoting both hops of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteQuote {
    /// Input amount the quote was computed for (token_in units).
    pub amount_in: U256,
    /// Output of hop 1, fed into hop 2 (token_mid units).
    pub amount_mid: U256,
    /// Final expected output (token_out units).
    pub amount_out: U256,
}

impl RouteQuote {
    /// Positive gross spread of a round-trip quote, if any.
    pub fn gross_profit(&self) -> Option<U256> {
        self.amount_out.checked_sub(self.amount_in).filter(|p| !p.is_zero())
    }
}

/// Asks a route's `quoter` contract for the expected output of both hops,
/// without executing anything.
#[async_trait]
pub trait Quoter: Send + Sync {
    /// Quoting failure: revert, transport error, timeout.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Quote `amount_in` through both hops of `route`.
    async fn quote(&self, route: &Route, amount_in: U256) -> Result<RouteQuote, Self::Error>;
}

/// Submits a swap for a route to its `router` contract and tracks
/// confirmation.
#[async_trait]
pub trait Executor: Send + Sync {
    /// Execution failure: rejection, revert, confirmation timeout.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Transaction identifier returned on confirmed execution.
    type Receipt: Send;

    /// Execute `amount_in` through `route`, requiring at least `min_out`.
    async fn execute(
        &self,
        route: &Route,
        amount_in: U256,
        min_out: U256,
    ) -> Result<Self::Receipt, Self::Error>;
}

// Uniswap V3 Quoter V2 interface — the ABI behind Route::quoter.
sol! {
    #[sol(rpc)]
    interface IQuoterV2 {
        struct QuoteExactInputSingleParams {
            address tokenIn;
            address tokenOut;
            uint256 amountIn;
            uint24 fee;
            uint160 sqrtPriceLimitX96;
        }

        function quoteExactInputSingle(QuoteExactInputSingleParams memory params)
            external
            returns (
                uint256 amountOut,
                uint160 sqrtPriceX96After,
                uint32 initializedTicksCrossed,
                uint256 gasEstimate
            );
    }
}

// Uniswap V3 SwapRouter interface — the ABI behind Route::router.
sol! {
    #[sol(rpc)]
    interface ISwapRouter {
        struct ExactInputSingleParams {
            address tokenIn;
            address tokenOut;
            uint24 fee;
            address recipient;
            uint256 deadline;
            uint256 amountIn;
            uint256 amountOutMinimum;
            uint160 sqrtPriceLimitX96;
        }

        struct ExactInputParams {
            bytes path;
            address recipient;
            uint256 deadline;
            uint256 amountIn;
            uint256 amountOutMinimum;
        }

        function exactInputSingle(ExactInputSingleParams calldata params) external payable returns (uint256 amountOut);
        function exactInput(ExactInputParams calldata params) external payable returns (uint256 amountOut);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;
    use crate::types::Chain;

    /// Deterministic quoter that pays a fixed spread, for wiring tests.
    struct FixedSpreadQuoter {
        spread_bps: u64,
    }

    #[async_trait]
    impl Quoter for FixedSpreadQuoter {
        type Error = std::convert::Infallible;

        async fn quote(
            &self,
            _route: &Route,
            amount_in: U256,
        ) -> Result<RouteQuote, Self::Error> {
            let amount_out =
                amount_in + amount_in * U256::from(self.spread_bps) / U256::from(10_000u64);
            Ok(RouteQuote { amount_in, amount_mid: amount_in, amount_out })
        }
    }

    #[tokio::test]
    async fn test_quoter_seam_with_catalog_route() {
        let catalog = default_catalog().unwrap();
        let route = catalog.route_by_name(Chain::Base, "USDC-WETH-USDC 500/3000").unwrap();

        let quoter = FixedSpreadQuoter { spread_bps: 30 };
        let quote = quoter.quote(route, U256::from(1_000_000u64)).await.unwrap();

        assert_eq!(quote.amount_out, U256::from(1_003_000u64));
        assert_eq!(quote.gross_profit(), Some(U256::from(3_000u64)));
    }

    #[tokio::test]
    async fn test_gross_profit_none_when_underwater() {
        let quote = RouteQuote {
            amount_in: U256::from(100u64),
            amount_mid: U256::from(50u64),
            amount_out: U256::from(99u64),
        };
        assert_eq!(quote.gross_profit(), None);
    }
}
