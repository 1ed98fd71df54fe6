//! Multi-Chain Arbitrage Route Catalog
//!
//! A validated, read-only catalog of candidate two-hop Uniswap V3 swap routes
//! (tokenIn → tokenMid → tokenOut) across Base, Arbitrum, Optimism, and
//! Polygon. The catalog is built once, validated atomically, and shared
//! immutably; live quoting and execution plug in behind the [`quoting`]
//! trait seams.
//!
//! # Features
//!
//! - **Builtin route tables**: production fee-tier and stable-pair routes per chain
//! - **Declarative configuration**: build a catalog from a JSON routes document
//! - **Construction-time validation**: duplicate names, degenerate hops,
//!   non-canonical fee tiers, and malformed addresses all fail the build
//!
//! # Example
//!
//! ```rust
//! use arb_routes::catalog::default_catalog;
//! use arb_routes::types::Chain;
//!
//! let catalog = default_catalog().expect("builtin tables are valid");
//! for route in catalog.routes_for_chain(Chain::Base) {
//!     println!("{}: {}", route.name, route.description);
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod quoting;
pub mod types;

pub use catalog::{default_catalog, CatalogBuilder, RouteCatalog};
pub use config::{Config, RouteSpec, RoutesFile};
pub use error::{AppError, Result};
pub use types::{Chain, FeeTier, Route};
