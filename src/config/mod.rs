//! Configuration management module.
//!
//! Handles environment configuration and the declarative routes document
//! that a catalog can be built from.

use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::types::{Chain, FeeTier, Route};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Optional path to a JSON routes document; the builtin route tables are
    /// used when unset.
    pub routes_file: Option<PathBuf>,
    /// Chains enabled for this deployment.
    pub chains: Vec<Chain>,
    /// Logging level (default: info).
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ROUTES_FILE`: path to a JSON routes document
    /// - `CHAINS`: comma-separated chain names (default: all supported chains)
    /// - `LOG_LEVEL`: logging level (default: info)
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        let routes_file = env::var("ROUTES_FILE").ok().map(PathBuf::from);

        let chains = match env::var("CHAINS") {
            Ok(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| s.parse::<Chain>().map_err(AppError::Config))
                .collect::<Result<Vec<Chain>>>()?,
            Err(_) => Chain::ALL.to_vec(),
        };

        if chains.is_empty() {
            return Err(AppError::Config("CHAINS must name at least one chain".into()));
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self { routes_file, chains, log_level })
    }
}

/// One route as declared in a routes document: unparsed addresses, raw fees.
///
/// Validation happens when the spec is turned into a [`Route`], so a typo in
/// any field fails catalog construction rather than a later lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteSpec {
    /// Route name, unique within its chain.
    pub name: String,
    /// Input token address (hex).
    pub token_in: String,
    /// Intermediate token address (hex).
    pub token_mid: String,
    /// Output token address (hex).
    pub token_out: String,
    /// Hop 1 fee, in hundredths of a basis point.
    pub fee1: u32,
    /// Hop 2 fee, in hundredths of a basis point.
    pub fee2: u32,
    /// QuoterV2 contract address (hex).
    pub quoter: String,
    /// SwapRouter contract address (hex).
    pub router: String,
    /// Free-text rationale.
    #[serde(default)]
    pub description: String,
}

impl RouteSpec {
    /// Parse into a typed [`Route`], reporting which field is at fault.
    pub fn into_route(self, chain: Chain) -> Result<Route> {
        let RouteSpec {
            name,
            token_in,
            token_mid,
            token_out,
            fee1,
            fee2,
            quoter,
            router,
            description,
        } = self;

        let parse_address = |field: &'static str, value: &str| -> Result<Address> {
            value.parse().map_err(|_| AppError::MalformedAddress {
                chain,
                name: name.clone(),
                field,
                value: value.to_string(),
            })
        };

        let parse_fee = |fee: u32| -> Result<FeeTier> {
            FeeTier::from_raw(fee).ok_or_else(|| AppError::UnknownFeeTier {
                chain,
                name: name.clone(),
                fee,
            })
        };

        Ok(Route {
            token_in: parse_address("token_in", &token_in)?,
            token_mid: parse_address("token_mid", &token_mid)?,
            token_out: parse_address("token_out", &token_out)?,
            fee1: parse_fee(fee1)?,
            fee2: parse_fee(fee2)?,
            quoter: parse_address("quoter", &quoter)?,
            router: parse_address("router", &router)?,
            name,
            description,
        })
    }
}

/// The declarative routes document: route specs grouped by chain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoutesFile {
    /// Routes per chain, in declaration order.
    pub chains: BTreeMap<Chain, Vec<RouteSpec>>,
}

impl RoutesFile {
    /// Load and parse a JSON routes document from disk.
    pub fn load(path: &std::path::Path) -> Result<RoutesFile> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}
