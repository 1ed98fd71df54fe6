//! Error types and handling module.
//!
//! Defines configuration and catalog-validation error types. A missing route
//! is not an error: lookups return `Option` and callers branch normally.

use thiserror::Error;

use crate::types::Chain;

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors (environment, routes file).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Routes file could not be read.
    #[error("Failed to read routes file: {0}")]
    Io(#[from] std::io::Error),

    /// Routes file could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Two routes on the same chain share a name.
    #[error("Duplicate route name on {chain}: {name}")]
    DuplicateRouteName { chain: Chain, name: String },

    /// The mid token equals an endpoint, so one hop is not a real swap.
    #[error("Degenerate hop on {chain} in route {name}: token_mid equals an endpoint")]
    DegenerateHop { chain: Chain, name: String },

    /// A fee value outside the canonical Uniswap V3 tier set.
    #[error("Unknown fee tier {fee} on {chain} in route {name}")]
    UnknownFeeTier { chain: Chain, name: String, fee: u32 },

    /// An address field that does not parse as a 20-byte hex address.
    #[error("Malformed address on {chain} in route {name}: {field} = {value}")]
    MalformedAddress { chain: Chain, name: String, field: &'static str, value: String },
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(err.to_string())
    }
}

/// Result type alias using AppError.
pub type Result<T> = std::result::Result<T, AppError>;
