//! Supported chain identifiers.

use serde::{Deserialize, Serialize};

/// A blockchain network the catalog holds routes for.
///
/// The set is closed: routes can only be declared for these networks, so an
/// unsupported chain is a compile-time error rather than a runtime lookup miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    /// Base mainnet.
    Base,
    /// Arbitrum One.
    Arbitrum,
    /// OP Mainnet.
    Optimism,
    /// Polygon PoS.
    Polygon,
}

impl Chain {
    /// All supported chains, in catalog iteration order.
    pub const ALL: [Chain; 4] = [Chain::Base, Chain::Arbitrum, Chain::Optimism, Chain::Polygon];

    /// Number of supported chains.
    pub const COUNT: usize = Self::ALL.len();

    /// EVM chain ID of the network.
    pub const fn chain_id(self) -> u64 {
        match self {
            Chain::Base => 8453,
            Chain::Arbitrum => 42161,
            Chain::Optimism => 10,
            Chain::Polygon => 137,
        }
    }

    /// Lowercase name, as used in configuration files.
    pub const fn as_str(self) -> &'static str {
        match self {
            Chain::Base => "base",
            Chain::Arbitrum => "arbitrum",
            Chain::Optimism => "optimism",
            Chain::Polygon => "polygon",
        }
    }

    /// Dense index into per-chain storage.
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Chain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "base" => Ok(Chain::Base),
            "arbitrum" => Ok(Chain::Arbitrum),
            "optimism" => Ok(Chain::Optimism),
            "polygon" => Ok(Chain::Polygon),
            _ => Err(format!("Unsupported chain: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_from_str() {
        assert_eq!("base".parse::<Chain>().unwrap(), Chain::Base);
        assert_eq!("Arbitrum".parse::<Chain>().unwrap(), Chain::Arbitrum);
        assert_eq!("OPTIMISM".parse::<Chain>().unwrap(), Chain::Optimism);
        assert_eq!("polygon".parse::<Chain>().unwrap(), Chain::Polygon);
    }

    #[test]
    fn test_chain_from_str_invalid() {
        assert!("mainnet".parse::<Chain>().is_err());
        assert!("".parse::<Chain>().is_err());
    }

    #[test]
    fn test_chain_display_roundtrip() {
        for chain in Chain::ALL {
            assert_eq!(chain.to_string().parse::<Chain>().unwrap(), chain);
        }
    }

    #[test]
    fn test_chain_ids() {
        assert_eq!(Chain::Base.chain_id(), 8453);
        assert_eq!(Chain::Arbitrum.chain_id(), 42161);
        assert_eq!(Chain::Optimism.chain_id(), 10);
        assert_eq!(Chain::Polygon.chain_id(), 137);
    }

    #[test]
    fn test_chain_indexes_are_dense() {
        for (i, chain) in Chain::ALL.iter().enumerate() {
            assert_eq!(chain.index(), i);
        }
    }

    #[test]
    fn test_chain_serde() {
        assert_eq!(serde_json::to_string(&Chain::Base).unwrap(), "\"base\"");
        let chain: Chain = serde_json::from_str("\"arbitrum\"").unwrap();
        assert_eq!(chain, Chain::Arbitrum);
    }
}
