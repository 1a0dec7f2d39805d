//! EIP-155 chain identifiers and the catalog of named chains.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// CAIP-2 namespace for EVM chains.
pub const EIP155_NAMESPACE: &str = "eip155";

/// Numeric EIP-155 chain identifier.
///
/// Every chain is keyed by its integer id, whether or not it has a name in
/// the catalog below. Serialised as a CAIP-2 string (`"eip155:1"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChainId(u64);

macro_rules! named_chains {
    ($($(#[$meta:meta])* $ident:ident = $id:literal => $name:literal,)+) => {
        impl ChainId {
            $(
                $(#[$meta])*
                pub const $ident: Self = Self($id);
            )+

            /// All chains with a catalog name, in ascending id order.
            pub const NAMED: &'static [Self] = &[$(Self::$ident),+];

            /// Short kebab-case name of a catalogued chain.
            #[must_use]
            pub const fn name(self) -> Option<&'static str> {
                match self.0 {
                    $($id => Some($name),)+
                    _ => None,
                }
            }

            /// Looks up a catalogued chain by its short name (case-insensitive).
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                let name = name.trim().to_ascii_lowercase();
                match name.as_str() {
                    $($name => Some(Self::$ident),)+
                    _ => None,
                }
            }
        }
    };
}

named_chains! {
    /// Ethereum mainnet.
    MAINNET = 1 => "mainnet",
    /// Ethereum Goerli testnet.
    GOERLI = 5 => "goerli",
    /// OP mainnet.
    OPTIMISM = 10 => "optimism",
    /// BNB Smart Chain.
    BNB = 56 => "bnb",
    /// Polygon PoS.
    POLYGON = 137 => "polygon",
    /// BitTorrent Chain mainnet.
    BIT_TORRENT_MAINNET = 199 => "bittorrent",
    /// Fantom Opera.
    FANTOM = 250 => "fantom",
    /// OP Goerli testnet.
    OPTIMISM_GOERLI = 420 => "optimism-goerli",
    /// Horizen EON.
    EON = 7332 => "eon",
    /// Base mainnet.
    BASE = 8453 => "base",
    /// Arbitrum One.
    ARBITRUM_ONE = 42161 => "arbitrum",
    /// Celo mainnet.
    CELO = 42220 => "celo",
    /// Avalanche C-Chain.
    AVALANCHE = 43114 => "avalanche",
    /// Celo Alfajores testnet.
    CELO_ALFAJORES = 44787 => "celo-alfajores",
    /// Polygon Mumbai testnet.
    POLYGON_MUMBAI = 80001 => "polygon-mumbai",
    /// Base Goerli testnet.
    BASE_GOERLI = 84531 => "base-goerli",
    /// Arbitrum Goerli testnet.
    ARBITRUM_GOERLI = 421_613 => "arbitrum-goerli",
    /// Ethereum Sepolia testnet.
    SEPOLIA = 11_155_111 => "sepolia",
}

impl ChainId {
    /// Wraps a raw EIP-155 chain id.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw EIP-155 chain id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Returns the CAIP-2 form, e.g. `eip155:8453`.
    #[must_use]
    pub fn caip2(self) -> String {
        format!("{EIP155_NAMESPACE}:{}", self.0)
    }
}

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<ChainId> for u64 {
    fn from(id: ChainId) -> Self {
        id.0
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Failure to parse a [`ChainId`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseChainIdError {
    /// CAIP-2 namespace other than `eip155`.
    #[error("unsupported chain namespace '{0}', expected '{EIP155_NAMESPACE}'")]
    Namespace(String),
    /// Neither a number nor a known chain name.
    #[error("invalid chain identifier '{0}'")]
    Invalid(String),
    /// Chain id 0, which EIP-155 does not assign.
    #[error("chain 0 is not a valid EIP-155 id")]
    Zero,
}

/// Parses a plain run of ASCII digits. Signs are not accepted.
fn parse_reference(reference: &str) -> Option<u64> {
    if reference.is_empty() || !reference.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    reference.parse().ok()
}

impl FromStr for ChainId {
    type Err = ParseChainIdError;

    /// Accepts a decimal id (`137`), a CAIP-2 id (`eip155:137`) or a
    /// catalogued name (`polygon`). Namespace and name matching ignore case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let id = if let Some((namespace, reference)) = s.split_once(':') {
            if !namespace.eq_ignore_ascii_case(EIP155_NAMESPACE) {
                return Err(ParseChainIdError::Namespace(namespace.to_owned()));
            }
            parse_reference(reference).ok_or_else(|| ParseChainIdError::Invalid(s.to_owned()))?
        } else if let Some(id) = parse_reference(s) {
            id
        } else {
            return Self::from_name(s).ok_or_else(|| ParseChainIdError::Invalid(s.to_owned()));
        };
        if id == 0 {
            return Err(ParseChainIdError::Zero);
        }
        Ok(Self(id))
    }
}

impl Serialize for ChainId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.caip2())
    }
}

impl<'de> Deserialize<'de> for ChainId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_caip2_and_names() {
        assert_eq!("137".parse::<ChainId>(), Ok(ChainId::POLYGON));
        assert_eq!("eip155:137".parse::<ChainId>(), Ok(ChainId::POLYGON));
        assert_eq!("Polygon".parse::<ChainId>(), Ok(ChainId::POLYGON));
        assert_eq!(" 999 ".parse::<ChainId>(), Ok(ChainId::new(999)));
    }

    #[test]
    fn rejects_foreign_namespace_and_garbage() {
        assert_eq!(
            "solana:EtWTRABZaYq6iMfeYKouRu166VU2xqa1".parse::<ChainId>(),
            Err(ParseChainIdError::Namespace("solana".to_owned()))
        );
        assert!(matches!(
            "eip155:abc".parse::<ChainId>(),
            Err(ParseChainIdError::Invalid(_))
        ));
        assert!(matches!(
            "not-a-chain".parse::<ChainId>(),
            Err(ParseChainIdError::Invalid(_))
        ));
        assert!("-1".parse::<ChainId>().is_err());
    }

    #[test]
    fn rejects_signed_references() {
        for input in ["+1", "eip155:+1", "eip155:-1", "eip155:", "eip155: 1"] {
            assert!(
                matches!(input.parse::<ChainId>(), Err(ParseChainIdError::Invalid(_))),
                "{input} should not parse"
            );
        }
    }

    #[test]
    fn namespace_is_case_insensitive() {
        assert_eq!("EIP155:1".parse::<ChainId>(), Ok(ChainId::MAINNET));
        assert_eq!("Eip155:8453".parse::<ChainId>(), Ok(ChainId::BASE));
    }

    #[test]
    fn rejects_chain_zero() {
        assert_eq!("0".parse::<ChainId>(), Err(ParseChainIdError::Zero));
        assert_eq!("eip155:0".parse::<ChainId>(), Err(ParseChainIdError::Zero));
        assert_eq!("eip155:000".parse::<ChainId>(), Err(ParseChainIdError::Zero));
        assert_eq!(
            ParseChainIdError::Zero.to_string(),
            "chain 0 is not a valid EIP-155 id"
        );
    }

    #[test]
    fn names_round_trip_through_catalog() {
        for id in ChainId::NAMED {
            let name = id.name().expect("catalogued chain has a name");
            assert_eq!(ChainId::from_name(name), Some(*id));
        }
        assert_eq!(ChainId::new(31337).name(), None);
    }

    #[test]
    fn catalog_is_sorted_and_unique() {
        assert!(ChainId::NAMED.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn externally_sourced_ids_are_plain_integers() {
        assert_eq!(ChainId::BIT_TORRENT_MAINNET.get(), 199);
        assert_eq!(ChainId::FANTOM.get(), 250);
        assert_eq!(ChainId::EON.get(), 7332);
    }

    #[test]
    fn display_and_caip2() {
        assert_eq!(ChainId::BASE.to_string(), "8453");
        assert_eq!(ChainId::BASE.caip2(), "eip155:8453");
        assert_eq!(serde_json::to_string(&ChainId::BASE).expect("serialize"), "\"eip155:8453\"");
        let parsed: ChainId = serde_json::from_str("\"eip155:10\"").expect("deserialize");
        assert_eq!(parsed, ChainId::OPTIMISM);
    }
}
