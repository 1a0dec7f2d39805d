//! Deployment record types and CAIP-2 keyed TOML (de)serialisation.

use std::collections::HashSet;
use std::ops::Deref;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ChainId;

/// Deployment record holding an address that can never be a real contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidDeployment {
    /// `router` is the zero address.
    #[error("router must not be the zero address")]
    ZeroRouter,
    /// `weth` is present but set to the zero address.
    #[error("weth must not be the zero address, omit the field when the chain has no WETH")]
    ZeroWeth,
}

/// Universal Router deployment on a single chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Deployment {
    /// Router contract address.
    pub router: Address,
    /// Wrapped native token. `None` when the chain has no such token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weth: Option<Address>,
    /// Block at which the router was deployed; historical log scans start here.
    pub creation_block: u64,
}

impl Deployment {
    /// Deployment with a wrapped native token.
    #[must_use]
    pub const fn new(router: Address, weth: Address, creation_block: u64) -> Self {
        Self {
            router,
            weth: Some(weth),
            creation_block,
        }
    }

    /// Deployment on a chain without a wrapped native token.
    #[must_use]
    pub const fn without_weth(router: Address, creation_block: u64) -> Self {
        Self {
            router,
            weth: None,
            creation_block,
        }
    }

    /// Checks the record for addresses that can never be a real contract.
    ///
    /// # Errors
    ///
    /// Returns the first offending field.
    pub fn validate(&self) -> Result<(), InvalidDeployment> {
        if self.router.is_zero() {
            return Err(InvalidDeployment::ZeroRouter);
        }
        if self.weth.is_some_and(|weth| weth.is_zero()) {
            return Err(InvalidDeployment::ZeroWeth);
        }
        Ok(())
    }
}

/// Collection of `(chain, deployment)` entries, one per chain.
///
/// Entry order follows the deserialiser and carries no meaning; look entries
/// up by [`ChainId`]. Serialised as a TOML map keyed by CAIP-2 chain identifiers:
///
/// ```toml
/// [chains."eip155:7777"]
/// router = "0x3fC91A3afd70395Cd496C647d5a6CC9D4B2b7FAD"
/// weth = "0x4200000000000000000000000000000000000006"
/// creation_block = 0
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainsConfig(pub Vec<(ChainId, Deployment)>);

impl Deref for ChainsConfig {
    type Target = Vec<(ChainId, Deployment)>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Serialize for ChainsConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (chain_id, deployment) in &self.0 {
            map.serialize_entry(chain_id, deployment)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ChainsConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use std::fmt;

        use serde::de::{MapAccess, Visitor};

        struct ChainsVisitor;

        impl<'de> Visitor<'de> for ChainsVisitor {
            type Value = ChainsConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a map of chain identifiers to router deployments")
            }

            fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut chains = Vec::with_capacity(access.size_hint().unwrap_or(0));
                let mut seen = HashSet::new();

                while let Some(chain_id) = access.next_key::<ChainId>()? {
                    if !seen.insert(chain_id) {
                        return Err(serde::de::Error::custom(format!(
                            "duplicate entry for chain {}",
                            chain_id.caip2()
                        )));
                    }
                    let deployment: Deployment = access.next_value()?;
                    deployment.validate().map_err(|e| {
                        serde::de::Error::custom(format!("chain {}: {e}", chain_id.caip2()))
                    })?;
                    chains.push((chain_id, deployment));
                }

                Ok(ChainsConfig(chains))
            }
        }

        deserializer.deserialize_map(ChainsVisitor)
    }
}
