//! Immutable chain → deployment registry.

use std::collections::HashMap;

use alloy_primitives::Address;

use super::{BUILTIN, ChainId, ChainsConfig, Deployment};
use crate::error::LookupError;

/// Read-only map from [`ChainId`] to [`Deployment`].
///
/// Built once, then only queried. There are no mutating methods, so a
/// registry can be shared across threads by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainRegistry {
    deployments: HashMap<ChainId, Deployment>,
}

impl ChainRegistry {
    /// Registry over the built-in deployment table.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_deployments(BUILTIN.iter().copied())
    }

    /// Registry over the built-in table with `chains` layered on top.
    ///
    /// Entries for chains already in the table replace the built-in record.
    #[must_use]
    pub fn from_config(chains: &ChainsConfig) -> Self {
        let mut deployments: HashMap<_, _> = BUILTIN.iter().copied().collect();
        for (chain_id, deployment) in chains.iter() {
            if deployments.insert(*chain_id, *deployment).is_some() {
                tracing::info!(chain = %chain_id, "configured deployment replaces built-in entry");
            } else {
                tracing::debug!(chain = %chain_id, "configured deployment added");
            }
        }
        tracing::debug!(chains = deployments.len(), "chain registry built");
        Self { deployments }
    }

    /// Registry over exactly the given entries. Later duplicates win.
    #[must_use]
    pub fn from_deployments(entries: impl IntoIterator<Item = (ChainId, Deployment)>) -> Self {
        let deployments: HashMap<_, _> = entries.into_iter().collect();
        tracing::debug!(chains = deployments.len(), "chain registry built");
        Self { deployments }
    }

    /// Full deployment record for `chain_id`.
    ///
    /// # Errors
    ///
    /// [`LookupError::UnsupportedChain`] if the chain is not registered.
    pub fn deployment(&self, chain_id: ChainId) -> Result<&Deployment, LookupError> {
        self.deployments.get(&chain_id).ok_or_else(|| {
            tracing::debug!(chain = %chain_id, "lookup for unsupported chain");
            LookupError::UnsupportedChain { chain_id }
        })
    }

    /// Universal Router address on `chain_id`.
    ///
    /// # Errors
    ///
    /// [`LookupError::UnsupportedChain`] if the chain is not registered.
    pub fn router_address(&self, chain_id: ChainId) -> Result<Address, LookupError> {
        self.deployment(chain_id).map(|d| d.router)
    }

    /// Block the router was deployed at on `chain_id`.
    ///
    /// # Errors
    ///
    /// [`LookupError::UnsupportedChain`] if the chain is not registered.
    pub fn creation_block(&self, chain_id: ChainId) -> Result<u64, LookupError> {
        self.deployment(chain_id).map(|d| d.creation_block)
    }

    /// Wrapped native token address on `chain_id`.
    ///
    /// # Errors
    ///
    /// [`LookupError::UnsupportedChain`] if the chain is not registered,
    /// [`LookupError::WethNotSupported`] if it has no wrapped native token.
    pub fn weth_address(&self, chain_id: ChainId) -> Result<Address, LookupError> {
        self.deployment(chain_id)?.weth.ok_or_else(|| {
            tracing::debug!(chain = %chain_id, "lookup for WETH on chain without it");
            LookupError::WethNotSupported { chain_id }
        })
    }

    /// Whether a deployment is registered for `chain_id`.
    #[must_use]
    pub fn contains(&self, chain_id: ChainId) -> bool {
        self.deployments.contains_key(&chain_id)
    }

    /// Number of registered chains.
    #[must_use]
    pub fn len(&self) -> usize {
        self.deployments.len()
    }

    /// Whether no chain is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deployments.is_empty()
    }

    /// Registered chains in ascending id order.
    #[must_use]
    pub fn chain_ids(&self) -> Vec<ChainId> {
        let mut ids: Vec<_> = self.deployments.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// All entries in ascending chain id order.
    #[must_use]
    pub fn entries(&self) -> Vec<(ChainId, &Deployment)> {
        let mut entries: Vec<_> = self.deployments.iter().map(|(id, d)| (*id, d)).collect();
        entries.sort_unstable_by_key(|(id, _)| *id);
        entries
    }
}

impl Default for ChainRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::address;

    use super::*;

    fn unknown_chains() -> [ChainId; 4] {
        [
            ChainId::new(0),
            ChainId::new(2),
            ChainId::new(31337),
            ChainId::new(u64::MAX),
        ]
    }

    #[test]
    fn every_builtin_chain_has_a_router() {
        let registry = ChainRegistry::builtin();
        for (id, _) in BUILTIN {
            let router = registry.router_address(*id).expect("builtin chain");
            assert!(!router.is_zero());
            assert!(registry.creation_block(*id).is_ok());
        }
        assert_eq!(registry.len(), BUILTIN.len());
    }

    #[test]
    fn unknown_chain_fails_every_accessor() {
        let registry = ChainRegistry::builtin();
        for chain_id in unknown_chains() {
            let expected = LookupError::UnsupportedChain { chain_id };
            assert_eq!(registry.router_address(chain_id), Err(expected));
            assert_eq!(registry.creation_block(chain_id), Err(expected));
            assert_eq!(registry.weth_address(chain_id), Err(expected));
            assert!(!registry.contains(chain_id));
        }
    }

    #[test]
    fn celo_has_router_but_no_weth() {
        let registry = ChainRegistry::builtin();
        assert_eq!(
            registry.weth_address(ChainId::CELO),
            Err(LookupError::WethNotSupported {
                chain_id: ChainId::CELO
            })
        );
        assert_eq!(
            registry.router_address(ChainId::CELO),
            Ok(address!("0x88a3ED7F21A3fCF6adb86b6F878C5B7a02D20e9b"))
        );
        assert_eq!(registry.creation_block(ChainId::CELO), Ok(21_116_361));
    }

    #[test]
    fn mainnet_weth_is_the_literal_address() {
        let weth = ChainRegistry::builtin()
            .weth_address(ChainId::MAINNET)
            .expect("mainnet weth");
        assert_eq!(weth, address!("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"));
        assert_eq!(
            weth.to_checksum(None),
            "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"
        );
    }

    #[test]
    fn creation_blocks_are_pinned() {
        let registry = ChainRegistry::builtin();
        assert_eq!(registry.creation_block(ChainId::MAINNET), Ok(17_143_817));
        assert_eq!(registry.creation_block(ChainId::POLYGON), Ok(46_866_777));
    }

    #[test]
    fn lookups_are_repeatable() {
        let registry = ChainRegistry::builtin();
        let first = registry.deployment(ChainId::BASE).copied();
        for _ in 0..3 {
            assert_eq!(registry.deployment(ChainId::BASE).copied(), first);
        }
        assert_eq!(ChainRegistry::builtin(), registry);
    }

    #[test]
    fn overlay_adds_and_replaces() {
        let devnet = Deployment::new(
            address!("0x1111111111111111111111111111111111111111"),
            address!("0x2222222222222222222222222222222222222222"),
            7,
        );
        let replaced = Deployment::without_weth(
            address!("0x3333333333333333333333333333333333333333"),
            1,
        );
        let registry = ChainRegistry::from_config(&ChainsConfig(vec![
            (ChainId::new(31337), devnet),
            (ChainId::MAINNET, replaced),
        ]));

        assert_eq!(registry.len(), BUILTIN.len() + 1);
        assert_eq!(registry.deployment(ChainId::new(31337)), Ok(&devnet));
        assert_eq!(registry.creation_block(ChainId::MAINNET), Ok(1));
        assert_eq!(
            registry.weth_address(ChainId::MAINNET),
            Err(LookupError::WethNotSupported {
                chain_id: ChainId::MAINNET
            })
        );
        assert_eq!(
            registry.router_address(ChainId::POLYGON),
            Ok(address!("0x643770E279d5D0733F21d6DC03A8efbABf3255B4"))
        );
    }

    #[test]
    fn listing_is_sorted() {
        let registry = ChainRegistry::builtin();
        let ids = registry.chain_ids();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(ids.first(), Some(&ChainId::MAINNET));
        assert_eq!(ids.last(), Some(&ChainId::SEPOLIA));
        let iter_ids: Vec<_> = registry.entries().into_iter().map(|(id, _)| id).collect();
        assert_eq!(iter_ids, ids);
    }

    #[test]
    fn empty_registry_rejects_everything() {
        let registry = ChainRegistry::from_deployments(Vec::new());
        assert!(registry.is_empty());
        assert!(registry.router_address(ChainId::MAINNET).is_err());
    }

    #[test]
    fn registry_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ChainRegistry>();

        let registry = ChainRegistry::builtin();
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    assert_eq!(registry.creation_block(ChainId::MAINNET), Ok(17_143_817));
                });
            }
        });
    }
}
