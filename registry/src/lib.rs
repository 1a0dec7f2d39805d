//! Universal Router deployment registry.
//!
//! Answers three questions for an EVM chain: where the Universal Router is
//! deployed, which contract is the wrapped native token, and at which block
//! the router was created. Unknown chains and chains without a wrapped
//! native token fail with a [`LookupError`] carrying the chain id.
//!
//! ```
//! use router_registry::{ChainId, ChainRegistry, LookupError};
//!
//! let registry = ChainRegistry::builtin();
//! assert_eq!(registry.creation_block(ChainId::MAINNET), Ok(17_143_817));
//! assert_eq!(
//!     registry.weth_address(ChainId::CELO),
//!     Err(LookupError::WethNotSupported { chain_id: ChainId::CELO })
//! );
//! ```
//!
//! - [`chain`]: chain identifiers, the built-in table, and the registry.
//! - [`constants`]: chain-independent addresses and numeric sentinels.
//! - [`config`]: TOML overlay for adding or replacing deployments.
//! - [`cmd`]: the `router-registry` command line.

pub mod chain;
pub mod cmd;
pub mod config;
pub mod constants;
pub mod error;
#[cfg(feature = "telemetry")]
pub mod telemetry;

pub use chain::{ChainId, ChainRegistry, ChainsConfig, Deployment};
pub use error::{Error, LookupError};
