//! Unified error types for the registry.

use thiserror::Error;

use crate::chain::ChainId;

/// Failed lookup against a [`ChainRegistry`](crate::chain::ChainRegistry).
///
/// Both variants carry the requested chain so callers can branch on it
/// without parsing the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No router deployment is known for the chain.
    #[error("universal router not deployed on chain {chain_id}")]
    UnsupportedChain {
        /// The requested chain.
        chain_id: ChainId,
    },

    /// The chain is known but has no wrapped native token.
    #[error("chain {chain_id} does not have WETH")]
    WethNotSupported {
        /// The requested chain.
        chain_id: ChainId,
    },
}

impl LookupError {
    /// The chain the failed lookup was made for.
    #[must_use]
    pub const fn chain_id(&self) -> ChainId {
        match self {
            Self::UnsupportedChain { chain_id } | Self::WethNotSupported { chain_id } => *chain_id,
        }
    }
}

/// Top-level error type for configuration loading and the CLI.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file could not be resolved, read, parsed, or written.
    #[error("config: {message}")]
    Config {
        /// What went wrong, including the offending path.
        message: String,
        /// Underlying cause, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Registry lookup failed.
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// Writing command output failed.
    #[error("output: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding of command output failed.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Configuration error without an underlying cause.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Configuration error wrapping an underlying cause.
    pub fn config_with(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
