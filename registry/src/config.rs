//! Configuration loading and default template generation.
//!
//! This module provides:
//!
//! - [`Config`]: optional log level plus a [`ChainsConfig`] overlay on top of
//!   the built-in deployment table.
//! - [`load_config`]: Reads and parses a TOML configuration file.
//! - [`generate_default_config`]: Produces a commented TOML template.
//!
//! # Configuration File Format
//!
//! ```toml
//! log_level = "info"
//!
//! [chains."eip155:31337"]
//! router = "0x3fC91A3afd70395Cd496C647d5a6CC9D4B2b7FAD"
//! weth = "0x4200000000000000000000000000000000000006"
//! creation_block = 0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chain::{ChainRegistry, ChainsConfig};
use crate::error::Error;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV: &str = "ROUTER_REGISTRY_CONFIG";

/// Registry configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Log filter used when `RUST_LOG` is unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    log_level: Option<String>,
    /// Deployments added to, or replacing, the built-in table.
    #[serde(default)]
    chains: ChainsConfig,
}

impl Config {
    /// Log filter directive, if configured.
    #[must_use]
    pub fn log_level(&self) -> Option<&str> {
        self.log_level.as_deref()
    }

    /// Configured deployment overlay.
    #[must_use]
    pub const fn chains(&self) -> &ChainsConfig {
        &self.chains
    }

    /// Builds the registry: built-in table plus this overlay.
    #[must_use]
    pub fn registry(&self) -> ChainRegistry {
        ChainRegistry::from_config(&self.chains)
    }
}

/// Load configuration from a TOML file at the given path.
///
/// # Errors
///
/// Returns [`Error::Config`] if the file cannot be resolved, read, or parsed.
pub fn load_config(path: &Path) -> Result<Config, Error> {
    let config_path = path.canonicalize().map_err(|e| {
        Error::config_with(
            format!("failed to resolve config path '{}'", path.display()),
            e,
        )
    })?;
    let content = std::fs::read_to_string(&config_path).map_err(|e| {
        Error::config_with(
            format!("failed to read config file '{}'", config_path.display()),
            e,
        )
    })?;
    let config: Config = toml::from_str(&content).map_err(|e| {
        Error::config_with(
            format!("failed to parse TOML config '{}': {e}", config_path.display()),
            e,
        )
    })?;
    tracing::debug!(
        path = %config_path.display(),
        chains = config.chains.len(),
        "configuration loaded"
    );
    Ok(config)
}

/// Generate a default TOML configuration template.
///
/// Every setting is commented out, so the template parses to
/// [`Config::default`] and leaves the built-in table untouched.
#[must_use]
pub fn generate_default_config() -> String {
    String::from(
        r#"# Universal Router registry configuration
#
# Without a [chains] section the built-in deployment table is used as-is.

# Log filter used when RUST_LOG is not set.
# log_level = "info"

# ── Additional or replacement deployments ───────────────────────────
# Key format: "eip155:<chain_id>" (a bare "<chain_id>" is accepted too).
# An entry for a built-in chain replaces the built-in record.
# Omit `weth` on chains without a wrapped native token.

# [chains."eip155:31337"]
# router = "0x3fC91A3afd70395Cd496C647d5a6CC9D4B2b7FAD"
# weth = "0x4200000000000000000000000000000000000006"
# creation_block = 0
"#,
    )
}
