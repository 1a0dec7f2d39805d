//! CLI definitions and command implementations for the registry.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::chain::ChainId;
use crate::config::CONFIG_ENV;

pub mod init;
pub mod query;

/// Universal Router deployment lookups for EVM chains.
#[derive(Debug, Parser)]
#[command(name = "router-registry")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Optional TOML configuration adding or replacing deployments.
    #[arg(short, long, global = true, env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
///
/// `<CHAIN>` accepts a decimal id (`137`), a CAIP-2 id (`eip155:137`), or a
/// chain name (`polygon`).
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a default TOML configuration file.
    Init {
        /// Output path for the configuration file.
        #[arg(short, long, default_value = "config.toml")]
        output: PathBuf,

        /// Overwrite the file if it already exists.
        #[arg(long, default_value_t = false)]
        force: bool,
    },

    /// Print the Universal Router address on a chain.
    Router {
        /// Chain to look up.
        chain: ChainId,
    },

    /// Print the wrapped native token address on a chain.
    Weth {
        /// Chain to look up.
        chain: ChainId,
    },

    /// Print the block the router was deployed at on a chain.
    CreationBlock {
        /// Chain to look up.
        chain: ChainId,
    },

    /// Print the full deployment record for a chain.
    Show {
        /// Chain to look up.
        chain: ChainId,

        /// Emit JSON instead of text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// List every supported chain.
    List {
        /// Emit JSON instead of text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Print the chain-independent protocol constants.
    Constants {
        /// Also print the Permit2 address for this chain.
        #[arg(long)]
        chain: Option<ChainId>,
    },
}
