//! Universal Router registry CLI
//!
//! Looks up Universal Router deployments on EVM chains.
//!
//! ```sh
//! router-registry router polygon        # Router address on Polygon
//! router-registry weth eip155:42161     # WETH on Arbitrum One
//! router-registry list                  # Every supported chain
//! router-registry init                  # Generate default config.toml
//! ```

use std::io;

use clap::Parser;
use dotenvy::dotenv;
use router_registry::cmd::{self, Cli, Commands};
use router_registry::config::{Config, load_config};
use router_registry::error::Error;
#[cfg(feature = "telemetry")]
use router_registry::telemetry::Telemetry;

#[allow(clippy::print_stderr)]
fn main() {
    // Load .env variables
    dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    // The configured file may not exist yet when generating it.
    if let Commands::Init { output, force } = &cli.command {
        #[cfg(feature = "telemetry")]
        Telemetry::new().with_log_level("info").register();
        return cmd::init::run(output, *force);
    }

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };

    #[cfg(feature = "telemetry")]
    {
        let telemetry = Telemetry::new()
            .with_name(env!("CARGO_PKG_NAME"))
            .with_version(env!("CARGO_PKG_VERSION"));
        match config.log_level() {
            Some(level) => telemetry.with_log_level(level),
            None => telemetry,
        }
        .register();
    }

    let registry = config.registry();
    let mut out = io::stdout().lock();

    match cli.command {
        // Handled before the config is loaded.
        Commands::Init { .. } => Ok(()),
        Commands::Router { chain } => cmd::query::router(&registry, chain, &mut out),
        Commands::Weth { chain } => cmd::query::weth(&registry, chain, &mut out),
        Commands::CreationBlock { chain } => {
            cmd::query::creation_block(&registry, chain, &mut out)
        }
        Commands::Show { chain, json } => cmd::query::show(&registry, chain, json, &mut out),
        Commands::List { json } => cmd::query::list(&registry, json, &mut out),
        Commands::Constants { chain } => cmd::query::constants(chain, &mut out),
    }
}
