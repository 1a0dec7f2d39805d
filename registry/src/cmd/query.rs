//! Lookup commands: `router`, `weth`, `creation-block`, `show`, `list`,
//! `constants`.
//!
//! Each command writes to the given sink so it can be exercised without a
//! terminal.

use std::io::Write;

use alloy_primitives::Address;
use serde::Serialize;

use crate::chain::{ChainId, ChainRegistry, Deployment};
use crate::constants::{
    BTT_PERMIT2_ADDRESS, CONTRACT_BALANCE, EON_PERMIT2_ADDRESS, ETH_ADDRESS, FTM_PERMIT2_ADDRESS,
    MAX_UINT160, MAX_UINT256, OPENSEA_CONDUIT_SPENDER_ID, PERMIT2_ADDRESS, ROUTER_AS_RECIPIENT,
    SENDER_AS_RECIPIENT, SUDOSWAP_SPENDER_ID, ZERO_ADDRESS, permit2_address,
};
use crate::error::Error;

/// Deployment record as printed by `show` and `list`.
#[derive(Debug, Serialize)]
struct DeploymentView<'a> {
    chain_id: ChainId,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'static str>,
    #[serde(flatten)]
    deployment: &'a Deployment,
    permit2: Address,
}

impl<'a> DeploymentView<'a> {
    const fn new(chain_id: ChainId, deployment: &'a Deployment) -> Self {
        Self {
            chain_id,
            name: chain_id.name(),
            deployment,
            permit2: permit2_address(chain_id),
        }
    }
}

fn weth_text(weth: Option<Address>) -> String {
    weth.map_or_else(|| "unsupported".to_owned(), |w| w.to_string())
}

/// `router <chain>`.
///
/// # Errors
///
/// Fails when the chain is unknown or the sink cannot be written.
pub fn router(registry: &ChainRegistry, chain: ChainId, out: &mut impl Write) -> Result<(), Error> {
    let router = registry.router_address(chain)?;
    writeln!(out, "{router}")?;
    Ok(())
}

/// `weth <chain>`.
///
/// # Errors
///
/// Fails when the chain is unknown, has no WETH, or the sink cannot be
/// written.
pub fn weth(registry: &ChainRegistry, chain: ChainId, out: &mut impl Write) -> Result<(), Error> {
    let weth = registry.weth_address(chain)?;
    writeln!(out, "{weth}")?;
    Ok(())
}

/// `creation-block <chain>`.
///
/// # Errors
///
/// Fails when the chain is unknown or the sink cannot be written.
pub fn creation_block(
    registry: &ChainRegistry,
    chain: ChainId,
    out: &mut impl Write,
) -> Result<(), Error> {
    let block = registry.creation_block(chain)?;
    writeln!(out, "{block}")?;
    Ok(())
}

/// `show <chain>`.
///
/// # Errors
///
/// Fails when the chain is unknown or the sink cannot be written.
pub fn show(
    registry: &ChainRegistry,
    chain: ChainId,
    json: bool,
    out: &mut impl Write,
) -> Result<(), Error> {
    let deployment = registry.deployment(chain)?;
    let view = DeploymentView::new(chain, deployment);
    if json {
        serde_json::to_writer_pretty(&mut *out, &view)?;
        writeln!(out)?;
        return Ok(());
    }

    match view.name {
        Some(name) => writeln!(out, "chain           {chain} ({name})")?,
        None => writeln!(out, "chain           {chain}")?,
    }
    writeln!(out, "router          {}", deployment.router)?;
    writeln!(out, "weth            {}", weth_text(deployment.weth))?;
    writeln!(out, "creation_block  {}", deployment.creation_block)?;
    writeln!(out, "permit2         {}", view.permit2)?;
    Ok(())
}

/// `list`.
///
/// # Errors
///
/// Fails when the sink cannot be written.
pub fn list(registry: &ChainRegistry, json: bool, out: &mut impl Write) -> Result<(), Error> {
    let views: Vec<_> = registry
        .entries()
        .into_iter()
        .map(|(id, deployment)| DeploymentView::new(id, deployment))
        .collect();

    if json {
        serde_json::to_writer_pretty(&mut *out, &views)?;
        writeln!(out)?;
        return Ok(());
    }

    for view in views {
        writeln!(
            out,
            "{:>10}  {:<16}  {}  {:<42}  {}",
            view.chain_id,
            view.name.unwrap_or("-"),
            view.deployment.router,
            weth_text(view.deployment.weth),
            view.deployment.creation_block
        )?;
    }
    Ok(())
}

/// `constants [--chain <chain>]`.
///
/// # Errors
///
/// Fails when the sink cannot be written.
pub fn constants(chain: Option<ChainId>, out: &mut impl Write) -> Result<(), Error> {
    let addresses = [
        ("PERMIT2_ADDRESS", PERMIT2_ADDRESS),
        ("BTT_PERMIT2_ADDRESS", BTT_PERMIT2_ADDRESS),
        ("FTM_PERMIT2_ADDRESS", FTM_PERMIT2_ADDRESS),
        ("EON_PERMIT2_ADDRESS", EON_PERMIT2_ADDRESS),
        ("ETH_ADDRESS", ETH_ADDRESS),
        ("ZERO_ADDRESS", ZERO_ADDRESS),
        ("SENDER_AS_RECIPIENT", SENDER_AS_RECIPIENT),
        ("ROUTER_AS_RECIPIENT", ROUTER_AS_RECIPIENT),
    ];
    for (name, address) in addresses {
        writeln!(out, "{name:<28}{address}")?;
    }
    writeln!(out, "{:<28}{OPENSEA_CONDUIT_SPENDER_ID}", "OPENSEA_CONDUIT_SPENDER_ID")?;
    writeln!(out, "{:<28}{SUDOSWAP_SPENDER_ID}", "SUDOSWAP_SPENDER_ID")?;
    writeln!(out, "{:<28}{CONTRACT_BALANCE}", "CONTRACT_BALANCE")?;
    writeln!(out, "{:<28}{MAX_UINT160}", "MAX_UINT160")?;
    writeln!(out, "{:<28}{MAX_UINT256}", "MAX_UINT256")?;

    if let Some(chain) = chain {
        writeln!(out, "{:<28}{}", format!("permit2 on {chain}"), permit2_address(chain))?;
    }
    Ok(())
}
