//! Refresh token command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::GlobalArgs;
use crate::{output, session};

#[derive(Args, Debug)]
pub struct RefreshTokenArgs {}

pub async fn run(_args: RefreshTokenArgs, global: &GlobalArgs) -> Result<()> {
    let gateway = session::open(global)?;
    output::progress("Refreshing session...");

    gateway
        .refresh()
        .await
        .context("Failed to refresh session. Run 'ledger auth login' again.")?;

    output::success("Session refreshed successfully");
    Ok(())
}
