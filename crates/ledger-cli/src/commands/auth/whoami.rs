//! Whoami command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::GlobalArgs;
use crate::session;

#[derive(Args, Debug)]
pub struct WhoamiArgs {}

pub fn run(_args: WhoamiArgs, global: &GlobalArgs) -> Result<()> {
    let gateway = session::open(global)?;
    let user = gateway
        .session()
        .stored_user()
        .context("No active session. Run 'ledger auth login' first.")?;

    super::print_profile(&user, global)
}
