//! Logout command implementation.

use anyhow::Result;
use clap::Args;

use crate::cli::GlobalArgs;
use crate::{output, session};

#[derive(Args, Debug)]
pub struct LogoutArgs {}

pub fn run(_args: LogoutArgs, global: &GlobalArgs) -> Result<()> {
    session::open(global)?.logout();
    output::success("Logged out");
    Ok(())
}
