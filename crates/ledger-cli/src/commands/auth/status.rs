//! Status command implementation.

use anyhow::Result;
use clap::Args;

use ledger_core::error::AuthError;

use crate::cli::GlobalArgs;
use crate::{output, session};

#[derive(Args, Debug)]
pub struct StatusArgs {}

pub async fn run(_args: StatusArgs, global: &GlobalArgs) -> Result<()> {
    let gateway = session::open(global)?;
    output::progress("Checking session...");

    if !gateway.is_authenticated().await {
        return Err(ledger_core::Error::from(AuthError::Unauthenticated).into());
    }

    output::success("Session is valid");
    if let Some(user) = gateway.session().stored_user() {
        super::print_profile(&user, global)?;
    }
    Ok(())
}
