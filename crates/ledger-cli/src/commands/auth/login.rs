//! Login command implementation.

use anyhow::{Context, Result};
use clap::Args;

use ledger_core::Credentials;

use crate::cli::GlobalArgs;
use crate::{output, session};

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account username
    #[arg(long)]
    pub username: String,

    /// Account password (prompted for when omitted)
    #[arg(long)]
    pub password: Option<String>,
}

pub async fn run(args: LoginArgs, global: &GlobalArgs) -> Result<()> {
    let password = match args.password {
        Some(password) => password,
        None => rpassword::prompt_password("Password: ").context("Failed to read password")?,
    };
    let credentials = Credentials::new(&args.username, password);

    let gateway = session::open(global)?;
    output::progress("Logging in...");

    let user = gateway
        .login(&credentials)
        .await
        .context("Failed to login")?;

    output::success("Logged in successfully");
    println!();
    super::print_profile(&user, global)
}
