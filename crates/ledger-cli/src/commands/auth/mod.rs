//! Auth subcommand implementations.

mod login;
mod logout;
mod refresh_token;
mod register;
mod status;
mod whoami;

use anyhow::Result;
use clap::{Args, Subcommand};

use ledger_core::UserProfile;

use crate::cli::GlobalArgs;
use crate::{format, output};

#[derive(Args, Debug)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AuthSubcommand {
    /// Log in and store the session
    Login(login::LoginArgs),

    /// Create an account and log in
    Register(register::RegisterArgs),

    /// Forget the stored session
    Logout(logout::LogoutArgs),

    /// Show the cached profile without contacting the server
    Whoami(whoami::WhoamiArgs),

    /// Check that the stored session is still valid
    Status(status::StatusArgs),

    /// Exchange the refresh token for a new access token
    RefreshToken(refresh_token::RefreshTokenArgs),
}

pub async fn handle(cmd: AuthCommand, global: &GlobalArgs) -> Result<()> {
    match cmd.command {
        AuthSubcommand::Login(args) => login::run(args, global).await,
        AuthSubcommand::Register(args) => register::run(args, global).await,
        AuthSubcommand::Logout(args) => logout::run(args, global),
        AuthSubcommand::Whoami(args) => whoami::run(args, global),
        AuthSubcommand::Status(args) => status::run(args, global).await,
        AuthSubcommand::RefreshToken(args) => refresh_token::run(args, global).await,
    }
}

/// Print a profile as fields, or as JSON with `--json`.
fn print_profile(user: &UserProfile, global: &GlobalArgs) -> Result<()> {
    if global.json {
        return output::json_pretty(user);
    }

    output::field("User", &user.username);
    output::field("Name", &user.display_name());
    output::field("Email", &user.email);
    output::field("Role", user.role.as_str());
    output::field("Company", &format::optional(user.company_name.as_deref()));
    Ok(())
}
