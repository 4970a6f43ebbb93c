//! Register command implementation.

use anyhow::{Context, Result};
use clap::Args;

use ledger_core::Registration;
use ledger_core::models::UserRole;

use crate::cli::GlobalArgs;
use crate::{output, session};

#[derive(Args, Debug)]
pub struct RegisterArgs {
    #[arg(long)]
    pub username: String,

    #[arg(long)]
    pub email: String,

    /// Password (prompted for when omitted)
    #[arg(long)]
    pub password: Option<String>,

    /// Password confirmation (prompted for when omitted)
    #[arg(long)]
    pub password_confirm: Option<String>,

    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    /// ADMIN, COMPANY or DIRECTOR
    #[arg(long)]
    pub role: Option<UserRole>,
}

pub async fn run(args: RegisterArgs, global: &GlobalArgs) -> Result<()> {
    let password = match args.password {
        Some(password) => password,
        None => rpassword::prompt_password("Password: ").context("Failed to read password")?,
    };
    let confirm = match args.password_confirm {
        Some(confirm) => confirm,
        None => rpassword::prompt_password("Confirm password: ")
            .context("Failed to read password")?,
    };

    let mut form = Registration::new(&args.username, &args.email, password, confirm);
    form.first_name = args.first_name;
    form.last_name = args.last_name;
    form.phone = args.phone;
    form.role = args.role;

    let gateway = session::open(global)?;
    output::progress("Creating account...");

    let user = gateway
        .register(&form)
        .await
        .context("Failed to register")?;

    output::success("Account created");
    println!();
    super::print_profile(&user, global)
}
