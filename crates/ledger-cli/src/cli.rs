//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::commands::auth::AuthCommand;
use crate::commands::companies::CompaniesCommand;
use crate::commands::milestones::MilestonesCommand;
use crate::commands::projects::ProjectsCommand;
use crate::commands::salaries::SalariesCommand;
use crate::commands::summary::SummaryArgs;
use crate::commands::transactions::TransactionsCommand;

/// Bookkeeping client for companies, projects and approvals.
#[derive(Parser, Debug)]
#[command(name = "ledger")]
#[command(author, version = env!("LEDGER_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// API base URL
    #[arg(long, global = true, env = "LEDGER_API_URL", default_value = ledger_http::DEFAULT_API_URL)]
    pub api_url: String,

    /// Session file (defaults to the platform data directory)
    #[arg(long, global = true, env = "LEDGER_STORE")]
    pub store: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "LEDGER_TIMEOUT", default_value_t = 30)]
    pub timeout: u64,

    /// Print records as JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in, register and inspect the session
    Auth(AuthCommand),

    /// Companies and their directors
    Companies(CompaniesCommand),

    /// Client projects
    Projects(ProjectsCommand),

    /// Income, expense and salary transactions
    Transactions(TransactionsCommand),

    /// Director salaries
    Salaries(SalariesCommand),

    /// Revenue milestones
    Milestones(MilestonesCommand),

    /// Balances and totals for a company
    Summary(SummaryArgs),
}
