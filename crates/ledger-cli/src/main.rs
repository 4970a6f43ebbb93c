//! ledger - command-line client for the bookkeeping API.
//!
//! A thin wrapper over `ledger-http`: every command opens the stored session,
//! calls the API through the refreshing gateway and prints the result as a
//! table or as JSON.

mod cli;
mod commands;
mod format;
mod output;
mod session;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use commands::{auth, companies, milestones, projects, salaries, summary, transactions};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.json_logs);

    let global = cli.global;
    let result = match cli.command {
        Commands::Auth(cmd) => auth::handle(cmd, &global).await,
        Commands::Companies(cmd) => companies::handle(cmd, &global).await,
        Commands::Projects(cmd) => projects::handle(cmd, &global).await,
        Commands::Transactions(cmd) => transactions::handle(cmd, &global).await,
        Commands::Salaries(cmd) => salaries::handle(cmd, &global).await,
        Commands::Milestones(cmd) => milestones::handle(cmd, &global).await,
        Commands::Summary(args) => summary::run(args, &global).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::report(&err);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
