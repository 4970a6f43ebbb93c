//! Salary subcommands.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Subcommand};

use ledger_core::models::{Account, Amount, NewSalary};

use crate::cli::GlobalArgs;
use crate::commands::parse_amount;
use crate::{format, output, session};

#[derive(Args, Debug)]
pub struct SalariesCommand {
    #[command(subcommand)]
    pub command: SalariesSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum SalariesSubcommand {
    /// List salary payments
    List {
        #[arg(long)]
        company: Option<i64>,
    },

    /// Record a salary payment to a director
    Create {
        #[arg(long)]
        company: i64,

        /// Director user id
        #[arg(long)]
        director: i64,

        #[arg(long, value_parser = parse_amount)]
        amount: Amount,

        /// YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,

        /// PARTNER1, PARTNER2 or COMPANY
        #[arg(long)]
        account: Account,

        #[arg(long, default_value = "")]
        description: String,
    },
}

pub async fn handle(cmd: SalariesCommand, global: &GlobalArgs) -> Result<()> {
    let gateway = session::open(global)?;

    match cmd.command {
        SalariesSubcommand::List { company } => {
            let salaries = gateway
                .list_salaries(company)
                .await
                .context("Failed to list salaries")?;

            if global.json {
                return output::json_pretty(&salaries);
            }
            let rows: Vec<Vec<String>> = salaries
                .iter()
                .map(|s| {
                    vec![
                        s.id.to_string(),
                        s.date.to_string(),
                        s.director_name.clone(),
                        format::amount(&s.amount),
                        s.account.to_string(),
                        s.status.to_string(),
                        s.description.clone(),
                    ]
                })
                .collect();
            output::table(
                &["ID", "DATE", "DIRECTOR", "AMOUNT", "ACCOUNT", "STATUS", "DESCRIPTION"],
                &rows,
            );
        }
        SalariesSubcommand::Create {
            company,
            director,
            amount,
            date,
            account,
            description,
        } => {
            let salary = gateway
                .create_salary(&NewSalary {
                    company,
                    director,
                    amount,
                    description,
                    date,
                    account,
                })
                .await
                .context("Failed to create salary")?;

            if global.json {
                return output::json_pretty(&salary);
            }
            output::success(&format!(
                "Recorded salary {} of {} for {}",
                salary.id,
                format::amount(&salary.amount),
                salary.director_name
            ));
        }
    }

    Ok(())
}
