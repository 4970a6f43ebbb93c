//! Summary command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::GlobalArgs;
use crate::{format, output, session};

#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Company id
    #[arg(long)]
    pub company: i64,
}

pub async fn run(args: SummaryArgs, global: &GlobalArgs) -> Result<()> {
    let gateway = session::open(global)?;
    let summary = gateway
        .summary(args.company)
        .await
        .context("Failed to load summary")?;

    if global.json {
        return output::json_pretty(&summary);
    }

    output::field("As of", &summary.today.to_string());
    output::field("Income", &format::amount(&summary.income_total));
    output::field("Expenses", &format::amount(&summary.expense_total));
    output::field("Salaries", &format::amount(&summary.salary_total));
    output::field("Balance", &format::amount(&summary.total_balance));
    output::field("Partner 1", &format::amount(&summary.partner1_balance));
    output::field("Partner 2", &format::amount(&summary.partner2_balance));
    output::field("Company", &format::amount(&summary.company_balance));

    if !summary.director_balances.is_empty() {
        println!();
        let rows: Vec<Vec<String>> = summary
            .director_balances
            .iter()
            .map(|d| vec![d.director_name.clone(), format::amount(&d.balance)])
            .collect();
        output::table(&["DIRECTOR", "BALANCE"], &rows);
    }

    if !summary.milestones.is_empty() {
        println!();
        let rows: Vec<Vec<String>> = summary
            .milestones
            .iter()
            .map(|m| {
                vec![
                    m.label.clone(),
                    format::amount(&m.target),
                    format::percent(m.progress),
                    if m.achieved { "yes" } else { "no" }.to_string(),
                    format::optional(m.days_taken),
                ]
            })
            .collect();
        output::table(&["MILESTONE", "TARGET", "PROGRESS", "ACHIEVED", "DAYS"], &rows);
    }

    Ok(())
}
