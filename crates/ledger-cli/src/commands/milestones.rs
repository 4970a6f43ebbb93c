//! Milestone subcommands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use ledger_core::models::{Amount, NewMilestone};

use crate::cli::GlobalArgs;
use crate::commands::parse_amount;
use crate::{format, output, session};

#[derive(Args, Debug)]
pub struct MilestonesCommand {
    #[command(subcommand)]
    pub command: MilestonesSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum MilestonesSubcommand {
    /// List milestones with progress
    List {
        #[arg(long)]
        company: Option<i64>,

        /// Only milestones not yet achieved
        #[arg(long)]
        pending: bool,
    },

    /// Add a revenue milestone
    Create {
        #[arg(long)]
        company: i64,

        #[arg(long, value_parser = parse_amount)]
        target: Amount,

        #[arg(long)]
        label: String,
    },

    /// Delete a milestone
    Delete { id: i64 },
}

pub async fn handle(cmd: MilestonesCommand, global: &GlobalArgs) -> Result<()> {
    let gateway = session::open(global)?;

    match cmd.command {
        MilestonesSubcommand::List { company, pending } => {
            let mut milestones = gateway
                .list_milestones(company)
                .await
                .context("Failed to list milestones")?;
            if pending {
                milestones.retain(|m| !m.achieved);
            }

            if global.json {
                return output::json_pretty(&milestones);
            }
            let rows: Vec<Vec<String>> = milestones
                .iter()
                .map(|m| {
                    vec![
                        m.id.to_string(),
                        m.label.clone(),
                        format::amount(&m.target_amount),
                        format::percent(m.progress),
                        format::currency(m.remaining()),
                        if m.achieved { "yes" } else { "no" }.to_string(),
                        format::optional(m.days_taken),
                    ]
                })
                .collect();
            output::table(
                &["ID", "LABEL", "TARGET", "PROGRESS", "REMAINING", "ACHIEVED", "DAYS"],
                &rows,
            );
        }
        MilestonesSubcommand::Create {
            company,
            target,
            label,
        } => {
            let milestone = gateway
                .create_milestone(&NewMilestone {
                    company,
                    target_amount: target,
                    label,
                })
                .await
                .context("Failed to create milestone")?;

            if global.json {
                return output::json_pretty(&milestone);
            }
            output::success(&format!(
                "Created milestone {} ({}) at {}",
                milestone.label,
                milestone.id,
                format::amount(&milestone.target_amount)
            ));
        }
        MilestonesSubcommand::Delete { id } => {
            gateway
                .delete_milestone(id)
                .await
                .context("Failed to delete milestone")?;
            output::success(&format!("Deleted milestone {}", id));
        }
    }

    Ok(())
}
