//! Project subcommands.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Subcommand};

use ledger_core::models::{Amount, NewProject, Project, ProjectStatus};

use crate::cli::GlobalArgs;
use crate::commands::parse_amount;
use crate::{format, output, session};

#[derive(Args, Debug)]
pub struct ProjectsCommand {
    #[command(subcommand)]
    pub command: ProjectsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ProjectsSubcommand {
    /// List projects
    List {
        #[arg(long)]
        company: Option<i64>,

        /// PENDING, APPROVED, REJECTED or COMPLETED
        #[arg(long)]
        status: Option<ProjectStatus>,
    },

    /// Create a project
    Create {
        #[arg(long)]
        company: i64,

        #[arg(long)]
        name: String,

        /// YYYY-MM-DD
        #[arg(long)]
        start_date: NaiveDate,

        /// YYYY-MM-DD
        #[arg(long)]
        end_date: Option<NaiveDate>,

        #[arg(long, value_parser = parse_amount)]
        value: Amount,

        #[arg(long, value_parser = parse_amount)]
        received: Option<Amount>,
    },

    /// Record your approval of a project
    Approve {
        id: i64,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Reject a project
    Reject { id: i64 },

    /// Delete a project
    Delete { id: i64 },
}

pub async fn handle(cmd: ProjectsCommand, global: &GlobalArgs) -> Result<()> {
    let gateway = session::open(global)?;

    match cmd.command {
        ProjectsSubcommand::List { company, status } => {
            let mut projects = gateway
                .list_projects(company)
                .await
                .context("Failed to list projects")?;
            if let Some(status) = status {
                projects.retain(|p| p.status == status);
            }

            if global.json {
                return output::json_pretty(&projects);
            }
            let rows: Vec<Vec<String>> = projects.iter().map(row).collect();
            output::table(
                &["ID", "NAME", "COMPANY", "VALUE", "RECEIVED", "STATUS", "APPROVALS"],
                &rows,
            );
        }
        ProjectsSubcommand::Create {
            company,
            name,
            start_date,
            end_date,
            value,
            received,
        } => {
            let project = gateway
                .create_project(&NewProject {
                    company,
                    name,
                    start_date,
                    end_date,
                    project_value: value,
                    received_amount: received,
                })
                .await
                .context("Failed to create project")?;
            print_result(&project, "Created", global)?;
        }
        ProjectsSubcommand::Approve { id, notes } => {
            let project = gateway
                .approve_project(id, notes.as_deref())
                .await
                .context("Failed to approve project")?;
            print_result(&project, "Approved", global)?;
        }
        ProjectsSubcommand::Reject { id } => {
            let project = gateway
                .reject_project(id)
                .await
                .context("Failed to reject project")?;
            print_result(&project, "Rejected", global)?;
        }
        ProjectsSubcommand::Delete { id } => {
            gateway
                .delete_project(id)
                .await
                .context("Failed to delete project")?;
            output::success(&format!("Deleted project {}", id));
        }
    }

    Ok(())
}

fn print_result(project: &Project, verb: &str, global: &GlobalArgs) -> Result<()> {
    if global.json {
        return output::json_pretty(project);
    }
    output::success(&format!(
        "{} project {} ({}): {}, approvals {}",
        verb,
        project.name,
        project.id,
        project.status,
        format::approvals(project)
    ));
    Ok(())
}

fn row(project: &Project) -> Vec<String> {
    vec![
        project.id.to_string(),
        project.name.clone(),
        project.company_name.clone(),
        format::amount(&project.project_value),
        format::amount(&project.received_amount),
        project.status.to_string(),
        format::approvals(project),
    ]
}
