//! Company subcommands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use ledger_core::models::{Company, NewCompany};

use crate::cli::GlobalArgs;
use crate::{format, output, session};

#[derive(Args, Debug)]
pub struct CompaniesCommand {
    #[command(subcommand)]
    pub command: CompaniesSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum CompaniesSubcommand {
    /// List companies visible to you
    List,

    /// Show one company and its directors
    Show {
        id: i64,
    },

    /// Create a company
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        partner1: Option<String>,

        #[arg(long)]
        partner2: Option<String>,
    },
}

pub async fn handle(cmd: CompaniesCommand, global: &GlobalArgs) -> Result<()> {
    let gateway = session::open(global)?;

    match cmd.command {
        CompaniesSubcommand::List => {
            let companies = gateway
                .list_companies()
                .await
                .context("Failed to list companies")?;

            if global.json {
                return output::json_pretty(&companies);
            }
            let rows: Vec<Vec<String>> = companies.iter().map(row).collect();
            output::table(&["ID", "NAME", "PARTNERS", "DIRECTORS", "CREATED"], &rows);
        }
        CompaniesSubcommand::Show { id } => {
            let company = gateway
                .get_company(id)
                .await
                .context("Failed to load company")?;
            let directors = gateway
                .list_directors(Some(id))
                .await
                .context("Failed to load directors")?;

            if global.json {
                return output::json_pretty(&serde_json::json!({
                    "company": company,
                    "directors": directors,
                }));
            }

            output::field("ID", &company.id.to_string());
            output::field("Name", &company.name);
            output::field("Partner 1", &company.partner1_name);
            output::field("Partner 2", &company.partner2_name);
            output::field(
                "Incorporated",
                &format::optional(company.incorporation_date.as_deref()),
            );
            output::field("Created by", &company.created_by_name);
            println!();

            let rows: Vec<Vec<String>> = directors
                .iter()
                .map(|d| {
                    vec![
                        d.user.id.to_string(),
                        d.user.username.clone(),
                        d.user.display_name(),
                        d.added_at.date_naive().to_string(),
                    ]
                })
                .collect();
            output::table(&["USER", "USERNAME", "NAME", "ADDED"], &rows);
        }
        CompaniesSubcommand::Create {
            name,
            partner1,
            partner2,
        } => {
            let company = gateway
                .create_company(&NewCompany {
                    name,
                    partner1_name: partner1,
                    partner2_name: partner2,
                })
                .await
                .context("Failed to create company")?;

            if global.json {
                return output::json_pretty(&company);
            }
            output::success(&format!("Created company {} ({})", company.name, company.id));
        }
    }

    Ok(())
}

fn row(company: &Company) -> Vec<String> {
    vec![
        company.id.to_string(),
        company.name.clone(),
        format!("{} / {}", company.partner1_name, company.partner2_name),
        company.directors_count.to_string(),
        company.created_at.date_naive().to_string(),
    ]
}
