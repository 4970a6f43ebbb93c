//! Transaction subcommands.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Subcommand};

use ledger_core::models::{
    Account, Amount, ApprovalStatus, NewTransaction, Transaction, TransactionType,
};
use ledger_http::TransactionFilter;

use crate::cli::GlobalArgs;
use crate::commands::parse_amount;
use crate::{format, output, session};

#[derive(Args, Debug)]
pub struct TransactionsCommand {
    #[command(subcommand)]
    pub command: TransactionsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum TransactionsSubcommand {
    /// List transactions
    List {
        #[arg(long)]
        company: Option<i64>,

        /// INCOME, EXPENSE or SALARY
        #[arg(long = "type")]
        transaction_type: Option<TransactionType>,

        /// PENDING, APPROVED or REJECTED
        #[arg(long)]
        status: Option<ApprovalStatus>,
    },

    /// Book a transaction
    Create {
        #[arg(long)]
        company: i64,

        /// INCOME, EXPENSE or SALARY
        #[arg(long = "type")]
        transaction_type: TransactionType,

        #[arg(long, value_parser = parse_amount)]
        amount: Amount,

        /// YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,

        /// PARTNER1, PARTNER2 or COMPANY
        #[arg(long)]
        account: Account,

        /// Attach to a project
        #[arg(long)]
        project: Option<i64>,

        #[arg(long)]
        description: Option<String>,
    },

    /// Record your approval of a transaction
    Approve {
        id: i64,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Reject a transaction
    Reject { id: i64 },

    /// Delete a transaction
    Delete { id: i64 },
}

pub async fn handle(cmd: TransactionsCommand, global: &GlobalArgs) -> Result<()> {
    let gateway = session::open(global)?;

    match cmd.command {
        TransactionsSubcommand::List {
            company,
            transaction_type,
            status,
        } => {
            let filter = TransactionFilter {
                company,
                transaction_type,
            };
            let mut transactions = gateway
                .list_transactions(filter)
                .await
                .context("Failed to list transactions")?;
            if let Some(status) = status {
                transactions.retain(|t| t.status == status);
            }

            if global.json {
                return output::json_pretty(&transactions);
            }
            let rows: Vec<Vec<String>> = transactions.iter().map(row).collect();
            output::table(
                &["ID", "DATE", "TYPE", "AMOUNT", "ACCOUNT", "PROJECT", "STATUS", "APPROVALS"],
                &rows,
            );
        }
        TransactionsSubcommand::Create {
            company,
            transaction_type,
            amount,
            date,
            account,
            project,
            description,
        } => {
            let mut new = NewTransaction::new(company, transaction_type, amount, date, account);
            if let Some(project) = project {
                new = new.for_project(project);
            }
            if let Some(description) = description {
                new = new.with_description(description);
            }

            let transaction = gateway
                .create_transaction(&new)
                .await
                .context("Failed to create transaction")?;
            print_result(&transaction, "Created", global)?;
        }
        TransactionsSubcommand::Approve { id, notes } => {
            let transaction = gateway
                .approve_transaction(id, notes.as_deref())
                .await
                .context("Failed to approve transaction")?;
            print_result(&transaction, "Approved", global)?;
        }
        TransactionsSubcommand::Reject { id } => {
            let transaction = gateway
                .reject_transaction(id)
                .await
                .context("Failed to reject transaction")?;
            print_result(&transaction, "Rejected", global)?;
        }
        TransactionsSubcommand::Delete { id } => {
            gateway
                .delete_transaction(id)
                .await
                .context("Failed to delete transaction")?;
            output::success(&format!("Deleted transaction {}", id));
        }
    }

    Ok(())
}

fn print_result(transaction: &Transaction, verb: &str, global: &GlobalArgs) -> Result<()> {
    if global.json {
        return output::json_pretty(transaction);
    }
    output::success(&format!(
        "{} {} {} ({}): {}, approvals {}",
        verb,
        transaction.transaction_type.as_str().to_lowercase(),
        format::amount(&transaction.amount),
        transaction.id,
        transaction.status,
        format::approvals(transaction)
    ));
    Ok(())
}

fn row(transaction: &Transaction) -> Vec<String> {
    vec![
        transaction.id.to_string(),
        transaction.date.to_string(),
        transaction.transaction_type.to_string(),
        format::amount(&transaction.amount),
        transaction.account.to_string(),
        format::optional(transaction.project_name.as_deref()),
        transaction.status.to_string(),
        format::approvals(transaction),
    ]
}
