//! Transaction CLI commands
//!
//! Bridges clap argument parsing with the transaction service.

use clap::Subcommand;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, Transaction, TransactionId, TransactionKind};
use crate::services::{CreateTransactionInput, TransactionService};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Transaction title
        title: String,
        /// Amount (e.g., "1200" or "1200.50")
        value: String,
        /// Transaction type: income or outcome
        #[arg(short = 't', long = "type")]
        kind: String,
        /// Category title (created if it does not exist)
        #[arg(short, long)]
        category: String,
    },

    /// Remove a transaction by ID
    Remove {
        /// Transaction ID (UUID)
        id: String,
    },

    /// List all transactions
    List,
}

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Created")]
    created_at: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(txn: &Transaction) -> Self {
        Self {
            id: txn.id.as_uuid().to_string(),
            title: txn.title.clone(),
            kind: txn.kind.to_string(),
            value: txn.value.to_string(),
            created_at: txn.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Handle a transaction command
pub fn handle_transaction_command(storage: &Storage, cmd: TransactionCommands) -> LedgerResult<()> {
    let service = TransactionService::new(storage);

    match cmd {
        TransactionCommands::Add {
            title,
            value,
            kind,
            category,
        } => {
            let kind: TransactionKind = kind
                .parse()
                .map_err(|e| LedgerError::Validation(format!("{}", e)))?;
            let value = Money::parse(&value)
                .map_err(|e| LedgerError::Validation(format!("Invalid value: {}", e)))?;

            let txn = service.create(CreateTransactionInput {
                title,
                value,
                kind,
                category,
            })?;

            println!("Added transaction: {}", txn.title);
            println!("  Type:  {}", txn.kind);
            println!("  Value: {}", txn.value);
            println!("  ID:    {}", txn.id.as_uuid());
        }

        TransactionCommands::Remove { id } => {
            let id: TransactionId = id
                .parse()
                .map_err(|_| LedgerError::Validation(format!("Invalid transaction ID: {}", id)))?;

            let removed = service.remove(id)?;
            println!("Removed transaction: {}", removed);
        }

        TransactionCommands::List => {
            let transactions = service.list()?;
            if transactions.is_empty() {
                println!("No transactions recorded.");
                return Ok(());
            }

            let rows: Vec<TransactionRow> = transactions.iter().map(Into::into).collect();
            let mut table = Table::new(rows);
            table.with(Style::rounded());
            println!("{}", table);
        }
    }

    Ok(())
}
