use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ledgerbook::cli::{
    handle_balance_command, handle_import_command, handle_transaction_command, TransactionCommands,
};
use ledgerbook::config::paths::LedgerPaths;
use ledgerbook::storage::Storage;

#[derive(Parser)]
#[command(
    name = "ledgerbook",
    version,
    about = "Personal finance ledger",
    long_about = "ledgerbook records income and outcome transactions tagged with \
                  categories, guards outcomes against overdrawing the balance, and \
                  bulk-imports transactions from CSV files."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Show income, outcome, and total balance
    Balance,

    /// Import transactions from a CSV file (the file is deleted on success)
    Import {
        /// Path to CSV file with a title,type,value,category header
        file: PathBuf,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = LedgerPaths::new()?;
    let mut storage = Storage::new(paths)?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&storage, cmd)?;
        }
        Some(Commands::Balance) => {
            handle_balance_command(&storage)?;
        }
        Some(Commands::Import { file }) => {
            handle_import_command(&storage, file)?;
        }
        Some(Commands::Config) => {
            let paths = storage.paths();
            println!("ledgerbook Configuration");
            println!("========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Transactions:   {}", paths.transactions_file().display());
            println!("Categories:     {}", paths.categories_file().display());
        }
        None => {
            println!("ledgerbook - Personal finance ledger");
            println!();
            println!("Run 'ledgerbook --help' for usage information.");
        }
    }

    Ok(())
}
