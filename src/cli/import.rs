//! CSV import CLI command

use std::path::PathBuf;

use crate::error::LedgerResult;
use crate::services::ImportService;
use crate::storage::Storage;

/// Handle the import command
///
/// Prints a per-kind summary of what was imported. The source file is
/// deleted on success.
pub fn handle_import_command(storage: &Storage, file: PathBuf) -> LedgerResult<()> {
    let imported = ImportService::new(storage).import_file(&file)?;

    if imported.is_empty() {
        println!("No transactions found in {}", file.display());
        return Ok(());
    }

    let incomes = imported.iter().filter(|t| t.is_income()).count();
    let outcomes = imported.len() - incomes;

    println!("Imported {} transaction(s) from {}", imported.len(), file.display());
    println!("  Income:  {}", incomes);
    println!("  Outcome: {}", outcomes);
    Ok(())
}
