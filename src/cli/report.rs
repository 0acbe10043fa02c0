//! Balance reporting CLI command

use crate::error::LedgerResult;
use crate::services::BalanceService;
use crate::storage::Storage;

/// Handle the balance command
pub fn handle_balance_command(storage: &Storage) -> LedgerResult<()> {
    let balance = BalanceService::new(storage).compute()?;

    println!("Balance");
    println!("  Income:  {}", balance.income);
    println!("  Outcome: {}", balance.outcome);
    println!("  Total:   {}", balance.total);
    Ok(())
}
