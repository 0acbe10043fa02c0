//! Balance calculation
//!
//! Aggregates the full set of persisted transactions into income, outcome,
//! and net totals. There is no cached or incremental balance; every call
//! scans all transactions, which is acceptable at the dataset sizes this
//! ledger targets.

use crate::error::LedgerResult;
use crate::models::Money;
use crate::storage::Storage;

/// Aggregated totals over all persisted transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Balance {
    /// Sum of all income values
    pub income: Money,
    /// Sum of all outcome values
    pub outcome: Money,
    /// `income - outcome`; may be negative for pre-existing data
    pub total: Money,
}

/// Service for balance computation
pub struct BalanceService<'a> {
    storage: &'a Storage,
}

impl<'a> BalanceService<'a> {
    /// Create a new balance service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Compute the current balance from all persisted transactions
    pub fn compute(&self) -> LedgerResult<Balance> {
        let transactions = self.storage.transactions.get_all()?;

        let income: Money = transactions
            .iter()
            .filter(|t| t.is_income())
            .map(|t| t.value)
            .sum();
        let outcome: Money = transactions
            .iter()
            .filter(|t| t.is_outcome())
            .map(|t| t.value)
            .sum();

        Ok(Balance {
            income,
            outcome,
            total: income - outcome,
        })
    }
}
