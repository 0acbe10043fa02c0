//! Transaction creation and removal
//!
//! Creation enforces the balance guard for outcomes: an outcome that would
//! drive the net balance negative is rejected before anything is persisted,
//! including the category. The guard applies only at creation time; rows
//! already on disk are never re-checked.

use tracing::info;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, Transaction, TransactionId, TransactionKind};
use crate::storage::Storage;

use super::balance::BalanceService;
use super::category::CategoryService;

/// Input for creating a transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub title: String,
    pub value: Money,
    pub kind: TransactionKind,
    /// Category title; resolved to an existing category or a new one
    pub category: String,
}

/// Service for transaction creation and removal
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create and persist a transaction
    ///
    /// For outcomes, the balance guard runs first: if the value exceeds the
    /// current net balance the call fails with
    /// [`LedgerError::InsufficientFunds`] and nothing is persisted, not even
    /// a new category.
    pub fn create(&self, input: CreateTransactionInput) -> LedgerResult<Transaction> {
        if input.kind == TransactionKind::Outcome {
            let balance = BalanceService::new(self.storage).compute()?;
            if input.value > balance.total {
                return Err(LedgerError::InsufficientFunds {
                    needed: input.value,
                    available: balance.total,
                });
            }
        }

        let category = CategoryService::new(self.storage).resolve(&input.category)?;

        let txn = Transaction::new(input.title, input.value, input.kind, category.id);
        txn.validate()
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        self.storage.transactions.upsert(txn.clone())?;
        self.storage.transactions.save()?;

        info!(id = %txn.id, kind = %txn.kind, value = %txn.value, "created transaction");
        Ok(txn)
    }

    /// Remove a transaction by ID, returning the removed row
    pub fn remove(&self, id: TransactionId) -> LedgerResult<Transaction> {
        let txn = self
            .storage
            .transactions
            .get(id)?
            .ok_or_else(|| LedgerError::transaction_not_found(id.to_string()))?;

        self.storage.transactions.delete(id)?;
        self.storage.transactions.save()?;

        info!(id = %id, "removed transaction");
        Ok(txn)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> LedgerResult<Option<Transaction>> {
        self.storage.transactions.get(id)
    }

    /// List all transactions, oldest first
    pub fn list(&self) -> LedgerResult<Vec<Transaction>> {
        self.storage.transactions.get_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::LedgerPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn input(title: &str, cents: i64, kind: TransactionKind, category: &str) -> CreateTransactionInput {
        CreateTransactionInput {
            title: title.to_string(),
            value: Money::from_cents(cents),
            kind,
            category: category.to_string(),
        }
    }

    #[test]
    fn test_create_income() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let txn = service
            .create(input("Salary", 500_000, TransactionKind::Income, "Job"))
            .unwrap();

        assert_eq!(txn.title, "Salary");
        assert!(txn.is_income());
        assert_eq!(storage.transactions.count().unwrap(), 1);
        assert_eq!(storage.categories.count().unwrap(), 1);
    }

    #[test]
    fn test_create_reuses_existing_category() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let first = service
            .create(input("Groceries", 5_000, TransactionKind::Income, "Food"))
            .unwrap();
        let second = service
            .create(input("Restaurant", 3_000, TransactionKind::Income, "Food"))
            .unwrap();

        assert_eq!(first.category_id, second.category_id);
        assert_eq!(storage.categories.count().unwrap(), 1);
    }

    #[test]
    fn test_outcome_rejected_when_exceeding_balance() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        service
            .create(input("Salary", 100_000, TransactionKind::Income, "Job"))
            .unwrap();

        let err = service
            .create(input("Rent", 120_000, TransactionKind::Outcome, "Housing"))
            .unwrap_err();
        assert!(err.is_insufficient_funds());

        // The guard runs before category resolution, so the rejected
        // outcome leaves no trace: no transaction and no "Housing" category.
        assert_eq!(storage.transactions.count().unwrap(), 1);
        assert_eq!(storage.categories.count().unwrap(), 1);
        assert!(storage.categories.get_by_title("Housing").unwrap().is_none());
    }

    #[test]
    fn test_outcome_equal_to_balance_allowed() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        service
            .create(input("Salary", 100_000, TransactionKind::Income, "Job"))
            .unwrap();
        let txn = service
            .create(input("Rent", 100_000, TransactionKind::Outcome, "Housing"))
            .unwrap();

        assert!(txn.is_outcome());
        let balance = BalanceService::new(&storage).compute().unwrap();
        assert_eq!(balance.total, Money::zero());
    }

    #[test]
    fn test_outcome_decrements_balance() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        service
            .create(input("Salary", 500_000, TransactionKind::Income, "Job"))
            .unwrap();
        service
            .create(input("Rent", 120_000, TransactionKind::Outcome, "Housing"))
            .unwrap();

        let balance = BalanceService::new(&storage).compute().unwrap();
        assert_eq!(balance.total.cents(), 380_000);
    }

    #[test]
    fn test_first_outcome_on_empty_ledger_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let err = service
            .create(input("Rent", 1, TransactionKind::Outcome, "Housing"))
            .unwrap_err();
        assert!(err.is_insufficient_funds());
    }

    #[test]
    fn test_remove_returns_deleted_transaction() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        let txn = service
            .create(input("Salary", 500_000, TransactionKind::Income, "Job"))
            .unwrap();

        let removed = service.remove(txn.id).unwrap();
        assert_eq!(removed.id, txn.id);
        assert_eq!(storage.transactions.count().unwrap(), 0);

        let err = service.remove(txn.id).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_remove_frees_balance_for_outcomes() {
        let (_temp_dir, storage) = create_test_storage();
        let service = TransactionService::new(&storage);

        service
            .create(input("Salary", 100_000, TransactionKind::Income, "Job"))
            .unwrap();
        let rent = service
            .create(input("Rent", 80_000, TransactionKind::Outcome, "Housing"))
            .unwrap();

        assert!(service
            .create(input("Travel", 50_000, TransactionKind::Outcome, "Trips"))
            .unwrap_err()
            .is_insufficient_funds());

        service.remove(rent.id).unwrap();
        service
            .create(input("Travel", 50_000, TransactionKind::Outcome, "Trips"))
            .unwrap();
    }
}
