//! Service layer for ledgerbook
//!
//! Stateless services over [`Storage`](crate::storage::Storage): balance
//! aggregation, category resolution, transaction creation/removal, and bulk
//! CSV import.

pub mod balance;
pub mod category;
pub mod import;
pub mod transaction;

pub use balance::{Balance, BalanceService};
pub use category::{CategoryLookup, CategoryService};
pub use import::ImportService;
pub use transaction::{CreateTransactionInput, TransactionService};
