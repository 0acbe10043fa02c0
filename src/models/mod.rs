//! Core data models

pub mod category;
pub mod ids;
pub mod money;
pub mod transaction;

pub use category::Category;
pub use ids::{CategoryId, TransactionId};
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionKind};
