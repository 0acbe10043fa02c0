//! Transaction model
//!
//! A transaction records a single monetary event: an income or an outcome
//! with a non-negative value, tagged with exactly one category. Transactions
//! are never mutated after creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::{CategoryId, TransactionId};
use super::money::Money;

/// The direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in
    Income,
    /// Money going out
    Outcome,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Outcome => write!(f, "outcome"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(Self::Income),
            "outcome" => Ok(Self::Outcome),
            other => Err(ParseKindError(other.to_string())),
        }
    }
}

/// Error returned when a transaction kind string is not income/outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKindError(pub String);

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid transaction type: '{}'", self.0)
    }
}

impl std::error::Error for ParseKindError {}

/// A recorded monetary event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Description of the transaction
    pub title: String,

    /// Amount, always non-negative; direction comes from `kind`
    pub value: Money,

    /// Income or outcome
    pub kind: TransactionKind,

    /// The category this transaction is tagged with
    pub category_id: CategoryId,

    /// When the transaction was created
    pub created_at: DateTime<Utc>,

    /// When the transaction was last modified
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(
        title: impl Into<String>,
        value: Money,
        kind: TransactionKind,
        category_id: CategoryId,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: TransactionId::new(),
            title: title.into(),
            value,
            kind,
            category_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if this transaction adds to the balance
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Check if this transaction subtracts from the balance
    pub fn is_outcome(&self) -> bool {
        self.kind == TransactionKind::Outcome
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.value.is_negative() {
            return Err(TransactionValidationError::NegativeValue(self.value));
        }
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) {}", self.title, self.kind, self.value)
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NegativeValue(Money),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeValue(value) => {
                write!(f, "Transaction value cannot be negative ({})", value)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}
