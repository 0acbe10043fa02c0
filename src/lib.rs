//! ledgerbook - Personal finance ledger
//!
//! Records income and outcome transactions tagged with categories, refuses
//! outcome transactions that would drive the running balance negative, and
//! bulk-imports transactions from CSV files.
//!
//! # Architecture
//!
//! - `config`: path resolution for the data directory
//! - `error`: custom error types
//! - `models`: core data models (transactions, categories, money)
//! - `storage`: JSON file storage layer
//! - `services`: business logic (balance, category resolution, creation,
//!   removal, bulk import)
//! - `cli`: command handlers bridging clap to the service layer

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
