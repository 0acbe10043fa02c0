//! Bulk CSV import
//!
//! Streams a CSV file of transactions into the ledger in one pass: a reader
//! thread feeds rows over a channel while the consumer accumulates them, then
//! categories are resolved in batch (one membership query plus one batch
//! insert) and all transactions are persisted together. On success the source
//! file is deleted.
//!
//! The balance guard does not apply here; imported outcomes may drive the
//! total negative. Malformed rows are skipped with a warning rather than
//! failing the whole file, but a stream-level error (unreadable file, broken
//! encoding) aborts the import before anything is persisted and leaves the
//! source file in place.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use std::sync::mpsc;
use std::thread;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{info, warn};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, CategoryId, Money, Transaction, TransactionKind};
use crate::storage::Storage;

/// A successfully parsed CSV row, not yet persisted
#[derive(Debug, Clone)]
struct ImportedRow {
    title: String,
    value: Money,
    kind: TransactionKind,
    category: String,
}

/// Service for bulk CSV import
pub struct ImportService<'a> {
    storage: &'a Storage,
}

impl<'a> ImportService<'a> {
    /// Create a new import service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Import all transactions from a CSV file, then delete it
    ///
    /// The file must have a `title,type,value,category` header row. Returns
    /// the created transactions in file order.
    pub fn import_file(&self, path: &Path) -> LedgerResult<Vec<Transaction>> {
        let rows = read_rows(path)?;
        if rows.is_empty() {
            info!(path = %path.display(), "no importable rows");
            remove_source(path);
            return Ok(Vec::new());
        }

        let pool = self.resolve_categories(&rows)?;

        let transactions: Vec<Transaction> = rows
            .into_iter()
            .map(|row| {
                // Every row category is in the pool by construction.
                let category_id = pool[&row.category];
                Transaction::new(row.title, row.value, row.kind, category_id)
            })
            .collect();

        self.storage.transactions.upsert_batch(transactions.clone())?;
        self.storage.transactions.save()?;

        info!(
            path = %path.display(),
            count = transactions.len(),
            "imported transactions"
        );
        remove_source(path);
        Ok(transactions)
    }

    /// Resolve every category title in the batch to an ID
    ///
    /// One membership query finds the titles that already exist; the rest are
    /// deduplicated by first occurrence and created in a single batch.
    fn resolve_categories(&self, rows: &[ImportedRow]) -> LedgerResult<HashMap<String, CategoryId>> {
        let titles: HashSet<&str> = rows.iter().map(|r| r.category.as_str()).collect();
        let existing = self.storage.categories.get_by_titles(&titles)?;
        let existing_titles: HashSet<&str> = existing.iter().map(|c| c.title.as_str()).collect();

        let mut seen = HashSet::new();
        let new_categories: Vec<Category> = rows
            .iter()
            .map(|r| r.category.as_str())
            .filter(|title| !existing_titles.contains(title))
            .filter(|title| seen.insert(*title))
            .map(Category::new)
            .collect();

        if !new_categories.is_empty() {
            self.storage.categories.upsert_batch(new_categories.clone())?;
            self.storage.categories.save()?;
        }

        let mut pool = HashMap::new();
        for category in new_categories.into_iter().chain(existing) {
            pool.entry(category.title).or_insert(category.id);
        }
        Ok(pool)
    }
}

/// Stream the file's rows on a reader thread, collecting the parseable ones
///
/// The channel closing is the completion signal; joining the thread surfaces
/// any stream-level error, which aborts the import.
fn read_rows(path: &Path) -> LedgerResult<Vec<ImportedRow>> {
    // Flexible so short rows reach parse_row and get dropped there instead
    // of failing the whole stream.
    let reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_path(path)?;

    let (tx, rx) = mpsc::channel::<Result<StringRecord, csv::Error>>();
    let producer = thread::spawn(move || {
        let mut reader = reader;
        for record in reader.records() {
            let failed = record.is_err();
            if tx.send(record).is_err() || failed {
                break;
            }
        }
    });

    let mut rows = Vec::new();
    let mut stream_error = None;
    for (index, record) in rx.into_iter().enumerate() {
        match record {
            Ok(record) => {
                if let Some(row) = parse_row(index, &record) {
                    rows.push(row);
                }
            }
            Err(e) => {
                stream_error = Some(LedgerError::from(e));
                break;
            }
        }
    }

    producer
        .join()
        .map_err(|_| LedgerError::Import("reader thread panicked".to_string()))?;

    match stream_error {
        Some(err) => Err(err),
        None => Ok(rows),
    }
}

/// Parse one CSV record, or skip it with a warning
fn parse_row(index: usize, record: &StringRecord) -> Option<ImportedRow> {
    let title = record.get(0).unwrap_or_default();
    let kind_field = record.get(1).unwrap_or_default();
    let value_field = record.get(2).unwrap_or_default();
    let category = record.get(3).unwrap_or_default();

    if title.is_empty() || kind_field.is_empty() || value_field.is_empty() {
        warn!(row = index + 1, "skipping row with missing fields");
        return None;
    }

    let kind = match kind_field.parse::<TransactionKind>() {
        Ok(kind) => kind,
        Err(e) => {
            warn!(row = index + 1, error = %e, "skipping row");
            return None;
        }
    };

    let value = match Money::parse(value_field) {
        Ok(value) => value,
        Err(e) => {
            warn!(row = index + 1, error = %e, "skipping row");
            return None;
        }
    };

    Some(ImportedRow {
        title: title.to_string(),
        value,
        kind,
        category: category.to_string(),
    })
}

/// Delete the consumed source file; failure is logged, not raised
fn remove_source(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        warn!(path = %path.display(), error = %e, "could not remove source file");
    }
}
