//! Category repository for JSON storage
//!
//! Manages loading and saving categories to categories.json. An exact-title
//! index backs the lookup-or-create and bulk set-membership queries.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::LedgerError;
use crate::models::{Category, CategoryId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct CategoryData {
    categories: Vec<Category>,
}

/// Repository for category persistence
pub struct CategoryRepository {
    path: PathBuf,
    data: RwLock<HashMap<CategoryId, Category>>,
    /// Index: exact title -> category_id
    by_title: RwLock<HashMap<String, CategoryId>>,
}

impl CategoryRepository {
    /// Create a new category repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            by_title: RwLock::new(HashMap::new()),
        }
    }

    /// Load categories from disk and rebuild the title index
    pub fn load(&self) -> Result<(), LedgerError> {
        let file_data: CategoryData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_title = self
            .by_title
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        by_title.clear();

        for category in file_data.categories {
            by_title.insert(category.title.clone(), category.id);
            data.insert(category.id, category);
        }

        Ok(())
    }

    /// Save categories to disk
    pub fn save(&self) -> Result<(), LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut categories: Vec<_> = data.values().cloned().collect();
        categories.sort_by(|a, b| a.title.cmp(&b.title));

        write_json_atomic(&self.path, &CategoryData { categories })
    }

    /// Get a category by ID
    pub fn get(&self, id: CategoryId) -> Result<Option<Category>, LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all categories, sorted by title
    pub fn get_all(&self) -> Result<Vec<Category>, LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut categories: Vec<_> = data.values().cloned().collect();
        categories.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(categories)
    }

    /// Get a category by exact title
    pub fn get_by_title(&self, title: &str) -> Result<Option<Category>, LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        let by_title = self
            .by_title
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        if let Some(&id) = by_title.get(title) {
            Ok(data.get(&id).cloned())
        } else {
            Ok(None)
        }
    }

    /// Get all categories whose title is in the given set
    ///
    /// A single membership query for bulk import, instead of one lookup per
    /// row.
    pub fn get_by_titles(&self, titles: &HashSet<&str>) -> Result<Vec<Category>, LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        let by_title = self
            .by_title
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut matched: Vec<_> = by_title
            .iter()
            .filter(|(title, _)| titles.contains(title.as_str()))
            .filter_map(|(_, id)| data.get(id).cloned())
            .collect();
        matched.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(matched)
    }

    /// Insert or update a category
    pub fn upsert(&self, category: Category) -> Result<(), LedgerError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_title = self
            .by_title
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if let Some(old) = data.get(&category.id) {
            by_title.remove(&old.title);
        }

        by_title.insert(category.title.clone(), category.id);
        data.insert(category.id, category);
        Ok(())
    }

    /// Insert a batch of categories under a single lock acquisition
    pub fn upsert_batch(&self, categories: Vec<Category>) -> Result<(), LedgerError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_title = self
            .by_title
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        for category in categories {
            if let Some(old) = data.get(&category.id) {
                by_title.remove(&old.title);
            }
            by_title.insert(category.title.clone(), category.id);
            data.insert(category.id, category);
        }
        Ok(())
    }

    /// Count categories
    pub fn count(&self) -> Result<usize, LedgerError> {
        let data = self
            .data
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.len())
    }
}
