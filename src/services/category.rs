//! Category resolution
//!
//! Lookup-or-create semantics shared by the single-transaction and bulk
//! import paths. Titles are matched by exact value; intended uniqueness is
//! enforced here by looking up before creating, not by a storage constraint,
//! so concurrent resolvers racing on the same title can still produce
//! duplicates (accepted limitation).

use crate::error::LedgerResult;
use crate::models::Category;
use crate::storage::Storage;

/// Result of a category lookup
#[derive(Debug, Clone)]
pub enum CategoryLookup {
    /// A persisted category with this exact title exists
    Found(Category),
    /// No persisted category carries this title
    Absent,
}

/// Service for category resolution
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Look up a category by exact title
    pub fn lookup(&self, title: &str) -> LedgerResult<CategoryLookup> {
        match self.storage.categories.get_by_title(title)? {
            Some(category) => Ok(CategoryLookup::Found(category)),
            None => Ok(CategoryLookup::Absent),
        }
    }

    /// Return the existing category with this title, or create and persist
    /// a new one
    ///
    /// Idempotent: a second call with the same title finds the row created
    /// by the first.
    pub fn resolve(&self, title: &str) -> LedgerResult<Category> {
        match self.lookup(title)? {
            CategoryLookup::Found(category) => Ok(category),
            CategoryLookup::Absent => {
                let category = Category::new(title);
                self.storage.categories.upsert(category.clone())?;
                self.storage.categories.save()?;
                Ok(category)
            }
        }
    }

    /// List all categories
    pub fn list(&self) -> LedgerResult<Vec<Category>> {
        self.storage.categories.get_all()
    }
}
