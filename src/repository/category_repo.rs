//! Category Repository
//!
//! Categories are stored once under `item_categories` and then only read.

use voice_command::default_categories;

use crate::domain::{DomainResult, ItemCategory};
use super::store::{load_json, save_json, SharedStore};

/// Storage key of the category list
pub const CATEGORIES_KEY: &str = "item_categories";

pub struct CategoryRepository {
    store: SharedStore,
}

impl CategoryRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Stored categories, or store `seed` and return it on first run
    pub async fn initialize(&self, seed: &[ItemCategory]) -> DomainResult<Vec<ItemCategory>> {
        if let Some(stored) = load_json(self.store.as_ref(), CATEGORIES_KEY).await? {
            return Ok(stored);
        }
        log::info!("seeding {} categories", seed.len());
        self.save(seed).await?;
        Ok(seed.to_vec())
    }

    /// Stored categories, falling back to the built-in catalog
    pub async fn list(&self) -> DomainResult<Vec<ItemCategory>> {
        Ok(load_json(self.store.as_ref(), CATEGORIES_KEY)
            .await?
            .unwrap_or_else(default_categories))
    }

    pub async fn save(&self, categories: &[ItemCategory]) -> DomainResult<()> {
        save_json(self.store.as_ref(), CATEGORIES_KEY, categories).await
    }
}
