//! Item Repository Implementation
//!
//! Keeps the whole list as one JSON array under `shopping_items`, newest
//! item first. Every mutation is a read-modify-write of that array,
//! serialized by a repository-local lock.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult, ShoppingItem};
use super::store::{load_json, save_json, SharedStore};
use super::traits::{Repository, SearchableRepository};

/// Storage key of the item list
pub const ITEMS_KEY: &str = "shopping_items";

pub struct ItemRepository {
    store: SharedStore,
    write_lock: Mutex<()>,
}

impl ItemRepository {
    pub fn new(store: SharedStore) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    async fn load(&self) -> DomainResult<Vec<ShoppingItem>> {
        Ok(load_json(self.store.as_ref(), ITEMS_KEY).await?.unwrap_or_default())
    }

    async fn save(&self, items: &[ShoppingItem]) -> DomainResult<()> {
        save_json(self.store.as_ref(), ITEMS_KEY, items).await
    }

    /// Flip completion and return the updated item
    pub async fn toggle_completed(&self, id: u32) -> DomainResult<ShoppingItem> {
        let _guard = self.write_lock.lock().await;
        let mut items = self.load().await?;
        let item = items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("Item {}", id)))?;
        item.is_completed = !item.is_completed;
        item.touch();
        let toggled = item.clone();
        self.save(&items).await?;
        Ok(toggled)
    }
}

#[async_trait]
impl Repository<ShoppingItem> for ItemRepository {
    async fn create(&self, entity: &ShoppingItem) -> DomainResult<ShoppingItem> {
        let _guard = self.write_lock.lock().await;
        let mut items = self.load().await?;

        let mut item = entity.clone();
        item.id = items.iter().map(|i| i.id).max().unwrap_or(0) + 1;
        items.insert(0, item.clone());

        self.save(&items).await?;
        log::debug!("created item {} ({})", item.id, item.name);
        Ok(item)
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<ShoppingItem>> {
        let items = self.load().await?;
        Ok(items.into_iter().find(|item| item.id == id))
    }

    async fn list(&self) -> DomainResult<Vec<ShoppingItem>> {
        self.load().await
    }

    async fn update(&self, entity: &ShoppingItem) -> DomainResult<ShoppingItem> {
        let _guard = self.write_lock.lock().await;
        let mut items = self.load().await?;

        let slot = items
            .iter_mut()
            .find(|item| item.id == entity.id)
            .ok_or_else(|| DomainError::NotFound(format!("Item {}", entity.id)))?;
        *slot = entity.clone();
        slot.touch();
        let updated = slot.clone();

        self.save(&items).await?;
        Ok(updated)
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut items = self.load().await?;
        items.retain(|item| item.id != id);
        self.save(&items).await
    }

    async fn clear(&self) -> DomainResult<usize> {
        let _guard = self.write_lock.lock().await;
        let removed = self.load().await?.len();
        self.save(&[]).await?;
        log::info!("cleared {} items", removed);
        Ok(removed)
    }
}

#[async_trait]
impl SearchableRepository<ShoppingItem> for ItemRepository {
    async fn search(&self, query: &str) -> DomainResult<Vec<ShoppingItem>> {
        let items = self.load().await?;
        Ok(items.into_iter().filter(|item| item.name_contains(query)).collect())
    }
}
