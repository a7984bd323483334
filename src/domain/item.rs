//! Shopping Item Entity
//!
//! One line on the shopping list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A shopping list entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    /// Unique identifier, assigned by the repository
    pub id: u32,
    /// Item name as spoken or typed
    pub name: String,
    pub quantity: u32,
    /// Unit word ("packets", "kg", ...) or "item"
    pub unit: String,
    /// Category name chosen at creation time
    pub category: String,
    /// Checked off the list
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ShoppingItem {
    /// Create an unsaved item (id 0) stamped with the current time
    pub fn new(name: String, quantity: u32, unit: String, category: String) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name,
            quantity,
            unit,
            category,
            is_completed: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Case-insensitive substring match on the name
    pub fn name_contains(&self, fragment: &str) -> bool {
        self.name.to_lowercase().contains(&fragment.to_lowercase())
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Entity for ShoppingItem {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}
