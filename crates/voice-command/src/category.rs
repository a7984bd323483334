//! Item Categories
//!
//! Named buckets with keyword lists. Categories are configuration: the
//! engine reads them and never mutates them.

use serde::{Deserialize, Serialize};

/// Category name returned when no keyword matches
pub const FALLBACK_CATEGORY: &str = "other";
/// Icon shown for items whose category is unknown
pub const FALLBACK_ICON: &str = "🛒";

/// A category with its ordered keyword list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCategory {
    pub id: String,
    pub name: String,
    /// Scanned in order; the first hit decides the category
    pub keywords: Vec<String>,
    pub icon: String,
}

impl ItemCategory {
    pub fn new(id: &str, name: &str, keywords: &[&str], icon: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            icon: icon.to_string(),
        }
    }
}

/// The built-in catalog, in scan order.
///
/// Returned as a fresh value so callers pass it explicitly to the
/// categorizer instead of relying on a shared global.
pub fn default_categories() -> Vec<ItemCategory> {
    vec![
        ItemCategory::new("1", "dairy", &["milk", "cheese", "butter", "yogurt", "cream", "curd"], "🥛"),
        ItemCategory::new(
            "2",
            "fruits",
            &["apple", "banana", "orange", "grape", "mango", "berry", "strawberry", "watermelon", "pineapple"],
            "🍎",
        ),
        ItemCategory::new(
            "3",
            "vegetables",
            &["tomato", "potato", "onion", "carrot", "lettuce", "spinach", "broccoli", "cucumber"],
            "🥕",
        ),
        ItemCategory::new(
            "4",
            "snacks",
            &["chips", "biscuit", "cookie", "chocolate", "candy", "popcorn", "crackers"],
            "🍪",
        ),
        ItemCategory::new("5", "beverages", &["juice", "soda", "coffee", "tea", "water", "drink"], "☕"),
        ItemCategory::new("6", "meat", &["chicken", "beef", "pork", "fish", "meat", "lamb"], "🍗"),
        ItemCategory::new("7", "grains", &["rice", "bread", "pasta", "cereal", "flour", "oats"], "🌾"),
        ItemCategory::new("8", FALLBACK_CATEGORY, &[], FALLBACK_ICON),
    ]
}
