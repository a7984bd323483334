//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod store;
mod item_repo;
mod category_repo;

#[cfg(test)]
mod tests;

pub use traits::{Repository, SearchableRepository};
pub use store::{load_json, save_json, FileStore, KeyValueStore, MemoryStore, SharedStore};
pub use item_repo::{ItemRepository, ITEMS_KEY};
pub use category_repo::{CategoryRepository, CATEGORIES_KEY};
