//! Voice Cart
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Key-value storage and item/category repositories
//! - assistant: Applies parsed voice commands to the list
//! - commands: Text front-end handlers used by the binary
//! - config: File and environment configuration

use std::sync::Arc;

pub mod domain;
pub mod repository;
pub mod assistant;
pub mod commands;
pub mod config;

pub use assistant::{CommandOutcome, ItemGroup, ListStats, ShoppingAssistant};
pub use config::AppConfig;
pub use domain::{DomainError, DomainResult, ShoppingItem};

use repository::{FileStore, SharedStore};

/// Open the file-backed assistant described by `config`
pub async fn open_assistant(config: &AppConfig) -> DomainResult<ShoppingAssistant> {
    let seed = config.seed_categories()?;
    let store: SharedStore = Arc::new(FileStore::open(&config.data_dir).await?);
    log::info!("data dir {}", config.data_dir.display());
    ShoppingAssistant::open(store, &seed).await
}
