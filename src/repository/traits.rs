//! Repository Layer - Core Traits
//!
//! Each repository owns one stored list. Ids are assigned by the
//! repository on create, never by the caller.

use async_trait::async_trait;
use crate::domain::{Entity, DomainResult};

/// CRUD over a stored list of entities
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Store a copy of `entity` under a fresh id and return it
    async fn create(&self, entity: &T) -> DomainResult<T>;

    async fn find_by_id(&self, id: T::Id) -> DomainResult<Option<T>>;

    /// All entities in stored order
    async fn list(&self) -> DomainResult<Vec<T>>;

    /// Replace the stored entity with the same id. Missing ids are `NotFound`.
    async fn update(&self, entity: &T) -> DomainResult<T>;

    /// Missing ids are ignored
    async fn delete(&self, id: T::Id) -> DomainResult<()>;

    /// Empty the list, returning how many entities were dropped
    async fn clear(&self) -> DomainResult<usize>;
}

/// Case-insensitive name lookup
#[async_trait]
pub trait SearchableRepository<T: Entity>: Repository<T> {
    /// Entities whose name contains `query`, in stored order.
    /// An empty query matches everything.
    async fn search(&self, query: &str) -> DomainResult<Vec<T>>;

    /// First match of `query`, if any
    async fn find_first(&self, query: &str) -> DomainResult<Option<T>> {
        Ok(self.search(query).await?.into_iter().next())
    }
}
