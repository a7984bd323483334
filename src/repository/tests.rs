//! Repository Integration Tests
//!
//! Tests for ItemRepository and CategoryRepository with in-memory and
//! file-backed stores.

#[cfg(test)]
mod tests {
    use crate::domain::{DomainError, ItemCategory, ShoppingItem};
    use crate::repository::{
        CategoryRepository, FileStore, ItemRepository, KeyValueStore, MemoryStore, Repository,
        SearchableRepository, SharedStore, CATEGORIES_KEY, ITEMS_KEY,
    };
    use std::sync::Arc;
    use voice_command::default_categories;

    fn memory_store() -> SharedStore {
        Arc::new(MemoryStore::new())
    }

    fn setup_test_repo() -> ItemRepository {
        ItemRepository::new(memory_store())
    }

    fn item(name: &str) -> ShoppingItem {
        ShoppingItem::new(name.to_string(), 1, "item".to_string(), "other".to_string())
    }

    #[tokio::test]
    async fn test_create_item() {
        let repo = setup_test_repo();

        let created = repo.create(&item("Test item")).await.expect("Failed to create");

        assert_eq!(created.id, 1);
        assert_eq!(created.name, "Test item");
        assert!(!created.is_completed);
    }

    #[tokio::test]
    async fn test_ids_increase_and_newest_first() {
        let repo = setup_test_repo();

        repo.create(&item("Item 1")).await.unwrap();
        repo.create(&item("Item 2")).await.unwrap();
        let third = repo.create(&item("Item 3")).await.unwrap();
        assert_eq!(third.id, 3);

        let items = repo.list().await.expect("List failed");
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Item 3", "Item 2", "Item 1"]);
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete_of_older_item() {
        let repo = setup_test_repo();

        let first = repo.create(&item("a")).await.unwrap();
        repo.create(&item("b")).await.unwrap();
        repo.delete(first.id).await.unwrap();

        let next = repo.create(&item("c")).await.unwrap();
        assert_eq!(next.id, 3);
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = setup_test_repo();

        let created = repo.create(&item("Find me")).await.expect("Failed to create");

        let found = repo.find_by_id(created.id).await.expect("Find failed");
        assert!(found.is_some());
        assert_eq!(found.unwrap().name, "Find me");
        assert!(repo.find_by_id(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_item() {
        let repo = setup_test_repo();

        let mut created = repo.create(&item("Original")).await.unwrap();
        created.name = "Updated".to_string();
        created.quantity = 4;

        let updated = repo.update(&created).await.expect("Update failed");
        assert_eq!(updated.name, "Updated");
        assert_eq!(updated.quantity, 4);
        assert!(updated.updated_at >= updated.created_at);

        let stored = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(stored.name, "Updated");
    }

    #[tokio::test]
    async fn test_update_missing_item() {
        let repo = setup_test_repo();

        let mut ghost = item("ghost");
        ghost.id = 42;
        let err = repo.update(&ghost).await.unwrap_err();
        assert_eq!(err, DomainError::NotFound("Item 42".to_string()));
    }

    #[tokio::test]
    async fn test_delete_item() {
        let repo = setup_test_repo();

        let created = repo.create(&item("To delete")).await.unwrap();
        repo.delete(created.id).await.expect("Delete failed");

        let found = repo.find_by_id(created.id).await.expect("Find failed");
        assert!(found.is_none());

        // Deleting again is not an error
        repo.delete(created.id).await.unwrap();
    }

    #[tokio::test]
    async fn test_toggle_completed() {
        let repo = setup_test_repo();

        let created = repo.create(&item("bread")).await.unwrap();
        let toggled = repo.toggle_completed(created.id).await.unwrap();
        assert!(toggled.is_completed);
        let toggled = repo.toggle_completed(created.id).await.unwrap();
        assert!(!toggled.is_completed);

        assert!(matches!(repo.toggle_completed(7).await, Err(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_search_and_fragment_lookup() {
        let repo = setup_test_repo();

        repo.create(&item("Whole Milk")).await.unwrap();
        repo.create(&item("Almond Milk")).await.unwrap();
        repo.create(&item("Bread")).await.unwrap();

        let milks = repo.search("milk").await.unwrap();
        assert_eq!(milks.len(), 2);

        // Newest first, so the almond milk is found before the whole milk
        let found = repo.find_first("MILK").await.unwrap().unwrap();
        assert_eq!(found.name, "Almond Milk");
        assert!(repo.find_first("eggs").await.unwrap().is_none());

        assert_eq!(repo.search("").await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_clear() {
        let store = memory_store();
        let repo = ItemRepository::new(store.clone());

        repo.create(&item("a")).await.unwrap();
        repo.create(&item("b")).await.unwrap();
        assert_eq!(repo.clear().await.unwrap(), 2);
        assert!(repo.list().await.unwrap().is_empty());
        assert_eq!(store.get_item(ITEMS_KEY).await.unwrap(), Some("[]".to_string()));
    }

    #[tokio::test]
    async fn test_items_survive_reopen_with_file_store() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store: SharedStore = Arc::new(FileStore::open(dir.path()).await.unwrap());
            let repo = ItemRepository::new(store);
            repo.create(&item("eggs")).await.unwrap();
        }

        let store: SharedStore = Arc::new(FileStore::open(dir.path()).await.unwrap());
        let repo = ItemRepository::new(store);
        let items = repo.list().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "eggs");
    }

    #[tokio::test]
    async fn test_corrupt_item_list_is_an_error() {
        let store = memory_store();
        store.set_item(ITEMS_KEY, "not json").await.unwrap();
        let repo = ItemRepository::new(store);
        assert!(matches!(repo.list().await, Err(DomainError::Internal(_))));
    }

    #[tokio::test]
    async fn test_categories_seeded_once() {
        let store = memory_store();
        let repo = CategoryRepository::new(store.clone());

        let seeded = repo.initialize(&default_categories()).await.unwrap();
        assert_eq!(seeded.len(), 8);
        assert!(store.get_item(CATEGORIES_KEY).await.unwrap().is_some());

        // A later seed does not replace what is stored
        let custom = vec![ItemCategory::new("1", "bakery", &["bun"], "🥐")];
        let again = repo.initialize(&custom).await.unwrap();
        assert_eq!(again, seeded);
    }

    #[tokio::test]
    async fn test_category_list_falls_back_to_defaults() {
        let repo = CategoryRepository::new(memory_store());
        assert_eq!(repo.list().await.unwrap(), default_categories());

        let custom = vec![ItemCategory::new("1", "bakery", &["bun"], "🥐")];
        repo.save(&custom).await.unwrap();
        assert_eq!(repo.list().await.unwrap(), custom);
    }
}
