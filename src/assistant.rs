//! Shopping Assistant
//!
//! Applies parsed voice commands to the item list and keeps the small
//! amount of session state a front end needs: the active search query and
//! the last transcript heard.

use serde::Serialize;
use voice_command::{categorize, parse, ParsedCommand, FALLBACK_ICON};

use crate::domain::{DomainResult, ItemCategory, ShoppingItem, Suggestion, SUGGESTIONS};
use crate::repository::{CategoryRepository, ItemRepository, Repository, SearchableRepository, SharedStore};

/// What happened for one transcript
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandOutcome {
    pub command: ParsedCommand,
    /// Message for the user, if the action produces one
    pub notification: Option<String>,
}

/// Items sharing a category, in list order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemGroup {
    pub category: String,
    pub icon: String,
    pub items: Vec<ShoppingItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ListStats {
    pub total: usize,
    pub completed: usize,
}

pub struct ShoppingAssistant {
    items: ItemRepository,
    categories: Vec<ItemCategory>,
    search_query: String,
    last_command: Option<String>,
}

impl ShoppingAssistant {
    /// Load categories (seeding them on first run) and attach to the item list
    pub async fn open(store: SharedStore, seed: &[ItemCategory]) -> DomainResult<Self> {
        let categories = CategoryRepository::new(store.clone()).initialize(seed).await?;
        Ok(Self {
            items: ItemRepository::new(store),
            categories,
            search_query: String::new(),
            last_command: None,
        })
    }

    pub fn categories(&self) -> &[ItemCategory] {
        &self.categories
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn last_command(&self) -> Option<&str> {
        self.last_command.as_deref()
    }

    /// Parse a finalized transcript and apply it
    pub async fn handle_transcript(&mut self, transcript: &str) -> DomainResult<CommandOutcome> {
        self.last_command = Some(transcript.to_string());
        let command = parse(transcript);
        log::info!("heard {:?} -> {}", transcript, command.action());

        let notification = self.apply(&command).await?;
        Ok(CommandOutcome { command, notification })
    }

    /// Apply an already parsed command
    pub async fn apply(&mut self, command: &ParsedCommand) -> DomainResult<Option<String>> {
        match command {
            ParsedCommand::Add { item, quantity, unit } => {
                let added = self.add_item(item, *quantity, unit).await?;
                Ok(Some(format!("Added {} {} of {}", added.quantity, added.unit, added.name)))
            }
            ParsedCommand::Remove { item } if !item.is_empty() => {
                Ok(Some(match self.remove_item_by_name(item).await? {
                    Some(removed) => format!("Removed {}", removed.name),
                    None => "Item not found".to_string(),
                }))
            }
            ParsedCommand::Search { search_query } if !search_query.is_empty() => {
                self.search_query = search_query.clone();
                Ok(Some(format!("Searching for: {}", search_query)))
            }
            ParsedCommand::Clear => {
                self.clear_all_items().await?;
                Ok(Some("All items cleared".to_string()))
            }
            // Both directions toggle the first matching item
            ParsedCommand::Check { item } | ParsedCommand::Uncheck { item } if !item.is_empty() => {
                self.toggle_by_name(item).await?;
                Ok(None)
            }
            ParsedCommand::Unknown => Ok(Some("Command not recognized".to_string())),
            _ => Ok(None),
        }
    }

    /// Categorize and prepend a new item
    pub async fn add_item(&self, name: &str, quantity: u32, unit: &str) -> DomainResult<ShoppingItem> {
        let category = categorize(name, &self.categories).to_string();
        let item = ShoppingItem::new(name.to_string(), quantity, unit.to_string(), category);
        self.items.create(&item).await
    }

    /// Add a suggestion as one plain item
    pub async fn add_suggestion(&self, suggestion: &Suggestion) -> DomainResult<ShoppingItem> {
        self.add_item(suggestion.name, 1, voice_command::DEFAULT_UNIT).await
    }

    pub fn suggestions(&self) -> &'static [Suggestion] {
        SUGGESTIONS
    }

    /// Delete the first item whose name contains `fragment`
    pub async fn remove_item_by_name(&self, fragment: &str) -> DomainResult<Option<ShoppingItem>> {
        let found = self.items.find_first(fragment).await?;
        if let Some(item) = &found {
            self.items.delete(item.id).await?;
        }
        Ok(found)
    }

    /// Toggle the first item whose name contains `fragment`
    pub async fn toggle_by_name(&self, fragment: &str) -> DomainResult<Option<ShoppingItem>> {
        match self.items.find_first(fragment).await? {
            Some(item) => Ok(Some(self.items.toggle_completed(item.id).await?)),
            None => Ok(None),
        }
    }

    pub async fn toggle_item(&self, id: u32) -> DomainResult<ShoppingItem> {
        self.items.toggle_completed(id).await
    }

    pub async fn delete_item(&self, id: u32) -> DomainResult<()> {
        self.items.delete(id).await
    }

    pub async fn clear_all_items(&self) -> DomainResult<usize> {
        self.items.clear().await
    }

    pub async fn items(&self) -> DomainResult<Vec<ShoppingItem>> {
        self.items.list().await
    }

    /// Items matching the active search query
    pub async fn visible_items(&self) -> DomainResult<Vec<ShoppingItem>> {
        self.items.search(&self.search_query).await
    }

    /// Visible items grouped by category, groups in first-appearance order
    pub async fn grouped_items(&self) -> DomainResult<Vec<ItemGroup>> {
        let mut groups: Vec<ItemGroup> = Vec::new();
        for item in self.visible_items().await? {
            match groups.iter_mut().find(|g| g.category == item.category) {
                Some(group) => group.items.push(item),
                None => groups.push(ItemGroup {
                    icon: self.category_icon(&item.category).to_string(),
                    category: item.category.clone(),
                    items: vec![item],
                }),
            }
        }
        Ok(groups)
    }

    /// Counts over the whole list, ignoring the search query
    pub async fn stats(&self) -> DomainResult<ListStats> {
        let items = self.items.list().await?;
        Ok(ListStats {
            total: items.len(),
            completed: items.iter().filter(|i| i.is_completed).count(),
        })
    }

    pub fn category_icon(&self, category: &str) -> &str {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .map(|c| c.icon.as_str())
            .unwrap_or(FALLBACK_ICON)
    }
}
