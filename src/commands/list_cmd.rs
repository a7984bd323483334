//! List Commands
//!
//! Direct list operations and text rendering of the grouped list.

use crate::assistant::ShoppingAssistant;
use crate::domain::ShoppingItem;

/// Grouped list followed by totals
pub async fn render_list(assistant: &ShoppingAssistant) -> Result<String, String> {
    let groups = assistant.grouped_items().await.map_err(|e| e.to_string())?;
    let stats = assistant.stats().await.map_err(|e| e.to_string())?;

    let mut out = String::new();
    if groups.is_empty() {
        out.push_str("Your shopping list is empty\n");
        if assistant.search_query().is_empty() {
            out.push_str("Say \"Add milk\" to get started!\n");
        }
    }
    for group in &groups {
        out.push_str(&format!("{} {}\n", group.icon, group.category.to_uppercase()));
        for item in &group.items {
            out.push_str(&format!("  {}\n", render_item(item)));
        }
    }
    out.push_str(&format!("Total items: {}  Completed: {}", stats.total, stats.completed));
    Ok(out)
}

fn render_item(item: &ShoppingItem) -> String {
    let mark = if item.is_completed { "x" } else { " " };
    format!("[{}] #{} {} {} {}", mark, item.id, item.quantity, item.unit, item.name)
}

/// Numbered suggestion list, starting at 1
pub fn render_suggestions(assistant: &ShoppingAssistant) -> String {
    assistant
        .suggestions()
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{}. {} ({})", i + 1, s.name, s.label))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Add the suggestion at 1-based `index`
pub async fn add_suggestion(assistant: &ShoppingAssistant, index: usize) -> Result<String, String> {
    let suggestion = index
        .checked_sub(1)
        .and_then(|i| assistant.suggestions().get(i))
        .ok_or_else(|| format!("No suggestion {}", index))?;
    let item = assistant.add_suggestion(suggestion).await.map_err(|e| e.to_string())?;
    Ok(format!("Added {} {} of {}", item.quantity, item.unit, item.name))
}

pub async fn toggle_item(assistant: &ShoppingAssistant, id: u32) -> Result<String, String> {
    let item = assistant.toggle_item(id).await.map_err(|e| e.to_string())?;
    Ok(render_item(&item))
}

pub async fn delete_item(assistant: &ShoppingAssistant, id: u32) -> Result<String, String> {
    assistant.delete_item(id).await.map_err(|e| e.to_string())?;
    Ok("Item deleted".to_string())
}

pub async fn clear_items(assistant: &ShoppingAssistant) -> Result<String, String> {
    assistant.clear_all_items().await.map_err(|e| e.to_string())?;
    Ok("All items cleared".to_string())
}
