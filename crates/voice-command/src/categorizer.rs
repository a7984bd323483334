//! Keyword Categorizer
//!
//! First-match classification: categories are scanned in list order and
//! keywords in their own order, so list order is the tie-break when a name
//! hits keywords of several categories ("chocolate milk" is dairy with the
//! default catalog because dairy comes before snacks).

use crate::category::{ItemCategory, FALLBACK_CATEGORY};

/// Name of the first category with a keyword contained in `item_name`,
/// or `"other"`.
pub fn categorize<'a>(item_name: &str, categories: &'a [ItemCategory]) -> &'a str {
    find_category(item_name, categories)
        .map(|category| category.name.as_str())
        .unwrap_or(FALLBACK_CATEGORY)
}

/// The matching category itself, if any
pub fn find_category<'a>(item_name: &str, categories: &'a [ItemCategory]) -> Option<&'a ItemCategory> {
    let name = item_name.to_lowercase();
    categories.iter().find(|category| {
        category
            .keywords
            .iter()
            .any(|keyword| name.contains(&keyword.to_lowercase()))
    })
}
