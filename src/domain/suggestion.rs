//! Quick-add suggestions shown next to the list.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub name: &'static str,
    /// Short reason shown under the name
    pub label: &'static str,
}

pub const SUGGESTIONS: &[Suggestion] = &[
    Suggestion { name: "Organic Apples", label: "Seasonal" },
    Suggestion { name: "Fresh Bread", label: "Popular" },
    Suggestion { name: "Almond Milk", label: "Alternative" },
    Suggestion { name: "Greek Yogurt", label: "Healthy" },
    Suggestion { name: "Dark Chocolate", label: "Snack" },
    Suggestion { name: "Olive Oil", label: "Pantry" },
    Suggestion { name: "Avocados", label: "Fresh" },
    Suggestion { name: "Chicken Breast", label: "Protein" },
];
