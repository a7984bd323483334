//! Voice Command Engine
//!
//! Turns a finalized speech transcript into a structured shopping-list
//! command and sorts item names into keyword categories.
//!
//! Everything here is pure: no I/O, no shared mutable state.
//!
//! ```
//! use voice_command::{parse, categorize, default_categories, ParsedCommand};
//!
//! let cmd = parse("add 2 packets of biscuits");
//! assert_eq!(cmd, ParsedCommand::Add {
//!     item: "biscuits".to_string(),
//!     quantity: 2,
//!     unit: "packets".to_string(),
//! });
//!
//! let categories = default_categories();
//! assert_eq!(categorize("biscuits", &categories), "snacks");
//! ```

mod category;
mod categorizer;
mod command;
mod parser;

pub use category::{default_categories, ItemCategory, FALLBACK_CATEGORY, FALLBACK_ICON};
pub use categorizer::{categorize, find_category};
pub use command::{CommandAction, ParsedCommand, DEFAULT_ITEM, DEFAULT_QUANTITY, DEFAULT_UNIT};
pub use parser::{parse, NUMBER_WORDS, UNITS};
