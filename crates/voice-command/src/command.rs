//! Parsed Command
//!
//! The structured result of interpreting one transcript.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Quantity used when the transcript names none
pub const DEFAULT_QUANTITY: u32 = 1;
/// Unit used when the transcript names none
pub const DEFAULT_UNIT: &str = "item";
/// Item name used when nothing is left after stripping quantity and unit
pub const DEFAULT_ITEM: &str = "item";

/// Intent of a transcript, without parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandAction {
    Add,
    Remove,
    Search,
    Clear,
    Check,
    Uncheck,
    Unknown,
}

impl CommandAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandAction::Add => "add",
            CommandAction::Remove => "remove",
            CommandAction::Search => "search",
            CommandAction::Clear => "clear",
            CommandAction::Check => "check",
            CommandAction::Uncheck => "uncheck",
            CommandAction::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CommandAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified transcript with the parameters its action needs.
///
/// Each variant carries only the fields meaningful for that action, so an
/// `Add` always has item, quantity and unit, and `Unknown` carries nothing.
///
/// Serializes as a flat object tagged by `action`, e.g.
/// `{"action":"search","searchQuery":"bread"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum ParsedCommand {
    Add {
        item: String,
        quantity: u32,
        unit: String,
    },
    Remove {
        item: String,
    },
    Search {
        #[serde(rename = "searchQuery")]
        search_query: String,
    },
    Clear,
    Check {
        item: String,
    },
    Uncheck {
        item: String,
    },
    Unknown,
}

impl ParsedCommand {
    pub fn action(&self) -> CommandAction {
        match self {
            ParsedCommand::Add { .. } => CommandAction::Add,
            ParsedCommand::Remove { .. } => CommandAction::Remove,
            ParsedCommand::Search { .. } => CommandAction::Search,
            ParsedCommand::Clear => CommandAction::Clear,
            ParsedCommand::Check { .. } => CommandAction::Check,
            ParsedCommand::Uncheck { .. } => CommandAction::Uncheck,
            ParsedCommand::Unknown => CommandAction::Unknown,
        }
    }

    /// Item name for add/remove/check/uncheck
    pub fn item(&self) -> Option<&str> {
        match self {
            ParsedCommand::Add { item, .. }
            | ParsedCommand::Remove { item }
            | ParsedCommand::Check { item }
            | ParsedCommand::Uncheck { item } => Some(item),
            _ => None,
        }
    }

    pub fn quantity(&self) -> Option<u32> {
        match self {
            ParsedCommand::Add { quantity, .. } => Some(*quantity),
            _ => None,
        }
    }

    pub fn unit(&self) -> Option<&str> {
        match self {
            ParsedCommand::Add { unit, .. } => Some(unit),
            _ => None,
        }
    }

    pub fn search_query(&self) -> Option<&str> {
        match self {
            ParsedCommand::Search { search_query } => Some(search_query),
            _ => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, ParsedCommand::Unknown)
    }
}
