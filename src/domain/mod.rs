//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! Categories and parsed commands come from the `voice-command` crate.

mod entity;
mod item;
mod suggestion;

pub use entity::{Entity, DomainError, DomainResult};
pub use item::ShoppingItem;
pub use suggestion::{Suggestion, SUGGESTIONS};
pub use voice_command::{ItemCategory, ParsedCommand};
