//! Commands Layer
//!
//! Front-end handlers over the assistant. Errors cross this boundary as
//! display strings.

mod voice_cmd;
mod list_cmd;
mod log_cmd;

pub use voice_cmd::*;
pub use list_cmd::*;
pub use log_cmd::*;
