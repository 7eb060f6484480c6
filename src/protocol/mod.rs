//! Text protocol: whitespace tokenizing, command parsing, and rendering of
//! engine results in the console layout.

mod command;
pub mod render;
mod tokens;

pub use command::{Command, CommandReader};
pub use tokens::Tokens;
