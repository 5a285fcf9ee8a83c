// Slash-command parsing, exposed for the integration tests. main.rs compiles
// the same file as its own module.

#[path = "commands.rs"]
pub mod commands;

pub use commands::{handle_command, parse_temperature, CommandResult};
