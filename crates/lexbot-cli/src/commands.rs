use lexbot_core::constants::defaults;
use lexbot_core::{ResponseLength, Topic};

/// Result of processing a slash command.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandResult {
    /// Display a message to the user.
    Message(String),
    /// Clear the chat.
    Clear,
    /// Quit the application.
    Quit,
    /// Change the topic focus.
    TopicChanged(Topic),
    /// Change the response length.
    LengthChanged(ResponseLength),
    /// Change the temperature.
    TemperatureChanged(f32),
    /// List the available topics.
    ListTopics,
    /// Show the current settings.
    ShowSettings,
    /// Not a command - treat as a question.
    NotACommand,
}

pub fn handle_command(input: &str) -> CommandResult {
    let input = input.trim();
    let parts: Vec<&str> = input.splitn(2, ' ').collect();
    let cmd = parts[0];
    let arg = parts.get(1).map(|s| s.trim()).unwrap_or("");

    match cmd {
        "/help" | "/h" => show_help(),
        "/exit" | "/quit" | "/q" => CommandResult::Quit,
        "/clear" | "/new" => CommandResult::Clear,

        "/topics" => CommandResult::ListTopics,
        "/topic" => {
            if arg.is_empty() {
                CommandResult::ListTopics
            } else {
                match arg.parse::<Topic>() {
                    Ok(topic) => CommandResult::TopicChanged(topic),
                    Err(_) => CommandResult::Message(format!(
                        "Unknown topic: {arg}. Type /topics to see the choices."
                    )),
                }
            }
        }
        "/length" => {
            if arg.is_empty() {
                CommandResult::Message("Usage: /length <brief|medium|detailed>".into())
            } else {
                match arg.parse::<ResponseLength>() {
                    Ok(length) => CommandResult::LengthChanged(length),
                    Err(_) => CommandResult::Message(
                        "Invalid length. Options: brief, medium, detailed".into(),
                    ),
                }
            }
        }
        "/temperature" | "/temp" => {
            if arg.is_empty() {
                CommandResult::Message(format!(
                    "Usage: /temperature <{:.1}-{:.1}>  (lower = more focused, higher = more creative)",
                    defaults::MIN_TEMPERATURE,
                    defaults::MAX_TEMPERATURE
                ))
            } else {
                match parse_temperature(arg) {
                    Ok(value) => CommandResult::TemperatureChanged(value),
                    Err(message) => CommandResult::Message(message),
                }
            }
        }
        "/settings" | "/status" => CommandResult::ShowSettings,
        "/version" => CommandResult::Message(format!("LexBot CLI v{}", env!("CARGO_PKG_VERSION"))),

        _ => {
            if input.starts_with('/') {
                CommandResult::Message(format!("Unknown command: {cmd}. Type /help for commands."))
            } else {
                CommandResult::NotACommand
            }
        }
    }
}

/// Parse a temperature, rejecting anything outside the allowed range.
/// Shared by `/temperature` and the `--temperature` flag.
pub fn parse_temperature(s: &str) -> Result<f32, String> {
    match s.trim().parse::<f32>() {
        Ok(value) if (defaults::MIN_TEMPERATURE..=defaults::MAX_TEMPERATURE).contains(&value) => {
            Ok(value)
        }
        _ => Err(format!(
            "Temperature must be a number between {:.1} and {:.1}",
            defaults::MIN_TEMPERATURE,
            defaults::MAX_TEMPERATURE
        )),
    }
}

fn show_help() -> CommandResult {
    let help_text = "\
╭─ LexBot Commands ──────────────────────────────────────────────╮

  CHAT
    <question>                Ask a legal question
    /clear, /new              Clear chat history

  SETTINGS
    /topic <name>             Focus on a legal area (e.g. /topic contract law)
    /topics                   List legal topics
    /length <mode>            Response length (brief, medium, detailed)
    /temperature <value>      Response style, 0.1 (focused) to 1.0 (creative)
    /settings, /status        Show current settings

  OTHER
    /help, /h                 Show this help message
    /version                  Show version information
    /exit, /quit, /q          Quit

╰────────────────────────────────────────────────────────────────╯";

    CommandResult::Message(help_text.into())
}
