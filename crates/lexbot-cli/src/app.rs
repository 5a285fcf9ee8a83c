use anyhow::Result;
use lexbot_core::constants::prompts;
use lexbot_core::{
    CompletionClient, CompletionConfig, RequestOptions, Session, SessionController, Settings,
    Topic,
};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::commands::{handle_command, CommandResult};

fn build_controller(settings: &Settings, config: CompletionConfig) -> Result<SessionController> {
    let client = CompletionClient::new(config)?;
    Ok(SessionController::new(Box::new(client)).with_composer(settings.prompt_composer()))
}

// ── Single-prompt mode ──────────────────────────────────────────────────

pub async fn run_single_prompt(
    settings: &Settings,
    options: RequestOptions,
    prompt: &str,
) -> Result<()> {
    let controller = build_controller(settings, settings.completion_config())?;
    let mut session = Session::new();

    let reply = controller.submit_turn(&mut session, &options, prompt).await;
    if reply.is_empty() {
        eprintln!("Nothing to ask: the prompt is empty.");
    } else {
        println!("{reply}");
    }
    Ok(())
}

// ── Interactive mode ────────────────────────────────────────────────────

struct ChatState {
    session: Session,
    options: RequestOptions,
    model: String,
    has_key: bool,
    should_quit: bool,
}

impl ChatState {
    fn new(options: RequestOptions, config: &CompletionConfig) -> Self {
        Self {
            session: Session::new(),
            options,
            model: config.model.clone(),
            has_key: config.credential().is_some(),
            should_quit: false,
        }
    }

    /// Apply a non-question command. Returns text to show, if any.
    fn apply(&mut self, controller: &SessionController, command: CommandResult) -> Option<String> {
        match command {
            CommandResult::Message(text) => Some(text),
            CommandResult::Clear => {
                controller.reset_session(&mut self.session);
                Some("Chat cleared.".into())
            }
            CommandResult::Quit => {
                self.should_quit = true;
                None
            }
            CommandResult::TopicChanged(topic) => {
                self.options = self.options.with_topic(topic);
                Some(format!("Topic focus: {topic}"))
            }
            CommandResult::LengthChanged(length) => {
                self.options = self.options.with_length(length);
                Some(format!("Response length: {length}"))
            }
            CommandResult::TemperatureChanged(value) => {
                self.options = self.options.with_temperature(value);
                Some(format!("Temperature: {:.1}", self.options.temperature()))
            }
            CommandResult::ListTopics => Some(self.topic_list()),
            CommandResult::ShowSettings => Some(self.settings_summary()),
            CommandResult::NotACommand => None,
        }
    }

    fn topic_list(&self) -> String {
        let mut out = String::from("Legal topics:\n");
        for topic in Topic::ALL {
            let marker = if topic == self.options.topic { "*" } else { " " };
            out.push_str(&format!("  {marker} {topic}\n"));
        }
        out.push_str("Usage: /topic <name>");
        out
    }

    fn settings_summary(&self) -> String {
        format!(
            "Topic: {}\nLength: {}\nTemperature: {:.1}\nModel: {}\nAPI key: {}\nExchanges: {}\nEstimated tokens: {}",
            self.options.topic,
            self.options.length,
            self.options.temperature(),
            self.model,
            if self.has_key { "set" } else { "missing" },
            self.session.pair_count(),
            self.session.estimate_tokens(),
        )
    }
}

fn print_banner(settings: &Settings, state: &ChatState) {
    println!("⚖️  LexBot - Your AI Legal Advisor");
    println!(
        "{} | {} | {} | temperature {:.1}",
        settings.llm.model,
        state.options.topic,
        state.options.length,
        state.options.temperature()
    );
    println!();
    println!("{}", prompts::NOTICE);
    println!();
    println!("{}", prompts::TIPS);
    println!();
    println!("Type a question and press Enter. /help for commands, /quit to exit.");
    if !state.has_key {
        eprintln!(
            "\nWarning: {} is not set. Questions will fail until an API key is provided.",
            settings.llm.api_key_env
        );
    }
}

fn show_prompt() {
    print!("\n> ");
    let _ = std::io::stdout().flush();
}

pub async fn run_interactive(settings: &Settings, options: RequestOptions) -> Result<()> {
    let config = settings.completion_config();
    let mut state = ChatState::new(options, &config);
    let controller = build_controller(settings, config)?;

    print_banner(settings, &state);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while !state.should_quit {
        show_prompt();
        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };

        match handle_command(&line) {
            CommandResult::NotACommand => {
                if line.trim().is_empty() {
                    continue;
                }
                eprintln!("Thinking...");
                // Input is not read again until this turn is recorded.
                let reply = controller
                    .submit_turn(&mut state.session, &state.options, &line)
                    .await;
                println!("\n{reply}");
            }
            command => {
                if let Some(text) = state.apply(&controller, command) {
                    println!("{text}");
                }
            }
        }
    }

    tracing::debug!(exchanges = state.session.pair_count(), "interactive session ended");
    Ok(())
}
