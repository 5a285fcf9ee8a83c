use anyhow::{Context, Result};
use clap::Parser;
use lexbot_core::{ResponseLength, Settings, Topic};
use std::path::PathBuf;

mod app;
mod commands;

#[derive(Parser)]
#[command(name = "lexbot")]
#[command(about = "LexBot - general legal information from a hosted LLM")]
#[command(version)]
struct Cli {
    /// Ask a single question and exit
    #[arg(short, long)]
    prompt: Option<String>,

    /// Legal topic focus (e.g. "Contract Law", contract-law, ip)
    #[arg(short, long)]
    topic: Option<Topic>,

    /// Response length (brief, medium, detailed)
    #[arg(short, long)]
    length: Option<ResponseLength>,

    /// Response style, 0.1 (focused) to 1.0 (creative)
    #[arg(long, value_parser = commands::parse_temperature)]
    temperature: Option<f32>,

    /// LLM model to use
    #[arg(short, long)]
    model: Option<String>,

    /// Path to a config file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut settings = match cli.config {
        Some(ref path) => Settings::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Settings::load(),
    };

    if let Some(ref model) = cli.model {
        settings.llm.model = model.clone();
    }
    if let Some(topic) = cli.topic {
        settings.chat.topic = topic;
    }
    if let Some(length) = cli.length {
        settings.chat.length = length;
    }
    if let Some(temperature) = cli.temperature {
        settings.chat.temperature = temperature;
    }

    let options = settings.request_options();

    if let Some(prompt) = cli.prompt {
        app::run_single_prompt(&settings, options, &prompt).await?;
    } else {
        app::run_interactive(&settings, options).await?;
    }

    Ok(())
}
