pub mod error;
pub mod constants;
pub mod llm;
pub mod context;
pub mod config;
pub mod session;

// Re-export key types
pub use error::{LexError, Result};
pub use llm::{
    CompletionBackend, CompletionClient, CompletionConfig, CompletionFailure, CompletionOutcome,
    Role, Turn,
};
pub use context::{PromptComposer, ResponseLength, Session, Topic};
pub use config::Settings;
pub use session::{RequestOptions, SessionController};
