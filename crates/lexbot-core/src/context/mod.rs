mod history;
pub mod system_prompt;

pub use history::Session;
pub use system_prompt::{PromptComposer, ResponseLength, Topic};
