mod traits;
mod client;

pub use traits::*;
pub use client::{build_messages, CompletionClient, CompletionConfig};
