use crate::context::{PromptComposer, Session};
use crate::llm::{CompletionBackend, Turn};
use crate::session::RequestOptions;
use std::time::Instant;

/// Runs one user turn end to end.
///
/// Holds no conversation state of its own, so one controller can serve any
/// number of independent sessions. Each session is serialized by the
/// `&mut Session` borrow held across the request.
pub struct SessionController {
    backend: Box<dyn CompletionBackend>,
    composer: PromptComposer,
}

impl SessionController {
    pub fn new(backend: Box<dyn CompletionBackend>) -> Self {
        Self {
            backend,
            composer: PromptComposer::new(),
        }
    }

    pub fn with_composer(mut self, composer: PromptComposer) -> Self {
        self.composer = composer;
        self
    }

    /// Submit `raw_message` and record the exchange.
    ///
    /// Returns the assistant text that was appended. A blank message is a
    /// no-op that returns an empty string.
    pub async fn submit_turn(
        &self,
        session: &mut Session,
        options: &RequestOptions,
        raw_message: &str,
    ) -> String {
        let message = raw_message.trim();
        if message.is_empty() {
            return String::new();
        }

        let system_prompt = self.composer.compose(options.topic, options.length);

        let started = Instant::now();
        let outcome = self
            .backend
            .complete(
                &system_prompt,
                session.turns(),
                message,
                options.temperature(),
            )
            .await;

        tracing::info!(
            session = %session.id(),
            topic = %options.topic,
            length = %options.length,
            outcome = outcome.kind(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "turn completed"
        );

        let reply = outcome.render();
        if let Err(e) = session.append(Turn::user(message), Turn::assistant(reply.clone())) {
            tracing::error!(session = %session.id(), "failed to record exchange: {}", e);
        }
        reply
    }

    pub fn reset_session(&self, session: &mut Session) {
        tracing::info!(session = %session.id(), turns = session.len(), "session cleared");
        session.clear();
    }
}
