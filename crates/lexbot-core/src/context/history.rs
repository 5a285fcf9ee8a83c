use crate::error::{LexError, Result};
use crate::llm::{Role, Turn};
use uuid::Uuid;

/// Ordered turn history for one conversation.
///
/// Turns only ever go in as complete (user, assistant) pairs, so the length
/// is always even. A `Session` has exactly one owner; mutation needs `&mut`.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    turns: Vec<Turn>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            turns: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Append one exchange. Both turns land or neither does.
    pub fn append(&mut self, user: Turn, assistant: Turn) -> Result<()> {
        if user.role() != Role::User {
            return Err(LexError::invalid_turn(format!(
                "first turn of a pair must be from the user, got {}",
                user.role().as_str()
            )));
        }
        if assistant.role() != Role::Assistant {
            return Err(LexError::invalid_turn(format!(
                "second turn of a pair must be from the assistant, got {}",
                assistant.role().as_str()
            )));
        }

        self.turns.reserve(2);
        self.turns.push(user);
        self.turns.push(assistant);
        Ok(())
    }

    /// Snapshot of the history in insertion order.
    pub fn history(&self) -> Vec<Turn> {
        self.turns.clone()
    }

    /// Borrowed view of the history, valid until the next mutation.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn pair_count(&self) -> usize {
        self.turns.len() / 2
    }

    /// Content of the most recent assistant turn.
    pub fn last_reply(&self) -> Option<&str> {
        self.turns
            .last()
            .filter(|turn| turn.role() == Role::Assistant)
            .map(Turn::content)
    }

    /// Rough size of the history, at four bytes per token.
    pub fn estimate_tokens(&self) -> usize {
        self.turns.iter().map(|t| t.content().len() / 4).sum()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
