//! crates/study_desk_core/src/chat.rs
//!
//! A model of the rendered chat panel. Entries are only ever appended, except
//! for pending placeholders, which are located by their marker and removed.

use crate::requests::RequestTicket;

/// Text shown in the placeholder while an answer is awaited.
pub const PENDING_TEXT: &str = "Thinking...";

/// Shown instead of an answer when the ask request fails.
pub const APOLOGY_TEXT: &str = "Sorry, something went wrong. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
    PendingAssistant,
    Error,
}

impl ChatRole {
    /// The speaker prefix rendered in front of the entry text.
    pub fn speaker(&self) -> &'static str {
        match self {
            Self::User => "You",
            Self::Assistant | Self::PendingAssistant | Self::Error => "AI",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEntry {
    pub role: ChatRole,
    pub text: String,
    /// Set on pending entries only: the request that is awaited.
    pub marker: Option<RequestTicket>,
}

/// The chat log, in display order, plus its scroll position.
#[derive(Debug, Clone, Default)]
pub struct ChatLog {
    entries: Vec<ChatEntry>,
    scroll_top: usize,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, question: impl Into<String>) -> &ChatEntry {
        self.push(ChatRole::User, question.into(), None)
    }

    pub fn push_pending(&mut self, ticket: RequestTicket) -> &ChatEntry {
        self.push(ChatRole::PendingAssistant, PENDING_TEXT.to_string(), Some(ticket))
    }

    pub fn push_assistant(&mut self, answer: impl Into<String>) -> &ChatEntry {
        self.push(ChatRole::Assistant, answer.into(), None)
    }

    pub fn push_error(&mut self, text: impl Into<String>) -> &ChatEntry {
        self.push(ChatRole::Error, text.into(), None)
    }

    fn push(&mut self, role: ChatRole, text: String, marker: Option<RequestTicket>) -> &ChatEntry {
        self.entries.push(ChatEntry { role, text, marker });
        &self.entries[self.entries.len() - 1]
    }

    /// Removes the pending entry carrying `ticket`. Returns whether one was found;
    /// a missing entry is not an error.
    pub fn remove_pending(&mut self, ticket: RequestTicket) -> bool {
        let before = self.entries.len();
        self.entries
            .retain(|e| !(e.role == ChatRole::PendingAssistant && e.marker == Some(ticket)));
        self.scroll_top = self.scroll_top.min(self.entries.len());
        self.entries.len() != before
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_top = self.scroll_height();
    }

    pub fn scroll_height(&self) -> usize {
        self.entries.len()
    }

    pub fn scroll_top(&self) -> usize {
        self.scroll_top
    }

    pub fn is_at_bottom(&self) -> bool {
        self.scroll_top == self.scroll_height()
    }

    /// Counts the user entries currently in the log.
    pub fn user_entry_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.role == ChatRole::User)
            .count()
    }

    pub fn has_pending(&self) -> bool {
        self.entries
            .iter()
            .any(|e| e.role == ChatRole::PendingAssistant)
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
