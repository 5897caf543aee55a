//! Chat session: append-only transcript with queued assistant turns.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::rules::respond;

/// Opening line shown before the user types anything.
pub const WELCOME_MESSAGE: &str =
    "Hi! 👋 I'm BrainyBot, your event assistant. How can I help you today?";

/// Canned prompts offered at the start of a conversation.
pub const QUICK_REPLIES: [&str; 4] = [
    "How do I register for an event?",
    "How do I create a team?",
    "How does the leaderboard work?",
    "How do I host an event?",
];

/// Quick replies are hidden once the transcript grows past this.
const QUICK_REPLY_CUTOFF: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One transcript line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// A single conversation with BrainyBot.
///
/// `send` records the user line and queues a turn; `resolve_next` produces
/// the reply. The caller decides how long to "type" in between.
#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<Message>,
    pending: VecDeque<String>,
}

impl ChatSession {
    /// Start a session with the welcome message.
    pub fn new() -> Self {
        Self {
            messages: vec![Message::assistant(WELCOME_MESSAGE)],
            pending: VecDeque::new(),
        }
    }

    /// Submit user text. Blank input is ignored and returns false.
    pub fn send(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        self.messages.push(Message::user(text));
        self.pending.push_back(text.to_string());
        true
    }

    /// Answer the oldest pending turn, returning the appended reply.
    pub fn resolve_next(&mut self) -> Option<&Message> {
        let text = self.pending.pop_front()?;
        self.messages.push(Message::assistant(respond(&text)));
        self.messages.last()
    }

    /// Answer every pending turn in order. Returns how many were answered.
    pub fn resolve_all(&mut self) -> usize {
        let mut count = 0;
        while self.resolve_next().is_some() {
            count += 1;
        }
        count
    }

    /// Whether a reply is still owed.
    pub fn is_typing(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn pending_turns(&self) -> usize {
        self.pending.len()
    }

    /// Whether quick-reply prompts should still be offered.
    pub fn shows_quick_replies(&self) -> bool {
        self.messages.len() <= QUICK_REPLY_CUTOFF
    }

    /// The full transcript, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
