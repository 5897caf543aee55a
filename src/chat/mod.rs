//! BrainyBot: rule-based replies and the chat transcript around them.
//!
//! Replies are picked from a fixed rule table by substring matching.
//! The session keeps the transcript and queues turns so a caller can add
//! a typing delay between question and answer.

pub mod repl;
pub mod rules;
pub mod session;

pub use repl::{ChatInput, ChatLoop, ExitReason};
pub use rules::{classify, respond, Intent, IntentRule, FALLBACK_REPLY, RULES};
pub use session::{ChatSession, Message, Role, QUICK_REPLIES, WELCOME_MESSAGE};
