//! Brainy: the decision core of an event-discovery community app.
//!
//! BrainyBot answers questions from a fixed rule table, and the event
//! browser filters and ranks rows that were already fetched from the
//! backend. Storage, auth and rendering live elsewhere.

pub mod chat;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod events;
pub mod leaderboard;
pub mod store;
pub mod teams;
