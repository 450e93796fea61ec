//! Conversation domain.
//!
//! - [`entities::Message`]: a single message of a classification transcript
//! - [`entities::Role`]: who a message is attributed to

pub mod entities;
