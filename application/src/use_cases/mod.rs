//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod classify_responses;
pub mod draw_questions;
pub mod question_bank;
