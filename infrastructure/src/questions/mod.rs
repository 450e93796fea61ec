//! Question bank storage.

mod json_store;

pub use json_store::JsonQuestionStore;
