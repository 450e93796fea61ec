//! LLM provider adapters
//!
//! Implementations of the [`LlmGateway`](ryg_application::LlmGateway) port.

pub mod openai;

pub use openai::OpenAiGateway;
