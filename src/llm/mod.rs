//! LLM module for quicknote
//!
//! Builds the summary prompt and talks to the local Ollama instance.

pub(crate) mod client;
mod ollama;
mod prompts;
mod summary;

pub use client::{build_provider, LlmProvider};
pub use ollama::OllamaClient;
pub use prompts::{build_summary_messages, PromptMessage, Role, SYSTEM_PROMPT};
pub use summary::{Summarizer, SummaryRequest, DEFAULT_SELECTOR};
