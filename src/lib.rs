//! quicknote - A tiny local service that summarizes a keyword with a local LLM
//!
//! Exposes `GET /generate_summary` and forwards a fixed prompt to Ollama.

pub mod cli;
pub mod config;
pub mod llm;
pub mod server;

use thiserror::Error;

/// Main error type for quicknote
#[derive(Error, Debug)]
pub enum QuickNoteError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown model selector: '{0}'")]
    UnknownModel(String),

    #[error("Model invocation failed: {0:#}")]
    Invocation(anyhow::Error),
}

pub type Result<T> = std::result::Result<T, QuickNoteError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "quicknote";
