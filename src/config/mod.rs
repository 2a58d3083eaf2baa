//! Configuration module for quicknote
//!
//! Handles loading and managing application settings from TOML files.

mod settings;

pub use settings::{LlmSettings, ServerSettings, Settings, DEFAULT_OLLAMA_ENDPOINT};
