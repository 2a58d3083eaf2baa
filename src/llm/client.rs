use anyhow::Result;
use async_trait::async_trait;

use crate::config::Settings;
use crate::llm::ollama::OllamaClient;
use crate::llm::prompts::PromptMessage;

/// A local inference backend that answers a role-tagged conversation.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    async fn chat(&self, model: &str, messages: &[PromptMessage]) -> Result<String>;
}

/// Build an LLM provider from runtime settings.
pub fn build_provider(settings: &Settings) -> crate::Result<Box<dyn LlmProvider>> {
    match settings.llm.provider.to_lowercase().as_str() {
        "ollama" => OllamaClient::from_settings(settings)
            .map(|client| Box::new(client) as Box<dyn LlmProvider>)
            .map_err(|e| crate::QuickNoteError::Config(format!("{e:#}"))),
        other => Err(crate::QuickNoteError::Config(format!(
            "Unsupported llm.provider '{}'. Supported providers: ollama",
            other
        ))),
    }
}
