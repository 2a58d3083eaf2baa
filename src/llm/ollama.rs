use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::{Settings, DEFAULT_OLLAMA_ENDPOINT};
use crate::llm::client::LlmProvider;
use crate::llm::prompts::PromptMessage;

pub struct OllamaClient {
    http: Client,
    endpoint: String,
}

impl OllamaClient {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let endpoint = if settings.llm.endpoint.trim().is_empty() {
            DEFAULT_OLLAMA_ENDPOINT.to_string()
        } else {
            settings
                .llm
                .endpoint
                .trim()
                .trim_end_matches('/')
                .to_string()
        };

        let mut builder = Client::builder();
        if let Some(timeout) = settings.llm.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder
                .build()
                .context("Failed to build Ollama HTTP client")?,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn chat_url(&self) -> String {
        format!("{}/api/chat", self.endpoint)
    }

    fn tags_url(&self) -> String {
        format!("{}/api/tags", self.endpoint)
    }

    /// Names of the models the local Ollama instance has pulled.
    pub async fn list_models(&self) -> Result<Vec<String>> {
        let payload: OllamaTagsResponse = self
            .http
            .get(self.tags_url())
            .send()
            .await
            .context("Ollama request failed")?
            .error_for_status()
            .context("Ollama returned an error status")?
            .json()
            .await
            .context("Failed to parse Ollama model list")?;

        Ok(payload.models.into_iter().map(|m| m.name).collect())
    }
}

#[async_trait]
impl LlmProvider for OllamaClient {
    async fn chat(&self, model: &str, messages: &[PromptMessage]) -> Result<String> {
        let body = OllamaChatRequest {
            model,
            messages,
            stream: false,
        };

        let response = self
            .http
            .post(self.chat_url())
            .json(&body)
            .send()
            .await
            .context("Ollama request failed")?;

        let response = response
            .error_for_status()
            .context("Ollama returned an error status")?;

        let payload: OllamaChatResponse = response
            .json()
            .await
            .context("Failed to parse Ollama response")?;

        Ok(payload.message.content)
    }
}

#[derive(Debug, Serialize)]
struct OllamaChatRequest<'a> {
    model: &'a str,
    messages: &'a [PromptMessage],
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct OllamaChatResponse {
    message: OllamaMessage,
}

#[derive(Debug, Deserialize)]
struct OllamaMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct OllamaTagsResponse {
    #[serde(default)]
    models: Vec<OllamaModelTag>,
}

#[derive(Debug, Deserialize)]
struct OllamaModelTag {
    name: String,
}
