use std::sync::Arc;

use crate::llm::client::LlmProvider;
use crate::llm::prompts::build_summary_messages;
use crate::{QuickNoteError, Result};

/// Value used for both `keyword` and `model` when a caller leaves them out.
pub const DEFAULT_SELECTOR: &str = "default";

/// Summary generation request payload.
#[derive(Debug, Clone, Copy)]
pub struct SummaryRequest<'a> {
    pub keyword: &'a str,
    pub model: &'a str,
}

impl Default for SummaryRequest<'_> {
    fn default() -> Self {
        Self {
            keyword: DEFAULT_SELECTOR,
            model: DEFAULT_SELECTOR,
        }
    }
}

/// Turns a keyword into a short summary using the configured backend.
#[derive(Clone)]
pub struct Summarizer {
    provider: Arc<dyn LlmProvider>,
    default_model: String,
}

impl Summarizer {
    pub fn new(provider: Arc<dyn LlmProvider>, default_model: impl Into<String>) -> Self {
        Self {
            provider,
            default_model: default_model.into(),
        }
    }

    /// Underlying model identifier for a selector. Only `"default"` is known.
    pub fn resolve_model(&self, selector: &str) -> Result<&str> {
        if selector == DEFAULT_SELECTOR {
            Ok(&self.default_model)
        } else {
            Err(QuickNoteError::UnknownModel(selector.to_string()))
        }
    }

    pub async fn summarize(&self, request: SummaryRequest<'_>) -> Result<String> {
        let model = self.resolve_model(request.model)?;
        let messages = build_summary_messages(request.keyword);

        tracing::debug!(keyword = %request.keyword, model = %model, "invoking model");

        self.provider
            .chat(model, &messages)
            .await
            .map_err(QuickNoteError::Invocation)
    }
}
