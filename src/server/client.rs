//! HTTP client for a running quicknote endpoint

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};

use crate::config::Settings;
use crate::server::{SummaryResponse, SUMMARY_PATH};

/// Client used by the `note` command to reach the summary route.
pub struct SummaryClient {
    http: Client,
    base_url: String,
}

impl SummaryClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.server.base_url())
    }

    /// Ask the endpoint for a summary; anything but a 200 is an error.
    pub async fn fetch_summary(&self, keyword: &str, model: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, SUMMARY_PATH);
        let response = self
            .http
            .get(&url)
            .query(&[("keyword", keyword), ("model", model)])
            .send()
            .await
            .with_context(|| {
                format!(
                    "Failed to reach quicknote at {}. Is it running? Try: quicknote serve",
                    self.base_url
                )
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            anyhow::bail!("Server returned {}", status);
        }

        match response
            .json::<SummaryResponse>()
            .await
            .context("Failed to parse summary response")?
        {
            SummaryResponse::Summary { summary } => Ok(summary),
            SummaryResponse::Error { error } => anyhow::bail!("{}", error),
        }
    }
}
