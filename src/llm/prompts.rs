use serde::{Deserialize, Serialize};

/// System instruction sent ahead of every summary request.
pub const SYSTEM_PROMPT: &str = "You are a concise summarization assistant.";

/// Speaker of a prompt message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// A role-tagged fragment of the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMessage {
    pub role: Role,
    pub content: String,
}

impl PromptMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Build the fixed two-message prompt for a keyword summary.
///
/// The keyword is embedded verbatim; no escaping or trimming happens here.
pub fn build_summary_messages(keyword: &str) -> Vec<PromptMessage> {
    vec![
        PromptMessage::system(SYSTEM_PROMPT),
        PromptMessage::user(format!(
            "Summarize the topic: {keyword}. Use less than 50 words and explain in clear terms using examples when necessary"
        )),
    ]
}
