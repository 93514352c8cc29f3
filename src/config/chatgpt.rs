//! ChatGPT settings.

use serde::Serialize;

/// Credentials and model selection for the ChatGPT backend.
///
/// Serializes to the camelCase JSON object the bot function reads from
/// `CHATGPT_SETTINGS`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatGptConfig {
    /// OpenAI API key.
    pub api_key: String,
    /// Model name, e.g. "gpt-4".
    pub model: String,
    /// Stream responses back to Slack.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
}
