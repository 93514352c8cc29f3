//! Loosely-typed document shape and the validation pass that turns it
//! into a [`Config`].

use serde::Deserialize;
use serde_yaml::Value;

use super::{ChatGptConfig, Config, ConfigError, DeploymentEnv};

/// Mirror of [`Config`] with every field optional, so absent keys can be
/// reported by name instead of as a generic deserialization failure.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConfig {
    env: Option<DeploymentEnv>,
    stack_name: Option<String>,
    log_level: Option<String>,
    domain_name: Option<String>,
    certificate_arn: Option<String>,
    slack_signing_secret: Option<String>,
    slack_bot_token: Option<String>,
    slack_bot_member_id: Option<String>,
    chat_gpt: Option<RawChatGpt>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawChatGpt {
    api_key: Option<String>,
    model: Option<String>,
    stream: Option<bool>,
}

/// Parse YAML text and validate it into a [`Config`].
pub(super) fn parse(text: &str) -> Result<Config, ConfigError> {
    let document: Value = serde_yaml::from_str(text).map_err(ConfigError::Parse)?;

    // An empty document carries no keys at all.
    let raw: RawConfig = match document {
        Value::Null => RawConfig::default(),
        other => serde_yaml::from_value(other).map_err(ConfigError::Schema)?,
    };

    raw.validate()
}

impl RawConfig {
    fn validate(self) -> Result<Config, ConfigError> {
        let stack_name = required(self.stack_name, "stackName")?;
        let slack_signing_secret = required(self.slack_signing_secret, "slackSigningSecret")?;
        let slack_bot_token = required(self.slack_bot_token, "slackBotToken")?;
        let slack_bot_member_id = required(self.slack_bot_member_id, "slackBotMemberId")?;

        let chat_gpt = self
            .chat_gpt
            .ok_or_else(|| ConfigError::MissingField("chatGpt".into()))?;
        let chat_gpt = ChatGptConfig {
            api_key: required(chat_gpt.api_key, "chatGpt.apiKey")?,
            model: required(chat_gpt.model, "chatGpt.model")?,
            stream: chat_gpt.stream,
        };

        Ok(Config {
            env: self.env,
            stack_name,
            log_level: self.log_level,
            domain_name: self.domain_name,
            certificate_arn: self.certificate_arn,
            slack_signing_secret,
            slack_bot_token,
            slack_bot_member_id,
            chat_gpt,
        })
    }
}

fn required(value: Option<String>, field: &str) -> Result<String, ConfigError> {
    let value = value.ok_or_else(|| ConfigError::MissingField(field.to_string()))?;
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{} must not be empty", field)));
    }
    Ok(value)
}
