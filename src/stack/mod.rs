//! Stack entry point.
//!
//! Takes a resolved [`Config`] and describes the chat-bot stack built
//! from it. Nothing is provisioned here; [`Stack::synth`] renders the
//! description as JSON.

mod error;
mod manifest;

pub use error::StackError;
pub use manifest::{CustomDomain, StackManifest};

use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::config::{Config, DeploymentEnv};

/// Logical ID of the chat-bot stack.
pub const STACK_ID: &str = "SlackChatbotChatgptStack";

// Variables read by the bot function at startup.
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";
pub const SLACK_SIGNING_SECRET_VAR: &str = "SLACK_SIGNING_SECRET";
pub const SLACK_BOT_TOKEN_VAR: &str = "SLACK_BOT_TOKEN";
pub const SLACK_BOT_MEMBER_ID_VAR: &str = "SLACK_BOT_MEMBER_ID";
pub const CHATGPT_SETTINGS_VAR: &str = "CHATGPT_SETTINGS";

/// Properties the stack is instantiated with.
#[derive(Debug, Clone)]
pub struct StackProps {
    /// Deployment account and region.
    pub env: Option<DeploymentEnv>,
    /// Name the stack is deployed under.
    pub stack_name: String,
    /// Full configuration, passed through unmodified.
    pub config: Config,
}

impl StackProps {
    /// Take env and stack name from the config itself.
    pub fn from_config(config: Config) -> Self {
        Self {
            env: config.env.clone(),
            stack_name: config.stack_name.clone(),
            config,
        }
    }
}

/// The chat-bot stack.
#[derive(Debug, Clone)]
pub struct Stack {
    id: String,
    props: StackProps,
}

impl Stack {
    /// Creates a new Stack.
    pub fn new(id: impl Into<String>, props: StackProps) -> Result<Self, StackError> {
        let id = id.into();
        if id.is_empty() {
            return Err(StackError::EmptyId);
        }

        let config = &props.config;
        match (&config.domain_name, &config.certificate_arn) {
            (Some(_), None) => return Err(StackError::IncompleteCustomDomain("certificateArn")),
            (None, Some(_)) => return Err(StackError::IncompleteCustomDomain("domainName")),
            _ => {}
        }

        info!(
            id = %id,
            stack_name = %props.stack_name,
            custom_domain = config.has_custom_domain(),
            "Stack created"
        );

        Ok(Self { id, props })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Environment variables handed to the bot function.
    pub fn function_environment(&self) -> Result<BTreeMap<String, String>, StackError> {
        let config = &self.props.config;
        let mut vars = BTreeMap::new();

        if let Some(ref level) = config.log_level {
            vars.insert(LOG_LEVEL_VAR.to_string(), level.clone());
        }
        vars.insert(
            SLACK_SIGNING_SECRET_VAR.to_string(),
            config.slack_signing_secret.clone(),
        );
        vars.insert(SLACK_BOT_TOKEN_VAR.to_string(), config.slack_bot_token.clone());
        vars.insert(
            SLACK_BOT_MEMBER_ID_VAR.to_string(),
            config.slack_bot_member_id.clone(),
        );
        vars.insert(
            CHATGPT_SETTINGS_VAR.to_string(),
            serde_json::to_string(&config.chat_gpt)?,
        );

        debug!(count = vars.len(), "Function environment built");
        Ok(vars)
    }

    /// Describe the stack.
    pub fn manifest(&self) -> Result<StackManifest, StackError> {
        let config = &self.props.config;
        let custom_domain = match (&config.domain_name, &config.certificate_arn) {
            (Some(domain_name), Some(certificate_arn)) => Some(CustomDomain {
                domain_name: domain_name.clone(),
                certificate_arn: certificate_arn.clone(),
            }),
            _ => None,
        };

        Ok(StackManifest {
            id: self.id.clone(),
            stack_name: self.props.stack_name.clone(),
            env: self.props.env.clone(),
            custom_domain,
            function_environment: self.function_environment()?,
        })
    }

    /// Render the manifest as pretty-printed JSON.
    pub fn synth(&self) -> Result<String, StackError> {
        Ok(serde_json::to_string_pretty(&self.manifest()?)?)
    }
}

#[cfg(test)]
mod tests;
