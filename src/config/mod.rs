//! Configuration loading and validation for the Slack chat-bot stack.
//!
//! The file is picked by an optional environment discriminator
//! (`config.yaml` or `config.<env>.yaml`), parsed with serde_yaml and
//! validated so that missing required fields fail at load time.

mod chatgpt;
mod deployment;
mod error;
mod path;
mod raw;

pub use chatgpt::ChatGptConfig;
pub use deployment::DeploymentEnv;
pub use error::ConfigError;
pub use path::config_path;

use std::{
    fs, io,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Root configuration for the chat-bot deployment.
///
/// Required: stackName, slackSigningSecret, slackBotToken,
/// slackBotMemberId, chatGpt (with apiKey and model).
/// Optional: env, logLevel, domainName, certificateArn, chatGpt.stream.
///
/// Values are kept exactly as written in the file, but a required string
/// that is present and empty is rejected with [`ConfigError::Validation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Deployment account and region (optional).
    pub env: Option<DeploymentEnv>,
    /// Name of the deployed stack.
    pub stack_name: String,
    /// Log level handed to the bot function, e.g. "DEBUG" (optional).
    pub log_level: Option<String>,
    /// Custom domain for the Slack endpoint (optional).
    pub domain_name: Option<String>,
    /// Certificate for `domain_name` (optional).
    pub certificate_arn: Option<String>,
    /// Slack request signing secret.
    pub slack_signing_secret: String,
    /// Slack bot OAuth token.
    pub slack_bot_token: String,
    /// Slack member ID of the bot user.
    pub slack_bot_member_id: String,
    /// ChatGPT credentials and model.
    pub chat_gpt: ChatGptConfig,
}

impl Config {
    /// Resolve the config for `env` relative to the working directory.
    pub fn resolve(env: Option<&str>) -> Result<Self, ConfigError> {
        Self::load(&config_path(env))
    }

    /// Resolve the config for `env` relative to `dir`.
    pub fn resolve_in(dir: &Path, env: Option<&str>) -> Result<Self, ConfigError> {
        Self::load(&dir.join(config_path(env)))
    }

    /// Load configuration from the YAML file at `path`.
    ///
    /// A missing file is reported as [`ConfigError::NotFound`] without
    /// attempting to parse anything.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Reading config");

        let content = fs::read_to_string(path).map_err(|e| read_error(path.to_path_buf(), e))?;
        let config = Self::from_yaml(&content)?;

        info!(
            path = %path.display(),
            stack_name = %config.stack_name,
            "Config loaded"
        );

        Ok(config)
    }

    /// Parse and validate configuration from YAML text.
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        raw::parse(text)
    }

    /// Whether both halves of the custom domain are configured.
    pub fn has_custom_domain(&self) -> bool {
        self.domain_name.is_some() && self.certificate_arn.is_some()
    }
}

fn read_error(path: PathBuf, source: io::Error) -> ConfigError {
    match source.kind() {
        io::ErrorKind::NotFound => ConfigError::NotFound { path },
        _ => ConfigError::ReadFile { path, source },
    }
}
