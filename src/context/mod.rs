//! Runtime context and environment discriminator resolution.
//!
//! The discriminator comes from the `env` context parameter
//! (`-c env=prod`) and falls back to the `ENV` environment variable.

mod error;

pub use error::ContextError;

use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::debug;

/// Context key holding the environment discriminator.
pub const ENV_CONTEXT_KEY: &str = "env";
/// Environment variable consulted when the context has no discriminator.
pub const ENV_VAR: &str = "ENV";

/// Key/value parameters passed on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    values: BTreeMap<String, String>,
}

impl Context {
    fn insert_entry(&mut self, entry: &str) -> Result<(), ContextError> {
        match entry.split_once('=') {
            Some((key, value)) if !key.is_empty() => {
                self.values.insert(key.to_string(), value.to_string());
                Ok(())
            }
            _ => Err(ContextError::Malformed(entry.to_string())),
        }
    }

    /// Look up a context value.
    pub fn try_get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

/// Everything the entry point takes from its arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandLine {
    /// Runtime-context parameters.
    pub context: Context,
    /// Directory config files are resolved against (working directory if unset).
    pub config_dir: Option<PathBuf>,
}

impl CommandLine {
    /// Collect `-c key=value`, `--context key=value`,
    /// `--context=key=value` and `--config-dir=<dir>` in one pass.
    /// Other arguments are skipped; a repeated key keeps the last value.
    /// The argument after `-c` / `--context` is always a context entry.
    pub fn parse<I, S>(args: I) -> Result<Self, ContextError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cli = CommandLine::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let arg = arg.as_ref();
            if arg == "-c" || arg == "--context" {
                match args.next() {
                    Some(entry) => cli.context.insert_entry(entry.as_ref())?,
                    None => return Err(ContextError::MissingValue(arg.to_string())),
                }
            } else if let Some(entry) = arg.strip_prefix("--context=") {
                cli.context.insert_entry(entry)?;
            } else if let Some(dir) = arg.strip_prefix("--config-dir=") {
                cli.config_dir = Some(PathBuf::from(dir));
            }
        }

        Ok(cli)
    }
}

/// Pick the discriminator: the context `env` value if non-empty, else
/// `env_var` (the `ENV` variable) if non-empty, else none.
pub fn resolve_env_name(context: &Context, env_var: Option<String>) -> Option<String> {
    let name = context
        .try_get(ENV_CONTEXT_KEY)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .or_else(|| env_var.filter(|v| !v.is_empty()));
    debug!(env = ?name, "Resolved environment discriminator");
    name
}
