//! Maps an environment discriminator to a config file name.

use std::path::PathBuf;

/// Base name used when no discriminator is given.
pub const BASE_CONFIG_FILE: &str = "config.yaml";

/// Returns `config.yaml` for no (or an empty) discriminator and
/// `config.<env>.yaml` otherwise. The path is relative; callers decide
/// what it is relative to.
pub fn config_path(env: Option<&str>) -> PathBuf {
    match env {
        Some(env) if !env.is_empty() => PathBuf::from(format!("config.{}.yaml", env)),
        _ => PathBuf::from(BASE_CONFIG_FILE),
    }
}
