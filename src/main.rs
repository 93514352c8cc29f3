mod config;
mod context;
mod stack;

use config::{Config, ConfigError};
use context::{CommandLine, ContextError, ENV_VAR, resolve_env_name};
use stack::{STACK_ID, Stack, StackError, StackProps};
use std::{env, process};
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*, reload};

type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Fatal startup error.
#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Context(#[from] ContextError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Stack(#[from] StackError),
}

fn parse_level(log_level: Option<&str>) -> Level {
    match log_level.map(str::to_ascii_lowercase).as_deref() {
        Some("trace") => Level::TRACE,
        Some("debug") => Level::DEBUG,
        Some("info") => Level::INFO,
        Some("warn") | Some("warning") => Level::WARN,
        Some("error") | Some("critical") => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Filter directives: `RUST_LOG` when set, otherwise the configured level.
fn filter_directives(log_level: Option<&str>, rust_log: Option<&str>) -> String {
    match rust_log.map(str::trim).filter(|v| !v.is_empty()) {
        Some(directives) => directives.to_string(),
        None => parse_level(log_level).to_string().to_ascii_lowercase(),
    }
}

fn build_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the subscriber. The returned handle swaps the filter once the
/// configured level is known.
fn init_tracing(directives: &str) -> FilterHandle {
    let (filter, handle) = reload::Layer::new(build_filter(directives));

    // stdout carries the manifest only
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false),
        )
        .init();

    handle
}

/// Resolve the config picked by the command line and the `ENV` value.
fn resolve_config(cli: &CommandLine, env_var: Option<String>) -> Result<Config, ConfigError> {
    let env_name = resolve_env_name(&cli.context, env_var);

    let config = match cli.config_dir {
        Some(ref dir) => Config::resolve_in(dir, env_name.as_deref())?,
        None => Config::resolve(env_name.as_deref())?,
    };

    info!(env = ?env_name, stack_name = %config.stack_name, "Config resolved");
    Ok(config)
}

fn run(tracing_handle: &FilterHandle) -> Result<String, AppError> {
    let cli = CommandLine::parse(env::args().skip(1))?;
    let config = resolve_config(&cli, env::var(ENV_VAR).ok())?;

    let rust_log = env::var(EnvFilter::DEFAULT_ENV).ok();
    let directives = filter_directives(config.log_level.as_deref(), rust_log.as_deref());
    if let Err(e) = tracing_handle.reload(build_filter(&directives)) {
        warn!(error = %e, "Failed to apply configured log level");
    }

    let stack = Stack::new(STACK_ID, StackProps::from_config(config))?;
    info!(id = %stack.id(), "Synthesizing stack");
    Ok(stack.synth()?)
}

fn main() {
    dotenvy::dotenv().ok();

    let rust_log = env::var(EnvFilter::DEFAULT_ENV).ok();
    let tracing_handle = init_tracing(&filter_directives(Some("info"), rust_log.as_deref()));

    match run(&tracing_handle) {
        Ok(manifest) => println!("{}", manifest),
        Err(e) => {
            eprintln!("Failed to synthesize stack: {}", e);
            process::exit(1);
        }
    }
}
