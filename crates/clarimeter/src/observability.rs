//! Logging and tracing setup.
//!
//! Human-readable events go to stderr so stdout stays clean for `--json`
//! output and the MCP transport. When a log location is configured, events
//! are also written as JSON lines through a non-blocking appender.
//!
//! Log location, highest precedence first:
//! 1. `CLARIMETER_LOG_PATH` (exact file, never rotated)
//! 2. `CLARIMETER_LOG_DIR` (daily rotated `clarimeter.jsonl`)
//! 3. `log_dir` from configuration

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

const LOG_PATH_ENV: &str = "CLARIMETER_LOG_PATH";
const LOG_DIR_ENV: &str = "CLARIMETER_LOG_DIR";
const LOG_FILE_NAME: &str = "clarimeter.jsonl";

/// Where JSONL logs should be written, if anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Exact log file; takes precedence over `log_dir`.
    pub log_path: Option<PathBuf>,
    /// Directory for daily rotated log files.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Read log locations from the environment, falling back to `config_log_dir`.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::resolve(
            std::env::var_os(LOG_PATH_ENV).map(PathBuf::from),
            std::env::var_os(LOG_DIR_ENV).map(PathBuf::from),
            config_log_dir,
        )
    }

    fn resolve(
        env_path: Option<PathBuf>,
        env_dir: Option<PathBuf>,
        config_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            log_path: env_path.filter(|p| !p.as_os_str().is_empty()),
            log_dir: env_dir.filter(|p| !p.as_os_str().is_empty()).or(config_dir),
        }
    }

    const fn file_logging_enabled(&self) -> bool {
        self.log_path.is_some() || self.log_dir.is_some()
    }
}

/// Build the event filter.
///
/// `RUST_LOG` wins when set. Otherwise `-q` selects `error`, `-v` selects
/// `debug`, `-vv` and beyond select `trace`, and the configured level applies.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some()
        && let Ok(filter) = EnvFilter::try_from_default_env()
    {
        return filter;
    }
    EnvFilter::new(level_for(quiet, verbose, default_level))
}

fn level_for(quiet: bool, verbose: u8, default_level: &str) -> &str {
    match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => default_level,
        (false, 1) => "debug",
        (false, _) => "trace",
    }
}

/// Install the global subscriber.
///
/// Hold the returned guard until exit; dropping it flushes the file writer.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .boxed();

    if !config.file_logging_enabled() {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .try_init()
            .context("failed to install tracing subscriber")?;
        return Ok(None);
    }

    let appender = file_appender(config)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let file_layer = fmt::layer()
        .json()
        .with_writer(writer)
        .with_ansi(false)
        .boxed();

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;
    Ok(Some(guard))
}

fn file_appender(
    config: &ObservabilityConfig,
) -> anyhow::Result<tracing_appender::rolling::RollingFileAppender> {
    if let Some(ref path) = config.log_path {
        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        let file_name = path
            .file_name()
            .with_context(|| format!("log path has no file name: {}", path.display()))?;
        ensure_dir(dir)?;
        return Ok(tracing_appender::rolling::never(dir, file_name));
    }

    let dir = config
        .log_dir
        .as_deref()
        .context("no log location configured")?;
    ensure_dir(dir)?;
    Ok(tracing_appender::rolling::daily(dir, LOG_FILE_NAME))
}

fn ensure_dir(dir: &Path) -> anyhow::Result<()> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))
}
