//! Logging setup.
//!
//! Two layers:
//! - a human-readable console layer on stderr, filtered by `-q`/`-v` or `RUST_LOG`
//! - an optional JSON-lines file layer, written through a non-blocking
//!   appender, active only when a log directory or path is configured
//!
//! stdout is reserved for command output (and the MCP transport), so
//! nothing here ever writes to it.

use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Explicit log file path. Takes precedence over the directory.
pub const ENV_LOG_PATH: &str = "TEXTMETRICS_LOG_PATH";

/// Log directory; files rotate daily.
pub const ENV_LOG_DIR: &str = "TEXTMETRICS_LOG_DIR";

const LOG_FILE_PREFIX: &str = "textmetrics.log";

/// Where the file layer writes, if anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// A single file that never rotates.
    File(PathBuf),
    /// Daily-rotated files in a directory.
    Directory(PathBuf),
}

/// Resolved logging configuration.
#[derive(Debug, Clone, Default)]
pub struct ObservabilityConfig {
    /// File layer target; `None` disables file logging.
    pub target: Option<LogTarget>,
    /// Filter directive for the file layer.
    pub file_level: String,
}

impl ObservabilityConfig {
    /// Build from the environment, falling back to `config_log_dir`.
    ///
    /// Precedence: `TEXTMETRICS_LOG_PATH`, then `TEXTMETRICS_LOG_DIR`, then
    /// the configured directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>, file_level: &str) -> Self {
        Self::resolve(
            std::env::var_os(ENV_LOG_PATH).map(PathBuf::from),
            std::env::var_os(ENV_LOG_DIR).map(PathBuf::from),
            config_log_dir,
            file_level,
        )
    }

    fn resolve(
        env_path: Option<PathBuf>,
        env_dir: Option<PathBuf>,
        config_dir: Option<PathBuf>,
        file_level: &str,
    ) -> Self {
        let target = env_path
            .filter(|p| !p.as_os_str().is_empty())
            .map(LogTarget::File)
            .or_else(|| {
                env_dir
                    .filter(|p| !p.as_os_str().is_empty())
                    .or(config_dir)
                    .map(LogTarget::Directory)
            });
        Self {
            target,
            file_level: file_level.to_string(),
        }
    }
}

/// Console filter from CLI verbosity.
///
/// `RUST_LOG` wins when set. Otherwise: `-q` gives `error`, no flag gives
/// `warn`, `-v` gives `debug`, `-vv` and more give `trace`.
pub fn env_filter(quiet: bool, verbose: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(console_level(quiet, verbose)))
}

const fn console_level(quiet: bool, verbose: u8) -> &'static str {
    match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "debug",
        (false, _) => "trace",
    }
}

/// Install the global subscriber.
///
/// Returns the appender guard when file logging is active; hold it until
/// exit so buffered lines are flushed.
pub fn init_observability(
    config: &ObservabilityConfig,
    console_filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(console_filter);

    let (file_layer, guard) = match config.target {
        Some(ref target) => {
            let appender = match target {
                LogTarget::File(path) => {
                    let dir = path
                        .parent()
                        .filter(|d| !d.as_os_str().is_empty())
                        .map_or_else(|| PathBuf::from("."), PathBuf::from);
                    let name = path
                        .file_name()
                        .with_context(|| format!("log path has no file name: {}", path.display()))?;
                    std::fs::create_dir_all(&dir).with_context(|| {
                        format!("failed to create log directory {}", dir.display())
                    })?;
                    tracing_appender::rolling::never(dir, name)
                }
                LogTarget::Directory(dir) => {
                    std::fs::create_dir_all(dir).with_context(|| {
                        format!("failed to create log directory {}", dir.display())
                    })?;
                    tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX)
                }
            };
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(EnvFilter::new(&config.file_level));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}
