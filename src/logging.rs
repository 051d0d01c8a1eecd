//! Structured logging initialization
//!
//! The binary calls [`init_logging`] once at startup. Library code only emits
//! `tracing` events and never installs a subscriber.
//!
//! ## Environment Variables
//!
//! - `RUST_LOG` - full `EnvFilter` directive, wins over everything else
//! - `TRESTLEKIT_LOG_LEVEL` - trace/debug/info/warn/error (default: `warn`)
//! - `TRESTLEKIT_LOG_FORMAT` - `pretty` or `json` (default: `pretty`)
//!
//! Events are written to stderr so that command output on stdout can be piped.

use anyhow::{Context, Result};
use std::env;
use tracing::Level;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Log format: pretty for terminals, JSON for log collectors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty, // Interactive tool: default to human output
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level: trace/debug/info/warn/error
    pub log_level: String,
    /// Log format: json/pretty
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl LogConfig {
    /// Parse configuration from environment variables with defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            log_level: env::var("TRESTLEKIT_LOG_LEVEL").unwrap_or(defaults.log_level),
            format: env::var("TRESTLEKIT_LOG_FORMAT")
                .map(|f| LogFormat::parse(&f))
                .unwrap_or(defaults.format),
        }
    }

    /// Raise the level to at least `debug` (the `--verbose` flag)
    pub fn verbose(mut self) -> Self {
        if !matches!(self.log_level.to_lowercase().as_str(), "trace" | "debug") {
            self.log_level = "debug".to_string();
        }
        self
    }
}

fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    }
}

/// Install the global subscriber
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    let level = parse_level(&config.log_level);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let builder = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    match config.format {
        LogFormat::Json => builder
            .json()
            .with_current_span(true)
            .finish()
            .try_init()
            .context("Failed to initialize logging"),
        LogFormat::Pretty => builder
            .compact()
            .without_time()
            .finish()
            .try_init()
            .context("Failed to initialize logging"),
    }
}
