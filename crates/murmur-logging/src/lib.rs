//! Logging setup for Murmur apps
//!
//! Wraps `tracing-subscriber` behind a small builder so every binary
//! configures output the same way.
//!
//! # Features
//!
//! - **JSONL Output**: Structured JSON lines on the console (default)
//! - **Pretty Output**: Human-readable console output for development
//! - **File Output**: Daily/hourly rotation via tracing-appender
//! - **RUST_LOG**: Overrides the configured level when set
//!
//! # Quick Start
//!
//! ```ignore
//! use murmur_logging::{LogConfig, MurmurSubscriberBuilder};
//!
//! // JSONL to console
//! let _guard = MurmurSubscriberBuilder::new().init();
//!
//! // Development mode with pretty output
//! let _guard = MurmurSubscriberBuilder::new()
//!     .with_config(LogConfig::development())
//!     .init();
//! ```
//!
//! Keep the returned guard alive for the lifetime of the program when file
//! output is enabled; dropping it flushes and stops the writer thread.

pub mod config;

pub use config::{ConsoleConfig, FileConfig, JsonlConfig, LogConfig, RotationStrategy};

use std::fs::{self, File};

use thiserror::Error;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};

/// Errors raised while installing the subscriber
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to prepare log file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Global subscriber already set: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Builder for configuring and initializing the Murmur logging subscriber
///
/// By default, console output uses JSONL format. Use `LogConfig::development()`
/// for human-readable pretty output during development.
pub struct MurmurSubscriberBuilder {
    config: LogConfig,
}

impl MurmurSubscriberBuilder {
    /// Create a new subscriber builder with default configuration
    pub fn new() -> Self {
        Self {
            config: LogConfig::default(),
        }
    }

    /// Use a specific configuration
    pub fn with_config(mut self, config: LogConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the default log level
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.config.default_level = level.into();
        self
    }

    /// Enable or disable console output
    pub fn with_console(mut self, enabled: bool) -> Self {
        self.config.console.enabled = enabled;
        self
    }

    /// Switch the console between pretty and JSONL output
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.config.console.pretty = pretty;
        self
    }

    /// Configure file output
    pub fn with_file_output(mut self, config: FileConfig) -> Self {
        self.config.file = Some(config);
        self
    }

    /// Try to initialize the subscriber globally
    ///
    /// Returns the file writer guard when file output is enabled.
    pub fn try_init(self) -> Result<Option<WorkerGuard>, LoggingError> {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.config.default_level));

        let mut layers: Vec<BoxedLayer> = Vec::new();
        let mut guard = None;

        if self.config.console.enabled {
            if self.config.console.pretty {
                layers.push(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(self.config.console.ansi)
                        .with_target(true)
                        .boxed(),
                );
            } else {
                layers.push(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_current_span(self.config.jsonl.include_current_span)
                        .with_span_list(self.config.jsonl.include_spans)
                        .flatten_event(self.config.jsonl.flatten_events)
                        .with_file(self.config.jsonl.include_location)
                        .with_line_number(self.config.jsonl.include_location)
                        .boxed(),
                );
            }
        }

        if let Some(file_config) = &self.config.file {
            let (writer, file_guard) = file_writer(file_config)?;
            guard = Some(file_guard);
            layers.push(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(self.config.jsonl.include_current_span)
                    .with_span_list(self.config.jsonl.include_spans)
                    .flatten_event(self.config.jsonl.flatten_events)
                    .with_file(self.config.jsonl.include_location)
                    .with_line_number(self.config.jsonl.include_location)
                    .with_writer(writer)
                    .boxed(),
            );
        }

        Registry::default().with(layers).with(env_filter).try_init()?;
        Ok(guard)
    }

    /// Initialize the subscriber globally
    ///
    /// Failures are reported on stderr and leave logging disabled.
    pub fn init(self) -> Option<WorkerGuard> {
        match self.try_init() {
            Ok(guard) => guard,
            Err(e) => {
                eprintln!("Warning: Failed to initialize logging: {}", e);
                None
            }
        }
    }
}

impl Default for MurmurSubscriberBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the file writer: truncates for `Never` rotation, appends otherwise
fn file_writer(file_config: &FileConfig) -> Result<(NonBlocking, WorkerGuard), LoggingError> {
    fs::create_dir_all(&file_config.directory)?;
    let rotation = match file_config.rotation {
        RotationStrategy::Never => {
            let file_path = file_config.directory.join(format!("{}.log", file_config.prefix));
            let file = File::create(&file_path)?;
            return Ok(tracing_appender::non_blocking(file));
        }
        RotationStrategy::Daily => Rotation::DAILY,
        RotationStrategy::Hourly => Rotation::HOURLY,
    };
    let appender = RollingFileAppender::new(rotation, &file_config.directory, &file_config.prefix);
    Ok(tracing_appender::non_blocking(appender))
}

/// Initialize logging with default settings (JSONL to console)
pub fn init_default() -> Option<WorkerGuard> {
    MurmurSubscriberBuilder::new().init()
}

/// Initialize logging for development (verbose, pretty console output)
pub fn init_development() -> Option<WorkerGuard> {
    MurmurSubscriberBuilder::new()
        .with_config(LogConfig::development())
        .init()
}

/// Initialize logging for testing (minimal output, ignores repeat calls)
pub fn init_testing() {
    let _ = MurmurSubscriberBuilder::new()
        .with_config(LogConfig::testing())
        .try_init();
}
