//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use murmur_core::{BubbleConfig, Locale};
use murmur_logging::LogConfig;

use crate::error::GalleryResult;
use crate::fixture::Conversation;

/// Render a conversation through Murmur chat bubbles
#[derive(Debug, Parser)]
#[command(name = "murmur-gallery", version, about)]
pub struct Args {
    /// Conversation fixture (JSON); the built-in sample is used when absent
    #[arg(short, long)]
    pub conversation: Option<PathBuf>,

    /// Bubble config file (JSON)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Label language, overrides the config file
    #[arg(short, long)]
    pub locale: Option<Locale>,

    /// Default log level (RUST_LOG takes precedence)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Human-readable console logs instead of JSONL
    #[arg(long)]
    pub pretty_logs: bool,

    /// Write JSONL logs to daily files in this directory instead of the
    /// console (combine with --pretty-logs to keep a console too)
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

impl Args {
    pub fn log_config(&self) -> LogConfig {
        let mut config = match &self.log_dir {
            Some(dir) => LogConfig::desktop(dir.clone()),
            None => LogConfig::default(),
        };
        config.default_level = self.log_level.clone();
        if self.pretty_logs {
            config.console.enabled = true;
            config.console.pretty = true;
        }
        config
    }

    pub fn bubble_config(&self) -> GalleryResult<BubbleConfig> {
        let config = match &self.config {
            Some(path) => BubbleConfig::load(path)?,
            None => BubbleConfig::default(),
        };
        Ok(match self.locale {
            Some(locale) => config.with_locale(locale),
            None => config,
        })
    }

    pub fn conversation(&self) -> GalleryResult<Conversation> {
        match &self.conversation {
            Some(path) => Conversation::load(path),
            None => Ok(Conversation::sample()),
        }
    }
}
