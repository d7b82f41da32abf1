//! Configuration shared by every bubble in a view

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::avatar::DEFAULT_PROFILE_IMAGE;
use crate::classify::ClassifyLimits;
use crate::error::ConfigError;
use crate::labels::{Labels, Locale};

/// Bubble configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BubbleConfig {
    /// Language of the read marker and avatar labels
    pub locale: Locale,

    /// Image shown when an avatar fails to load
    pub default_profile_image: String,

    /// Caps for emoticon classification
    pub limits: ClassifyLimits,
}

impl Default for BubbleConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            default_profile_image: DEFAULT_PROFILE_IMAGE.to_string(),
            limits: ClassifyLimits::default(),
        }
    }
}

impl BubbleConfig {
    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), locale = %config.locale, "Loaded bubble config");
        Ok(config)
    }

    /// Check invariants serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.limits.max_nodes == 0 {
            return Err(ConfigError::InvalidLimits(
                "max_nodes must be at least 1".to_string(),
            ));
        }
        if self.default_profile_image.trim().is_empty() {
            return Err(ConfigError::EmptyDefaultImage);
        }
        Ok(())
    }

    /// Set the locale
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Set the fallback avatar image
    pub fn with_default_profile_image(mut self, src: impl Into<String>) -> Self {
        self.default_profile_image = src.into();
        self
    }

    /// Set the classification caps
    pub fn with_limits(mut self, limits: ClassifyLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Labels for the configured locale
    pub fn labels(&self) -> Labels {
        Labels::for_locale(self.locale)
    }
}
