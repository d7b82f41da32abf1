//! User-facing strings shown by a bubble.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::layout::ReadState;

/// Built-in label sets.
///
/// Config files and the command line share one parser, [`FromStr`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Locale {
    #[default]
    Ko,
    En,
}

impl Locale {
    /// Language code used in config files and on the command line.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Ko => "ko",
            Locale::En => "en",
        }
    }

    pub fn all() -> &'static [Locale] {
        &[Locale::Ko, Locale::En]
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ko" | "ko-kr" => Ok(Locale::Ko),
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            _ => Err(ConfigError::InvalidLocale(s.to_string())),
        }
    }
}

impl TryFrom<String> for Locale {
    type Error = ConfigError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        code.parse()
    }
}

/// Localized strings for the read marker and avatar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Labels {
    pub read: &'static str,
    pub unread: &'static str,
    /// Alt text of the avatar image.
    pub profile_alt: &'static str,
    /// Tooltip on a clickable avatar.
    pub profile_tooltip: &'static str,
}

impl Labels {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::Ko => Self {
                read: "읽음",
                unread: "읽지 않음",
                profile_alt: "프로필",
                profile_tooltip: "프로필 보기",
            },
            Locale::En => Self {
                read: "Read",
                unread: "Unread",
                profile_alt: "Profile",
                profile_tooltip: "View profile",
            },
        }
    }

    /// Read marker text for the given read state.
    pub fn read_marker(&self, state: ReadState) -> &'static str {
        match state {
            ReadState::Read => self.read,
            ReadState::Unread => self.unread,
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Labels::for_locale(Locale::default())
    }
}
