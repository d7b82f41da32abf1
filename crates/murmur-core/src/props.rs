//! Per-message inputs of a bubble.

use serde::{Deserialize, Serialize};

use crate::content::ContentNode;

/// Everything a bubble needs to know about one message.
///
/// The placement flags are computed by the surrounding conversation list and
/// taken at face value here. The avatar click handler is not part of this
/// type; `murmur-ui` injects it at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BubbleProps {
    /// Message body.
    pub content: ContentNode,
    /// Whether the current user sent this message.
    #[serde(default = "default_is_me")]
    pub is_me: bool,
    /// Avatar image location; empty means no avatar.
    #[serde(default)]
    pub profile_image: String,
    /// Pre-formatted display time.
    #[serde(default)]
    pub timestamp: String,
    /// Whether the timestamp may appear.
    #[serde(default)]
    pub show_time: bool,
    /// Whether this is the last message of its run.
    #[serde(default)]
    pub is_last_message: bool,
    /// Read-receipt state.
    #[serde(default)]
    pub is_read: bool,
    /// Whether this message continues the previous one from the same sender.
    #[serde(default)]
    pub is_continuous: bool,
}

fn default_is_me() -> bool {
    true
}

impl Default for BubbleProps {
    fn default() -> Self {
        Self {
            content: ContentNode::empty(),
            is_me: true,
            profile_image: String::new(),
            timestamp: String::new(),
            show_time: false,
            is_last_message: false,
            is_read: false,
            is_continuous: false,
        }
    }
}

impl BubbleProps {
    /// Props for `content` with every other field at its default.
    pub fn new(content: impl Into<ContentNode>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }

    pub fn with_is_me(mut self, is_me: bool) -> Self {
        self.is_me = is_me;
        self
    }

    pub fn with_profile_image(mut self, src: impl Into<String>) -> Self {
        self.profile_image = src.into();
        self
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    pub fn with_show_time(mut self, show_time: bool) -> Self {
        self.show_time = show_time;
        self
    }

    pub fn with_is_last_message(mut self, is_last_message: bool) -> Self {
        self.is_last_message = is_last_message;
        self
    }

    pub fn with_is_read(mut self, is_read: bool) -> Self {
        self.is_read = is_read;
        self
    }

    pub fn with_is_continuous(mut self, is_continuous: bool) -> Self {
        self.is_continuous = is_continuous;
        self
    }

    /// Top-level content nodes as seen by the classifier.
    pub fn top_level_content(&self) -> &[ContentNode] {
        self.content.top_level()
    }
}
