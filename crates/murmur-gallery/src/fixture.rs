//! Conversation fixtures rendered by the gallery.

use std::fs;
use std::path::Path;

use murmur_core::{BubbleProps, ContentNode, EmoticonRef};
use serde::{Deserialize, Serialize};

use crate::error::{GalleryError, GalleryResult};

/// A titled list of messages, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub title: String,
    pub messages: Vec<BubbleProps>,
}

impl Conversation {
    /// Parse a fixture from JSON.
    pub fn from_json_str(json: &str) -> GalleryResult<Self> {
        let conversation: Self = serde_json::from_str(json)?;
        if conversation.messages.is_empty() {
            return Err(GalleryError::EmptyConversation(conversation.title));
        }
        Ok(conversation)
    }

    /// Load a fixture file.
    pub fn load(path: impl AsRef<Path>) -> GalleryResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| GalleryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let conversation = Self::from_json_str(&json)?;
        tracing::debug!(
            path = %path.display(),
            messages = conversation.messages.len(),
            "Loaded conversation fixture"
        );
        Ok(conversation)
    }

    /// Built-in conversation covering every layout combination.
    pub fn sample() -> Self {
        let mina = "/avatars/mina.png";
        Self {
            title: "Sample conversation".to_string(),
            messages: vec![
                BubbleProps::new("안녕하세요!")
                    .with_is_me(false)
                    .with_profile_image(mina)
                    .with_timestamp("오후 2:01"),
                BubbleProps::new("오늘 회의 몇 시에 시작해요?")
                    .with_is_me(false)
                    .with_profile_image(mina)
                    .with_is_continuous(true)
                    .with_timestamp("오후 2:01")
                    .with_show_time(true),
                BubbleProps::new(ContentNode::sequence([
                    ContentNode::emoticon("/emoticons/wave.png"),
                    ContentNode::text("3시요"),
                ]))
                .with_timestamp("오후 2:03")
                .with_show_time(true),
                BubbleProps::new(ContentNode::container(ContentNode::Emoticon(
                    EmoticonRef::new("/emoticons/thumbs-up.png").with_alt("thumbs up"),
                )))
                .with_timestamp("오후 2:03")
                .with_is_continuous(true)
                .with_is_last_message(true),
                BubbleProps::new("좋아요")
                    .with_is_me(false)
                    .with_profile_image("/avatars/missing.png")
                    .with_timestamp("오후 2:05")
                    .with_show_time(true),
                BubbleProps::new("회의실에서 봬요").with_is_last_message(true).with_is_read(true),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use murmur_core::{AvatarSlot, LayoutDecision, TrailingSlot};

    #[test]
    fn test_sample_is_not_empty() {
        let sample = Conversation::sample();
        assert!(!sample.messages.is_empty());
    }

    #[test]
    fn test_sample_covers_layouts() {
        let layouts: Vec<_> = Conversation::sample()
            .messages
            .iter()
            .map(LayoutDecision::for_props)
            .collect();

        assert!(layouts.iter().any(|l| matches!(l.avatar, AvatarSlot::Image { .. })));
        assert!(layouts.iter().any(|l| l.avatar == AvatarSlot::Placeholder));
        assert!(layouts.iter().any(|l| l.avatar == AvatarSlot::Hidden));
        assert!(layouts.iter().any(|l| matches!(l.trailing, TrailingSlot::Timestamp(_))));
        assert!(layouts.iter().any(|l| matches!(l.trailing, TrailingSlot::ReadMarker(_))));
        assert!(layouts.iter().any(|l| l.style.is_emoticon));
    }

    #[test]
    fn test_sample_json_round_trip() {
        let sample = Conversation::sample();
        let json = serde_json::to_string(&sample).unwrap();
        assert_eq!(Conversation::from_json_str(&json).unwrap(), sample);
    }

    #[test]
    fn test_empty_conversation_rejected() {
        let err = Conversation::from_json_str(r#"{ "title": "quiet", "messages": [] }"#).unwrap_err();
        assert!(matches!(err, GalleryError::EmptyConversation(title) if title == "quiet"));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = Conversation::from_json_str(r#"{ "title": "broken" "#).unwrap_err();
        assert!(matches!(err, GalleryError::Json(_)));
    }
}
