//! Style layer: maps [`StyleParams`] to CSS classes.
//!
//! The actual look (shape, color, spacing) lives in `bubble.css`. These
//! functions only decide which classes each slot carries.

use murmur_core::{ContainerVariant, ReadState, StyleParams};

fn side(params: &StyleParams) -> &'static str {
    if params.is_me { "me" } else { "other" }
}

/// Outer row of a bubble.
pub fn wrapper_class(params: &StyleParams) -> String {
    let mut class = format!("bubble-wrapper bubble-wrapper-{}", side(params));
    if params.is_continuous {
        class.push_str(" bubble-wrapper-continuous");
    }
    if params.is_emoticon {
        class.push_str(" bubble-wrapper-emoticon");
    }
    class
}

/// Column holding the bubble and its trailing slot.
pub fn message_container_class(params: &StyleParams) -> String {
    let mut class = format!("bubble-message bubble-message-{}", side(params));
    if params.is_continuous {
        class.push_str(" bubble-message-continuous");
    }
    if params.is_emoticon {
        class.push_str(" bubble-message-emoticon");
    }
    class
}

/// The bubble itself.
pub fn bubble_container_class(params: &StyleParams) -> String {
    let variant = match params.variant() {
        ContainerVariant::Emoticon => "bubble-body-emoticon",
        ContainerVariant::Normal => "bubble-body-text",
    };
    format!("bubble-body bubble-body-{} {}", side(params), variant)
}

pub const AVATAR_CLASS: &str = "bubble-avatar";
pub const AVATAR_CLICKABLE_CLASS: &str = "bubble-avatar bubble-avatar-clickable";
pub const AVATAR_PLACEHOLDER_CLASS: &str = "bubble-avatar-placeholder";
pub const TIME_CLASS: &str = "bubble-time";

pub fn read_marker_class(state: ReadState) -> &'static str {
    match state {
        ReadState::Read => "bubble-read bubble-read-read",
        ReadState::Unread => "bubble-read bubble-read-unread",
    }
}
