//! Layout decisions for a single bubble.
//!
//! [`select_layout`] is a pure function of the message props and the
//! classification verdict. The result says which avatar slot to render,
//! what fills the trailing slot and which parameters the style layer gets.

use crate::classify::{ClassifyLimits, classify, is_emoticon_content};
use crate::props::BubbleProps;

/// Avatar area of a bubble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarSlot {
    /// Own message: no avatar area at all.
    Hidden,
    /// Empty element keeping the avatar column aligned.
    Placeholder,
    /// Avatar image.
    Image { src: String },
}

/// Read-receipt state shown by the read marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadState {
    Read,
    Unread,
}

impl From<bool> for ReadState {
    fn from(is_read: bool) -> Self {
        if is_read { ReadState::Read } else { ReadState::Unread }
    }
}

/// Auxiliary area after the message container. Holds at most one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrailingSlot {
    None,
    Timestamp(String),
    ReadMarker(ReadState),
}

/// Structural variant of the message container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerVariant {
    Normal,
    Emoticon,
}

/// Parameters handed to the style layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StyleParams {
    pub is_me: bool,
    pub is_continuous: bool,
    pub is_emoticon: bool,
}

impl StyleParams {
    pub fn variant(&self) -> ContainerVariant {
        if self.is_emoticon {
            ContainerVariant::Emoticon
        } else {
            ContainerVariant::Normal
        }
    }
}

/// Everything the renderer needs besides the content itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutDecision {
    pub avatar: AvatarSlot,
    pub trailing: TrailingSlot,
    pub style: StyleParams,
}

impl LayoutDecision {
    /// Classify the content of `props` and select its layout.
    pub fn for_props(props: &BubbleProps) -> Self {
        let is_emoticon = is_emoticon_content(props.top_level_content());
        select_layout(props, is_emoticon)
    }

    /// Same as [`LayoutDecision::for_props`] with explicit traversal caps.
    pub fn for_props_with_limits(props: &BubbleProps, limits: ClassifyLimits) -> Self {
        let is_emoticon = classify(props.top_level_content(), limits).is_emoticon();
        select_layout(props, is_emoticon)
    }

    pub fn variant(&self) -> ContainerVariant {
        self.style.variant()
    }
}

/// Select the layout of a bubble from its props and classification verdict.
pub fn select_layout(props: &BubbleProps, is_emoticon: bool) -> LayoutDecision {
    let avatar = if props.is_me {
        AvatarSlot::Hidden
    } else if !props.profile_image.is_empty() && !props.is_continuous {
        AvatarSlot::Image {
            src: props.profile_image.clone(),
        }
    } else {
        AvatarSlot::Placeholder
    };

    // The last message of a run shows the read marker (own messages) instead
    // of the timestamp; the two never share the slot.
    let trailing = if props.is_me && props.is_last_message {
        TrailingSlot::ReadMarker(ReadState::from(props.is_read))
    } else if props.show_time && !props.is_last_message {
        TrailingSlot::Timestamp(props.timestamp.clone())
    } else {
        TrailingSlot::None
    };

    LayoutDecision {
        avatar,
        trailing,
        style: StyleParams {
            is_me: props.is_me,
            is_continuous: props.is_continuous,
            is_emoticon,
        },
    }
}

/// Whether an interaction may reach ancestor handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    Stop,
}

/// Handle a click on the avatar image.
///
/// Calls the handler, if any, exactly once. The click is always consumed so
/// a clickable ancestor (the message row, say) never sees it.
pub fn consume_avatar_click<F: FnOnce()>(handler: Option<F>) -> Propagation {
    if let Some(handler) = handler {
        handler();
    }
    Propagation::Stop
}
