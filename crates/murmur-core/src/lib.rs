//! Presentation logic for Murmur chat bubbles.
//!
//! Takes the content tree and placement flags of a single message and
//! derives everything the UI needs to render it: whether the body is
//! emoticon content, which avatar slot to show, what goes in the trailing
//! slot, and which style parameters the container receives.
//!
//! Nothing here depends on a UI framework. `murmur-ui` renders the
//! [`LayoutDecision`] with Dioxus.
//!
//! # Quick Start
//!
//! ```
//! use murmur_core::{AvatarSlot, BubbleProps, ContentNode, LayoutDecision, TrailingSlot};
//!
//! let props = BubbleProps::new(ContentNode::text("hi"))
//!     .with_is_me(false)
//!     .with_profile_image("a.png");
//!
//! let layout = LayoutDecision::for_props(&props);
//! assert_eq!(layout.avatar, AvatarSlot::Image { src: "a.png".to_string() });
//! assert_eq!(layout.trailing, TrailingSlot::None);
//! assert!(!layout.style.is_emoticon);
//! ```

pub mod avatar;
pub mod classify;
pub mod config;
pub mod content;
pub mod error;
pub mod labels;
pub mod layout;
pub mod props;

pub use avatar::{AvatarEvent, AvatarState, DEFAULT_PROFILE_IMAGE};
pub use classify::{
    Classification, ClassifyLimits, check_for_emoticon, classify, is_emoticon_content,
};
pub use config::BubbleConfig;
pub use content::{ContentNode, EmoticonRef};
pub use error::ConfigError;
pub use labels::{Labels, Locale};
pub use layout::{
    AvatarSlot, ContainerVariant, LayoutDecision, Propagation, ReadState, StyleParams,
    TrailingSlot, consume_avatar_click, select_layout,
};
pub use props::BubbleProps;
