//! Dioxus components for Murmur chat bubbles.
//!
//! [`Bubble`] renders one message from its content tree and placement
//! flags. All decisions come from `murmur-core`; this crate only maps them
//! to markup and CSS classes. Hosts provide a [`murmur_core::BubbleConfig`]
//! through `use_context_provider` to pick the locale and fallback avatar.

pub mod bubble;
pub mod content;
pub mod emoticon;
pub mod profile_image;
pub mod style;

pub use bubble::Bubble;
pub use content::{RENDER_DEPTH_CEILING, render_content, render_content_with_depth};
pub use emoticon::Emoticon;
pub use profile_image::ProfileImage;

/// Bubble CSS: layout plus the default look of every style slot.
pub const BUBBLE_CSS: &str = include_str!("../assets/bubble.css");
