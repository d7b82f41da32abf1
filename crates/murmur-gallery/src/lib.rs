//! Murmur gallery
//!
//! Desktop app that renders a conversation fixture through the Murmur
//! bubble components. Useful for eyeballing every layout combination
//! (avatars, continuations, read markers, emoticons) in one window.

pub mod app;
pub mod cli;
pub mod error;
pub mod fixture;

pub use app::App;
pub use cli::Args;
pub use error::{GalleryError, GalleryResult};
pub use fixture::Conversation;
