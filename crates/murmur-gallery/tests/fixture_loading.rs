//! Loads the bundled fixtures the way the gallery binary does.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use murmur_core::{AvatarSlot, LayoutDecision, Locale, ReadState, TrailingSlot};
use murmur_gallery::{Args, Conversation, GalleryError};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(name)
}

#[test]
fn test_bundled_conversation_loads() {
    let conversation = Conversation::load(fixture("conversation.json")).unwrap();
    assert_eq!(conversation.title, "Weekend plans");
    assert_eq!(conversation.messages.len(), 4);
}

#[test]
fn test_bundled_conversation_layouts() {
    let conversation = Conversation::load(fixture("conversation.json")).unwrap();
    let layouts: Vec<_> = conversation
        .messages
        .iter()
        .map(LayoutDecision::for_props)
        .collect();

    assert_eq!(
        layouts[0].avatar,
        AvatarSlot::Image {
            src: "/avatars/jun.png".into()
        }
    );
    assert_eq!(layouts[0].trailing, TrailingSlot::None);

    assert_eq!(layouts[1].avatar, AvatarSlot::Placeholder);
    assert_eq!(layouts[1].trailing, TrailingSlot::Timestamp("9:12 AM".into()));

    assert_eq!(layouts[2].avatar, AvatarSlot::Hidden);
    assert!(layouts[2].style.is_emoticon);

    assert_eq!(layouts[3].trailing, TrailingSlot::ReadMarker(ReadState::Read));
    assert!(!layouts[3].style.is_emoticon);
}

#[test]
fn test_missing_fixture_is_io_error() {
    let err = Conversation::load(fixture("does-not-exist.json")).unwrap_err();
    assert!(matches!(err, GalleryError::Io { .. }));
}

#[test]
fn test_args_load_files() {
    let conversation = fixture("conversation.json");
    let config = fixture("config.en.json");
    let args = Args::parse_from([
        OsString::from("murmur-gallery"),
        OsString::from("--conversation"),
        conversation.into_os_string(),
        OsString::from("--config"),
        config.into_os_string(),
    ]);

    let bubble_config = args.bubble_config().unwrap();
    assert_eq!(bubble_config.locale, Locale::En);
    assert_eq!(bubble_config.default_profile_image, "/avatars/default.png");
    assert_eq!(bubble_config.limits.max_depth, 32);
    assert_eq!(bubble_config.limits.max_nodes, 4096);

    assert_eq!(args.conversation().unwrap().title, "Weekend plans");
}

#[test]
fn test_locale_flag_overrides_config_file() {
    let config = fixture("config.en.json");
    let args = Args::parse_from([
        OsString::from("murmur-gallery"),
        OsString::from("--config"),
        config.into_os_string(),
        OsString::from("--locale"),
        OsString::from("ko"),
    ]);
    assert_eq!(args.bubble_config().unwrap().locale, Locale::Ko);
}
