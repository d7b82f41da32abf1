//! Chat bubble component.
//!
//! Renders one message as: wrapper row, avatar slot, message container,
//! bubble container with the content, and the trailing slot (timestamp or
//! read marker).

use dioxus::prelude::*;
use murmur_core::{AvatarSlot, BubbleConfig, LayoutDecision, TrailingSlot};

use crate::content::render_content_with_depth;
use crate::profile_image::ProfileImage;
use crate::style::{
    AVATAR_PLACEHOLDER_CLASS, TIME_CLASS, bubble_container_class, message_container_class,
    read_marker_class, wrapper_class,
};

/// A single chat message bubble.
#[component]
pub fn Bubble(message: murmur_core::BubbleProps, on_profile_click: Option<EventHandler<()>>) -> Element {
    let config = try_use_context::<BubbleConfig>().unwrap_or_default();
    let labels = config.labels();
    let layout = LayoutDecision::for_props_with_limits(&message, config.limits);

    let wrapper = wrapper_class(&layout.style);
    let message_class = message_container_class(&layout.style);
    let body_class = bubble_container_class(&layout.style);

    let avatar = match layout.avatar {
        AvatarSlot::Hidden => rsx! {},
        AvatarSlot::Placeholder => rsx! {
            div { class: AVATAR_PLACEHOLDER_CLASS }
        },
        AvatarSlot::Image { src } => rsx! {
            ProfileImage { src: src, on_click: on_profile_click }
        },
    };

    let trailing = match layout.trailing {
        TrailingSlot::None => rsx! {},
        TrailingSlot::Timestamp(time) => rsx! {
            span { class: TIME_CLASS, "{time}" }
        },
        TrailingSlot::ReadMarker(state) => {
            let text = labels.read_marker(state);
            rsx! {
                span { class: read_marker_class(state), "{text}" }
            }
        }
    };

    rsx! {
        div {
            class: "{wrapper}",
            {avatar}
            div {
                class: "{message_class}",
                div {
                    class: "{body_class}",
                    {render_content_with_depth(&message.content, config.limits.max_depth)}
                }
                {trailing}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use murmur_core::{BubbleProps, ClassifyLimits, ContentNode, Locale};

    fn render_to_string(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_received_message_with_avatar() {
        fn app() -> Element {
            let message = BubbleProps::new("hi").with_is_me(false).with_profile_image("a.png");
            rsx! {
                Bubble { message: message }
            }
        }

        let html = render_to_string(app);
        assert!(html.contains("bubble-wrapper-other"));
        assert!(html.contains("bubble-body-text"));
        assert!(html.contains(r#"src="a.png""#));
        assert!(html.contains("프로필"));
        assert!(!html.contains("프로필 보기"));
    }

    #[test]
    fn test_clickable_avatar_has_tooltip() {
        fn app() -> Element {
            let message = BubbleProps::new("hi").with_is_me(false).with_profile_image("a.png");
            rsx! {
                Bubble {
                    message: message,
                    on_profile_click: move |_| {},
                }
            }
        }

        let html = render_to_string(app);
        assert!(html.contains("bubble-avatar-clickable"));
        assert!(html.contains("프로필 보기"));
    }

    #[test]
    fn test_own_last_emoticon_unread_in_english() {
        fn app() -> Element {
            use_context_provider(|| BubbleConfig::default().with_locale(Locale::En));
            let message = BubbleProps::new(ContentNode::emoticon("/emoticons/party.png"))
                .with_is_last_message(true);
            rsx! {
                Bubble { message: message }
            }
        }

        let html = render_to_string(app);
        assert!(html.contains("bubble-body-emoticon"));
        assert!(html.contains("Unread"));
        assert!(!html.contains("bubble-avatar"));
    }

    #[test]
    fn test_configured_depth_cap_bounds_rendering() {
        fn app() -> Element {
            use_context_provider(|| {
                BubbleConfig::default().with_limits(ClassifyLimits {
                    max_depth: 2,
                    ..ClassifyLimits::default()
                })
            });
            let mut content = ContentNode::text("deep text");
            for _ in 0..100_000 {
                content = ContentNode::sequence([content]);
            }
            rsx! {
                Bubble { message: BubbleProps::new(content) }
            }
        }

        let html = render_to_string(app);
        assert!(html.contains("bubble-text-flattened"));
        assert!(html.contains("deep text"));
    }
}
