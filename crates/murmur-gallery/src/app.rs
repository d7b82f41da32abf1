//! Root component of the gallery window.

use dioxus::prelude::*;
use murmur_core::BubbleConfig;
use murmur_ui::Bubble;

use crate::fixture::Conversation;

/// Renders the conversation provided through the launch context.
#[component]
pub fn App() -> Element {
    let conversation = use_context::<Conversation>();
    let config = use_context::<BubbleConfig>();
    let locale = config.locale;
    let count = conversation.messages.len();

    rsx! {
        div {
            class: "gallery",
            header {
                class: "gallery-header",
                h1 { "{conversation.title}" }
                span { class: "gallery-meta", "{count} messages · {locale}" }
            }
            div {
                class: "gallery-messages",
                for (index, message) in conversation.messages.iter().enumerate() {
                    Bubble {
                        key: "{index}",
                        message: message.clone(),
                        on_profile_click: move |_| {
                            tracing::info!(message = index, "Profile clicked");
                        },
                    }
                }
            }
        }
    }
}
