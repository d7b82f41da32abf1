//! Avatar image with one-shot fallback.

use dioxus::prelude::*;
use murmur_core::{AvatarEvent, AvatarState, BubbleConfig, Propagation, consume_avatar_click};

use crate::style::{AVATAR_CLASS, AVATAR_CLICKABLE_CLASS};

/// Profile image of the message author.
///
/// A failed load swaps in the configured default image once. Clicks never
/// reach ancestor handlers.
#[component]
pub fn ProfileImage(src: String, #[props(!optional)] on_click: Option<EventHandler<()>>) -> Element {
    let config = try_use_context::<BubbleConfig>().unwrap_or_default();
    let labels = config.labels();
    let mut state = use_signal(|| AvatarState::new(src.clone()));

    // Re-rendered with another image: start over without touching the signal
    // during render. The handlers below commit the reset.
    let current = state.read().clone().on_event(AvatarEvent::SourceChanged(src.clone()));
    let display = current.display_src(&config.default_profile_image).to_string();

    let clickable = on_click.is_some();
    let class = if clickable { AVATAR_CLICKABLE_CLASS } else { AVATAR_CLASS };
    let tooltip = clickable.then_some(labels.profile_tooltip);

    let load_src = src.clone();
    let error_src = src;

    rsx! {
        img {
            class: class,
            src: "{display}",
            alt: labels.profile_alt,
            title: tooltip,
            onload: move |_| {
                tracing::trace!(src = %load_src, "Avatar image loaded");
                let next = state
                    .peek()
                    .clone()
                    .on_event(AvatarEvent::SourceChanged(load_src.clone()))
                    .on_event(AvatarEvent::Loaded);
                if *state.peek() != next {
                    state.set(next);
                }
            },
            onerror: move |_| {
                tracing::debug!(src = %error_src, "Avatar image error event");
                let next = state
                    .peek()
                    .clone()
                    .on_event(AvatarEvent::SourceChanged(error_src.clone()))
                    .on_event(AvatarEvent::Failed);
                if *state.peek() != next {
                    state.set(next);
                }
            },
            onclick: move |evt: MouseEvent| {
                let handler = on_click.map(|handler| move || handler.call(()));
                if consume_avatar_click(handler) == Propagation::Stop {
                    evt.stop_propagation();
                }
            },
        }
    }
}
