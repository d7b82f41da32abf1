//! Emoticon (sticker) widget.

use dioxus::prelude::*;
use murmur_core::EmoticonRef;

/// Renders a sticker as an image. The id is used as the image path.
#[component]
pub fn Emoticon(emoticon: EmoticonRef) -> Element {
    let alt = emoticon.alt.clone().unwrap_or_default();

    rsx! {
        img {
            class: "bubble-emoticon",
            src: "{emoticon.id}",
            alt: "{alt}",
            draggable: "false",
        }
    }
}
