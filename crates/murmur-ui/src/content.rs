//! Maps a content tree to markup.

use dioxus::prelude::*;
use murmur_core::ContentNode;
use murmur_core::classify::DEFAULT_MAX_DEPTH;

use crate::emoticon::Emoticon;

/// Deepest nesting rendered as markup, whatever the configured cap.
pub const RENDER_DEPTH_CEILING: usize = 256;

/// Render a message body with the default depth cap.
pub fn render_content(node: &ContentNode) -> Element {
    render_content_with_depth(node, DEFAULT_MAX_DEPTH)
}

/// Render a message body.
///
/// Depth is counted the way the classifier counts it: top-level nodes are
/// depth 0 and every container or sequence child is one level deeper.
/// Subtrees past `max_depth` (at most [`RENDER_DEPTH_CEILING`]) are flattened
/// to their plain text.
pub fn render_content_with_depth(node: &ContentNode, max_depth: usize) -> Element {
    let max_depth = max_depth.min(RENDER_DEPTH_CEILING);
    rsx! {
        for child in node.top_level() {
            {render_node(child, 0, max_depth)}
        }
    }
}

fn render_node(node: &ContentNode, depth: usize, max_depth: usize) -> Element {
    if depth > max_depth {
        let text = node.plain_text();
        return rsx! {
            span { class: "bubble-text bubble-text-flattened", "{text}" }
        };
    }

    match node {
        ContentNode::Emoticon(emoticon) => rsx! {
            Emoticon { emoticon: emoticon.clone() }
        },
        ContentNode::Text(text) => rsx! {
            span { class: "bubble-text", "{text}" }
        },
        ContentNode::Container(child) => rsx! {
            div {
                class: "bubble-content-group",
                {render_node(child, depth + 1, max_depth)}
            }
        },
        ContentNode::Sequence(children) => rsx! {
            for child in children.iter() {
                {render_node(child, depth + 1, max_depth)}
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested_sequences(mut node: ContentNode, levels: usize) -> ContentNode {
        for _ in 0..levels {
            node = ContentNode::sequence([node]);
        }
        node
    }

    fn nested_containers(mut node: ContentNode, levels: usize) -> ContentNode {
        for _ in 0..levels {
            node = ContentNode::container(node);
        }
        node
    }

    fn render_to_string(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_deep_sequence_chain_is_flattened() {
        fn app() -> Element {
            let deep = nested_sequences(ContentNode::text("bottom"), 100_000);
            render_content(&deep)
        }

        let html = render_to_string(app);
        assert!(html.contains("bubble-text-flattened"));
        assert!(html.contains("bottom"));
    }

    #[test]
    fn test_deep_container_chain_is_flattened() {
        fn app() -> Element {
            let deep = nested_containers(ContentNode::text("bottom"), 100_000);
            render_content(&deep)
        }

        let html = render_to_string(app);
        assert!(html.contains("bubble-text-flattened"));
        assert!(html.contains("bottom"));
    }

    #[test]
    fn test_content_within_cap_renders_markup() {
        fn app() -> Element {
            let node = ContentNode::sequence([
                ContentNode::text("hello"),
                nested_containers(ContentNode::emoticon("/emoticons/wave.png"), 3),
            ]);
            render_content(&node)
        }

        let html = render_to_string(app);
        assert!(html.contains("hello"));
        assert!(html.contains("bubble-emoticon"));
        assert!(!html.contains("bubble-text-flattened"));
    }

    #[test]
    fn test_configured_depth_is_honored() {
        fn app() -> Element {
            let node = nested_sequences(
                ContentNode::sequence([ContentNode::emoticon("/emoticons/wave.png"), ContentNode::text("tail")]),
                3,
            );
            render_content_with_depth(&node, 1)
        }

        let html = render_to_string(app);
        assert!(html.contains("bubble-text-flattened"));
        assert!(html.contains("tail"));
        assert!(!html.contains("bubble-emoticon"));
    }
}
