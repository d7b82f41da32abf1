//! Content tree passed into a bubble.

use serde::{Deserialize, Serialize};

/// Reference to a sticker rendered by the emoticon widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmoticonRef {
    /// Sticker identifier (also used as the image path by the widget).
    pub id: String,
    /// Accessible description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl EmoticonRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            alt: None,
        }
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }
}

/// A node in the renderable content of a message.
///
/// The set of variants is closed: classification matches on them
/// structurally instead of probing node identity at runtime.
///
/// `Clone`, `PartialEq` and `Drop` walk the tree with heap worklists, so
/// arbitrarily deep trees are safe to pass around as component props.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentNode {
    /// The emoticon widget.
    Emoticon(EmoticonRef),
    /// Generic wrapper around a single nested node.
    Container(Box<ContentNode>),
    /// Plain text.
    Text(String),
    /// Ordered list of nested nodes.
    Sequence(Vec<ContentNode>),
}

impl ContentNode {
    pub fn text(text: impl Into<String>) -> Self {
        ContentNode::Text(text.into())
    }

    pub fn emoticon(id: impl Into<String>) -> Self {
        ContentNode::Emoticon(EmoticonRef::new(id))
    }

    pub fn container(child: ContentNode) -> Self {
        ContentNode::Container(Box::new(child))
    }

    pub fn sequence(children: impl IntoIterator<Item = ContentNode>) -> Self {
        ContentNode::Sequence(children.into_iter().collect())
    }

    /// Empty content.
    pub fn empty() -> Self {
        ContentNode::Sequence(Vec::new())
    }

    /// Top-level view of this node: a sequence yields its children,
    /// anything else is a one-element slice.
    pub fn top_level(&self) -> &[ContentNode] {
        match self {
            ContentNode::Sequence(children) => children,
            other => std::slice::from_ref(other),
        }
    }

    /// Concatenated text of every `Text` leaf, in document order.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                ContentNode::Text(text) => out.push_str(text),
                ContentNode::Emoticon(_) => {}
                ContentNode::Container(child) => stack.push(&**child),
                ContentNode::Sequence(children) => stack.extend(children.iter().rev()),
            }
        }
        out
    }
}

impl Default for ContentNode {
    fn default() -> Self {
        ContentNode::empty()
    }
}

impl From<&str> for ContentNode {
    fn from(text: &str) -> Self {
        ContentNode::text(text)
    }
}

impl From<String> for ContentNode {
    fn from(text: String) -> Self {
        ContentNode::Text(text)
    }
}

impl From<EmoticonRef> for ContentNode {
    fn from(emoticon: EmoticonRef) -> Self {
        ContentNode::Emoticon(emoticon)
    }
}

impl From<Vec<ContentNode>> for ContentNode {
    fn from(children: Vec<ContentNode>) -> Self {
        ContentNode::Sequence(children)
    }
}

enum CloneStep<'a> {
    Visit(&'a ContentNode),
    WrapContainer,
    CollectSequence(usize),
}

impl Clone for ContentNode {
    fn clone(&self) -> Self {
        let mut steps = vec![CloneStep::Visit(self)];
        let mut built: Vec<ContentNode> = Vec::new();

        while let Some(step) = steps.pop() {
            match step {
                CloneStep::Visit(ContentNode::Text(text)) => built.push(ContentNode::Text(text.clone())),
                CloneStep::Visit(ContentNode::Emoticon(emoticon)) => {
                    built.push(ContentNode::Emoticon(emoticon.clone()))
                }
                CloneStep::Visit(ContentNode::Container(child)) => {
                    steps.push(CloneStep::WrapContainer);
                    steps.push(CloneStep::Visit(child));
                }
                CloneStep::Visit(ContentNode::Sequence(items)) => {
                    steps.push(CloneStep::CollectSequence(items.len()));
                    steps.extend(items.iter().rev().map(CloneStep::Visit));
                }
                CloneStep::WrapContainer => {
                    let child = built.pop().unwrap_or_default();
                    built.push(ContentNode::Container(Box::new(child)));
                }
                CloneStep::CollectSequence(len) => {
                    let items = built.split_off(built.len().saturating_sub(len));
                    built.push(ContentNode::Sequence(items));
                }
            }
        }

        built.pop().unwrap_or_default()
    }
}

impl PartialEq for ContentNode {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some(pair) = pending.pop() {
            match pair {
                (ContentNode::Text(a), ContentNode::Text(b)) => {
                    if a != b {
                        return false;
                    }
                }
                (ContentNode::Emoticon(a), ContentNode::Emoticon(b)) => {
                    if a != b {
                        return false;
                    }
                }
                (ContentNode::Container(a), ContentNode::Container(b)) => pending.push((&**a, &**b)),
                (ContentNode::Sequence(a), ContentNode::Sequence(b)) => {
                    if a.len() != b.len() {
                        return false;
                    }
                    pending.extend(a.iter().zip(b.iter()));
                }
                _ => return false,
            }
        }
        true
    }
}

impl Eq for ContentNode {}

// Deeply nested trees would otherwise overflow the stack in the derived drop
// glue, so children are detached onto a heap worklist first.
impl Drop for ContentNode {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_children(self, &mut pending);
        while let Some(mut node) = pending.pop() {
            detach_children(&mut node, &mut pending);
        }
    }
}

fn detach_children(node: &mut ContentNode, out: &mut Vec<ContentNode>) {
    match node {
        ContentNode::Container(child) => {
            if !matches!(child.as_ref(), ContentNode::Sequence(items) if items.is_empty()) {
                out.push(std::mem::take(child.as_mut()));
            }
        }
        ContentNode::Sequence(children) => out.append(children),
        ContentNode::Text(_) | ContentNode::Emoticon(_) => {}
    }
}
