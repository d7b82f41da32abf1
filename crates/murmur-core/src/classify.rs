//! Emoticon content classification.
//!
//! A message counts as emoticon content when any node reachable from its
//! top-level content is the emoticon widget. Mixed content (an emoticon
//! followed by text, say) still counts: this is containment, not exclusivity.
//!
//! Traversal is depth-first and left-to-right over an explicit worklist, and
//! stops at the first emoticon. Subtrees nested deeper than
//! [`ClassifyLimits::max_depth`] are skipped while their siblings are still
//! scanned; running out of [`ClassifyLimits::max_nodes`] stops the scan.
//! Either way, a tree with no emoticon found is treated as plain content.

use serde::{Deserialize, Serialize};

use crate::content::ContentNode;

/// Default maximum nesting depth inspected.
pub const DEFAULT_MAX_DEPTH: usize = 64;
/// Default maximum number of nodes inspected.
pub const DEFAULT_MAX_NODES: usize = 4096;

/// Traversal caps for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifyLimits {
    /// Deepest nesting level inspected; top-level nodes are depth 0.
    pub max_depth: usize,
    /// Maximum number of nodes visited.
    pub max_nodes: usize,
}

impl Default for ClassifyLimits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_nodes: DEFAULT_MAX_NODES,
        }
    }
}

impl ClassifyLimits {
    /// Caps large enough that no realistic message reaches them.
    pub fn unbounded() -> Self {
        Self {
            max_depth: usize::MAX,
            max_nodes: usize::MAX,
        }
    }
}

/// Detailed classification result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// An emoticon node was found.
    Emoticon,
    /// The whole tree was inspected and holds no emoticon.
    Plain,
    /// No emoticon was found, but part of the tree went uninspected: a
    /// subtree was too deep or the node budget ran out.
    LimitExceeded {
        /// Depth of the first node that was not inspected.
        depth: usize,
        /// Nodes visited.
        visited: usize,
    },
}

impl Classification {
    /// Collapse into the boolean verdict; caps fail closed.
    pub fn is_emoticon(&self) -> bool {
        matches!(self, Classification::Emoticon)
    }
}

/// Whether the given top-level content is emoticon content, using the
/// default limits.
pub fn is_emoticon_content(children: &[ContentNode]) -> bool {
    classify(children, ClassifyLimits::default()).is_emoticon()
}

/// Whether a single node is, or contains, an emoticon.
pub fn check_for_emoticon(node: &ContentNode) -> bool {
    is_emoticon_content(std::slice::from_ref(node))
}

/// Classify top-level content under explicit limits.
pub fn classify(children: &[ContentNode], limits: ClassifyLimits) -> Classification {
    let mut stack: Vec<(&ContentNode, usize)> = children.iter().rev().map(|n| (n, 0)).collect();
    let mut visited = 0usize;
    let mut pruned: Option<usize> = None;

    while let Some((node, depth)) = stack.pop() {
        if visited >= limits.max_nodes {
            tracing::warn!(
                depth,
                visited,
                max_nodes = limits.max_nodes,
                "Content tree exceeds node budget, treating as plain"
            );
            return Classification::LimitExceeded { depth, visited };
        }
        if depth > limits.max_depth {
            // Skip this subtree only; siblings may still hold an emoticon.
            pruned.get_or_insert(depth);
            continue;
        }
        visited += 1;

        match node {
            ContentNode::Emoticon(emoticon) => {
                tracing::trace!(id = %emoticon.id, depth, visited, "Emoticon content");
                return Classification::Emoticon;
            }
            ContentNode::Text(_) => {}
            ContentNode::Container(child) => stack.push((&**child, depth + 1)),
            ContentNode::Sequence(items) => {
                stack.extend(items.iter().rev().map(|c| (c, depth + 1)));
            }
        }
    }

    if let Some(depth) = pruned {
        tracing::warn!(
            depth,
            visited,
            max_depth = limits.max_depth,
            "Content tree exceeds depth cap, treating as plain"
        );
        return Classification::LimitExceeded { depth, visited };
    }

    tracing::trace!(visited, "Plain content");
    Classification::Plain
}
