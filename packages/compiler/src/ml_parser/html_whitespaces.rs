//! Whitespace normalization
//!
//! Template markup is indentation-heavy; the renderer generates all output
//! indentation itself, so source whitespace is stripped before rendering.
//! Whitespace-only text nodes are removed and remaining text values trimmed.

use super::ast::{Node, Text};

/// Remove whitespace-only text nodes and trim text values, recursively.
pub fn remove_whitespaces(nodes: Vec<Node>) -> Vec<Node> {
    nodes
        .into_iter()
        .filter_map(|node| match node {
            Node::Text(text) => {
                let trimmed = text.value.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(Node::Text(Text::new(trimmed.to_string(), text.source_span)))
                }
            }
            Node::Element(mut element) => {
                element.children = remove_whitespaces(element.children);
                Some(Node::Element(element))
            }
            Node::Comment(_) => Some(node),
        })
        .collect()
}
