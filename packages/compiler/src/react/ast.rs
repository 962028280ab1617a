//! Renderable AST
//!
//! The closed node union the renderer works on. Produced from parsed HTML by
//! `transform`; loop directives become dedicated nodes with their children
//! already consumed, so rendering dispatch is exhaustive and never compares
//! tag strings.

use std::fmt;

/// Renderable node union
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RNode {
    Element(RElement),
    Text(RText),
    Loop(RLoop),
}

impl RNode {
    /// The segment name this node contributes to a `NodePath`.
    pub fn path_name(&self) -> &str {
        match self {
            RNode::Element(el) => &el.name,
            RNode::Text(_) => "#text",
            RNode::Loop(_) => crate::constants::tags::LOOP,
        }
    }
}

/// Text node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RText {
    pub value: String,
}

/// Attribute of an element node
///
/// `value` is `None` for bare flag attributes; the renderer treats absent and
/// empty values as the literal `true`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RAttribute {
    pub name: String,
    pub value: Option<String>,
}

/// Element node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RElement {
    pub name: String,
    pub attrs: Vec<RAttribute>,
    pub children: Vec<RNode>,
}

/// Loop directive node
///
/// Carries the three required directive attributes. The directive's markup
/// children describe the repeated element and are not part of the renderable
/// tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RLoop {
    /// Target component reference, resolved through the tag-to-var table
    pub component: String,
    /// Collection expression, with or without strict-binding braces
    pub array: String,
    /// Per-element field used for the generated `key` prop
    pub key: String,
}

/// Path of a node from the template container, used as the loop side-table
/// key and in error reports.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodePath {
    segments: Vec<PathSegment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct PathSegment {
    name: String,
    index: usize,
}

impl NodePath {
    pub fn root(name: &str) -> Self {
        NodePath {
            segments: vec![PathSegment {
                name: name.to_string(),
                index: 0,
            }],
        }
    }

    pub fn child(&self, name: &str, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment {
            name: name.to_string(),
            index,
        });
        NodePath { segments }
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i == 0 {
                write!(f, "{}", segment.name)?;
            } else {
                write!(f, " > {}[{}]", segment.name, segment.index)?;
            }
        }
        Ok(())
    }
}
