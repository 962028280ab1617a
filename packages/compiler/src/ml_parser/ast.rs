//! HTML AST
//!
//! Node definitions for parsed template markup. The tree is rooted at the
//! parse result's root nodes; attribute document order is preserved so that
//! later emission stays deterministic.

use serde::{Deserialize, Serialize};

use crate::parse_util::ParseSourceSpan;

/// Node type union
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(Text),
    Comment(Comment),
}

impl Node {
    pub fn source_span(&self) -> ParseSourceSpan {
        match self {
            Node::Element(e) => e.source_span,
            Node::Text(t) => t.source_span,
            Node::Comment(c) => c.source_span,
        }
    }
}

/// Text node
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Text {
    pub value: String,
    pub source_span: ParseSourceSpan,
}

impl Text {
    pub fn new(value: String, source_span: ParseSourceSpan) -> Self {
        Text { value, source_span }
    }
}

/// Attribute node
///
/// `value` is `None` for bare flag attributes (`<input disabled>`), which
/// the renderer later treats the same as an empty value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: Option<String>,
    pub source_span: ParseSourceSpan,
}

impl Attribute {
    pub fn new(name: String, value: Option<String>, source_span: ParseSourceSpan) -> Self {
        Attribute { name, value, source_span }
    }
}

/// Element node
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attrs: Vec<Attribute>,
    pub children: Vec<Node>,
    pub is_self_closing: bool,
    pub source_span: ParseSourceSpan,
}

impl Element {
    pub fn new(
        name: String,
        attrs: Vec<Attribute>,
        children: Vec<Node>,
        is_self_closing: bool,
        source_span: ParseSourceSpan,
    ) -> Self {
        Element {
            name,
            attrs,
            children,
            is_self_closing,
            source_span,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&Attribute> {
        self.attrs.iter().find(|a| a.name == name)
    }

    /// The attribute's value, when the attribute is present with a non-empty
    /// value.
    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attr(name)
            .and_then(|a| a.value.as_deref())
            .filter(|v| !v.is_empty())
    }
}

/// Comment node
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub value: String,
    pub source_span: ParseSourceSpan,
}

impl Comment {
    pub fn new(value: String, source_span: ParseSourceSpan) -> Self {
        Comment { value, source_span }
    }
}
