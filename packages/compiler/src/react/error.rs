//! Render Errors
//!
//! Rendering a template aborts on the first malformed node rather than
//! emitting partial output; every error names the offending node's path.

use thiserror::Error;

use super::ast::NodePath;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// A node shape outside the renderable union (e.g. a comment), or a
    /// structurally unusable template.
    #[error("unsupported {kind} node at {path}")]
    MalformedNode { kind: String, path: NodePath },

    /// A loop directive without one of its required attributes.
    #[error("loop directive at {path} is missing required attribute \"{attribute}\"")]
    MissingLoopAttribute {
        attribute: &'static str,
        path: NodePath,
    },

    /// A name-resolution table miss on a non-fallback path.
    #[error("no component variable for \"{reference}\" at {path}")]
    UnresolvedReference { reference: String, path: NodePath },
}
