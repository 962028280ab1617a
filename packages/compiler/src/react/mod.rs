//! AST-to-React rendering
//!
//! Converts parsed template trees into JSX component function sources.

pub mod ast;
pub mod bindings;
pub mod error;
pub mod loops;
pub mod renderer;
pub mod templates;
pub mod transform;

use indexmap::IndexMap;

/// Name-resolution table: source tag / template name to the component
/// identifier used in generated output. Immutable during a render pass.
pub type TagToVar = IndexMap<String, String>;

/// Indentation unit of generated output
pub(crate) const INDENT: &str = "  ";

pub use ast::{NodePath, RNode};
pub use bindings::{classify, Binding};
pub use error::RenderError;
pub use loops::{extract_loops, LoopTable};
pub use renderer::NodeRenderer;
pub use templates::{
    render_default_template, render_named_template, render_template_body, render_template_set,
    TemplateSet,
};
pub use transform::to_react;
