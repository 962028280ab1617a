#![deny(clippy::all)]

//! react-template-compiler
//!
//! Compiles HTML-like templates annotated with `{{ ... }}` binding
//! expressions and `<loop>` directives into JSX component function sources.
//!
//! The low-level entry point is [`react::templates::render_template_set`],
//! which takes already-parsed template nodes plus a name-resolution table;
//! [`compiler::compile`] is the whole-file pipeline on top of it.

// Core modules (root level)
pub mod attribute_conversion;
pub mod chars;
pub mod compiler;
pub mod constants;
pub mod parse_util;

// Parser modules
pub mod ml_parser;

// Rendering modules
pub mod react;

// Re-exports
pub use compiler::{compile, CompileError, CompileResult};
pub use react::error::RenderError;
pub use react::templates::{
    render_default_template, render_named_template, render_template_set, TemplateSet,
};
pub use react::TagToVar;
