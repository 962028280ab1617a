//! Compile pipeline
//!
//! Ties the pieces together for whole template files: parse, normalize
//! whitespace, discover the default and named `<template>` elements, derive
//! the name-resolution table, render the template set and join the function
//! sources into one output string.
//!
//! Import emission is left to the caller, which knows the surrounding module
//! layout.

use serde::Serialize;
use thiserror::Error;

use crate::constants::{tags, template_attrs};
use crate::ml_parser::ast::{Element, Node};
use crate::ml_parser::{remove_whitespaces, HtmlParser};
use crate::parse_util::{sanitize_identifier, ParseError};
use crate::react::error::RenderError;
use crate::react::templates::{render_template_set, TemplateSet};
use crate::react::TagToVar;

/// Compilation result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompileResult {
    /// Generated JSX source: named component functions first, the default
    /// export last, separated by blank lines.
    pub code: String,
}

#[derive(Debug, Error)]
pub enum CompileError {
    #[error("failed to parse {url}: {} parse error(s)", .errors.len())]
    Parse { url: String, errors: Vec<ParseError> },

    #[error("no default template in {url}")]
    MissingDefaultTemplate { url: String },

    #[error("multiple default templates in {url}")]
    MultipleDefaultTemplates { url: String },

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Compile one template file into JSX component function sources.
pub fn compile(source: &str, url: &str) -> Result<CompileResult, CompileError> {
    let parsed = HtmlParser::new().parse(source, url);
    if !parsed.errors.is_empty() {
        return Err(CompileError::Parse {
            url: url.to_string(),
            errors: parsed.errors,
        });
    }

    let root_nodes = remove_whitespaces(parsed.root_nodes);
    let (default_node, named_nodes) = discover_templates(&root_nodes, url)?;
    let tag_to_var = build_tag_to_var(&named_nodes);

    let set = TemplateSet {
        default_node,
        named_nodes,
        tag_to_var: &tag_to_var,
    };
    let sources = render_template_set(&set)?;

    Ok(CompileResult {
        code: sources.join("\n"),
    })
}

/// Split the root-level `<template>` elements into the single default
/// template and the named templates in document order.
fn discover_templates<'a>(
    root_nodes: &'a [Node],
    url: &str,
) -> Result<(&'a Element, Vec<&'a Element>), CompileError> {
    let mut default_nodes: Vec<&Element> = Vec::new();
    let mut named_nodes: Vec<&Element> = Vec::new();

    for node in root_nodes {
        if let Node::Element(element) = node {
            if element.name != tags::TEMPLATE {
                continue;
            }
            if element.attr_value(template_attrs::NAME).is_some() {
                named_nodes.push(element);
            } else {
                default_nodes.push(element);
            }
        }
    }

    match default_nodes.len() {
        0 => Err(CompileError::MissingDefaultTemplate {
            url: url.to_string(),
        }),
        1 => Ok((default_nodes[0], named_nodes)),
        _ => Err(CompileError::MultipleDefaultTemplates {
            url: url.to_string(),
        }),
    }
}

/// Derive the name-resolution table from the named templates: each declared
/// name maps to a sanitized identifier.
pub fn build_tag_to_var(named_nodes: &[&Element]) -> TagToVar {
    named_nodes
        .iter()
        .filter_map(|element| element.attr_value(template_attrs::NAME))
        .map(|name| (name.to_string(), sanitize_identifier(name)))
        .collect()
}
