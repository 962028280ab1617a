//! Template rendering
//!
//! Renders one `<template>` container into a component function body (loop
//! bindings first, then the returned JSX block) and wraps it as either the
//! default-exported anonymous function or a named exported function. The
//! public entry point renders a whole template set: named templates first in
//! input order, the default template last.

use rayon::prelude::*;

use crate::constants::{tags, template_attrs};
use crate::ml_parser::ast as html;

use super::ast::NodePath;
use super::error::RenderError;
use super::loops::extract_loops;
use super::renderer::NodeRenderer;
use super::transform::{path_name, to_react};
use super::{TagToVar, INDENT};

/// One template set: the default template, the named templates in input
/// order, and the name-resolution table shared by all of them.
#[derive(Debug)]
pub struct TemplateSet<'a> {
    pub default_node: &'a html::Element,
    pub named_nodes: Vec<&'a html::Element>,
    pub tag_to_var: &'a TagToVar,
}

/// Render the body of one template container: loop-binding statements
/// followed by the `return ( ... );` block.
pub fn render_template_body(
    container: &html::Element,
    tag_to_var: &TagToVar,
) -> Result<String, RenderError> {
    let container_path = NodePath::root(tags::TEMPLATE);
    let (body_node, body_path) = template_body(container, &container_path)?;
    let body = to_react(body_node, &body_path)?;

    // Loop extraction runs first; the renderer reads the generated names.
    let (rendered_loops, loop_table) = extract_loops(&body, &body_path, tag_to_var)?;
    let renderer = NodeRenderer::new(tag_to_var, &loop_table);
    let body_indent = format!("{}{}", INDENT, INDENT);
    let jsx = renderer.render(&body, &body_path, &body_indent)?;

    Ok(format!(
        "{loops}{i}return (\n{jsx}{i});\n",
        loops = rendered_loops,
        i = INDENT,
        jsx = jsx,
    ))
}

/// Unwrap the template container down to its renderable body node.
fn template_body<'a>(
    container: &'a html::Element,
    container_path: &NodePath,
) -> Result<(&'a html::Node, NodePath), RenderError> {
    for (index, child) in container.children.iter().enumerate() {
        if let html::Node::Text(text) = child {
            if text.value.trim().is_empty() {
                continue;
            }
        }
        return Ok((child, container_path.child(path_name(child), index)));
    }
    Err(RenderError::MalformedNode {
        kind: "empty template".to_string(),
        path: container_path.clone(),
    })
}

/// Render the default template as a default-exported anonymous function.
pub fn render_default_template(
    node: &html::Element,
    tag_to_var: &TagToVar,
) -> Result<String, RenderError> {
    let content = render_template_body(node, tag_to_var)?;
    Ok(format!("export default function(props) {{\n{}}}\n", content))
}

/// Render a named template as a named exported function. The identifier is
/// resolved through the tag-to-var table, keyed by the template's declared
/// name.
pub fn render_named_template(
    node: &html::Element,
    tag_to_var: &TagToVar,
) -> Result<String, RenderError> {
    let path = NodePath::root(tags::TEMPLATE);
    let name = node
        .attr_value(template_attrs::NAME)
        .ok_or_else(|| RenderError::MalformedNode {
            kind: "unnamed template".to_string(),
            path: path.clone(),
        })?;
    let var_name = tag_to_var
        .get(name)
        .ok_or_else(|| RenderError::UnresolvedReference {
            reference: name.to_string(),
            path,
        })?;
    let content = render_template_body(node, tag_to_var)?;
    Ok(format!(
        "export function {}(props) {{\n{}}}\n",
        var_name, content
    ))
}

/// Render the whole set: one function source per named template (input
/// order), then the default template's source as the final element.
///
/// Template renders are independent of each other, so the named templates
/// render in parallel; collection preserves input order.
pub fn render_template_set(set: &TemplateSet<'_>) -> Result<Vec<String>, RenderError> {
    let mut rendered: Vec<String> = set
        .named_nodes
        .par_iter()
        .map(|node| render_named_template(node, set.tag_to_var))
        .collect::<Result<Vec<_>, _>>()?;
    rendered.push(render_default_template(set.default_node, set.tag_to_var)?);
    Ok(rendered)
}
