//! Node rendering
//!
//! Recursively converts renderable nodes into indented JSX text. Loop
//! directives must already have been extracted for the subtree being
//! rendered; the renderer only reads their generated variable names.

use crate::attribute_conversion;

use super::ast::{NodePath, RElement, RNode};
use super::bindings;
use super::loops::LoopTable;
use super::{TagToVar, INDENT};
use super::error::RenderError;

pub struct NodeRenderer<'a> {
    tag_to_var: &'a TagToVar,
    loops: &'a LoopTable,
}

impl<'a> NodeRenderer<'a> {
    pub fn new(tag_to_var: &'a TagToVar, loops: &'a LoopTable) -> Self {
        NodeRenderer { tag_to_var, loops }
    }

    /// Render the node and all descendants as full lines at `indent`.
    pub fn render(
        &self,
        node: &RNode,
        path: &NodePath,
        indent: &str,
    ) -> Result<String, RenderError> {
        match node {
            RNode::Text(text) => Ok(format!("{}{}\n", indent, bindings::render_text(&text.value))),
            RNode::Loop(_) => {
                let var_name =
                    self.loops
                        .name_for(path)
                        .ok_or_else(|| RenderError::UnresolvedReference {
                            reference: "loop binding".to_string(),
                            path: path.clone(),
                        })?;
                Ok(format!("{}{{ {} }}\n", indent, var_name))
            }
            RNode::Element(element) => self.render_element(element, path, indent),
        }
    }

    fn render_element(
        &self,
        element: &RElement,
        path: &NodePath,
        indent: &str,
    ) -> Result<String, RenderError> {
        let name = self
            .tag_to_var
            .get(&element.name)
            .map(String::as_str)
            .unwrap_or(&element.name);
        let props = render_props(element);

        if element.children.is_empty() {
            return Ok(format!("{}<{}{} />\n", indent, name, props));
        }

        let child_indent = format!("{}{}", INDENT, indent);
        let mut children = String::new();
        for (index, child) in element.children.iter().enumerate() {
            let child_path = path.child(child.path_name(), index);
            children.push_str(&self.render(child, &child_path, &child_indent)?);
        }
        Ok(format!(
            "{indent}<{name}{props}>\n{children}{indent}</{name}>\n",
            indent = indent,
            name = name,
            props = props,
            children = children,
        ))
    }
}

/// Render the attributes of an element, each preceded by a single space.
/// Absent and empty values are treated as the literal `true`.
fn render_props(element: &RElement) -> String {
    element
        .attrs
        .iter()
        .map(|attr| {
            let name = attribute_conversion::to_jsx(&attr.name);
            let raw = attr
                .value
                .as_deref()
                .filter(|value| !value.is_empty())
                .unwrap_or("true");
            format!(" {}={}", name, bindings::render_attr_value(raw))
        })
        .collect()
}
