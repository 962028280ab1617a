//! HTML AST to renderable AST transformation
//!
//! Re-types parsed markup into the closed renderable union, validating loop
//! directives on the way. Loop children are consumed here: the directive's
//! markup describes the repeated element and never reaches the renderer.

use crate::constants::{loop_attrs, tags};
use crate::ml_parser::ast as html;

use super::ast::{NodePath, RAttribute, RElement, RLoop, RNode, RText};
use super::error::RenderError;

/// The path segment name a parsed node contributes.
pub fn path_name(node: &html::Node) -> &str {
    match node {
        html::Node::Element(el) => &el.name,
        html::Node::Text(_) => "#text",
        html::Node::Comment(_) => "#comment",
    }
}

/// Transform one parsed node (and its descendants) into a renderable node.
pub fn to_react(node: &html::Node, path: &NodePath) -> Result<RNode, RenderError> {
    match node {
        html::Node::Text(text) => Ok(RNode::Text(RText {
            value: text.value.clone(),
        })),
        html::Node::Element(element) if element.name == tags::LOOP => {
            Ok(RNode::Loop(to_loop(element, path)?))
        }
        html::Node::Element(element) => {
            let attrs = element
                .attrs
                .iter()
                .map(|attr| RAttribute {
                    name: attr.name.clone(),
                    value: attr.value.clone(),
                })
                .collect();
            let mut children = Vec::with_capacity(element.children.len());
            for (index, child) in element.children.iter().enumerate() {
                let child_path = path.child(path_name(child), index);
                children.push(to_react(child, &child_path)?);
            }
            Ok(RNode::Element(RElement {
                name: element.name.clone(),
                attrs,
                children,
            }))
        }
        html::Node::Comment(_) => Err(RenderError::MalformedNode {
            kind: "comment".to_string(),
            path: path.clone(),
        }),
    }
}

fn to_loop(element: &html::Element, path: &NodePath) -> Result<RLoop, RenderError> {
    let required = |attribute: &'static str| -> Result<String, RenderError> {
        element
            .attr_value(attribute)
            .map(str::to_string)
            .ok_or_else(|| RenderError::MissingLoopAttribute {
                attribute,
                path: path.clone(),
            })
    };

    Ok(RLoop {
        component: required(loop_attrs::TEMPLATE_NAME)?,
        array: required(loop_attrs::ARRAY)?,
        key: required(loop_attrs::KEY)?,
    })
}
