//! Loop extraction
//!
//! Collects loop directives in pre-order, assigns each a dense zero-indexed
//! variable name (`loop0`, `loop1`, ...) and emits one collection-mapping
//! statement per directive. The generated names are recorded in a side table
//! keyed by node path; the node renderer reads them back when it reaches the
//! directive during body emission, so extraction must run first for a given
//! subtree.

use indexmap::IndexMap;

use super::ast::{NodePath, RLoop, RNode};
use super::bindings;
use super::error::RenderError;
use super::{TagToVar, INDENT};

/// Side table mapping a loop directive's path to its generated variable name.
#[derive(Debug, Default)]
pub struct LoopTable {
    names: IndexMap<NodePath, String>,
}

impl LoopTable {
    pub fn new() -> Self {
        LoopTable {
            names: IndexMap::new(),
        }
    }

    pub fn name_for(&self, path: &NodePath) -> Option<&str> {
        self.names.get(path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Extract every loop directive under `root` and render its binding
/// statement. Returns the concatenated statements (discovery order) and the
/// side table consumed by the renderer.
pub fn extract_loops(
    root: &RNode,
    root_path: &NodePath,
    tag_to_var: &TagToVar,
) -> Result<(String, LoopTable), RenderError> {
    let mut found: Vec<(NodePath, &RLoop)> = Vec::new();
    collect_loop_nodes(root, root_path, &mut found);

    let mut table = LoopTable::new();
    let mut rendered = String::new();
    for (index, (path, node)) in found.into_iter().enumerate() {
        let var_name = format!("loop{}", index);
        rendered.push_str(&render_loop(node, &var_name, &path, tag_to_var)?);
        table.names.insert(path, var_name);
    }
    Ok((rendered, table))
}

/// Pre-order collection. Loop nodes carry no renderable children, so loops
/// nested inside another directive's markup are never collected.
fn collect_loop_nodes<'a>(
    node: &'a RNode,
    path: &NodePath,
    out: &mut Vec<(NodePath, &'a RLoop)>,
) {
    match node {
        RNode::Loop(loop_node) => out.push((path.clone(), loop_node)),
        RNode::Element(element) => {
            for (index, child) in element.children.iter().enumerate() {
                let child_path = path.child(child.path_name(), index);
                collect_loop_nodes(child, &child_path, out);
            }
        }
        RNode::Text(_) => {}
    }
}

fn render_loop(
    node: &RLoop,
    var_name: &str,
    path: &NodePath,
    tag_to_var: &TagToVar,
) -> Result<String, RenderError> {
    let component = tag_to_var
        .get(&node.component)
        .ok_or_else(|| RenderError::UnresolvedReference {
            reference: node.component.clone(),
            path: path.clone(),
        })?;
    let array = bindings::strip_binding(&node.array);

    Ok(format!(
        "{i}const {var} = {array}.map(e => (\n{i}{i}<{component} {{ ...e }} key={{ e.{key} }} />\n{i}));\n",
        i = INDENT,
        var = var_name,
        array = array,
        component = component,
        key = node.key,
    ))
}
