//! Read-only renderings of an expression tree for display.
//!
//! Neither function writes anywhere; the shell decides what to do with
//! the returned text.

use std::fmt::Write;

use super::ast::Node;

/// Renders the tree as an indented listing, one node per line:
///
/// ```text
/// └── +
///     ├── 3
///     └── *
///         ├── 4
///         └── 2
/// ```
pub fn render_tree(root: &Node) -> String {
    let mut result = String::new();
    render_branch(root, "", true, &mut result);
    result
}

fn render_branch(node: &Node, prefix: &str, is_tail: bool, result: &mut String) {
    let connector = if is_tail { "└── " } else { "├── " };
    result.push_str(prefix);
    result.push_str(connector);
    result.push_str(&node.to_string());
    result.push('\n');

    let children = node.children();
    let extension = if is_tail { "    " } else { "│   " };
    let child_prefix = format!("{}{}", prefix, extension);

    for (index, child) in children.iter().enumerate() {
        render_branch(child, &child_prefix, index == children.len() - 1, result);
    }
}

/// Renders the tree as a Graphviz `digraph`.
///
/// Numbers are filled light green, variables light yellow and operators
/// light blue. Node ids follow pre-order numbering.
pub fn render_dot(root: &Node) -> String {
    let mut dot = String::new();
    dot.push_str("digraph ExpressionTree {\n");
    dot.push_str("    rankdir=TB;\n");
    dot.push_str("    node [shape=circle, style=filled, fillcolor=lightblue];\n");

    let mut next_id = 0;
    dot_node(root, None, &mut next_id, &mut dot);

    dot.push_str("}\n");
    dot
}

fn dot_node(node: &Node, parent: Option<usize>, next_id: &mut usize, dot: &mut String) {
    let id = *next_id;
    *next_id += 1;

    let fill = match node {
        Node::Number { .. } => "lightgreen",
        Node::Variable { .. } => "lightyellow",
        Node::Operation { .. } => "lightblue",
    };
    let label = node.to_string().replace('"', "\\\"");

    // Writing into a String cannot fail
    let _ = writeln!(dot, "    n{} [label=\"{}\", fillcolor={}];", id, label, fill);
    if let Some(parent) = parent {
        let _ = writeln!(dot, "    n{} -> n{};", parent, id);
    }

    for child in node.children() {
        dot_node(child, Some(id), next_id, dot);
    }
}
