//! Value reconstruction: renders a value subtree back to source-like text.
//!
//! Used for variable definitions and parameter defaults, e.g.
//! `inset #{$x}px 2px rgba(0,0,0,.4)`.

use crate::parser::SyntaxKind;

use super::tree::{AnnotatedTree, NodeId};

/// Render the children of `node` in order.
///
/// Trailing whitespace is trimmed so flags such as `!default` leave no
/// dangling space behind.
pub fn reconstruct(tree: &AnnotatedTree, node: NodeId) -> String {
    let mut out = String::new();
    render_children(tree, node, &mut out);
    out.truncate(out.trim_end().len());
    out
}

fn render_children(tree: &AnnotatedTree, node: NodeId, out: &mut String) {
    for &child in tree.children(node) {
        render(tree, child, out);
    }
}

fn render(tree: &AnnotatedTree, node: NodeId, out: &mut String) {
    let data = tree.node(node);
    if let Some(content) = &data.content {
        if data.kind == SyntaxKind::COLOR {
            out.push('#');
        }
        out.push_str(content);
        return;
    }

    match data.kind {
        SyntaxKind::VARIABLE => {
            out.push('$');
            if let Some(ident) = tree.first_child(node, SyntaxKind::IDENT) {
                out.push_str(tree.content(ident).unwrap_or_default());
            }
        }
        SyntaxKind::INTERPOLATION => {
            out.push_str("#{");
            render_children(tree, node, out);
            out.push('}');
        }
        SyntaxKind::FUNCTION => {
            if let Some(ident) = tree.first_child(node, SyntaxKind::IDENT) {
                out.push_str(tree.content(ident).unwrap_or_default());
            }
            out.push('(');
            if let Some(arguments) = tree.first_child(node, SyntaxKind::ARGUMENTS) {
                render_children(tree, arguments, out);
            }
            out.push(')');
        }
        SyntaxKind::URI => {
            out.push_str("url(");
            render_children(tree, node, out);
            out.push(')');
        }
        // Flags carry no value text
        SyntaxKind::GLOBAL | SyntaxKind::DEFAULT | SyntaxKind::IMPORTANT | SyntaxKind::OPTIONAL => {}
        _ => render_children(tree, node, out),
    }
}
