//! Argument extraction for mixin and function parameter lists.

use std::fmt;

use crate::hir::tree::{AnnotatedTree, NodeId};
use crate::hir::value::reconstruct;
use crate::parser::SyntaxKind;

use super::capture::{Capturer, Placement};
use super::types::{Capture, HintKind};

/// A classified parameter
#[derive(Debug, Clone, PartialEq, Eq)]
enum Parameter<'t> {
    /// `$name`
    Required(&'t str),
    /// `$name: default`
    Optional(&'t str, String),
    /// `$name...`
    Variadic(&'t str),
}

impl fmt::Display for Parameter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parameter::Required(name) => write!(f, "${}", name),
            Parameter::Optional(name, default) => write!(f, "[${} : {}]", name, default),
            Parameter::Variadic(name) => write!(f, "${}...", name),
        }
    }
}

impl Capturer<'_> {
    /// Build signature fragments for a parameter list.
    ///
    /// Every parameter is also recorded as an argument hint placed in the
    /// definition's body block. Definitions without a body get fragments
    /// but no argument hints.
    pub(super) fn extract_arguments(
        &mut self,
        arguments: NodeId,
        definition: NodeId,
        origin: Capture,
    ) -> Vec<String> {
        let tree = self.tree;
        let body = tree
            .first_child(definition, SyntaxKind::BLOCK)
            .map(|block| Placement {
                depth: tree.node(block).depth,
                scope: tree.node(block).scope,
            });

        let mut fragments = Vec::new();
        for &child in tree.children(arguments) {
            let Some((ident, parameter)) = classify(tree, child) else {
                continue;
            };
            fragments.push(parameter.to_string());

            if let Some(body) = body {
                let default = match parameter {
                    Parameter::Optional(_, default) => Some(default),
                    _ => None,
                };
                self.emit(HintKind::Argument, origin, ident, default, Some(body));
            }
        }
        fragments
    }
}

/// Classify one child of a parameter list, returning its name ident.
fn classify(tree: &AnnotatedTree, child: NodeId) -> Option<(NodeId, Parameter<'_>)> {
    match tree.kind(child) {
        SyntaxKind::VARIABLE => {
            let ident = tree.first_child(child, SyntaxKind::IDENT)?;
            Some((ident, Parameter::Required(tree.content(ident)?)))
        }
        SyntaxKind::DECLARATION => {
            let property = tree.first_child(child, SyntaxKind::PROPERTY)?;
            let variable = tree.first_child(property, SyntaxKind::VARIABLE)?;
            let ident = tree.first_child(variable, SyntaxKind::IDENT)?;
            let name = tree.content(ident)?;
            let default = tree
                .first_child(child, SyntaxKind::VALUE)
                .map(|value| reconstruct(tree, value))
                .unwrap_or_default();
            let parameter = if default.is_empty() {
                Parameter::Required(name)
            } else {
                Parameter::Optional(name, default)
            };
            Some((ident, parameter))
        }
        SyntaxKind::VARIABLES_LIST => {
            let variable = tree.first_child(child, SyntaxKind::VARIABLE)?;
            let ident = tree.first_child(variable, SyntaxKind::IDENT)?;
            Some((ident, Parameter::Variadic(tree.content(ident)?)))
        }
        _ => None,
    }
}
