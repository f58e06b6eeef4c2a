//! Kind capturers: match a node's type-path and emit hints.
//!
//! Each capture runs only when requested. A candidate whose expected
//! sibling or child is missing is skipped (`None`), never reported.

use std::sync::Arc;

use crate::base::Span;
use crate::hir::index::HintMap;
use crate::hir::tree::{AnnotatedTree, NodeId, ScopeId};
use crate::hir::value::reconstruct;
use crate::parser::SyntaxKind;

use super::types::{Capture, CaptureSet, Hint, HintKind};

const CLASS_PATH: &[SyntaxKind] = &[
    SyntaxKind::RULESET,
    SyntaxKind::SELECTOR,
    SyntaxKind::CLASS,
    SyntaxKind::IDENT,
];
const ID_PATH: &[SyntaxKind] = &[
    SyntaxKind::RULESET,
    SyntaxKind::SELECTOR,
    SyntaxKind::ID,
    SyntaxKind::IDENT,
];
const PLACEHOLDER_PATH: &[SyntaxKind] = &[
    SyntaxKind::RULESET,
    SyntaxKind::SELECTOR,
    SyntaxKind::PLACEHOLDER,
    SyntaxKind::IDENT,
];
const ATTRIBUTE_PATH: &[SyntaxKind] = &[SyntaxKind::ATTRIBUTE_NAME, SyntaxKind::IDENT];
const MIXIN_PATH: &[SyntaxKind] = &[SyntaxKind::MIXIN, SyntaxKind::IDENT];
const AT_RULE_PATH: &[SyntaxKind] = &[SyntaxKind::ATRULE, SyntaxKind::ATKEYWORD];
const VARIABLE_PATH: &[SyntaxKind] = &[SyntaxKind::DECLARATION, SyntaxKind::PROPERTY];

/// Depth and scope a hint is recorded under
#[derive(Debug, Clone, Copy)]
pub(super) struct Placement {
    pub depth: u32,
    pub scope: ScopeId,
}

/// Runs the requested captures against single nodes.
pub(super) struct Capturer<'a> {
    pub tree: &'a AnnotatedTree,
    pub source: &'a Arc<str>,
    pub captures: &'a CaptureSet,
    pub hints: &'a mut HintMap,
}

impl<'a> Capturer<'a> {
    pub fn new(
        tree: &'a AnnotatedTree,
        source: &'a Arc<str>,
        captures: &'a CaptureSet,
        hints: &'a mut HintMap,
    ) -> Self {
        Self {
            tree,
            source,
            captures,
            hints,
        }
    }

    fn requested(&self, capture: Capture) -> bool {
        self.captures.contains(&capture)
    }

    /// Run every requested capture against `node`.
    pub fn visit(&mut self, node: NodeId) {
        self.capture_mixin(node);
        self.capture_direct(node, Capture::Attribute, HintKind::Attribute, ATTRIBUTE_PATH);
        self.capture_at_rule(node);
        self.capture_direct(node, Capture::Class, HintKind::Class, CLASS_PATH);
        self.capture_direct(node, Capture::Placeholder, HintKind::Placeholder, PLACEHOLDER_PATH);
        self.capture_direct(node, Capture::Id, HintKind::Id, ID_PATH);
        self.capture_variable(node);
    }

    /// Selectors and attribute names: the matched ident is the hint.
    fn capture_direct(
        &mut self,
        node: NodeId,
        capture: Capture,
        kind: HintKind,
        path: &[SyntaxKind],
    ) -> Option<()> {
        if !self.requested(capture) || !self.tree.path_ends_with(node, path) {
            return None;
        }
        self.emit(kind, capture, node, None, None)
    }

    /// `@mixin name($params) { ... }`
    fn capture_mixin(&mut self, node: NodeId) -> Option<()> {
        if !self.requested(Capture::Mixin) || !self.tree.path_ends_with(node, MIXIN_PATH) {
            return None;
        }
        let mixin = self.tree.parent(node)?;
        let definition = self.signature(node, mixin, Capture::Mixin);
        self.emit(HintKind::Mixin, Capture::Mixin, node, definition, None)
    }

    /// `@function` and `@import` share the at-keyword match.
    fn capture_at_rule(&mut self, node: NodeId) -> Option<()> {
        let tree = self.tree;
        let wants_function = self.requested(Capture::Function);
        let wants_import = self.requested(Capture::Import);
        if !(wants_function || wants_import) || !tree.path_ends_with(node, AT_RULE_PATH) {
            return None;
        }

        let keyword = tree.first_child(node, SyntaxKind::IDENT)?;
        let at_rule = tree.parent(node)?;
        match tree.content(keyword)? {
            "function" if wants_function => self.capture_function(at_rule),
            "import" if wants_import => self.capture_imports(at_rule),
            _ => None,
        }
    }

    /// `@function name($params) { ... }`, anchored at the name.
    fn capture_function(&mut self, at_rule: NodeId) -> Option<()> {
        let function = self.tree.first_child(at_rule, SyntaxKind::FUNCTION)?;
        let ident = self.tree.first_child(function, SyntaxKind::IDENT)?;
        let definition = self.signature(ident, at_rule, Capture::Function);
        self.emit(HintKind::Function, Capture::Function, ident, definition, None)
    }

    /// `name(fragments)` when the definition has a parameter list.
    ///
    /// `anchor` is the name ident, whose parent holds the `arguments` node.
    fn signature(&mut self, anchor: NodeId, definition: NodeId, origin: Capture) -> Option<String> {
        let tree = self.tree;
        let holder = tree.parent(anchor)?;
        let arguments = tree.first_child(holder, SyntaxKind::ARGUMENTS)?;
        let name = tree.content(anchor)?;
        let fragments = self.extract_arguments(arguments, definition, origin);
        Some(format!("{}({})", name, fragments.join(", ")))
    }

    /// `@import "a", url(b.css);` yields one hint per path.
    fn capture_imports(&mut self, at_rule: NodeId) -> Option<()> {
        let tree = self.tree;
        for &child in tree.children(at_rule) {
            let target = match tree.kind(child) {
                SyntaxKind::STRING => Some(child),
                SyntaxKind::URI => tree
                    .children(child)
                    .first()
                    .copied()
                    .filter(|&inner| {
                        matches!(tree.kind(inner), SyntaxKind::STRING | SyntaxKind::RAW)
                    }),
                _ => None,
            };
            if let Some(target) = target {
                self.emit(HintKind::Import, Capture::Import, target, None, None);
            }
        }
        Some(())
    }

    /// `$name: value;` outside parameter lists.
    ///
    /// `!global` in the value promotes the hint to the document root.
    fn capture_variable(&mut self, node: NodeId) -> Option<()> {
        let tree = self.tree;
        if !self.requested(Capture::Variable)
            || !tree.path_ends_with(node, VARIABLE_PATH)
            || tree.path_contains(node, SyntaxKind::ARGUMENTS)
        {
            return None;
        }

        let variable = tree.first_child(node, SyntaxKind::VARIABLE)?;
        let ident = tree.first_child(variable, SyntaxKind::IDENT)?;
        let declaration = tree.parent(node)?;
        let value = tree.first_child(declaration, SyntaxKind::VALUE);

        let definition = value
            .map(|value| reconstruct(tree, value))
            .filter(|text| !text.is_empty());
        let placement = value
            .and_then(|value| tree.first_child(value, SyntaxKind::GLOBAL))
            .map(|_| Placement {
                depth: 0,
                scope: ScopeId::GLOBAL,
            });

        self.emit(HintKind::Variable, Capture::Variable, ident, definition, placement)
    }

    /// Record a hint anchored at a terminal.
    ///
    /// Depth and scope come from the anchor unless `placement` overrides them.
    pub(super) fn emit(
        &mut self,
        kind: HintKind,
        origin: Capture,
        anchor: NodeId,
        definition: Option<String>,
        placement: Option<Placement>,
    ) -> Option<()> {
        let node = self.tree.node(anchor);
        let content = node.content.as_deref()?;

        let value = match kind {
            HintKind::Class => format!(".{}", content),
            HintKind::Id => format!("#{}", content),
            HintKind::Placeholder => format!("%{}", content),
            HintKind::Variable | HintKind::Argument => format!("${}", content),
            HintKind::Import => content.trim_matches(|c| c == '"' || c == '\'').to_string(),
            HintKind::Mixin | HintKind::Function | HintKind::Attribute => content.to_string(),
        };
        let placement = placement.unwrap_or(Placement {
            depth: node.depth,
            scope: node.scope,
        });

        let hint = Hint {
            kind,
            value,
            definition,
            source: Arc::clone(self.source),
            range: Span::on_line(node.span.start, content.len()),
            depth: placement.depth,
            scope: placement.scope,
            origin,
        };
        tracing::trace!(
            "[CAPTURE] {} '{}' at {} (depth {})",
            hint.kind,
            hint.value,
            hint.range.start,
            hint.depth
        );
        self.hints.push(hint);
        Some(())
    }
}
