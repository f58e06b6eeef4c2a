//! Annotated tree: the CST lowered into an arena with scope metadata.
//!
//! One iterative pre-order pass over the rowan tree produces:
//! - an arena of [`NodeData`] keyed by [`NodeId`], with sigils stripped and
//!   structural punctuation dropped;
//! - per-node nesting depth and owning [`ScopeId`];
//! - the [`ScopeTree`] mapping every block scope to its parent.
//!
//! Separators (`space`, `delimiter`, `propertyDelimiter`,
//! `declarationDelimiter`) are pruned unless they sit inside a `value`.
//! The rowan tree itself is never touched.

use smol_str::SmolStr;

use crate::base::{Span, TextRange, TextSize};
use crate::parser::{SyntaxElement, SyntaxKind, SyntaxToken};
use crate::syntax::SyntaxFile;

/// Index of a node in the [`AnnotatedTree`] arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Index of a scope in the [`ScopeTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScopeId(u32);

impl ScopeId {
    /// The document root scope
    pub const GLOBAL: ScopeId = ScopeId(0);

    fn index(self) -> usize {
        self.0 as usize
    }
}

/// A node of the annotated tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData {
    pub kind: SyntaxKind,
    /// Literal content, present only on terminals
    pub content: Option<SmolStr>,
    pub span: Span,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    /// Number of enclosing blocks (a block counts itself)
    pub depth: u32,
    pub scope: ScopeId,
}

impl NodeData {
    pub fn is_terminal(&self) -> bool {
        self.content.is_some()
    }
}

/// A scope introduced by the document root or a block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope {
    pub parent: Option<ScopeId>,
    pub span: Span,
    pub node: NodeId,
}

/// Explicit scope tree: child scope → parent scope.
///
/// Scopes are stored in creation order, which is document pre-order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeTree {
    scopes: Vec<Scope>,
}

impl ScopeTree {
    fn push(&mut self, parent: Option<ScopeId>, span: Span, node: NodeId) -> ScopeId {
        let id = ScopeId(self.scopes.len() as u32);
        self.scopes.push(Scope { parent, span, node });
        id
    }

    pub fn get(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.index()]
    }

    pub fn parent(&self, id: ScopeId) -> Option<ScopeId> {
        self.get(id).parent
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Block scopes (everything but the root) in document order
    pub fn blocks(&self) -> impl Iterator<Item = (ScopeId, &Scope)> {
        self.scopes
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, scope)| (ScopeId(i as u32), scope))
    }

    /// Range-derived label of a scope, e.g. `@#0:0#4:1`
    pub fn label(&self, id: ScopeId) -> String {
        let span = self.get(id).span;
        format!("@#{}#{}", span.start, span.end)
    }
}

/// CST lowered into an arena, annotated with depth and scope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedTree {
    nodes: Vec<NodeData>,
    scopes: ScopeTree,
}

impl AnnotatedTree {
    /// Lower and annotate a parsed file.
    pub fn build(file: &SyntaxFile) -> Self {
        TreeBuilder::new(file).run()
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.index()]
    }

    pub fn kind(&self, id: NodeId) -> SyntaxKind {
        self.node(id).kind
    }

    pub fn content(&self, id: NodeId) -> Option<&str> {
        self.node(id).content.as_deref()
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn scopes(&self) -> &ScopeTree {
        &self.scopes
    }

    /// First direct child of the given kind
    pub fn first_child(&self, id: NodeId, kind: SyntaxKind) -> Option<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .find(|&child| self.kind(child) == kind)
    }

    /// Check whether the node's type-path ends with `suffix`.
    ///
    /// `suffix` is given root-side first: `[RULESET, SELECTOR, CLASS, IDENT]`.
    pub fn path_ends_with(&self, id: NodeId, suffix: &[SyntaxKind]) -> bool {
        let mut current = Some(id);
        for &expected in suffix.iter().rev() {
            match current {
                Some(node) if self.kind(node) == expected => current = self.parent(node),
                _ => return false,
            }
        }
        true
    }

    /// Check whether `kind` appears anywhere in the node's type-path
    pub fn path_contains(&self, id: NodeId, kind: SyntaxKind) -> bool {
        self.ancestors(id).any(|node| self.kind(node) == kind)
    }

    /// The node itself followed by its ancestors up to the root
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(id), move |&node| self.parent(node))
    }

    /// Dotted type-path, e.g. `stylesheet.ruleset.selector.class.ident`
    pub fn type_path(&self, id: NodeId) -> String {
        let mut names: Vec<_> = self
            .ancestors(id)
            .map(|node| self.kind(node).path_name())
            .collect();
        names.reverse();
        names.join(".")
    }

    /// All nodes in document pre-order
    pub fn preorder(&self) -> impl Iterator<Item = NodeId> + '_ {
        let mut stack = vec![self.root()];
        std::iter::from_fn(move || {
            let id = stack.pop()?;
            stack.extend(self.children(id).iter().rev().copied());
            Some(id)
        })
    }
}

// ============================================================================
// LOWERING
// ============================================================================

/// What a CST token becomes in the arena
struct LoweredToken {
    kind: SyntaxKind,
    content: SmolStr,
    range: TextRange,
}

/// Lower a single token, or drop it when the enclosing construct implies it.
fn lower_token(token: &SyntaxToken) -> Option<LoweredToken> {
    let kind = token.kind();
    let text = token.text();
    let range = token.text_range();
    let parent = token.parent().map(|p| p.kind());

    let keep = |kind: SyntaxKind| LoweredToken {
        kind,
        content: SmolStr::new(text),
        range,
    };
    // Sigiled tokens keep the bare name and start past the sigil
    let strip_sigil = |kind: SyntaxKind| LoweredToken {
        kind,
        content: SmolStr::new(&text[1..]),
        range: TextRange::new(range.start() + TextSize::of(&text[..1]), range.end()),
    };

    let lowered = match (kind, parent) {
        (SyntaxKind::LINE_COMMENT | SyntaxKind::BLOCK_COMMENT, _) => return None,
        (SyntaxKind::WHITESPACE, _) => keep(SyntaxKind::SPACE),

        (SyntaxKind::DOLLAR_NAME | SyntaxKind::HASH_NAME | SyntaxKind::AT_KEYWORD, _) => {
            strip_sigil(SyntaxKind::IDENT)
        }
        (SyntaxKind::COLOR, _) => strip_sigil(SyntaxKind::COLOR),
        (SyntaxKind::URL_RAW, _) => lower_raw_url(text, range),

        (SyntaxKind::L_BRACE | SyntaxKind::R_BRACE, Some(SyntaxKind::BLOCK)) => return None,
        (
            SyntaxKind::L_PAREN | SyntaxKind::R_PAREN,
            Some(SyntaxKind::ARGUMENTS | SyntaxKind::URI),
        ) => return None,
        (SyntaxKind::HASH_L_BRACE | SyntaxKind::R_BRACE, Some(SyntaxKind::INTERPOLATION)) => {
            return None;
        }
        (SyntaxKind::ELLIPSIS, Some(SyntaxKind::VARIABLES_LIST)) => return None,
        (
            SyntaxKind::L_BRACKET | SyntaxKind::R_BRACKET,
            Some(SyntaxKind::ATTRIBUTE_SELECTOR),
        ) => return None,
        (SyntaxKind::DOT, Some(SyntaxKind::CLASS)) => return None,
        (SyntaxKind::PERCENT, Some(SyntaxKind::PLACEHOLDER)) => return None,
        (SyntaxKind::IDENT, Some(SyntaxKind::URI)) if token.prev_sibling_or_token().is_none() => {
            return None;
        }

        (SyntaxKind::SEMICOLON, _) => keep(SyntaxKind::DECLARATION_DELIMITER),
        (SyntaxKind::COMMA, _) => keep(SyntaxKind::DELIMITER),
        (SyntaxKind::COLON, Some(SyntaxKind::DECLARATION)) => keep(SyntaxKind::PROPERTY_DELIMITER),

        _ => keep(kind),
    };
    Some(lowered)
}

/// `url( foo.css )` → `raw` terminal holding `foo.css`
fn lower_raw_url(text: &str, range: TextRange) -> LoweredToken {
    let inner = text
        .get(4..text.len().saturating_sub(1))
        .unwrap_or_default();
    let trimmed = inner.trim();
    let lead = inner.len() - inner.trim_start().len();
    let start = range.start() + TextSize::from((4 + lead) as u32);
    LoweredToken {
        kind: SyntaxKind::RAW,
        content: SmolStr::new(trimmed),
        range: TextRange::at(start, TextSize::of(trimmed)),
    }
}

struct TreeBuilder<'a> {
    file: &'a SyntaxFile,
    nodes: Vec<NodeData>,
    scopes: ScopeTree,
}

impl<'a> TreeBuilder<'a> {
    fn new(file: &'a SyntaxFile) -> Self {
        Self {
            file,
            nodes: Vec::new(),
            scopes: ScopeTree::default(),
        }
    }

    fn span(&self, range: TextRange) -> Span {
        Span::new(
            self.file.position(range.start()),
            self.file.position(range.end()),
        )
    }

    fn run(mut self) -> AnnotatedTree {
        let root = self.file.syntax();
        let root_span = self.span(root.text_range());
        let root_id = NodeId(0);
        let global = self.scopes.push(None, root_span, root_id);
        self.nodes.push(NodeData {
            kind: root.kind(),
            content: None,
            span: root_span,
            parent: None,
            children: Vec::new(),
            depth: 0,
            scope: global,
        });

        let mut stack: Vec<(SyntaxElement, NodeId)> = root
            .children_with_tokens()
            .map(|child| (child, root_id))
            .collect();
        stack.reverse();

        while let Some((element, parent)) = stack.pop() {
            let (kind, content, range) = match &element {
                SyntaxElement::Node(node) => (node.kind(), None, node.text_range()),
                SyntaxElement::Token(token) => match lower_token(token) {
                    Some(lowered) => (lowered.kind, Some(lowered.content), lowered.range),
                    None => continue,
                },
            };

            if kind.is_separator() && !self.in_value(parent) {
                continue;
            }

            let id = self.add_node(kind, content, range, parent);

            if let SyntaxElement::Node(node) = element {
                let start = stack.len();
                stack.extend(node.children_with_tokens().map(|child| (child, id)));
                stack[start..].reverse();
            }
        }

        AnnotatedTree {
            nodes: self.nodes,
            scopes: self.scopes,
        }
    }

    fn add_node(
        &mut self,
        kind: SyntaxKind,
        content: Option<SmolStr>,
        range: TextRange,
        parent: NodeId,
    ) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        let span = self.span(range);
        let parent_data = &self.nodes[parent.index()];
        let (mut depth, mut scope) = (parent_data.depth, parent_data.scope);

        if kind == SyntaxKind::BLOCK {
            depth += 1;
            scope = self.scopes.push(Some(scope), span, id);
        }

        self.nodes.push(NodeData {
            kind,
            content,
            span,
            parent: Some(parent),
            children: Vec::new(),
            depth,
            scope,
        });
        self.nodes[parent.index()].children.push(id);
        id
    }

    /// Whether `value` appears in the type-path of `node`
    fn in_value(&self, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            let data = &self.nodes[id.index()];
            if data.kind == SyntaxKind::VALUE {
                return true;
            }
            current = data.parent;
        }
        false
    }
}
