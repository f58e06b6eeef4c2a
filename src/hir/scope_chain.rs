//! Scope chain resolution for a cursor position.

use crate::base::Position;

use super::tree::{ScopeId, ScopeTree};

/// Scopes enclosing `position`, from the document root inward.
///
/// Blocks are visited in document order. A block joins the chain only when
/// its parent is the chain's current innermost scope and it contains the
/// position, so the chain follows one path down the scope tree.
pub fn scope_chain(scopes: &ScopeTree, position: Position) -> Vec<ScopeId> {
    let mut chain = vec![ScopeId::GLOBAL];

    for (id, scope) in scopes.blocks() {
        let innermost = chain[chain.len() - 1];
        if scope.parent == Some(innermost) && scope.span.contains(position) {
            chain.push(id);
        }
    }

    chain
}
