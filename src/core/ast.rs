//! Generic traversal helpers over tree-sitter syntax trees.
//!
//! Every metric extractor in this crate walks the same tree; the walker is
//! stateless and reentrant, so several calculators can traverse one tree
//! concurrently. Syntax trees are acyclic by construction, so no cycle
//! detection is needed.

use tree_sitter::Node;

/// Depth-first pre-order walk. Visits every node in the tree exactly once,
/// parents before children, children in source order.
pub fn walk<'a, F>(node: Node<'a>, visit: &mut F)
where
    F: FnMut(Node<'a>),
{
    visit(node);
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        walk(child, visit);
    }
}

/// Source text covered by a node, or "" when the span is out of range.
pub fn node_text<'a>(node: Node<'_>, source: &'a str) -> &'a str {
    node.utf8_text(source.as_bytes()).unwrap_or("")
}

/// True for binary expressions whose operator is a short-circuit `&&`/`||`.
/// These introduce an implicit branch in expression evaluation.
pub fn is_logical_expression(node: Node<'_>) -> bool {
    if node.kind() != "binary_expression" {
        return false;
    }
    node.child_by_field_name("operator")
        .map(|op| matches!(op.kind(), "&&" | "||"))
        .unwrap_or(false)
}

/// Whether any direct child token of `node` has the given kind.
/// Used to detect `async`, `static`, `get`/`set` modifier keywords.
pub fn has_child_token(node: Node<'_>, kind: &str) -> bool {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).any(|child| child.kind() == kind);
    found
}
