use crate::core::ast::is_logical_expression;
use tree_sitter::Node;

/// Cognitive complexity over a whole tree.
///
/// Unlike cyclomatic complexity, branches are weighted by how deeply they
/// nest: entering a nesting construct at level `d` costs `d + 1`. Deeply
/// nested conditionals are harder to follow than the same branch count laid
/// out flat. Logical `&&`/`||` add a flat +1 regardless of nesting.
pub fn cognitive_complexity(root: Node) -> u32 {
    cognitive(root, 0)
}

fn cognitive(node: Node, nesting: u32) -> u32 {
    if is_nesting_construct(node.kind()) {
        // Entering the construct raises the level; the cost is the raised
        // level, so a top-level `if` costs 1 and one nested inside it costs 2.
        let level = nesting + 1;
        let mut total = level;
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            total += cognitive(child, level);
        }
        return total;
    }

    let mut total = if is_logical_expression(node) { 1 } else { 0 };
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        total += cognitive(child, nesting);
    }
    total
}

fn is_nesting_construct(kind: &str) -> bool {
    matches!(
        kind,
        "if_statement"
            | "for_statement"
            | "for_in_statement"
            | "while_statement"
            | "do_statement"
            | "switch_statement"
            | "catch_clause"
    )
}
