use crate::core::ast::{is_logical_expression, walk};
use tree_sitter::Node;

/// McCabe cyclomatic complexity over a whole tree. Base value 1 (one linear
/// path), plus one per decision point. Short-circuit `&&`/`||` count because
/// they introduce implicit branches in expression evaluation.
///
/// Purely additive over the walk, so the result is order-independent and
/// deterministic for a given tree.
pub fn cyclomatic_complexity(root: Node) -> u32 {
    let mut complexity = 1;
    walk(root, &mut |node| complexity += branch_increment(node));
    complexity
}

fn branch_increment(node: Node) -> u32 {
    match node.kind() {
        "if_statement" | "ternary_expression" => 1,
        "switch_case" => 1,
        "for_statement" | "for_in_statement" => 1,
        "while_statement" | "do_statement" => 1,
        "catch_clause" => 1,
        "binary_expression" if is_logical_expression(node) => 1,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::javascript::JavaScriptParser;
    use indoc::indoc;

    fn complexity_of(source: &str) -> u32 {
        let mut parser = JavaScriptParser::new_javascript().unwrap();
        let tree = parser.parse(source).unwrap();
        cyclomatic_complexity(tree.root_node())
    }

    #[test]
    fn linear_code_has_base_complexity() {
        assert_eq!(complexity_of("function add(a,b){return a+b;}"), 1);
        assert_eq!(complexity_of(""), 1);
    }

    #[test]
    fn each_decision_point_adds_one() {
        let source = indoc! {r#"
            function classify(n) {
                if (n < 0) { return "negative"; }
                for (let i = 0; i < n; i++) {
                    while (i > 2) { i -= 1; }
                }
                try { risky(); } catch (e) { log(e); }
                return n > 10 ? "big" : "small";
            }
        "#};
        // base 1 + if + for + while + catch + ternary
        assert_eq!(complexity_of(source), 6);
    }

    #[test]
    fn switch_cases_count_individually() {
        let source = indoc! {r#"
            switch (x) {
                case 1: break;
                case 2: break;
                default: break;
            }
        "#};
        // base 1 + two case clauses; default is not a decision
        assert_eq!(complexity_of(source), 3);
    }

    #[test]
    fn logical_operators_are_branches() {
        assert_eq!(complexity_of("const ok = a && b || c;"), 3);
        // Bitwise operators are not short-circuiting
        assert_eq!(complexity_of("const bits = a & b | c;"), 1);
    }
}
