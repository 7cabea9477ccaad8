//! Halstead software-science metrics.
//!
//! Works on raw source text rather than the syntax tree, so it stays usable
//! when the parser fails and tolerates partially invalid input. Operators
//! and operands are matched lexically; alternation order in the patterns
//! gives longer tokens priority (`===` before `==` before `=`).

use crate::core::HalsteadMetrics;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Fixed operator token classes: arithmetic, comparison, logical, bitwise,
/// assignment, ternary, member access, grouping, and separators.
static OPERATOR_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"===|!==|==|!=|<=|>=|=>|&&|\|\||\?\?|\+\+|--|\*\*|\+=|-=|\*=|/=|%=|<<|>>>|>>|[-+*/%=<>!&|^~?:.()\[\]{};,]",
    )
    .unwrap()
});

/// Candidate operands: string literals first (so their contents are not
/// re-tokenized), then identifiers, then numeric literals.
static OPERAND_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""[^"\n]*"|'[^'\n]*'|`[^`]*`|[A-Za-z_$][A-Za-z0-9_$]*|\d+(?:\.\d+)?"#).unwrap()
});

/// Keywords never counted as operands.
const RESERVED_WORDS: &[&str] = &[
    "if", "else", "for", "while", "do", "switch", "case", "break", "continue", "return",
    "function", "const", "let", "var", "class", "import", "export",
];

pub fn halstead_metrics(source: &str) -> HalsteadMetrics {
    let mut operator_set: HashSet<&str> = HashSet::new();
    let mut total_operators = 0usize;
    for token in OPERATOR_PATTERN.find_iter(source) {
        operator_set.insert(token.as_str());
        total_operators += 1;
    }

    let mut operand_set: HashSet<&str> = HashSet::new();
    let mut total_operands = 0usize;
    for token in OPERAND_PATTERN.find_iter(source) {
        let text = token.as_str();
        if RESERVED_WORDS.contains(&text) {
            continue;
        }
        operand_set.insert(text);
        total_operands += 1;
    }

    compute(
        operator_set.len(),
        operand_set.len(),
        total_operators,
        total_operands,
    )
}

/// Derive the Halstead measures from raw counts. Denominators are clamped
/// to 1 so degenerate input (no tokens at all) yields zeros instead of
/// NaN or infinity.
fn compute(n1: usize, n2: usize, total_n1: usize, total_n2: usize) -> HalsteadMetrics {
    let vocabulary = n1 + n2;
    let length = total_n1 + total_n2;

    let volume = length as f64 * (vocabulary.max(1) as f64).log2();
    let difficulty = (n1 as f64 / 2.0) * (total_n2 as f64 / n2.max(1) as f64);
    let effort = difficulty * volume;

    HalsteadMetrics {
        distinct_operators: n1,
        distinct_operands: n2,
        total_operators: total_n1,
        total_operands: total_n2,
        vocabulary,
        length,
        volume,
        difficulty,
        effort,
        estimated_time_seconds: effort / 18.0,
        estimated_bugs: volume / 3000.0,
    }
}
