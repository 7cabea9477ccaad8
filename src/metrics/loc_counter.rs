//! Line counting for ECMAScript-family sources.
//!
//! Classification is a trimmed-prefix check: `//`, `/*`, and `*` mark
//! comment lines, the last covering the body lines of conventional block
//! comments. Comment markers inside string literals are not detected; that
//! would require full parsing, and the counts feed heuristic scores where
//! the error is negligible.

use crate::core::LineCounts;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LineType {
    Blank,
    Comment,
    Code,
}

fn classify_line(trimmed: &str) -> LineType {
    if trimmed.is_empty() {
        LineType::Blank
    } else if trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*') {
        LineType::Comment
    } else {
        LineType::Code
    }
}

pub fn count_lines(source: &str) -> LineCounts {
    let mut counts = LineCounts::default();

    for line in source.lines() {
        counts.total_lines += 1;
        match classify_line(line.trim()) {
            LineType::Blank => counts.blank_lines += 1,
            LineType::Comment => counts.comment_lines += 1,
            LineType::Code => counts.code_lines += 1,
        }
    }

    counts
}

/// Share of lines that are comments, as a percentage of all lines.
pub fn comment_ratio(counts: &LineCounts) -> f64 {
    if counts.total_lines == 0 {
        return 0.0;
    }
    counts.comment_lines as f64 / counts.total_lines as f64 * 100.0
}
