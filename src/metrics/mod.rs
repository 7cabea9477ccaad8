//! Metrics orchestration.
//!
//! `calculate_all_metrics` is the engine's single entry point: it fans raw
//! source text and an optional syntax tree out to every calculator and
//! merges the results into one `MetricsRecord`. The contract with callers
//! is that it never fails — arbitrary, possibly malformed input always
//! yields some record, degrading to a fixed fallback when analysis cannot
//! proceed.

pub mod loc_counter;
pub mod maintainability;

pub use loc_counter::count_lines;
pub use maintainability::maintainability_index;

use crate::complexity::{cognitive_complexity, cyclomatic_complexity, halstead_metrics};
use crate::core::{CodeSmell, DuplicationReport, MetricsRecord, Vulnerability};
use crate::debt::{detect_duplication, technical_debt_hours};
use std::panic::{catch_unwind, AssertUnwindSafe};
use tree_sitter::Tree;

/// Above this many non-blank lines, duplication analysis is skipped and an
/// empty report returned. The detector is quadratic; this is a resource
/// policy, not a correctness requirement.
pub const MAX_DUPLICATION_LINES: usize = 5_000;

const QUALITY_WEIGHT_MAINTAINABILITY: f64 = 0.4;
const QUALITY_WEIGHT_COMPLEXITY: f64 = 0.2;
const QUALITY_WEIGHT_DUPLICATION: f64 = 0.2;
const QUALITY_WEIGHT_COMMENTS: f64 = 0.2;

/// Compute every metric for one source file.
///
/// `tree` is absent when parsing failed upstream; structural complexity
/// then defaults to cyclomatic 1, cognitive 0, and the text-based metrics
/// still run. A panic anywhere inside analysis is caught and converted to
/// the fallback record.
pub fn calculate_all_metrics(
    source: &str,
    tree: Option<&Tree>,
    vulnerabilities: &[Vulnerability],
    code_smells: &[CodeSmell],
) -> MetricsRecord {
    if source.trim().is_empty() {
        return MetricsRecord::fallback();
    }

    let computed = catch_unwind(AssertUnwindSafe(|| {
        compute_metrics(source, tree, vulnerabilities, code_smells)
    }));

    match computed {
        Ok(record) => record,
        Err(_) => {
            log::warn!("metrics computation panicked; returning fallback record");
            MetricsRecord::fallback()
        }
    }
}

fn compute_metrics(
    source: &str,
    tree: Option<&Tree>,
    vulnerabilities: &[Vulnerability],
    code_smells: &[CodeSmell],
) -> MetricsRecord {
    let lines = count_lines(source);
    let comment_ratio = loc_counter::comment_ratio(&lines);

    let (cyclomatic, cognitive) = match tree {
        Some(tree) => {
            let root = tree.root_node();
            (cyclomatic_complexity(root), cognitive_complexity(root))
        }
        None => (1, 0),
    };

    let halstead = halstead_metrics(source);
    let duplication = guarded_duplication(source);
    let maintainability = maintainability_index(cyclomatic, halstead.volume, lines.code_lines);
    let debt_hours = technical_debt_hours(
        cyclomatic,
        duplication.duplication_percentage,
        maintainability,
        vulnerabilities,
        code_smells,
    );
    let quality = quality_score(
        maintainability,
        cyclomatic,
        duplication.duplication_percentage,
        comment_ratio,
    );

    MetricsRecord {
        lines,
        comment_ratio,
        cyclomatic_complexity: cyclomatic,
        cognitive_complexity: cognitive,
        maintainability_index: maintainability,
        halstead,
        duplication,
        technical_debt_hours: debt_hours,
        quality_score: quality,
    }
}

fn guarded_duplication(source: &str) -> DuplicationReport {
    let significant_lines = source.lines().filter(|l| !l.trim().is_empty()).count();
    if significant_lines > MAX_DUPLICATION_LINES {
        log::debug!(
            "skipping duplication analysis: {significant_lines} lines exceeds limit of {MAX_DUPLICATION_LINES}"
        );
        return DuplicationReport::default();
    }
    detect_duplication(source)
}

/// Weighted blend of the summary metrics, clamped to 0-100.
fn quality_score(
    maintainability: u32,
    cyclomatic: u32,
    duplication_percentage: f64,
    comment_ratio: f64,
) -> f64 {
    let complexity_score = (100.0 - 2.0 * f64::from(cyclomatic)).max(0.0);
    let duplication_score = (100.0 - 2.0 * duplication_percentage).max(0.0);

    let blended = QUALITY_WEIGHT_MAINTAINABILITY * f64::from(maintainability)
        + QUALITY_WEIGHT_COMPLEXITY * complexity_score
        + QUALITY_WEIGHT_DUPLICATION * duplication_score
        + QUALITY_WEIGHT_COMMENTS * comment_ratio;

    let clamped = blended.clamp(0.0, 100.0);
    (clamped * 100.0).round() / 100.0
}
