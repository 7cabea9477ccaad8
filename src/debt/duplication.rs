//! Line-based duplicate-block detection over raw source text.
//!
//! Brute-force pairwise comparison: O(n² · k) in the number of non-blank
//! lines. Fine for single files of a few thousand lines, which is the
//! input size this engine handles; callers wanting a bound impose a line
//! limit before calling (see the orchestrator's guard). The minimum-block
//! semantics are part of the contract and must not be traded away for a
//! faster algorithm.

use crate::core::{DuplicateBlock, DuplicationReport, LineRange};

/// Shortest run of matching lines that counts as a duplicate.
pub const MIN_BLOCK_LINES: usize = 3;

pub fn detect_duplication(source: &str) -> DuplicationReport {
    // Keep trimmed non-blank lines, remembering original 1-based numbers.
    let lines: Vec<(usize, &str)> = source
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .collect();

    let mut blocks = Vec::new();
    let mut total_duplicated_lines = 0usize;

    let mut i = 0;
    while i < lines.len() {
        let mut advanced = false;
        let mut j = i + MIN_BLOCK_LINES;
        while j < lines.len() {
            let mut k = 0;
            while i + k < j && j + k < lines.len() && lines[i + k].1 == lines[j + k].1 {
                k += 1;
            }
            if k >= MIN_BLOCK_LINES {
                blocks.push(DuplicateBlock {
                    first_range: LineRange {
                        start_line: lines[i].0,
                        end_line: lines[i + k - 1].0,
                    },
                    second_range: LineRange {
                        start_line: lines[j].0,
                        end_line: lines[j + k - 1].0,
                    },
                    line_count: k,
                });
                // Note: a block repeated three or more times is counted
                // once per pair, so overlapping duplicates double-count
                // in the total. Downstream scoring is calibrated against
                // this behavior.
                total_duplicated_lines += k;
                i += k;
                advanced = true;
                break;
            }
            j += 1;
        }
        if !advanced {
            i += 1;
        }
    }

    let duplication_percentage = if lines.is_empty() {
        0.0
    } else {
        (total_duplicated_lines as f64 / lines.len() as f64 * 100.0).clamp(0.0, 100.0)
    };

    DuplicationReport {
        duplicate_blocks: blocks,
        total_duplicated_lines,
        duplication_percentage,
    }
}
