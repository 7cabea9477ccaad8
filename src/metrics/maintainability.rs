//! Maintainability index.
//!
//! The classic Oman-Hagemeister formula rescaled to 0-100. The
//! coefficients are calibration constants inherited from the original
//! scoring model; keep them here, named, rather than inlined at call
//! sites.

const MI_BASE: f64 = 171.0;
const VOLUME_COEFFICIENT: f64 = 5.2;
const COMPLEXITY_COEFFICIENT: f64 = 0.23;
const LOC_COEFFICIENT: f64 = 16.2;

/// Composite 0-100 maintainability score. Log arguments are clamped to 1
/// so empty files and zero-volume input stay finite.
pub fn maintainability_index(
    cyclomatic_complexity: u32,
    halstead_volume: f64,
    code_line_count: usize,
) -> u32 {
    let volume = halstead_volume.max(1.0);
    let loc = (code_line_count.max(1)) as f64;

    let raw = MI_BASE
        - VOLUME_COEFFICIENT * volume.ln()
        - COMPLEXITY_COEFFICIENT * f64::from(cyclomatic_complexity)
        - LOC_COEFFICIENT * loc.ln();

    raw.clamp(0.0, 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn degenerate_inputs_stay_in_range() {
        assert_eq!(maintainability_index(1, 0.0, 0), 100);
        assert!(maintainability_index(1000, 0.0, 0) <= 100);
        assert_eq!(maintainability_index(u32::MAX, f64::MAX, usize::MAX), 0);
    }

    #[test]
    fn larger_files_score_lower() {
        let small = maintainability_index(2, 50.0, 10);
        let large = maintainability_index(2, 5000.0, 2000);
        assert!(small > large);
    }

    proptest! {
        #[test]
        fn index_is_always_in_bounds(
            complexity in 0u32..10_000,
            volume in 0.0f64..1e9,
            loc in 0usize..1_000_000,
        ) {
            let mi = maintainability_index(complexity, volume, loc);
            prop_assert!(mi <= 100);
        }

        #[test]
        fn index_is_monotone_decreasing_in_complexity(
            complexity in 0u32..10_000,
            volume in 0.0f64..1e6,
            loc in 0usize..100_000,
        ) {
            let lower = maintainability_index(complexity, volume, loc);
            let higher = maintainability_index(complexity + 100, volume, loc);
            prop_assert!(higher <= lower);
        }
    }
}
