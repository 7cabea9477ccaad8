//! Technical-debt estimation.
//!
//! A heuristic, not a measurement: the coefficients were calibrated against
//! historical remediation effort and live here as named constants so they
//! can be revisited without touching any traversal logic. The estimate is
//! monotonic in every input — more complexity, duplication, or findings
//! never lowers it.

use crate::core::{CodeSmell, Vulnerability};

/// Hours per point of cyclomatic complexity above the acceptable ceiling.
const HOURS_PER_EXCESS_COMPLEXITY: f64 = 0.5;
/// Cyclomatic complexity considered acceptable without remediation.
const COMPLEXITY_CEILING: f64 = 20.0;

/// Hours per percentage point of duplication above the acceptable share.
const HOURS_PER_EXCESS_DUPLICATION: f64 = 0.3;
const DUPLICATION_CEILING_PERCENT: f64 = 10.0;

/// Hours per point of maintainability index below the acceptable floor.
const HOURS_PER_MISSING_MAINTAINABILITY: f64 = 0.2;
const MAINTAINABILITY_FLOOR: f64 = 50.0;

pub fn technical_debt_hours(
    cyclomatic_complexity: u32,
    duplication_percentage: f64,
    maintainability_index: u32,
    vulnerabilities: &[Vulnerability],
    code_smells: &[CodeSmell],
) -> f64 {
    let mut hours = 0.0;

    let excess_complexity = (cyclomatic_complexity as f64 - COMPLEXITY_CEILING).max(0.0);
    hours += excess_complexity * HOURS_PER_EXCESS_COMPLEXITY;

    let excess_duplication = (duplication_percentage - DUPLICATION_CEILING_PERCENT).max(0.0);
    hours += excess_duplication * HOURS_PER_EXCESS_DUPLICATION;

    let missing_maintainability =
        (MAINTAINABILITY_FLOOR - maintainability_index as f64).max(0.0);
    hours += missing_maintainability * HOURS_PER_MISSING_MAINTAINABILITY;

    hours += vulnerabilities
        .iter()
        .map(|v| v.severity.vulnerability_weight())
        .sum::<f64>();
    hours += code_smells.iter().map(|s| s.severity.smell_weight()).sum::<f64>();

    (hours * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Severity;

    fn vulnerability(severity: Severity) -> Vulnerability {
        Vulnerability {
            severity,
            message: "finding".to_string(),
        }
    }

    fn smell(severity: Severity) -> CodeSmell {
        CodeSmell {
            severity,
            message: "smell".to_string(),
        }
    }

    #[test]
    fn clean_code_has_no_debt() {
        assert_eq!(technical_debt_hours(5, 0.0, 90, &[], &[]), 0.0);
        assert_eq!(technical_debt_hours(20, 10.0, 50, &[], &[]), 0.0);
    }

    #[test]
    fn each_term_contributes_independently() {
        assert_eq!(technical_debt_hours(30, 0.0, 90, &[], &[]), 5.0);
        assert_eq!(technical_debt_hours(5, 25.0, 90, &[], &[]), 4.5);
        assert_eq!(technical_debt_hours(5, 0.0, 40, &[], &[]), 2.0);
    }

    #[test]
    fn findings_add_their_severity_weights() {
        let vulns = vec![
            vulnerability(Severity::Critical),
            vulnerability(Severity::High),
            vulnerability(Severity::Low),
        ];
        let smells = vec![smell(Severity::High), smell(Severity::Medium), smell(Severity::Low)];
        // 4 + 2 + 0.5 + 1 + 0.5 + 0.25
        assert_eq!(technical_debt_hours(1, 0.0, 100, &vulns, &smells), 8.25);
    }

    #[test]
    fn estimate_is_monotonic_in_complexity() {
        let mut previous = 0.0;
        for complexity in [1, 10, 20, 21, 40, 80] {
            let hours = technical_debt_hours(complexity, 15.0, 45, &[], &[]);
            assert!(hours >= previous);
            previous = hours;
        }
    }

    #[test]
    fn result_is_rounded_to_two_decimals() {
        let smells = vec![smell(Severity::Low)];
        let hours = technical_debt_hours(21, 0.0, 100, &[], &smells);
        assert_eq!(hours, 0.75);
    }
}
