use codemetrics::*;
use indoc::indoc;
use pretty_assertions::assert_eq;

fn analyze(source: &str) -> MetricsRecord {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut parser = JavaScriptParser::new_javascript().unwrap();
    let tree = parser.parse(source).ok();
    calculate_all_metrics(source, tree.as_ref(), &[], &[])
}

#[test]
fn single_line_function_has_minimal_complexity() {
    let record = analyze("function add(a,b){return a+b;}");
    assert_eq!(record.cyclomatic_complexity, 1);
    assert_eq!(record.cognitive_complexity, 0);
    assert_eq!(record.lines.total_lines, 1);
    assert_eq!(record.lines.code_lines, 1);
    assert!(record.quality_score > 0.0 && record.quality_score <= 100.0);
}

#[test]
fn five_nested_ifs_weight_cognitive_complexity() {
    let source = indoc! {r#"
        function check(a, b, c, d, e) {
            if (a) {
                if (b) {
                    if (c) {
                        if (d) {
                            if (e) { return true; }
                        }
                    }
                }
            }
            return false;
        }
    "#};
    let record = analyze(source);
    assert_eq!(record.cyclomatic_complexity, 6);
    assert_eq!(record.cognitive_complexity, 15);
}

#[test]
fn duplicated_blocks_are_reported_with_percentage() {
    let block: String = (0..10).map(|i| format!("step{i}();\n")).collect();
    let unique = "alpha();\nbeta();\ngamma();\n";
    let source = format!("{block}{unique}{block}");

    let record = analyze(&source);
    assert_eq!(record.duplication.duplicate_blocks.len(), 1);
    assert_eq!(record.duplication.duplicate_blocks[0].line_count, 10);
    assert_eq!(record.duplication.total_duplicated_lines, 10);

    let expected = 10.0 / 23.0 * 100.0;
    assert!((record.duplication.duplication_percentage - expected).abs() < 1e-9);
}

#[test]
fn empty_input_degrades_to_fallback() {
    let record = analyze("");
    assert_eq!(record, MetricsRecord::fallback());
    assert_eq!(record.cyclomatic_complexity, 1);
    assert_eq!(record.maintainability_index, 50);
    assert_eq!(record.quality_score, 50.0);

    let whitespace = analyze("   \n\t\n");
    assert_eq!(whitespace, MetricsRecord::fallback());
}

#[test]
fn missing_tree_defaults_structural_metrics() {
    let source = "const total = items.length > 0 ? sum / items.length : 0;";
    let record = calculate_all_metrics(source, None, &[], &[]);
    // Complexity degrades to its floor; text-based metrics still run.
    assert_eq!(record.cyclomatic_complexity, 1);
    assert_eq!(record.cognitive_complexity, 0);
    assert!(record.halstead.length > 0);
    assert_eq!(record.lines.code_lines, 1);
}

#[test]
fn findings_raise_the_debt_estimate() {
    let source = "function f() { return 1; }";
    let mut parser = JavaScriptParser::new_javascript().unwrap();
    let tree = parser.parse(source).unwrap();

    let clean = calculate_all_metrics(source, Some(&tree), &[], &[]);

    let vulns = vec![Vulnerability {
        severity: Severity::Critical,
        message: "injection".to_string(),
    }];
    let smells = vec![CodeSmell {
        severity: Severity::Medium,
        message: "long method".to_string(),
    }];
    let flagged = calculate_all_metrics(source, Some(&tree), &vulns, &smells);

    assert_eq!(flagged.technical_debt_hours, clean.technical_debt_hours + 4.5);
}

#[test]
fn analysis_is_idempotent() {
    let source = indoc! {r#"
        // utility helpers
        function clamp(value, lo, hi) {
            if (value < lo) { return lo; }
            if (value > hi) { return hi; }
            return value;
        }
    "#};
    let first = analyze(source);
    let second = analyze(source);
    assert_eq!(first, second);
}

#[test]
fn record_round_trips_through_json() {
    let record = analyze("function f(x) { return x ? 1 : 2; }");
    let json = record.to_json().unwrap();
    let back: MetricsRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(record, back);

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value.get("cyclomaticComplexity").is_some());
    assert!(value.get("technicalDebtHours").is_some());
    assert!(value.get("commentRatio").is_some());
}

#[test]
fn typescript_sources_analyze_through_the_same_path() {
    let source = indoc! {r#"
        interface Point { x: number; y: number; }
        function norm(p: Point): number {
            if (p.x === 0 && p.y === 0) { return 0; }
            return Math.sqrt(p.x * p.x + p.y * p.y);
        }
    "#};
    let mut parser = parser_for_hint("typescript").unwrap();
    let tree = parser.parse(source).unwrap();
    let record = calculate_all_metrics(source, Some(&tree), &[], &[]);
    // if + && on top of the base path
    assert_eq!(record.cyclomatic_complexity, 3);
}
