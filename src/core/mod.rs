pub mod ast;
pub mod errors;

use serde::{Deserialize, Serialize};

/// Languages the engine has grammars for.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    JavaScript,
    TypeScript,
}

impl Language {
    /// Resolve a caller-supplied language hint ("js", "typescript", ...).
    pub fn from_hint(hint: &str) -> errors::Result<Self> {
        match hint.trim().to_lowercase().as_str() {
            "javascript" | "js" | "jsx" | "mjs" | "cjs" => Ok(Language::JavaScript),
            "typescript" | "ts" | "tsx" | "mts" | "cts" => Ok(Language::TypeScript),
            other => Err(errors::Error::unsupported_language(other)),
        }
    }
}

/// Span of source lines covered by an extracted construct. 1-based, inclusive.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
    pub end_line: usize,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FunctionKind {
    Declaration,
    Arrow,
    Expression,
    Method,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FunctionInfo {
    pub name: String,
    pub kind: FunctionKind,
    pub parameter_count: usize,
    pub is_async: bool,
    pub is_generator: bool,
    pub max_nesting_depth: u32,
    pub line_count: usize,
    pub location: SourceLocation,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MethodKind {
    Constructor,
    Method,
    Getter,
    Setter,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClassMethodInfo {
    pub name: String,
    pub kind: MethodKind,
    pub is_static: bool,
    pub is_async: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClassPropertyInfo {
    pub name: String,
    pub is_static: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClassInfo {
    pub name: String,
    pub superclass_name: Option<String>,
    pub methods: Vec<ClassMethodInfo>,
    pub properties: Vec<ClassPropertyInfo>,
    pub location: SourceLocation,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ImportKind {
    Static,
    Dynamic,
    Commonjs,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImportSpecifier {
    pub imported_name: String,
    pub local_alias: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImportInfo {
    pub source_module: String,
    pub import_kind: ImportKind,
    pub specifiers: Vec<ImportSpecifier>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VariableKind {
    Const,
    Let,
    Var,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VariableInfo {
    pub name: String,
    pub kind: VariableKind,
    pub location: SourceLocation,
}

/// Everything the structural extractor pulls from one parsed file.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CodeStructure {
    pub functions: Vec<FunctionInfo>,
    pub classes: Vec<ClassInfo>,
    pub imports: Vec<ImportInfo>,
    pub variables: Vec<VariableInfo>,
}

/// Halstead software-science measures derived from lexical token counts.
///
/// Field names are part of the JSON wire contract consumed by report
/// generators and dashboards.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HalsteadMetrics {
    pub distinct_operators: usize,
    pub distinct_operands: usize,
    pub total_operators: usize,
    pub total_operands: usize,
    pub vocabulary: usize,
    pub length: usize,
    pub volume: f64,
    pub difficulty: f64,
    pub effort: f64,
    pub estimated_time_seconds: f64,
    pub estimated_bugs: f64,
}

/// 1-based inclusive range over source lines.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LineRange {
    pub start_line: usize,
    pub end_line: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateBlock {
    pub first_range: LineRange,
    pub second_range: LineRange,
    pub line_count: usize,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DuplicationReport {
    pub duplicate_blocks: Vec<DuplicateBlock>,
    pub total_duplicated_lines: usize,
    pub duplication_percentage: f64,
}

/// Severity attached to externally-supplied findings (vulnerabilities,
/// code smells) that feed the technical-debt estimate.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Remediation weight (hours) of one vulnerability at this severity.
    pub fn vulnerability_weight(self) -> f64 {
        match self {
            Severity::Critical => 4.0,
            Severity::High => 2.0,
            Severity::Medium => 1.0,
            Severity::Low => 0.5,
        }
    }

    /// Remediation weight (hours) of one code smell at this severity.
    /// Smells are never critical; a critical input is weighted like high.
    pub fn smell_weight(self) -> f64 {
        match self {
            Severity::Critical | Severity::High => 1.0,
            Severity::Medium => 0.5,
            Severity::Low => 0.25,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Vulnerability {
    pub severity: Severity,
    pub message: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CodeSmell {
    pub severity: Severity,
    pub message: String,
}

/// Line-count breakdown of one source file.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LineCounts {
    pub total_lines: usize,
    pub code_lines: usize,
    pub comment_lines: usize,
    pub blank_lines: usize,
}

/// The engine's aggregate output for one analysis request.
///
/// Immutable once built; persisted externally as part of a larger
/// analysis document. Field names and numeric ranges are a wire contract.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetricsRecord {
    #[serde(flatten)]
    pub lines: LineCounts,
    pub comment_ratio: f64,
    pub cyclomatic_complexity: u32,
    pub cognitive_complexity: u32,
    pub maintainability_index: u32,
    pub halstead: HalsteadMetrics,
    pub duplication: DuplicationReport,
    pub technical_debt_hours: f64,
    pub quality_score: f64,
}

impl MetricsRecord {
    /// Serialize for persistence and transport. Field names are the wire
    /// contract other components depend on.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Degraded-but-valid record returned when analysis cannot proceed.
    /// Callers always receive some record, never an error.
    pub fn fallback() -> Self {
        MetricsRecord {
            lines: LineCounts::default(),
            comment_ratio: 0.0,
            cyclomatic_complexity: 1,
            cognitive_complexity: 0,
            maintainability_index: 50,
            halstead: HalsteadMetrics::default(),
            duplication: DuplicationReport::default(),
            technical_debt_hours: 0.0,
            quality_score: 50.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_hint_resolution() {
        assert_eq!(Language::from_hint("js").unwrap(), Language::JavaScript);
        assert_eq!(Language::from_hint("TSX").unwrap(), Language::TypeScript);
        assert!(Language::from_hint("fortran").is_err());
    }

    #[test]
    fn severity_weights_are_ordered() {
        let severities = [
            Severity::Low,
            Severity::Medium,
            Severity::High,
            Severity::Critical,
        ];
        for pair in severities.windows(2) {
            assert!(pair[0].vulnerability_weight() < pair[1].vulnerability_weight());
            assert!(pair[0].smell_weight() <= pair[1].smell_weight());
        }
    }

    #[test]
    fn metrics_record_serializes_with_wire_names() {
        let record = MetricsRecord::fallback();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["cyclomaticComplexity"], 1);
        assert_eq!(json["maintainabilityIndex"], 50);
        assert_eq!(json["qualityScore"], 50.0);
        assert_eq!(json["totalLines"], 0);
        assert_eq!(json["halstead"]["distinctOperators"], 0);
        assert!(json["duplication"]["duplicateBlocks"]
            .as_array()
            .unwrap()
            .is_empty());
    }
}
