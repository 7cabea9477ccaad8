//! Deterministic code-metrics engine for JavaScript and TypeScript.
//!
//! Parses a source file with tree-sitter, walks the tree to extract
//! structural facts (functions, classes, imports), and derives quantitative
//! metrics: cyclomatic and cognitive complexity, Halstead measures,
//! maintainability index, duplicate-block detection, and a technical-debt
//! estimate. All computations are synchronous pure functions over in-memory
//! data; the engine performs no I/O and holds no state between calls.

// Export modules for library usage
pub mod analyzers;
pub mod complexity;
pub mod core;
pub mod debt;
pub mod metrics;

// Re-export commonly used types
pub use crate::core::{
    ClassInfo, ClassMethodInfo, ClassPropertyInfo, CodeSmell, CodeStructure, DuplicateBlock,
    DuplicationReport, FunctionInfo, FunctionKind, HalsteadMetrics, ImportInfo, ImportKind,
    ImportSpecifier, Language, LineCounts, LineRange, MethodKind, MetricsRecord, Severity,
    SourceLocation, VariableInfo, VariableKind, Vulnerability,
};

pub use crate::core::errors::{Error, Result};

pub use crate::analyzers::{javascript::JavaScriptParser, parser_for_hint};
pub use crate::analyzers::javascript::structure::extract_structure;
pub use crate::complexity::{cognitive_complexity, cyclomatic_complexity, halstead_metrics};
pub use crate::debt::{detect_duplication, technical_debt_hours, MIN_BLOCK_LINES};
pub use crate::metrics::{
    calculate_all_metrics, count_lines, maintainability_index, MAX_DUPLICATION_LINES,
};
