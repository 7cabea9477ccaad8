pub mod javascript;

pub use javascript::JavaScriptParser;

use crate::core::Language;
use anyhow::Result;

/// Build a parser from a caller-supplied language hint.
///
/// The hint only selects the grammar; the metrics calculators themselves
/// are language-agnostic over the resulting tree.
pub fn parser_for_hint(hint: &str) -> Result<JavaScriptParser> {
    let language = Language::from_hint(hint)?;
    JavaScriptParser::for_language(language)
}
