pub mod structure;

use crate::core::Language;
use anyhow::{Context, Result};
use tree_sitter::{Parser, Tree};

/// Tree-sitter adapter for ECMAScript-family sources.
///
/// Parsing is the only fallible step of an analysis; downstream calculators
/// accept an absent tree and degrade instead of failing the request.
pub struct JavaScriptParser {
    parser: Parser,
    language: Language,
}

impl JavaScriptParser {
    pub fn new_javascript() -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_javascript::LANGUAGE.into())
            .context("Failed to set JavaScript language")?;
        Ok(Self {
            parser,
            language: Language::JavaScript,
        })
    }

    pub fn new_typescript() -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into())
            .context("Failed to set TypeScript language")?;
        Ok(Self {
            parser,
            language: Language::TypeScript,
        })
    }

    pub fn for_language(language: Language) -> Result<Self> {
        match language {
            Language::JavaScript => Self::new_javascript(),
            Language::TypeScript => Self::new_typescript(),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn parse(&mut self, source: &str) -> Result<Tree> {
        self.parser
            .parse(source, None)
            .context("Failed to parse source")
    }
}
