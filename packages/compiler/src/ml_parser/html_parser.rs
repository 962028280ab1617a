//! HTML Parser entry point
//!
//! Thin wrapper tying the lexer and the tree builder together.

use super::parser::{ParseTreeResult, Parser};

/// HTML parser for template source files
pub struct HtmlParser;

impl HtmlParser {
    pub fn new() -> Self {
        HtmlParser
    }

    /// Parse HTML template source.
    ///
    /// `url` identifies the source in error messages.
    pub fn parse(&self, source: &str, url: &str) -> ParseTreeResult {
        Parser::new().parse(source, url)
    }
}

impl Default for HtmlParser {
    fn default() -> Self {
        Self::new()
    }
}
