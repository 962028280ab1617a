//! Parse Utilities
//!
//! Source positions and parse-stage error reporting shared by the lexer and
//! the tree builder.

use serde::{Deserialize, Serialize};

/// A source file being parsed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParseSourceFile {
    pub content: String,
    pub url: String,
}

impl ParseSourceFile {
    pub fn new(content: String, url: String) -> Self {
        ParseSourceFile { content, url }
    }
}

/// A position inside a source file
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParseLocation {
    pub offset: usize,
    pub line: usize,
    pub col: usize,
}

impl ParseLocation {
    pub fn new(offset: usize, line: usize, col: usize) -> Self {
        ParseLocation { offset, line, col }
    }

    pub fn start() -> Self {
        ParseLocation::new(0, 0, 0)
    }
}

impl std::fmt::Display for ParseLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// A region of a source file
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParseSourceSpan {
    pub start: ParseLocation,
    pub end: ParseLocation,
}

impl ParseSourceSpan {
    pub fn new(start: ParseLocation, end: ParseLocation) -> Self {
        ParseSourceSpan { start, end }
    }

    pub fn empty() -> Self {
        ParseSourceSpan::new(ParseLocation::start(), ParseLocation::start())
    }

    /// The source text covered by this span
    pub fn text<'a>(&self, file: &'a ParseSourceFile) -> &'a str {
        file.content
            .get(self.start.offset..self.end.offset)
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseErrorLevel {
    Warning,
    Error,
}

/// A recoverable parse-stage error with its source location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseError {
    pub span: ParseSourceSpan,
    pub msg: String,
    pub level: ParseErrorLevel,
}

impl ParseError {
    pub fn new(span: ParseSourceSpan, msg: String) -> Self {
        ParseError {
            span,
            msg,
            level: ParseErrorLevel::Error,
        }
    }

    /// The error message with up to `max_chars` of quoted source context on
    /// each side of the error location.
    pub fn contextual_message(&self, file: &ParseSourceFile, max_chars: usize) -> String {
        let offset = self.span.start.offset.min(file.content.len());
        let before_start = offset.saturating_sub(max_chars);
        let after_end = (offset + max_chars).min(file.content.len());

        // Keep slice boundaries on char boundaries
        let before_start = floor_char_boundary(&file.content, before_start);
        let after_end = floor_char_boundary(&file.content, after_end);
        let offset = floor_char_boundary(&file.content, offset);

        let before = &file.content[before_start..offset];
        let after = &file.content[offset..after_end];
        let level_str = match self.level {
            ParseErrorLevel::Warning => "WARNING",
            ParseErrorLevel::Error => "ERROR",
        };
        format!("{} (\"{}[{} ->]{}\")", self.msg, before, level_str, after)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.msg, self.span.start)
    }
}

fn floor_char_boundary(s: &str, mut index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Sanitize identifier by replacing non-word characters with underscores
pub fn sanitize_identifier(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}
