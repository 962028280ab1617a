//! HTML Lexer
//!
//! Converts template source text into a flat token stream. Errors are
//! accumulated and tokenization continues wherever recovery is possible.

use serde::{Deserialize, Serialize};

use crate::chars;
use crate::parse_util::{ParseError, ParseLocation, ParseSourceFile, ParseSourceSpan};

/// Token types for HTML parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenType {
    TagOpenStart,
    AttrName,
    AttrValue,
    TagOpenEnd,
    TagOpenEndVoid,
    TagClose,
    Text,
    Comment,
    Eof,
}

/// A lexed token: type, string parts and source span
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub token_type: TokenType,
    pub parts: Vec<String>,
    pub source_span: ParseSourceSpan,
}

impl Token {
    pub fn new(token_type: TokenType, parts: Vec<String>, source_span: ParseSourceSpan) -> Self {
        Token {
            token_type,
            parts,
            source_span,
        }
    }
}

/// Tokenization result
#[derive(Debug)]
pub struct TokenizeResult {
    pub tokens: Vec<Token>,
    pub errors: Vec<ParseError>,
    pub file: ParseSourceFile,
}

/// Main tokenization function
pub fn tokenize(source: &str, url: &str) -> TokenizeResult {
    let file = ParseSourceFile::new(source.to_string(), url.to_string());
    let mut tokenizer = Tokenizer::new(&file.content);
    tokenizer.tokenize();

    TokenizeResult {
        tokens: tokenizer.tokens,
        errors: tokenizer.errors,
        file,
    }
}

#[derive(Debug, Clone, Copy)]
struct CursorState {
    peek: char,
    offset: usize,
    line: usize,
    col: usize,
}

struct Tokenizer<'a> {
    content: &'a str,
    state: CursorState,
    tokens: Vec<Token>,
    errors: Vec<ParseError>,
}

impl<'a> Tokenizer<'a> {
    fn new(content: &'a str) -> Self {
        let peek = content.chars().next().unwrap_or(chars::EOF);
        Tokenizer {
            content,
            state: CursorState {
                peek,
                offset: 0,
                line: 0,
                col: 0,
            },
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    fn tokenize(&mut self) {
        loop {
            if self.state.peek == chars::EOF {
                let location = self.location();
                self.emit(
                    TokenType::Eof,
                    vec![],
                    ParseSourceSpan::new(location, location),
                );
                break;
            }

            if self.state.peek == chars::LT && self.is_tag_start() {
                if self.starts_with("<!--") {
                    self.consume_comment();
                } else if self.starts_with("<!") {
                    self.consume_bogus_comment();
                } else if self.starts_with("</") {
                    self.consume_tag_close();
                } else {
                    self.consume_tag_open();
                }
            } else {
                self.consume_text();
            }
        }
    }

    // Cursor handling

    fn advance(&mut self) {
        if self.state.peek == chars::EOF {
            return;
        }
        if self.state.peek == chars::NEWLINE {
            self.state.line += 1;
            self.state.col = 0;
        } else {
            self.state.col += 1;
        }
        self.state.offset += self.state.peek.len_utf8();
        self.state.peek = self.content[self.state.offset..]
            .chars()
            .next()
            .unwrap_or(chars::EOF);
    }

    fn location(&self) -> ParseLocation {
        ParseLocation::new(self.state.offset, self.state.line, self.state.col)
    }

    fn span_from(&self, start: CursorState) -> ParseSourceSpan {
        ParseSourceSpan::new(
            ParseLocation::new(start.offset, start.line, start.col),
            self.location(),
        )
    }

    fn starts_with(&self, prefix: &str) -> bool {
        self.content[self.state.offset..].starts_with(prefix)
    }

    fn consume_str(&mut self, s: &str) {
        for _ in s.chars() {
            self.advance();
        }
    }

    /// A `<` opens markup only when followed by a name, `/` or `!`;
    /// anything else is text.
    fn is_tag_start(&self) -> bool {
        match self.content[self.state.offset + 1..].chars().next() {
            Some(c) => c.is_ascii_alphabetic() || c == chars::SLASH || c == chars::BANG,
            None => false,
        }
    }

    fn emit(&mut self, token_type: TokenType, parts: Vec<String>, span: ParseSourceSpan) {
        self.tokens.push(Token::new(token_type, parts, span));
    }

    fn report(&mut self, msg: String, span: ParseSourceSpan) {
        self.errors.push(ParseError::new(span, msg));
    }

    fn skip_whitespace(&mut self) {
        while chars::is_whitespace(self.state.peek) {
            self.advance();
        }
    }

    fn consume_name(&mut self) -> String {
        let mut name = String::new();
        while chars::is_name_char(self.state.peek) {
            name.push(self.state.peek);
            self.advance();
        }
        name
    }

    // Token consumers

    fn consume_text(&mut self) {
        let start = self.state;
        let mut value = String::new();
        loop {
            if self.state.peek == chars::EOF {
                break;
            }
            if self.state.peek == chars::LT && self.is_tag_start() {
                break;
            }
            value.push(self.state.peek);
            self.advance();
        }
        self.emit(TokenType::Text, vec![value], self.span_from(start));
    }

    fn consume_comment(&mut self) {
        let start = self.state;
        self.consume_str("<!--");
        let mut value = String::new();
        loop {
            if self.state.peek == chars::EOF {
                self.report("Unterminated comment".to_string(), self.span_from(start));
                break;
            }
            if self.starts_with("-->") {
                self.consume_str("-->");
                break;
            }
            value.push(self.state.peek);
            self.advance();
        }
        self.emit(TokenType::Comment, vec![value], self.span_from(start));
    }

    /// `<!...>` constructs other than comments (doctype, CDATA). Consumed as
    /// a comment node so the tree builder stays shape-closed.
    fn consume_bogus_comment(&mut self) {
        let start = self.state;
        self.consume_str("<!");
        let mut value = String::new();
        while self.state.peek != chars::GT && self.state.peek != chars::EOF {
            value.push(self.state.peek);
            self.advance();
        }
        if self.state.peek == chars::GT {
            self.advance();
        }
        self.emit(TokenType::Comment, vec![value], self.span_from(start));
    }

    fn consume_tag_close(&mut self) {
        let start = self.state;
        self.consume_str("</");
        let name = self.consume_name();
        self.skip_whitespace();
        if name.is_empty() {
            self.report(
                "Expected tag name after \"</\"".to_string(),
                self.span_from(start),
            );
        }
        if self.state.peek == chars::GT {
            self.advance();
        } else {
            self.report(
                format!("Unterminated closing tag \"{}\"", name),
                self.span_from(start),
            );
            // Recover at the next `>`
            while self.state.peek != chars::GT && self.state.peek != chars::EOF {
                self.advance();
            }
            if self.state.peek == chars::GT {
                self.advance();
            }
        }
        self.emit(TokenType::TagClose, vec![name], self.span_from(start));
    }

    fn consume_tag_open(&mut self) {
        let start = self.state;
        self.advance(); // `<`
        let name = self.consume_name();
        self.emit(TokenType::TagOpenStart, vec![name.clone()], self.span_from(start));

        loop {
            self.skip_whitespace();
            match self.state.peek {
                chars::EOF => {
                    self.report(
                        format!("Unexpected end of input inside tag \"{}\"", name),
                        self.span_from(start),
                    );
                    return;
                }
                chars::SLASH => {
                    let end_start = self.state;
                    self.advance();
                    self.skip_whitespace();
                    if self.state.peek == chars::GT {
                        self.advance();
                        self.emit(TokenType::TagOpenEndVoid, vec![], self.span_from(end_start));
                    } else {
                        self.report(
                            format!("Expected \">\" after \"/\" in tag \"{}\"", name),
                            self.span_from(end_start),
                        );
                    }
                    return;
                }
                chars::GT => {
                    let end_start = self.state;
                    self.advance();
                    self.emit(TokenType::TagOpenEnd, vec![], self.span_from(end_start));
                    return;
                }
                c if chars::is_name_char(c) => {
                    self.consume_attr();
                }
                c => {
                    let err_start = self.state;
                    self.advance();
                    self.report(
                        format!("Unexpected character \"{}\" inside tag \"{}\"", c, name),
                        self.span_from(err_start),
                    );
                }
            }
        }
    }

    fn consume_attr(&mut self) {
        let start = self.state;
        let name = self.consume_name();
        self.emit(TokenType::AttrName, vec![name], self.span_from(start));

        self.skip_whitespace();
        if self.state.peek != chars::EQ {
            return; // bare flag attribute
        }
        self.advance(); // `=`
        self.skip_whitespace();

        let value_start = self.state;
        let mut value = String::new();
        if self.state.peek == chars::DQ || self.state.peek == chars::SQ {
            let quote = self.state.peek;
            self.advance();
            loop {
                if self.state.peek == chars::EOF {
                    self.report(
                        "Unterminated attribute value".to_string(),
                        self.span_from(value_start),
                    );
                    break;
                }
                if self.state.peek == quote {
                    self.advance();
                    break;
                }
                value.push(self.state.peek);
                self.advance();
            }
        } else {
            while !chars::is_whitespace(self.state.peek)
                && self.state.peek != chars::GT
                && self.state.peek != chars::EOF
            {
                value.push(self.state.peek);
                self.advance();
            }
        }
        self.emit(TokenType::AttrValue, vec![value], self.span_from(value_start));
    }
}
