//! HTML Parser
//!
//! Converts the token stream into an AST using an open-element stack.
//! Mismatched or missing closing tags are reported and recovered from, so a
//! best-effort tree is always produced alongside the collected errors.

use super::ast::{Attribute, Comment, Element, Node, Text};
use super::html_tags::is_void_element;
use super::lexer::{tokenize, Token, TokenType};
use crate::parse_util::{ParseError, ParseSourceFile, ParseSourceSpan};

/// Parse tree result
#[derive(Debug)]
pub struct ParseTreeResult {
    pub root_nodes: Vec<Node>,
    pub errors: Vec<ParseError>,
    pub file: ParseSourceFile,
}

/// Main parser
pub struct Parser;

impl Parser {
    pub fn new() -> Self {
        Parser
    }

    pub fn parse(&self, source: &str, url: &str) -> ParseTreeResult {
        let result = tokenize(source, url);
        let mut errors = result.errors;
        let mut builder = TreeBuilder::new(result.tokens);
        builder.build();
        errors.extend(builder.errors);

        ParseTreeResult {
            root_nodes: builder.root_nodes,
            errors,
            file: result.file,
        }
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

struct TreeBuilder {
    tokens: Vec<Token>,
    index: usize,
    stack: Vec<Element>,
    root_nodes: Vec<Node>,
    errors: Vec<ParseError>,
}

impl TreeBuilder {
    fn new(tokens: Vec<Token>) -> Self {
        TreeBuilder {
            tokens,
            index: 0,
            stack: Vec::new(),
            root_nodes: Vec::new(),
            errors: Vec::new(),
        }
    }

    fn build(&mut self) {
        while self.index < self.tokens.len() {
            let token = self.tokens[self.index].clone();
            self.index += 1;
            match token.token_type {
                TokenType::TagOpenStart => self.on_tag_open(&token),
                TokenType::TagClose => self.on_tag_close(&token),
                TokenType::Text => {
                    let value = token.parts[0].clone();
                    self.add_node(Node::Text(Text::new(value, token.source_span)));
                }
                TokenType::Comment => {
                    let value = token.parts[0].clone();
                    self.add_node(Node::Comment(Comment::new(value, token.source_span)));
                }
                TokenType::Eof => self.on_eof(&token),
                // Attribute tokens are consumed by on_tag_open; reaching one
                // here means the lexer recovered from a malformed tag.
                TokenType::AttrName
                | TokenType::AttrValue
                | TokenType::TagOpenEnd
                | TokenType::TagOpenEndVoid => {}
            }
        }
    }

    fn on_tag_open(&mut self, open: &Token) {
        let name = open.parts[0].clone();
        let mut attrs: Vec<Attribute> = Vec::new();
        let mut span = open.source_span;
        let mut self_closing = false;
        let mut closed = false;

        while self.index < self.tokens.len() {
            let token = self.tokens[self.index].clone();
            match token.token_type {
                TokenType::AttrName => {
                    self.index += 1;
                    attrs.push(Attribute::new(
                        token.parts[0].clone(),
                        None,
                        token.source_span,
                    ));
                }
                TokenType::AttrValue => {
                    self.index += 1;
                    if let Some(attr) = attrs.last_mut() {
                        attr.value = Some(token.parts[0].clone());
                        attr.source_span.end = token.source_span.end;
                    }
                }
                TokenType::TagOpenEnd => {
                    self.index += 1;
                    span.end = token.source_span.end;
                    closed = true;
                    break;
                }
                TokenType::TagOpenEndVoid => {
                    self.index += 1;
                    span.end = token.source_span.end;
                    self_closing = true;
                    closed = true;
                    break;
                }
                _ => break,
            }
        }

        let element = Element::new(name.clone(), attrs, vec![], self_closing, span);
        if !closed || self_closing || is_void_element(&name) {
            // Never on the stack: malformed open tag, explicit `/>`, or a
            // void element.
            self.add_node(Node::Element(element));
        } else {
            self.stack.push(element);
        }
    }

    fn on_tag_close(&mut self, close: &Token) {
        let name = &close.parts[0];
        let matching = self.stack.iter().rposition(|el| el.name == *name);
        match matching {
            None => {
                self.errors.push(ParseError::new(
                    close.source_span,
                    format!("Unexpected closing tag \"{}\"", name),
                ));
            }
            Some(position) => {
                while self.stack.len() > position + 1 {
                    let unclosed = self.pop_element(close.source_span);
                    self.errors.push(ParseError::new(
                        unclosed,
                        format!("Unclosed tag implicitly closed by \"</{}>\"", name),
                    ));
                }
                self.pop_element(close.source_span);
            }
        }
    }

    fn on_eof(&mut self, eof: &Token) {
        while !self.stack.is_empty() {
            let unclosed = self.pop_element(eof.source_span);
            self.errors.push(ParseError::new(
                unclosed,
                "Unclosed tag at end of input".to_string(),
            ));
        }
    }

    /// Pop the top element, attach it, and return its original span.
    fn pop_element(&mut self, close_span: ParseSourceSpan) -> ParseSourceSpan {
        // Callers only pop when the stack is non-empty.
        let mut element = match self.stack.pop() {
            Some(el) => el,
            None => return close_span,
        };
        let open_span = element.source_span;
        element.source_span.end = close_span.end;
        self.add_node(Node::Element(element));
        open_span
    }

    fn add_node(&mut self, node: Node) {
        match self.stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.root_nodes.push(node),
        }
    }
}
