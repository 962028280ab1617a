//! Character constants used throughout the compiler

// Special characters
pub const EOF: char = '\0';
pub const TAB: char = '\t';
pub const LF: char = '\n';
pub const NEWLINE: char = '\n'; // Alias for LF
pub const CR: char = '\r';
pub const SPACE: char = ' ';

// Punctuation
pub const BANG: char = '!';
pub const DQ: char = '"';
pub const SQ: char = '\'';
pub const MINUS: char = '-';
pub const SLASH: char = '/';
pub const LT: char = '<';
pub const EQ: char = '=';
pub const GT: char = '>';

/// Whitespace as the HTML lexer understands it
pub fn is_whitespace(code: char) -> bool {
    matches!(code, SPACE | TAB | LF | CR | '\x0C')
}

/// Characters allowed in tag and attribute names
pub fn is_name_char(code: char) -> bool {
    code.is_ascii_alphanumeric() || matches!(code, '-' | '_' | ':' | '.')
}
