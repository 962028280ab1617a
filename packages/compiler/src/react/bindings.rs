//! Binding classification and rewriting
//!
//! Recognizes the three `{{ ... }}` embedding shapes inside attribute and
//! text values and rewrites them into JSX expression syntax.
//!
//! Classification is ordered and first-match-wins: boolean, then strict,
//! then interpolated, then literal. The order is load-bearing — later
//! categories' patterns accept values the earlier ones claim.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// One binding expression, anywhere in a value
    static ref BINDING_PATTERN: Regex = Regex::new(r"\{\{\s*(.+?)\s*\}\}").unwrap();
    /// A value that is nothing but a binding expression
    static ref STRICT_PATTERN: Regex = Regex::new(r"^\{\{\s*(.+?)\s*\}\}$").unwrap();
    /// A boolean keyword, bare or wrapped in a binding
    static ref BOOLEAN_PATTERN: Regex =
        Regex::new(r"(?i)^(?:\{\{\s*)?(true|false)(?:\s*\}\})?$").unwrap();
}

/// Classification of a raw attribute or text value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
    /// `{{ true }}`, `TRUE`, `false` — rendered `{ true }` / `{ false }`
    Boolean { keyword: String },
    /// The entire value is one expression — rendered `{ expr }`
    Strict { expression: String },
    /// Literal text mixed with expressions — rendered as a template string
    Interpolated,
    /// No binding markers — rendered as a quoted string
    Literal,
}

/// Classify a raw value. Every input falls into exactly one class.
pub fn classify(value: &str) -> Binding {
    if let Some(caps) = BOOLEAN_PATTERN.captures(value) {
        return Binding::Boolean {
            keyword: caps[1].to_lowercase(),
        };
    }
    if let Some(expression) = strict_expression(value) {
        return Binding::Strict {
            expression: expression.to_string(),
        };
    }
    if BINDING_PATTERN.is_match(value) {
        return Binding::Interpolated;
    }
    Binding::Literal
}

/// The expression of a strict binding: the whole value is one `{{ expr }}`
/// and `expr` itself carries no binding markers.
fn strict_expression(value: &str) -> Option<&str> {
    let caps = STRICT_PATTERN.captures(value)?;
    let expression = caps.get(1)?.as_str();
    if expression.contains("{{") || expression.contains("}}") {
        return None;
    }
    Some(expression)
}

/// Render an attribute value into its JSX form.
pub fn render_attr_value(value: &str) -> String {
    match classify(value) {
        Binding::Boolean { keyword } => format!("{{ {} }}", keyword),
        Binding::Strict { expression } => format!("{{ {} }}", expression),
        Binding::Interpolated => {
            let replaced = BINDING_PATTERN.replace_all(value, "$${ $1 }");
            format!("{{ `{}` }}", replaced)
        }
        Binding::Literal => format!("'{}'", escape_single_quoted(value)),
    }
}

/// Render a text value: every binding becomes `{ expr }` in place,
/// surrounding literal text preserved verbatim.
pub fn render_text(value: &str) -> String {
    BINDING_PATTERN.replace_all(value, "{ $1 }").into_owned()
}

/// Strip strict-binding braces from a value (`{{ items }}` -> `items`),
/// trimming either way. Used for the loop collection expression.
pub fn strip_binding(value: &str) -> String {
    match strict_expression(value) {
        Some(expression) => expression.to_string(),
        None => value.trim().to_string(),
    }
}

fn escape_single_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}
