//! Attribute name conversion
//!
//! Maps HTML attribute names to their JSX equivalents. `data-*` and `aria-*`
//! attributes keep their dashed form; known dashed HTML attributes resolve
//! through a conversion table; any other dashed name falls back to generic
//! camelCasing; everything else passes through unchanged.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static CONVERSIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("accept-charset", "acceptCharset");
    m.insert("http-equiv", "httpEquiv");
    // SVG presentation attributes commonly seen in templates
    m.insert("clip-path", "clipPath");
    m.insert("fill-opacity", "fillOpacity");
    m.insert("fill-rule", "fillRule");
    m.insert("stop-color", "stopColor");
    m.insert("stop-opacity", "stopOpacity");
    m.insert("stroke-dasharray", "strokeDasharray");
    m.insert("stroke-dashoffset", "strokeDashoffset");
    m.insert("stroke-linecap", "strokeLinecap");
    m.insert("stroke-linejoin", "strokeLinejoin");
    m.insert("stroke-miterlimit", "strokeMiterlimit");
    m.insert("stroke-opacity", "strokeOpacity");
    m.insert("stroke-width", "strokeWidth");
    m.insert("text-anchor", "textAnchor");
    m
});

/// Convert a source attribute name to its JSX equivalent.
pub fn to_jsx(name: &str) -> String {
    if name.starts_with("data-") || name.starts_with("aria-") {
        return name.to_string();
    }
    if let Some(converted) = CONVERSIONS.get(name) {
        return (*converted).to_string();
    }
    if name.contains('-') {
        return camel_case(name);
    }
    name.to_string()
}

fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        if c == '-' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}
