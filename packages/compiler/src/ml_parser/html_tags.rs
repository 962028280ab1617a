//! HTML Tag Definitions
//!
//! Void elements close implicitly and never take children.

use once_cell::sync::Lazy;
use std::collections::HashSet;

static VOID_ELEMENTS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    let mut set = HashSet::new();
    set.insert("area");
    set.insert("base");
    set.insert("br");
    set.insert("col");
    set.insert("embed");
    set.insert("hr");
    set.insert("img");
    set.insert("input");
    set.insert("link");
    set.insert("meta");
    set.insert("param");
    set.insert("source");
    set.insert("track");
    set.insert("wbr");
    set
});

/// Check if the tag is a void element (`<br>`, `<img>`, ...)
pub fn is_void_element(tag_name: &str) -> bool {
    VOID_ELEMENTS.contains(tag_name.to_ascii_lowercase().as_str())
}
