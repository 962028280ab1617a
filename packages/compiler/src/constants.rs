//! Reserved template markup names
//!
//! Tag and attribute names with compile-time meaning, shared by the template
//! discovery pass, the loop extractor and the node renderer.

/// Tags with reserved meaning
pub mod tags {
    /// Container element wrapping each template body
    pub const TEMPLATE: &str = "template";
    /// Repetition directive, replaced by a generated collection mapping
    pub const LOOP: &str = "loop";
}

/// Attributes of the `<template>` container
pub mod template_attrs {
    /// Declared name of a named template; absent on the default template
    pub const NAME: &str = "name";
}

/// Required attributes of the `<loop>` directive
pub mod loop_attrs {
    /// Target component reference, resolved through the tag-to-var table
    pub const TEMPLATE_NAME: &str = "template";
    /// Collection expression, usually a strict binding like `{{ items }}`
    pub const ARRAY: &str = "array";
    /// Per-element field used for the generated `key` prop
    pub const KEY: &str = "key";
}
