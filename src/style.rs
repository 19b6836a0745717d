//! Key-based style lookup.
//!
//! Components resolve class names through a registry keyed by stable
//! identifiers instead of binding to a stylesheet at compile time. Unmapped
//! keys resolve to the key itself, so the default BEM class names work with
//! an empty registry and a host application can remap them without touching
//! component code.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use std::collections::HashMap;

/// Maps stable style keys to resolved class names.
#[derive(Clone, Debug, Default)]
pub struct StyleRegistry {
    classes: HashMap<String, String>,
}

impl StyleRegistry {
    /// An empty registry; every key resolves to itself.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a style key to a class name.
    #[must_use]
    pub fn with_class(mut self, key: impl Into<String>, class: impl Into<String>) -> Self {
        self.classes.insert(key.into(), class.into());
        self
    }

    /// Resolve a style key to a class name, falling back to the key itself.
    #[must_use]
    pub fn class_for<'a>(&'a self, key: &'a str) -> &'a str {
        self.classes.get(key).map_or(key, String::as_str)
    }
}
