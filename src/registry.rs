//! Registered-style index: emitted class name → raw style body.
//!
//! Collaborators use this index to recover which raw styles are already
//! attached to a class name (see [`crate::resolve`]). Entries are added at
//! most once and never overwritten or removed — first writer wins, which is
//! safe because identities are content-derived. Growth is unbounded in
//! principle but bounded in practice by the number of distinct styles a
//! program defines.

use std::collections::HashMap;

/// Append-only map from namespaced class name (`key-identity`) to the raw,
/// un-compiled style body registered under it.
#[derive(Debug, Clone, Default)]
pub struct RegisteredStyles {
    entries: HashMap<String, String>,
}

impl RegisteredStyles {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a body under a class name unless one is already present.
    ///
    /// Returns `true` if the entry was added. Re-registration is skipped
    /// silently: bodies for a given class name are expected to be identical
    /// by the content-addressing invariant.
    pub fn insert_if_absent(&mut self, class_name: &str, body: &str) -> bool {
        if self.entries.contains_key(class_name) {
            return false;
        }
        self.entries.insert(class_name.to_string(), body.to_string());
        true
    }

    /// Look up the raw body registered under a class name.
    pub fn get(&self, class_name: &str) -> Option<&str> {
        self.entries.get(class_name).map(String::as_str)
    }

    /// Whether a class name has been registered.
    pub fn contains(&self, class_name: &str) -> bool {
        self.entries.contains_key(class_name)
    }

    /// Number of registered class names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
