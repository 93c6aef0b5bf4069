//! Output sinks: the ordered, append-only destinations for compiled rules.
//!
//! A live cache flushes every compiled rule to a [`Sheet`] as a side effect
//! of insertion. Deferred caches never flush — they return or retain the
//! compiled text instead — and carry the inert [`NoSheet`].

/// An ordered, append-only style sheet.
///
/// Implementations must preserve insertion order: the engine relies on rules
/// pushed earlier taking effect earlier (dependency rules precede the rules
/// that reference them).
pub trait Sheet {
    /// Append one compiled rule to the sheet.
    fn insert(&mut self, rule: &str);
}

/// An in-memory [`Sheet`] that records rules in insertion order.
///
/// Host adapters that wrap a real style sheet implement [`Sheet`] directly;
/// this buffer serves hosts that assemble sheet text themselves, and tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySheet {
    rules: Vec<String>,
}

impl MemorySheet {
    /// Create an empty sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// The rules inserted so far, in insertion order.
    pub fn rules(&self) -> &[String] {
        &self.rules
    }

    /// Number of rules inserted.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules have been inserted.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Sheet for MemorySheet {
    fn insert(&mut self, rule: &str) {
        self.rules.push(rule.to_string());
    }
}

/// The sink carried by deferred caches. Never flushed to.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSheet;

impl Sheet for NoSheet {
    fn insert(&mut self, _rule: &str) {}
}
