//! The style cache: key, sink mode, registered index and insertion ledger.
//!
//! One [`StyleCache`] is constructed per render root and lives as long as
//! that root. It owns the two append-only maps the engine memoizes through:
//! the registered-style index (class name → raw body, see
//! [`crate::registry`]) and the insertion ledger (identity → processed
//! state). The sink mode is fixed at construction and passed by value —
//! never probed from ambient environment state — so every mode is directly
//! testable.

use std::collections::HashMap;

use crate::compile;
use crate::registry::RegisteredStyles;
use crate::sheet::{NoSheet, Sheet};

/// Where compiled rules go, chosen once at cache construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkMode {
    /// Push each rule to the live sheet as a side effect of insertion.
    Live,
    /// Return the compiled text (dependencies first) to the caller; retain
    /// presence only.
    Deferred,
    /// Retain the compiled text in the ledger for a later collaborator to
    /// pull by identity; return nothing.
    DeferredCompat,
}

impl SinkMode {
    /// Whether insertion flushes to a live sheet.
    pub fn is_live(self) -> bool {
        matches!(self, SinkMode::Live)
    }

    /// Whether the registered index must retain every body so a deferred
    /// collaborator can classify emitted classes by reading it back.
    ///
    /// Kept separate from the "class name may be inspected downstream"
    /// predicate (`!is_pass_through`): the two gate registration for
    /// different reasons and future sink modes may need only one.
    pub fn retains_for_readback(self) -> bool {
        matches!(self, SinkMode::DeferredCompat)
    }
}

/// Per-identity ledger payload.
///
/// An identity appears in the ledger if and only if its CSS has been
/// compiled; text is retained only in compat mode, so live and deferred
/// caches never hold compiled output they do not need.
#[derive(Debug, Clone, PartialEq)]
pub enum Inserted {
    /// Compiled and delivered (flushed to the sheet, or handed back to the
    /// caller).
    Flushed,
    /// Compiled and retained for pull-by-identity (compat mode only).
    Retained(String),
}

/// The rule-compiler collaborator: scoped selector + raw body → ordered rule
/// strings.
pub type RuleCompiler = Box<dyn FnMut(&str, &str) -> Vec<String>>;

/// A long-lived style cache owning its registered index and insertion
/// ledger.
///
/// Maps are insert-if-absent only — entries are never updated or removed —
/// which keeps them safe to read from collaborators while unrelated
/// insertions proceed. Concurrent writers are not supported; the owner
/// serializes insertion.
pub struct StyleCache<S: Sheet = NoSheet> {
    key: String,
    mode: SinkMode,
    sheet: S,
    compiler: RuleCompiler,
    registered: RegisteredStyles,
    inserted: HashMap<String, Inserted>,
}

impl StyleCache<NoSheet> {
    /// Create a deferred cache: insertion returns compiled text to the
    /// caller.
    pub fn deferred(key: impl Into<String>) -> Self {
        Self::with_mode(key, SinkMode::Deferred, NoSheet)
    }

    /// Create a deferred-compat cache: insertion retains compiled text in
    /// the ledger for pull-by-identity.
    pub fn deferred_compat(key: impl Into<String>) -> Self {
        Self::with_mode(key, SinkMode::DeferredCompat, NoSheet)
    }
}

impl<S: Sheet> StyleCache<S> {
    /// Create a live cache flushing compiled rules to `sheet`.
    pub fn live(key: impl Into<String>, sheet: S) -> Self {
        Self::with_mode(key, SinkMode::Live, sheet)
    }

    fn with_mode(key: impl Into<String>, mode: SinkMode, sheet: S) -> Self {
        Self {
            key: key.into(),
            mode,
            sheet,
            compiler: Box::new(compile::compile),
            registered: RegisteredStyles::new(),
            inserted: HashMap::new(),
        }
    }

    /// Replace the default rule compiler (builder pattern).
    pub fn with_compiler<F>(mut self, compiler: F) -> Self
    where
        F: FnMut(&str, &str) -> Vec<String> + 'static,
    {
        self.compiler = Box::new(compiler);
        self
    }

    /// The key namespacing every class name this cache emits.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The sink mode fixed at construction.
    pub fn mode(&self) -> SinkMode {
        self.mode
    }

    /// The namespaced class name for an identity: `key-identity`.
    pub fn class_name(&self, identity: &str) -> String {
        format!("{}-{identity}", self.key)
    }

    /// The registered-style index (read path for collaborators).
    pub fn registered(&self) -> &RegisteredStyles {
        &self.registered
    }

    /// Whether an identity has been compiled by this cache.
    pub fn is_inserted(&self, identity: &str) -> bool {
        self.inserted.contains_key(identity)
    }

    /// Compiled text retained under an identity (compat mode only).
    pub fn retained_css(&self, identity: &str) -> Option<&str> {
        match self.inserted.get(identity)? {
            Inserted::Retained(css) => Some(css),
            Inserted::Flushed => None,
        }
    }

    /// The live sheet (meaningful for live caches; deferred caches carry
    /// [`NoSheet`]).
    pub fn sheet(&self) -> &S {
        &self.sheet
    }

    // Engine-facing mutation, kept crate-private so collaborators only ever
    // read.

    pub(crate) fn register(&mut self, class_name: &str, body: &str) {
        self.registered.insert_if_absent(class_name, body);
    }

    pub(crate) fn compile(&mut self, selector: &str, body: &str) -> Vec<String> {
        (self.compiler)(selector, body)
    }

    pub(crate) fn mark_inserted(&mut self, identity: &str) {
        self.inserted
            .insert(identity.to_string(), Inserted::Flushed);
    }

    pub(crate) fn retain(&mut self, identity: &str, css: String) {
        self.inserted
            .insert(identity.to_string(), Inserted::Retained(css));
    }

    pub(crate) fn flush(&mut self, rules: &[String]) {
        for rule in rules {
            self.sheet.insert(rule);
        }
    }
}
