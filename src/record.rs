//! Style records: the immutable unit of input to the insertion engine.
//!
//! A [`StyleRecord`] pairs a content-derived identity with the raw,
//! un-compiled style body. Records that depend on other records (a style
//! animating with a keyframe definition, for instance) carry them as a
//! singly linked chain of `Arc`-shared predecessors, so a shared keyframe
//! is cached once no matter how many styles reference it.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Maximum number of dependency links a record may carry.
///
/// Chains in practice are one or two keyframe links; the bound exists so the
/// engine's recursive walk is finite by construction and needs no runtime
/// guard.
pub const MAX_CHAIN_DEPTH: usize = 32;

/// Errors from dependency-chain construction.
#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    #[error("style `{0}` cannot depend on itself")]
    SelfReference(String),
    #[error("dependency chain exceeds {MAX_CHAIN_DEPTH} records")]
    TooDeep,
}

/// Derive a content-addressed identity from a style body.
///
/// Two identical bodies always produce the same identity within a process,
/// which is the lifetime of every cache that stores one. Callers needing
/// cross-process stability should supply their own identity via
/// [`StyleRecord::new`].
pub fn content_identity(body: &str) -> String {
    let mut hasher = DefaultHasher::new();
    body.hash(&mut hasher);
    format!("{:x}", hasher.finish())
}

/// One serialized style declaration, ready for compilation.
///
/// Immutable once built. The `identity` is content-derived: two records with
/// identical compiled output share the same identity and therefore the same
/// cache entry.
#[derive(Debug, Clone)]
pub struct StyleRecord {
    identity: String,
    body: String,
    next: Option<Arc<StyleRecord>>,
    diagnostic: Option<String>,
}

impl StyleRecord {
    /// Create a record with an explicit identity.
    ///
    /// The identity must be non-empty and must be content-derived upstream:
    /// two semantically different bodies sharing an identity is a caller
    /// bug, not a condition this layer detects.
    pub fn new(identity: impl Into<String>, body: impl Into<String>) -> Self {
        let identity = identity.into();
        debug_assert!(!identity.is_empty(), "style identity must be non-empty");
        Self {
            identity,
            body: body.into(),
            next: None,
            diagnostic: None,
        }
    }

    /// Create a record whose identity is hashed from the body itself.
    pub fn from_body(body: impl Into<String>) -> Self {
        let body = body.into();
        let identity = content_identity(&body);
        Self::new(identity, body)
    }

    /// Attach a predecessor record that must be emitted before this one.
    ///
    /// Validated at construction: a record may not depend on itself, and the
    /// resulting chain may not exceed [`MAX_CHAIN_DEPTH`] links.
    pub fn with_dependency(mut self, dep: Arc<StyleRecord>) -> Result<Self, ChainError> {
        if dep.identity == self.identity {
            return Err(ChainError::SelfReference(self.identity));
        }
        if dep.chain_depth() + 1 > MAX_CHAIN_DEPTH {
            return Err(ChainError::TooDeep);
        }
        self.next = Some(dep);
        Ok(self)
    }

    /// Attach opaque diagnostic text (e.g. a source location).
    ///
    /// Appended to this record's freshly compiled rules in debug builds
    /// only; never affects identity or deduplication.
    pub fn with_diagnostic(mut self, text: impl Into<String>) -> Self {
        self.diagnostic = Some(text.into());
        self
    }

    /// The content-derived identity.
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// The raw, un-compiled style body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The immediate predecessor in the dependency chain, if any.
    pub fn dependency(&self) -> Option<&StyleRecord> {
        self.next.as_deref()
    }

    /// Diagnostic annotation, if any.
    pub fn diagnostic(&self) -> Option<&str> {
        self.diagnostic.as_deref()
    }

    /// Number of dependency links below this record.
    pub fn chain_depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.next.as_deref();
        while let Some(record) = current {
            depth += 1;
            current = record.next.as_deref();
        }
        depth
    }
}

/// A named `@keyframes` definition usable as a dependency.
///
/// Wraps a frame list in an `@keyframes` block whose animation name is
/// derived from the frame content, so the same frames always yield the same
/// name and cache entry:
///
/// ```
/// use stylecast::record::Keyframes;
///
/// let fade = Keyframes::new("from{opacity:0}to{opacity:1}");
/// assert!(fade.record().body().starts_with("@keyframes animation-"));
/// ```
#[derive(Debug, Clone)]
pub struct Keyframes {
    name: String,
    record: Arc<StyleRecord>,
}

impl Keyframes {
    /// Build a keyframe record from a frame list (the text between the
    /// braces of an `@keyframes` block).
    pub fn new(frames: &str) -> Self {
        let identity = content_identity(frames);
        let name = format!("animation-{identity}");
        let body = format!("@keyframes {name}{{{frames}}}");
        Self {
            record: Arc::new(StyleRecord::new(identity, body)),
            name,
        }
    }

    /// The animation name to reference from dependent styles.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The underlying record, shareable across dependent styles.
    pub fn record(&self) -> &Arc<StyleRecord> {
        &self.record
    }
}
