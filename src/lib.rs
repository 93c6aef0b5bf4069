//! # stylecast
//!
//! A runtime style-sheet materialization engine: given serialized style
//! records (a raw selector body plus a content-derived identity and an
//! optional chain of dependency records), stylecast decides whether each
//! record's CSS has already been emitted, compiles it exactly once, and
//! routes the compiled text either to a live, order-sensitive style sheet
//! or to a string returned to the caller for deferred (server-side)
//! delivery.
//!
//! ## Core Systems
//!
//! - **[`record`]** — Immutable style records, content-addressed identities,
//!   dependency chains, keyframes
//! - **[`registry`]** — Append-only index from emitted class name to raw body
//! - **[`cache`]** — The long-lived cache: key, sink mode, insertion ledger
//! - **[`insert`]** — The insertion engine: dedup, dependency-first
//!   traversal, compile-once, sink dispatch
//! - **[`resolve`]** — Class-name resolver: recover known bodies from a
//!   merged class string
//! - **[`compile`]** — Default rule compiler (nesting, at-rules, comments)
//! - **[`sheet`]** — Output sinks: the [`sheet::Sheet`] trait and in-memory
//!   implementations
//! - **[`element`]** — Symbolic element resolution for the factory layer
//!
//! ## Example
//!
//! ```
//! use stylecast::cache::StyleCache;
//! use stylecast::insert::insert_styles;
//! use stylecast::record::StyleRecord;
//! use stylecast::sheet::MemorySheet;
//!
//! let mut cache = StyleCache::live("css", MemorySheet::new());
//! let record = StyleRecord::from_body("color:blue;");
//!
//! insert_styles(&mut cache, &record, false);
//! assert_eq!(cache.sheet().len(), 1);
//!
//! // Re-inserting the same style is a no-op.
//! insert_styles(&mut cache, &record, false);
//! assert_eq!(cache.sheet().len(), 1);
//! ```

// Input model
pub mod record;

// Cache state
pub mod cache;
pub mod registry;

// Engine
pub mod insert;
pub mod resolve;

// Collaborators
pub mod compile;
pub mod element;
pub mod sheet;
