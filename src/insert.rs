//! Insertion engine: dedup check, dependency-first traversal, compile-once,
//! sink dispatch.
//!
//! [`insert_styles`] is the write path of the whole crate. For one cache it
//! guarantees:
//!
//! - **idempotence** — an identity is compiled and emitted at most once for
//!   the lifetime of the cache; repeat insertions are complete no-ops
//! - **dependency order** — a record's chain is fully resolved before its
//!   own rules are emitted, so dependency rules always precede the rules
//!   that reference them
//! - **bounded memory** — compiled text is retained only by compat caches;
//!   live and deferred caches mark presence alone

use crate::cache::{SinkMode, StyleCache};
use crate::record::StyleRecord;
use crate::sheet::Sheet;

/// Insert one style record into the cache, compiling it if it has not been
/// seen before.
///
/// `is_pass_through` marks consumers whose class name can never be inspected
/// further down the composition tree; their raw bodies are not registered
/// (unless the cache retains everything for compat read-back).
///
/// Returns the compiled text (dependencies first) for a first-time insertion
/// into a deferred cache; `None` in every other case.
pub fn insert_styles<S: Sheet>(
    cache: &mut StyleCache<S>,
    record: &StyleRecord,
    is_pass_through: bool,
) -> Option<String> {
    let class_name = cache.class_name(record.identity());

    // Two independent registration predicates: the class name may be
    // inspected downstream, or a compat collaborator reads the index to
    // classify emitted classes.
    let inspectable_downstream = !is_pass_through;
    if inspectable_downstream || cache.mode().retains_for_readback() {
        cache.register(&class_name, record.body());
    }

    if cache.is_inserted(record.identity()) {
        return None;
    }

    // Dependencies are emitted first. They are never independently
    // referenced by class name, so they always insert as pass-through.
    let mut dependency_css = String::new();
    if let Some(dep) = record.dependency() {
        let nested = insert_styles(cache, dep, true);
        if !cache.mode().is_live() {
            if let Some(css) = nested {
                dependency_css = css;
            }
        }
    }

    let selector = format!(".{class_name}");
    let mut rules = cache.compile(&selector, record.body());
    cache.mark_inserted(record.identity());

    // Diagnostics annotate this record's own rules only; inherited
    // dependency text was finalized by its own pass.
    if cfg!(debug_assertions) {
        if let Some(diagnostic) = record.diagnostic() {
            for rule in &mut rules {
                rule.push_str(diagnostic);
            }
        }
    }

    match cache.mode() {
        SinkMode::Live => {
            cache.flush(&rules);
            None
        }
        SinkMode::Deferred => {
            dependency_css.push_str(&rules.concat());
            Some(dependency_css)
        }
        SinkMode::DeferredCompat => {
            cache.retain(record.identity(), rules.concat());
            None
        }
    }
}
