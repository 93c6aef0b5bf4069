//! Integration tests for stylecast.
//!
//! These tests exercise the public API from outside the crate: insertion in
//! every sink mode, deduplication, dependency ordering, registration gating
//! and class-name resolution.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use stylecast::cache::StyleCache;
use stylecast::element::Primitive;
use stylecast::insert::insert_styles;
use stylecast::record::{Keyframes, StyleRecord};
use stylecast::registry::RegisteredStyles;
use stylecast::resolve::get_registered_styles;
use stylecast::sheet::MemorySheet;

// ---------------------------------------------------------------------------
// Live mode
// ---------------------------------------------------------------------------

#[test]
fn live_insert_pushes_compiled_rule() {
    let mut cache = StyleCache::live("css", MemorySheet::new());
    let record = StyleRecord::new("x1y2", "color:blue;");

    assert_eq!(insert_styles(&mut cache, &record, false), None);
    assert_eq!(cache.sheet().rules(), [".css-x1y2{color:blue;}"]);
}

#[test]
fn live_insert_is_idempotent() {
    let mut cache = StyleCache::live("css", MemorySheet::new());
    let record = StyleRecord::new("x1y2", "color:blue;");

    insert_styles(&mut cache, &record, false);
    let rules_after_first: Vec<String> = cache.sheet().rules().to_vec();

    // Second insert of an identical record: sink receives nothing further.
    insert_styles(&mut cache, &record, false);
    assert_eq!(cache.sheet().rules(), rules_after_first.as_slice());
}

#[test]
fn live_dependency_rules_precede_dependent_rules() {
    let mut cache = StyleCache::live("css", MemorySheet::new());

    let fade = Keyframes::new("from{opacity:0}to{opacity:1}");
    let record = StyleRecord::from_body(format!("animation-name:{};", fade.name()))
        .with_dependency(Arc::clone(fade.record()))
        .unwrap();

    // R2 is inserted before R1 is ever independently referenced.
    insert_styles(&mut cache, &record, false);

    let rules = cache.sheet().rules();
    let keyframe_pos = rules
        .iter()
        .position(|r| r.starts_with("@keyframes"))
        .unwrap();
    let dependent_pos = rules
        .iter()
        .position(|r| r.contains("animation-name"))
        .unwrap();
    assert!(keyframe_pos < dependent_pos);
}

// ---------------------------------------------------------------------------
// Deferred mode
// ---------------------------------------------------------------------------

#[test]
fn deferred_insert_returns_dependency_then_own_text() {
    let mut cache = StyleCache::deferred("css");

    let r1 = Arc::new(StyleRecord::new("k1", "from{opacity:0}to{opacity:1}"));
    let r2 = StyleRecord::new("a1", "animation-name:k1;")
        .with_dependency(Arc::clone(&r1))
        .unwrap();

    let css = insert_styles(&mut cache, &r2, false).unwrap();

    let dep_pos = css.find("opacity:0").unwrap();
    let own_pos = css.find("animation-name:k1").unwrap();
    assert!(dep_pos < own_pos);

    // Subsequent calls with the same identity return nothing.
    assert_eq!(insert_styles(&mut cache, &r2, false), None);
}

#[test]
fn deferred_insert_does_not_retain_text() {
    let mut cache = StyleCache::deferred("css");
    let record = StyleRecord::new("x1", "color:red;");

    let css = insert_styles(&mut cache, &record, false).unwrap();
    assert_eq!(css, ".css-x1{color:red;}");
    assert!(cache.is_inserted("x1"));
    assert_eq!(cache.retained_css("x1"), None);
}

// ---------------------------------------------------------------------------
// Deferred-compat mode
// ---------------------------------------------------------------------------

#[test]
fn compat_insert_retains_text_by_identity() {
    let mut cache = StyleCache::deferred_compat("css");
    let record = StyleRecord::new("x1", "color:red;");

    assert_eq!(insert_styles(&mut cache, &record, false), None);
    assert_eq!(cache.retained_css("x1"), Some(".css-x1{color:red;}"));
}

#[test]
fn compat_registers_pass_through_bodies_for_readback() {
    let mut cache = StyleCache::deferred_compat("css");
    insert_styles(&mut cache, &StyleRecord::new("g1", "body{margin:0;}"), true);
    assert_eq!(cache.registered().get("css-g1"), Some("body{margin:0;}"));
}

// ---------------------------------------------------------------------------
// Registration gating
// ---------------------------------------------------------------------------

#[test]
fn live_pass_through_is_not_registered() {
    let mut cache = StyleCache::live("css", MemorySheet::new());
    insert_styles(&mut cache, &StyleRecord::new("x1", "color:red;"), true);
    assert!(!cache.registered().contains("css-x1"));
}

#[test]
fn live_non_pass_through_is_registered() {
    let mut cache = StyleCache::live("css", MemorySheet::new());
    insert_styles(&mut cache, &StyleRecord::new("x1", "color:red;"), false);
    assert!(cache.registered().contains("css-x1"));
}

// ---------------------------------------------------------------------------
// Class-name resolution
// ---------------------------------------------------------------------------

#[test]
fn resolver_partitions_tokens() {
    let mut registered = RegisteredStyles::new();
    registered.insert_if_absent("b", "color:red;");

    let mut bodies = Vec::new();
    let raw = get_registered_styles(&registered, &mut bodies, "a b c");

    assert_eq!(raw, "a c ");
    assert_eq!(bodies, vec!["color:red;"]);
}

#[test]
fn resolver_reads_cache_index_after_insertion() {
    let mut cache = StyleCache::live("css", MemorySheet::new());
    insert_styles(&mut cache, &StyleRecord::new("x1", "color:red;"), false);

    let mut bodies = Vec::new();
    let raw = get_registered_styles(cache.registered(), &mut bodies, "css-x1 user-class");

    assert_eq!(raw, "user-class ");
    assert_eq!(bodies, vec!["color:red;"]);
}

// ---------------------------------------------------------------------------
// Independent caches
// ---------------------------------------------------------------------------

#[test]
fn caches_namespace_class_names_by_key() {
    let mut app = StyleCache::live("app", MemorySheet::new());
    let mut lib = StyleCache::live("lib", MemorySheet::new());
    let record = StyleRecord::new("x1", "color:red;");

    insert_styles(&mut app, &record, false);
    insert_styles(&mut lib, &record, false);

    assert_eq!(app.sheet().rules(), [".app-x1{color:red;}"]);
    assert_eq!(lib.sheet().rules(), [".lib-x1{color:red;}"]);
}

#[test]
fn caches_do_not_share_ledgers() {
    let mut first = StyleCache::live("css", MemorySheet::new());
    let mut second = StyleCache::live("css", MemorySheet::new());
    let record = StyleRecord::new("x1", "color:red;");

    insert_styles(&mut first, &record, false);
    insert_styles(&mut second, &record, false);

    assert_eq!(first.sheet().len(), 1);
    assert_eq!(second.sheet().len(), 1);
}

// ---------------------------------------------------------------------------
// Element resolution
// ---------------------------------------------------------------------------

#[test]
fn valid_element_names_resolve() {
    let primitive: Primitive = "View".parse().unwrap();
    assert_eq!(primitive, Primitive::View);
}

#[test]
fn invalid_element_name_fails_naming_input_and_allowed_set() {
    let err = "Sliver".parse::<Primitive>().unwrap_err();
    let message = err.to_string();
    assert!(message.contains("`Sliver`"));
    assert!(message.contains("Text, View, Image"));
}

// ---------------------------------------------------------------------------
// Content addressing
// ---------------------------------------------------------------------------

#[test]
fn records_with_equal_bodies_share_one_cache_entry() {
    let mut cache = StyleCache::live("css", MemorySheet::new());

    insert_styles(&mut cache, &StyleRecord::from_body("color:red;"), false);
    insert_styles(&mut cache, &StyleRecord::from_body("color:red;"), false);
    insert_styles(&mut cache, &StyleRecord::from_body("color:blue;"), false);

    assert_eq!(cache.sheet().len(), 2);
}

#[test]
fn shared_keyframes_emit_once_across_styles() {
    let mut cache = StyleCache::live("css", MemorySheet::new());
    let fade = Keyframes::new("from{opacity:0}to{opacity:1}");

    for body in ["animation-name:a;", "animation-name:b;"] {
        let record = StyleRecord::from_body(body)
            .with_dependency(Arc::clone(fade.record()))
            .unwrap();
        insert_styles(&mut cache, &record, false);
    }

    let keyframe_count = cache
        .sheet()
        .rules()
        .iter()
        .filter(|r| r.starts_with("@keyframes"))
        .count();
    assert_eq!(keyframe_count, 1);
}
