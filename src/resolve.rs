//! Class-name resolver: partition a merged class string into known style
//! bodies and pass-through tokens.
//!
//! Rendering code composes class-name strings from many sources; before
//! final element construction it needs to know which tokens name styles the
//! cache already emitted (so their raw bodies can be merged and re-inserted)
//! and which are ad hoc class names to pass through untouched.

use crate::registry::RegisteredStyles;

/// Split `class_names` on whitespace and partition the tokens.
///
/// Tokens registered in the index have their raw bodies appended to
/// `registered_bodies` in token order; unrecognized tokens are returned,
/// each with a trailing space. Every input token lands in exactly one of the
/// two outputs.
pub fn get_registered_styles(
    registered: &RegisteredStyles,
    registered_bodies: &mut Vec<String>,
    class_names: &str,
) -> String {
    let mut raw_class_names = String::new();

    for token in class_names.split_whitespace() {
        match registered.get(token) {
            Some(body) => registered_bodies.push(body.to_string()),
            None => {
                raw_class_names.push_str(token);
                raw_class_names.push(' ');
            }
        }
    }

    raw_class_names
}
