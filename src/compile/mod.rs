//! Default rule compiler: scoped selector + raw body → concrete CSS rules.
//!
//! This is the cache's default collaborator for turning a style body into an
//! ordered sequence of rule strings. It understands the subset of authoring
//! CSS the insertion engine is fed in practice:
//!
//! - plain declarations collect into one `selector{...}` rule
//! - `&` in a nested selector substitutes the parent selector; nested
//!   selectors without `&` become descendants
//! - conditional at-rules (`@media`, `@supports`, `@container`) wrap the
//!   re-scoped rules of their body
//! - other at-rules (`@keyframes`, `@font-face`, ...) are emitted verbatim,
//!   without scoping
//! - `/* ... */` comments are stripped before anything else
//!
//! Compilation is total: malformed input degrades (unbalanced braces drop
//! the unparseable tail, unterminated quotes lex as nothing) instead of
//! producing an error. This layer has no recoverable-error taxonomy; hosts
//! needing stricter guarantees install their own compiler via
//! [`crate::cache::StyleCache::with_compiler`].

pub mod tokenizer;

use crate::compile::tokenizer::{tokenize, Token};

/// One node of a parsed style body.
#[derive(Debug, Clone, PartialEq)]
enum Node {
    /// A property declaration, e.g. `color:blue`.
    Declaration(String),
    /// A nested block: selector or at-rule prelude plus its body.
    Block { prelude: String, body: Vec<Node> },
}

/// Compile a raw style body against a scoped selector.
///
/// Returns the concrete rule strings in emission order: this scope's own
/// declarations first, then nested and at-rule blocks in source order.
pub fn compile(selector: &str, body: &str) -> Vec<String> {
    let cleaned = strip_comments(body);
    let tokens = tokenize(&cleaned);

    let mut parser = Parser { tokens, cursor: 0 };
    let nodes = parser.parse_block(true);

    let mut rules = Vec::new();
    emit_scope(selector, &nodes, &mut rules);
    rules
}

/// Strip CSS block comments, replacing each with a single space.
fn strip_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find("/*") {
        out.push_str(&rest[..start]);
        out.push(' ');
        match rest[start + 2..].find("*/") {
            Some(end) => rest = &rest[start + 2 + end + 2..],
            // Unterminated comment consumes the rest of the input.
            None => rest = "",
        }
    }
    out.push_str(rest);
    out
}

/// Recursive descent over the structural token stream.
struct Parser {
    tokens: Vec<(Token, String)>,
    cursor: usize,
}

impl Parser {
    /// Parse nodes until the matching `}` (or end of input).
    ///
    /// At the root, a stray `}` is skipped instead of terminating the walk.
    fn parse_block(&mut self, root: bool) -> Vec<Node> {
        let mut nodes = Vec::new();
        let mut pending = String::new();

        while let Some((token, text)) = self.tokens.get(self.cursor) {
            match token {
                Token::Text | Token::DoubleQuoted | Token::SingleQuoted => {
                    pending.push_str(text);
                    self.cursor += 1;
                }
                Token::Semicolon => {
                    flush_declaration(&mut pending, &mut nodes);
                    self.cursor += 1;
                }
                Token::BraceOpen => {
                    let prelude = pending.trim().to_string();
                    pending.clear();
                    self.cursor += 1;
                    let body = self.parse_block(false);
                    if !prelude.is_empty() {
                        nodes.push(Node::Block { prelude, body });
                    }
                }
                Token::BraceClose => {
                    self.cursor += 1;
                    if !root {
                        break;
                    }
                    // Stray close at the root; drop it and keep going.
                    pending.clear();
                }
            }
        }

        flush_declaration(&mut pending, &mut nodes);
        nodes
    }
}

/// Push accumulated text as a declaration node if it is non-blank.
fn flush_declaration(pending: &mut String, nodes: &mut Vec<Node>) {
    let text = pending.trim();
    if !text.is_empty() {
        nodes.push(Node::Declaration(text.to_string()));
    }
    pending.clear();
}

/// Emit rules for one scope: own declarations first, then blocks in source
/// order.
fn emit_scope(selector: &str, nodes: &[Node], out: &mut Vec<String>) {
    let mut declarations = String::new();
    for node in nodes {
        if let Node::Declaration(text) = node {
            declarations.push_str(text);
            declarations.push(';');
        }
    }
    if !declarations.is_empty() {
        out.push(format!("{selector}{{{declarations}}}"));
    }

    for node in nodes {
        let Node::Block { prelude, body } = node else {
            continue;
        };
        if prelude.starts_with('@') {
            if is_conditional_at_rule(prelude) {
                let mut inner = Vec::new();
                emit_scope(selector, body, &mut inner);
                out.push(format!("{prelude}{{{}}}", inner.concat()));
            } else {
                out.push(format!("{prelude}{{{}}}", serialize_verbatim(body)));
            }
        } else {
            let nested = resolve_nested_selector(selector, prelude);
            emit_scope(&nested, body, out);
        }
    }
}

/// Whether an at-rule wraps scoped rules (as opposed to standing alone).
fn is_conditional_at_rule(prelude: &str) -> bool {
    prelude.starts_with("@media")
        || prelude.starts_with("@supports")
        || prelude.starts_with("@container")
}

/// Serialize a body back to text without re-scoping (keyframe frames,
/// font-face descriptors).
fn serialize_verbatim(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        match node {
            Node::Declaration(text) => {
                out.push_str(text);
                out.push(';');
            }
            Node::Block { prelude, body } => {
                out.push_str(prelude);
                out.push('{');
                out.push_str(&serialize_verbatim(body));
                out.push('}');
            }
        }
    }
    out
}

/// Resolve a nested selector against its parent.
///
/// Each comma-separated part either substitutes `&` with the parent or, with
/// no `&`, becomes a descendant of it.
fn resolve_nested_selector(parent: &str, prelude: &str) -> String {
    prelude
        .split(',')
        .map(|part| {
            let part = part.trim();
            if part.contains('&') {
                part.replace('&', parent)
            } else {
                format!("{parent} {part}")
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}
