//! logos-based lexer for the rule compiler.
//!
//! The compiler only cares about structure — block delimiters and
//! declaration separators — so everything else lexes as opaque text. Quoted
//! strings get their own tokens so that braces and semicolons inside them
//! (`content: "{"`) stay literal text instead of being read as structure.

use logos::Logos;

/// Structural token produced by the lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// `{`
    #[token("{")]
    BraceOpen,

    /// `}`
    #[token("}")]
    BraceClose,

    /// `;`
    #[token(";")]
    Semicolon,

    /// Double-quoted string literal, backslash escapes allowed.
    #[regex(r#""([^"\\]|\\.)*""#)]
    DoubleQuoted,

    /// Single-quoted string literal, backslash escapes allowed.
    #[regex(r"'([^'\\]|\\.)*'")]
    SingleQuoted,

    /// Any run of non-structural text (selectors, properties, values,
    /// whitespace).
    #[regex(r#"[^{};"']+"#)]
    Text,
}

/// Tokenize input into `(Token, text)` pairs.
///
/// Tokens that fail to lex (an unterminated quote, for instance) are
/// skipped; the compiler degrades rather than faulting on malformed input.
pub fn tokenize(input: &str) -> Vec<(Token, String)> {
    let lexer = Token::lexer(input);
    lexer
        .spanned()
        .filter_map(|(result, span)| result.ok().map(|token| (token, input[span].to_string())))
        .collect()
}
