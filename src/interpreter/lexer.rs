use logos::Logos;

/// Tokens recognized inside a single operand.
///
/// Only integers need a token: the floating-point path is decided by the
/// absence of a full integer match and handled by `f64` parsing.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum OperandToken {
    /// Optionally signed ASCII decimal integer, such as `42`, `-7` or `+0`.
    #[regex(r"[+-]?[0-9]+")]
    Integer,
}

/// The arithmetic path an operand takes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OperandKind {
    /// The operand is a (possibly signed) run of decimal digits.
    Integer,
    /// Anything else; the operand is handed to floating-point parsing.
    Real,
}

/// Classifies an operand as integer or real.
///
/// An operand is an integer if and only if it is an optional leading `+` or
/// `-` followed by one or more ASCII digits, and nothing else. Every other
/// string, including the empty one, is classified as real and will either
/// parse as a floating-point number or fail at conversion.
///
/// # Example
/// ```
/// use calcline::interpreter::lexer::{OperandKind, classify};
///
/// assert_eq!(classify("-456"), OperandKind::Integer);
/// assert_eq!(classify("123.45"), OperandKind::Real);
/// assert_eq!(classify(""), OperandKind::Real);
/// ```
#[must_use]
pub fn classify(operand: &str) -> OperandKind {
    let mut lexer = OperandToken::lexer(operand);

    let kind = match lexer.next() {
        Some(Ok(OperandToken::Integer)) if lexer.span() == (0..operand.len()) => {
            OperandKind::Integer
        },
        _ => OperandKind::Real,
    };

    log::trace!("classified operand '{operand}' as {kind:?}");
    kind
}
