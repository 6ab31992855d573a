//! # calcline
//!
//! calcline is a console calculator for single binary expressions written in
//! Rust. It splits a line such as `2.5 + 3` into two operands and an operator,
//! picks integer or floating-point arithmetic from the operands' text, and
//! evaluates with explicit, typed failures instead of panics or infinities.
//!
//! The crate also ships [`vector::Vec3`], a small three-dimensional vector
//! type that is independent of the calculator.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::CalcError,
    interpreter::{evaluator::evaluate_with_operator, parser::parse, value::Evaluation},
};

/// Defines the parsed form of an input line.
///
/// This module declares the `Expression` triple produced by the parser and
/// the `BinaryOperator` enum that the evaluator dispatches on.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while splitting a line
/// into an expression or evaluating that expression. Every failure is local
/// to the line that caused it.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Supplies the short messages shown to calculator users.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Turns one line of text into a numeric result.
///
/// This module ties together operand classification, parsing, evaluation and
/// value representation.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, evaluator, and value types.
/// - Decides between integer and floating-point arithmetic.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// The interactive driver.
///
/// Reads lines, handles exit commands, evaluates everything else and prints
/// either the result or a user-facing error message.
pub mod repl;
/// General utilities for checked numeric arithmetic.
///
/// # Responsibilities
/// - Provide add, subtract, multiply and divide over both `i64` and `f64`.
/// - Guard division by zero before dividing, for both numeric kinds.
pub mod util;
/// A three-component vector value type.
pub mod vector;

/// Parses and evaluates one line of input.
///
/// # Errors
/// Returns `CalcError::Parse` if the line is not of the form
/// `operand operator operand`, or `CalcError::Eval` if the expression cannot
/// be evaluated.
///
/// # Examples
/// ```
/// use calcline::{evaluate_line, interpreter::value::NumericValue};
///
/// let result = evaluate_line("2.5 + 3").unwrap();
/// assert_eq!(result.value, NumericValue::Real(5.5));
///
/// let result = evaluate_line("-7 / 3").unwrap();
/// assert_eq!(result.value, NumericValue::Integer(-2));
///
/// // Division by zero is reported, never computed.
/// assert!(evaluate_line("5 / 0").is_err());
/// ```
pub fn evaluate_line(line: &str) -> Result<Evaluation, CalcError> {
    let expression = parse(line)?;
    Ok(evaluate_with_operator(&expression)?)
}
