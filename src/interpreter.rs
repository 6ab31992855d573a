/// The evaluator module applies an operator to two operands.
///
/// The evaluator classifies each operand, converts both to a common numeric
/// kind, and dispatches to the generic checked arithmetic in `util::num`.
///
/// # Responsibilities
/// - Chooses integer or floating-point arithmetic from the operand text.
/// - Converts operand text to `i64` or `f64`, reporting malformed or
///   out-of-range numbers.
/// - Reports division by zero and unknown operators.
pub mod evaluator;
/// The lexer module classifies operand text.
///
/// A single `logos` token recognizes signed decimal integers. An operand that
/// lexes as exactly one such token is an integer; anything else takes the
/// floating-point path.
pub mod lexer;
/// The parser module splits an input line into an expression.
///
/// # Responsibilities
/// - Finds the operator while leaving a leading sign on the left operand alone.
/// - Trims operands and rejects lines with a missing side.
pub mod parser;
/// The value module defines the numeric results of evaluation.
///
/// This module declares the `NumericValue` enum, which records whether a
/// result was computed with integer or floating-point arithmetic, and the
/// formatting used to present results to a user.
pub mod value;
