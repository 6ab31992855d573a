/// Parsing errors.
///
/// Defines the ways a single input line can fail to split into an
/// `operand operator operand` expression.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while converting operands and
/// applying an operator: malformed numbers, values outside the representable
/// range, division by zero, and unknown operators.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::{OperandSide, ParseError};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any failure produced while handling one line of input.
pub enum CalcError {
    /// The line could not be split into an expression.
    Parse(ParseError),
    /// The expression could not be evaluated.
    Eval(EvalError),
}

impl From<ParseError> for CalcError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<EvalError> for CalcError {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}
