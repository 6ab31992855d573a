use std::num::IntErrorKind;

use crate::{
    ast::{BinaryOperator, Expression},
    error::EvalError,
    interpreter::{
        lexer::{OperandKind, classify},
        value::{Evaluation, NumericValue},
    },
    util::num::{self, CheckedArithmetic, Fault},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates an expression and returns the resulting value.
///
/// Both operands are classified independently. If both are integers the
/// operation runs on `i64`; otherwise both operands are promoted and the
/// operation runs on `f64`. Operands are converted before the operator is
/// looked up, so a malformed operand is reported ahead of an unknown operator.
///
/// # Errors
/// - `InvalidNumber` if an operand is not a number.
/// - `OutOfRange` if an operand or the result does not fit the numeric type.
/// - `DivisionByZero` if the operator is `/` and the divisor is zero.
/// - `UnknownOperator` if the operator is not one of `+ - * /`.
///
/// # Example
/// ```
/// use calcline::{
///     ast::Expression,
///     interpreter::{evaluator::evaluate, value::NumericValue},
/// };
///
/// let value = evaluate(&Expression::new("-7", '/', "3")).unwrap();
/// assert_eq!(value, NumericValue::Integer(-2));
///
/// let value = evaluate(&Expression::new("7", '/', "2.0")).unwrap();
/// assert_eq!(value, NumericValue::Real(3.5));
/// ```
pub fn evaluate(expr: &Expression) -> EvalResult<NumericValue> {
    evaluate_with_operator(expr).map(|evaluation| evaluation.value)
}

/// Evaluates an expression, returning the value together with the operator
/// that produced it.
///
/// # Errors
/// Same as [`evaluate`].
pub fn evaluate_with_operator(expr: &Expression) -> EvalResult<Evaluation> {
    let kinds = (classify(&expr.left), classify(&expr.right));

    let (value, operator) = if kinds == (OperandKind::Integer, OperandKind::Integer) {
        let left = parse_integer(&expr.left)?;
        let right = parse_integer(&expr.right)?;
        let operator = resolve_operator(expr.operator)?;
        log::debug!("evaluating {left} {operator} {right} with integer arithmetic");
        (NumericValue::Integer(apply(operator, left, right, expr)?), operator)
    } else {
        let left = parse_real(&expr.left)?;
        let right = parse_real(&expr.right)?;
        let operator = resolve_operator(expr.operator)?;
        log::debug!("evaluating {left} {operator} {right} with real arithmetic \
                     (operand kinds {kinds:?})");
        (NumericValue::Real(apply(operator, left, right, expr)?), operator)
    };

    Ok(Evaluation { value, operator })
}

/// Applies `operator` to two operands of the same numeric kind.
///
/// # Parameters
/// - `operator`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `expr`: The source expression, used to describe an overflowing result.
pub fn apply<T: CheckedArithmetic>(operator: BinaryOperator,
                                   left: T,
                                   right: T,
                                   expr: &Expression)
                                   -> EvalResult<T> {
    let result = match operator {
        BinaryOperator::Add => num::add(left, right),
        BinaryOperator::Sub => num::subtract(left, right),
        BinaryOperator::Mul => num::multiply(left, right),
        BinaryOperator::Div => num::divide(left, right),
    };

    result.map_err(|fault| match fault {
              Fault::DivisionByZero => EvalError::DivisionByZero,
              Fault::Overflow => EvalError::OutOfRange { operand: expr.to_string() },
          })
}

fn resolve_operator(symbol: char) -> EvalResult<BinaryOperator> {
    BinaryOperator::from_symbol(symbol).ok_or(EvalError::UnknownOperator { operator: symbol })
}

/// Parses an operand as a 64-bit signed integer.
///
/// A leading `+` is accepted.
///
/// # Errors
/// - `OutOfRange` if the value does not fit in an `i64`.
/// - `InvalidNumber` for anything that is not a decimal integer.
///
/// # Example
/// ```
/// use calcline::{error::EvalError, interpreter::evaluator::parse_integer};
///
/// assert_eq!(parse_integer("+789"), Ok(789));
/// assert!(matches!(parse_integer("99999999999999999999"),
///                  Err(EvalError::OutOfRange { .. })));
/// ```
pub fn parse_integer(operand: &str) -> EvalResult<i64> {
    operand.parse::<i64>().map_err(|e| match e.kind() {
                              IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                                  EvalError::OutOfRange { operand: operand.to_string() }
                              },
                              _ => EvalError::InvalidNumber { operand: operand.to_string() },
                          })
}

/// Parses an operand as a double-precision floating-point number.
///
/// Only decimal literals are accepted: `inf`, `infinity` and `nan` are
/// rejected. A literal too large to represent is out of range rather than
/// infinite, and a non-zero literal too small to represent as a normal `f64`
/// is out of range rather than zero or subnormal.
///
/// # Errors
/// - `InvalidNumber` if the operand is not a finite decimal literal.
/// - `OutOfRange` if the literal overflows or underflows `f64`.
///
/// # Example
/// ```
/// use calcline::{error::EvalError, interpreter::evaluator::parse_real};
///
/// assert_eq!(parse_real("2.5"), Ok(2.5));
/// assert_eq!(parse_real("-1e3"), Ok(-1000.0));
/// assert!(matches!(parse_real("abc"), Err(EvalError::InvalidNumber { .. })));
/// assert!(matches!(parse_real("nan"), Err(EvalError::InvalidNumber { .. })));
/// assert!(matches!(parse_real("1e999"), Err(EvalError::OutOfRange { .. })));
/// assert!(matches!(parse_real("1e-400"), Err(EvalError::OutOfRange { .. })));
/// assert_eq!(parse_real("0e-400"), Ok(0.0));
/// ```
pub fn parse_real(operand: &str) -> EvalResult<f64> {
    let invalid = || EvalError::InvalidNumber { operand: operand.to_string() };

    if !operand.bytes().any(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let value = operand.parse::<f64>().map_err(|_| invalid())?;
    if !value.is_finite() || underflows(operand, value) {
        return Err(EvalError::OutOfRange { operand: operand.to_string() });
    }
    Ok(value)
}

/// A literal underflows when its mantissa is non-zero but the parsed value is
/// zero or subnormal.
fn underflows(literal: &str, value: f64) -> bool {
    if value.is_normal() {
        return false;
    }
    let mantissa = literal.split(['e', 'E']).next().unwrap_or(literal);
    mantissa.bytes().any(|b| matches!(b, b'1'..=b'9'))
}
