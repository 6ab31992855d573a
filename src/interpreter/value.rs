use std::fmt::Display;

use crate::{ast::BinaryOperator, interpreter::lexer::OperandKind};

/// Number of significant digits used for reals unless configured otherwise.
pub const DEFAULT_SIGNIFICANT_DIGITS: usize = 6;

/// Represents the result of evaluating an expression.
///
/// The variant records which kind of arithmetic produced the value.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum NumericValue {
    /// A integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Real(f64),
}

/// How real values are turned into text.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RealFormat {
    /// At most `significant` significant digits, trailing zeros removed,
    /// switching to scientific notation for very large or small magnitudes.
    General {
        /// Maximum number of significant digits.
        significant: usize,
    },
    /// Exactly `decimals` digits after the decimal point.
    Fixed {
        /// Digits after the decimal point.
        decimals: usize,
    },
    /// The shortest text that reads back as the same `f64`.
    Shortest,
}

impl Default for RealFormat {
    fn default() -> Self {
        Self::General { significant: DEFAULT_SIGNIFICANT_DIGITS }
    }
}

impl NumericValue {
    /// Returns the arithmetic kind this value was computed with.
    #[must_use]
    pub const fn kind(&self) -> OperandKind {
        match self {
            Self::Integer(_) => OperandKind::Integer,
            Self::Real(_) => OperandKind::Real,
        }
    }

    /// Formats the value, using `format` for reals.
    ///
    /// Integers are always printed in canonical decimal form.
    ///
    /// # Example
    /// ```
    /// use calcline::interpreter::value::{NumericValue, RealFormat};
    ///
    /// let third = NumericValue::Real(7.0 / 3.0);
    /// assert_eq!(third.format_with(RealFormat::default()), "2.33333");
    /// assert_eq!(third.format_with(RealFormat::Fixed { decimals: 2 }), "2.33");
    /// assert_eq!(NumericValue::Real(1e6).format_with(RealFormat::default()), "1e+06");
    /// assert_eq!(NumericValue::Integer(-42).format_with(RealFormat::Shortest), "-42");
    /// ```
    #[must_use]
    pub fn format_with(&self, format: RealFormat) -> String {
        match (self, format) {
            (Self::Integer(n), _) => n.to_string(),
            (Self::Real(r), RealFormat::General { significant }) => format_general(*r, significant),
            (Self::Real(r), RealFormat::Fixed { decimals }) => format!("{r:.decimals$}"),
            (Self::Real(r), RealFormat::Shortest) => r.to_string(),
        }
    }
}

impl Display for NumericValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format_with(RealFormat::default()))
    }
}

/// A computed value together with the operator that produced it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Evaluation {
    /// The computed value.
    pub value:    NumericValue,
    /// The operator that was applied.
    pub operator: BinaryOperator,
}

impl Evaluation {
    /// Returns `true` if the value came from truncating integer division.
    #[must_use]
    pub const fn is_integer_division(&self) -> bool {
        matches!((self.value, self.operator),
                 (NumericValue::Integer(_), BinaryOperator::Div))
    }

    /// Formats the value for display, annotating integer division.
    ///
    /// # Example
    /// ```
    /// use calcline::evaluate_line;
    /// use calcline::interpreter::value::RealFormat;
    ///
    /// let eval = evaluate_line("7 / 2").unwrap();
    /// assert_eq!(eval.format_with(RealFormat::default()), "3 (integer division)");
    ///
    /// let eval = evaluate_line("7.0 / 2").unwrap();
    /// assert_eq!(eval.format_with(RealFormat::default()), "3.5");
    /// ```
    #[must_use]
    pub fn format_with(&self, format: RealFormat) -> String {
        let text = self.value.format_with(format);
        if self.is_integer_division() {
            format!("{text} (integer division)")
        } else {
            text
        }
    }
}

impl Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format_with(RealFormat::default()))
    }
}

/// Formats `value` with at most `significant` significant digits, in the
/// style of C's `%g`.
///
/// Fixed notation is used when the decimal exponent lies in
/// `-4..significant`, scientific notation otherwise. Trailing fractional zeros
/// are removed in both cases.
fn format_general(value: f64, significant: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let significant = significant.max(1);
    let scientific = format!("{:.*e}", significant - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    let limit = i32::try_from(significant).unwrap_or(i32::MAX);
    if exponent < -4 || exponent >= limit {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.unsigned_abs());
    }

    let decimals = usize::try_from(limit - 1 - exponent).unwrap_or(0);
    trim_fraction(&format!("{value:.decimals$}")).to_string()
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
