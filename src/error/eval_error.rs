#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression.
pub enum EvalError {
    /// An operand is not a valid number.
    InvalidNumber {
        /// The offending operand text.
        operand: String,
    },
    /// An operand, or the result, does not fit the numeric type in use.
    OutOfRange {
        /// The offending operand text, or the whole expression when the
        /// result overflowed.
        operand: String,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// The operator is not one of `+ - * /`.
    UnknownOperator {
        /// The operator character found.
        operator: char,
    },
}

impl EvalError {
    /// Returns the short message shown to a user of the calculator.
    ///
    /// # Example
    /// ```
    /// use calcline::error::EvalError;
    ///
    /// assert_eq!(EvalError::DivisionByZero.user_message(), "Division by zero");
    /// assert_eq!(EvalError::UnknownOperator { operator: '%' }.user_message(),
    ///            "Unknown operator: %");
    /// ```
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidNumber { .. } => "Invalid number format".to_string(),
            Self::OutOfRange { .. } => "Number out of range".to_string(),
            Self::DivisionByZero => "Division by zero".to_string(),
            Self::UnknownOperator { operator } => format!("Unknown operator: {operator}"),
        }
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidNumber { operand } => {
                write!(f, "Invalid number format: '{operand}'.")
            },
            Self::OutOfRange { operand } => write!(f, "Number out of range: '{operand}'."),
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::UnknownOperator { operator } => write!(f, "Unknown operator: '{operator}'."),
        }
    }
}

impl std::error::Error for EvalError {}
