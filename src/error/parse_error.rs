/// Identifies which operand of an expression an error refers to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OperandSide {
    /// The operand before the operator.
    Left,
    /// The operand after the operator.
    Right,
}

impl std::fmt::Display for OperandSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while splitting an input line.
pub enum ParseError {
    /// The line was empty.
    EmptyInput,
    /// No operator character was found after the first position.
    NoOperatorFound,
    /// One side of the operator was empty after trimming.
    MissingOperand {
        /// The side that was empty.
        side: OperandSide,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Invalid format: input is empty."),
            Self::NoOperatorFound => {
                write!(f, "Invalid format: no operator found. Expected one of + - * /.")
            },
            Self::MissingOperand { side } => {
                write!(f, "Invalid format: missing {side} operand.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
