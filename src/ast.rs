use std::fmt::Display;

/// Represents one parsed `operand operator operand` line.
///
/// Operands are kept as text: classification and numeric conversion happen
/// later, in the evaluator. The operator is stored as the raw character so
/// that a hand-built expression can still carry a symbol the evaluator does
/// not know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    /// Left operand, trimmed of spaces and tabs.
    pub left:     String,
    /// The operator character.
    pub operator: char,
    /// Right operand, trimmed of spaces and tabs.
    pub right:    String,
}

impl Expression {
    /// Builds an expression from its three parts.
    ///
    /// No validation is performed; `parse` is the checked way to obtain an
    /// expression from user input.
    ///
    /// # Example
    /// ```
    /// use calcline::ast::Expression;
    ///
    /// let expr = Expression::new("7", '/', "3");
    /// assert_eq!(expr.left, "7");
    /// assert_eq!(expr.operator, '/');
    /// assert_eq!(expr.right, "3");
    /// ```
    #[must_use]
    pub fn new(left: impl Into<String>, operator: char, right: impl Into<String>) -> Self {
        Self { left: left.into(),
               operator,
               right: right.into() }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.left, self.operator, self.right)
    }
}

/// Represents a binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl BinaryOperator {
    /// Every operator character the calculator understands.
    ///
    /// The parser splits on exactly these characters and the evaluator
    /// dispatches on exactly these characters.
    pub const SYMBOLS: [char; 4] = ['+', '-', '*', '/'];

    /// Maps an operator character to its operator, if it is one of
    /// [`BinaryOperator::SYMBOLS`].
    ///
    /// # Example
    /// ```
    /// use calcline::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_symbol('*'), Some(BinaryOperator::Mul));
    /// assert_eq!(BinaryOperator::from_symbol('%'), None);
    /// ```
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    /// Returns the character this operator is written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
