use crate::{
    ast::{BinaryOperator, Expression},
    error::{OperandSide, ParseError},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Characters trimmed from both operands. Other whitespace is kept and will
/// make the operand fail numeric conversion.
const OPERAND_PADDING: [char; 2] = [' ', '\t'];

/// Parses one input line into an [`Expression`].
///
/// Grammar: `line := operand operator operand`
///
/// The operator is the first of `+ - * /` found at or after the second
/// character. Starting one character in means a sign on the left operand is
/// never taken for the operator: `-5+3` splits as `-5`, `+`, `3`. Only that
/// first match splits the line, so `5--3` splits as `5`, `-`, `-3`.
///
/// Both operands are trimmed of spaces and tabs.
///
/// # Parameters
/// - `line`: One line of input, without its trailing newline.
///
/// # Returns
/// The parsed expression.
///
/// # Errors
/// - `EmptyInput` if `line` is empty.
/// - `NoOperatorFound` if no operator follows the first character.
/// - `MissingOperand` if either side is empty after trimming.
///
/// # Example
/// ```
/// use calcline::interpreter::parser::parse;
///
/// let expr = parse("10 - 7").unwrap();
/// assert_eq!(expr.left, "10");
/// assert_eq!(expr.operator, '-');
/// assert_eq!(expr.right, "7");
///
/// assert!(parse("5").is_err());
/// ```
pub fn parse(line: &str) -> ParseResult<Expression> {
    if line.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let (position, operator) = line.char_indices()
                                   .skip(1)
                                   .find(|(_, c)| BinaryOperator::SYMBOLS.contains(c))
                                   .ok_or(ParseError::NoOperatorFound)?;

    let left = line[..position].trim_matches(OPERAND_PADDING);
    let right = line[position + operator.len_utf8()..].trim_matches(OPERAND_PADDING);

    if left.is_empty() {
        return Err(ParseError::MissingOperand { side: OperandSide::Left });
    }
    if right.is_empty() {
        return Err(ParseError::MissingOperand { side: OperandSide::Right });
    }

    let expression = Expression::new(left, operator, right);
    log::debug!("parsed '{line}' as {expression:?}");
    Ok(expression)
}
