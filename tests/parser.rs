use calcline::{
    ast::Expression,
    error::{OperandSide, ParseError},
    interpreter::{
        lexer::{OperandKind, classify},
        parser::parse,
    },
};

fn assert_parses(line: &str, left: &str, operator: char, right: &str) {
    match parse(line) {
        Ok(expr) => assert_eq!(expr,
                               Expression::new(left, operator, right),
                               "unexpected split for {line:?}"),
        Err(e) => panic!("{line:?} failed to parse: {e}"),
    }
}

#[test]
fn splits_simple_expressions() {
    assert_parses("5+3", "5", '+', "3");
    assert_parses("10 - 7", "10", '-', "7");
    assert_parses("4*2", "4", '*', "2");
    assert_parses("2.5 / 0.5", "2.5", '/', "0.5");
}

#[test]
fn leading_sign_is_part_of_left_operand() {
    assert_parses("-5+3", "-5", '+', "3");
    assert_parses("+5-3", "+5", '-', "3");
    assert_parses("-5 * -3", "-5", '*', "-3");
}

#[test]
fn first_operator_after_position_zero_splits() {
    assert_parses("5--3", "5", '-', "-3");
    assert_parses("5*-3", "5", '*', "-3");
    assert_parses("1+2+3", "1", '+', "2+3");
    assert_parses("1e-5 + 0", "1e", '-', "5 + 0");
}

#[test]
fn only_spaces_and_tabs_are_trimmed() {
    assert_parses("\t 12 \t*\t 3 ", "12", '*', "3");
    assert_parses("1\u{a0}+ 2", "1\u{a0}", '+', "2");
}

#[test]
fn empty_line_is_rejected() {
    assert_eq!(parse(""), Err(ParseError::EmptyInput));
}

#[test]
fn line_without_operator_is_rejected() {
    assert_eq!(parse("5"), Err(ParseError::NoOperatorFound));
    assert_eq!(parse("-5"), Err(ParseError::NoOperatorFound));
    assert_eq!(parse("   "), Err(ParseError::NoOperatorFound));
}

#[test]
fn missing_operands_are_rejected() {
    assert_eq!(parse("5 +"), Err(ParseError::MissingOperand { side: OperandSide::Right }));
    assert_eq!(parse(" + 5"), Err(ParseError::MissingOperand { side: OperandSide::Left }));
    assert_eq!(parse("5 \t/\t "),
               Err(ParseError::MissingOperand { side: OperandSide::Right }));
}

#[test]
fn integers_are_classified_as_integer() {
    for operand in ["123", "-456", "+789", "0", "007", "99999999999999999999"] {
        assert_eq!(classify(operand), OperandKind::Integer, "{operand:?}");
    }
}

#[test]
fn everything_else_takes_the_real_path() {
    for operand in ["123.45", "abc", "", "+", "-", "1e5", "12a", " 1", "1 ", "--1", ".5", "١٢"] {
        assert_eq!(classify(operand), OperandKind::Real, "{operand:?}");
    }
}
