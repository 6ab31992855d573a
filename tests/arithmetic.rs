use calcline::{
    ast::Expression,
    error::EvalError,
    interpreter::{
        evaluator::{evaluate, parse_integer},
        lexer::{OperandKind, classify},
        value::NumericValue,
    },
};

fn eval(left: &str, operator: char, right: &str) -> Result<NumericValue, EvalError> {
    evaluate(&Expression::new(left, operator, right))
}

fn assert_integer(left: &str, operator: char, right: &str, expected: i64) {
    assert_eq!(eval(left, operator, right),
               Ok(NumericValue::Integer(expected)),
               "{left} {operator} {right}");
}

fn assert_real(left: &str, operator: char, right: &str, expected: f64, epsilon: f64) {
    match eval(left, operator, right) {
        Ok(NumericValue::Real(value)) => {
            assert!((value - expected).abs() < epsilon,
                    "{left} {operator} {right} = {value}, expected {expected}");
        },
        other => panic!("{left} {operator} {right} gave {other:?}, expected a real"),
    }
}

#[test]
fn integer_operations() {
    assert_integer("2", '+', "3", 5);
    assert_integer("-5", '+', "3", -2);
    assert_integer("0", '+', "0", 0);
    assert_integer("5", '-', "3", 2);
    assert_integer("-5", '-', "-3", -2);
    assert_integer("0", '-', "5", -5);
    assert_integer("4", '*', "3", 12);
    assert_integer("-4", '*', "3", -12);
    assert_integer("0", '*', "100", 0);
    assert_integer("10", '/', "2", 5);
    assert_integer("-10", '/', "2", -5);
    assert_integer("0", '/', "5", 0);
}

#[test]
fn integer_division_truncates_toward_zero() {
    assert_integer("7", '/', "3", 2);
    assert_integer("-7", '/', "3", -2);
    assert_integer("7", '/', "-3", -2);
    assert_integer("-7", '/', "-3", 2);
}

#[test]
fn real_operations() {
    assert_real("2.5", '+', "3.7", 6.2, 1e-9);
    assert_real("2.5", '-', "1.5", 1.0, 1e-9);
    assert_real("2.5", '*', "2.0", 5.0, 1e-9);
    assert_real("7.5", '/', "2.5", 3.0, 1e-9);
    assert_real("0.1", '+', "0.2", 0.3, 1e-9);
    assert_real("1.0", '-', "0.9", 0.1, 1e-9);
    assert_real("1e3", '*', "2", 2000.0, 1e-9);
}

#[test]
fn mixed_operands_are_promoted_to_real() {
    assert_real("7.0", '/', "3", 2.333_333, 1e-5);
    assert_real("7", '/', "3.0", 2.333_333, 1e-5);
    assert_real("5", '+', "3.7", 8.7, 1e-9);
    assert_real("2.5", '*', "4", 10.0, 1e-9);
    let value = eval("4", '/', "2.0").unwrap();
    assert_eq!(value, NumericValue::Real(2.0));
    assert_eq!(value.kind(), OperandKind::Real);
    assert_eq!(eval("4", '/', "2").unwrap().kind(), OperandKind::Integer);
}

#[test]
fn division_by_zero_is_an_error_for_both_kinds() {
    assert_eq!(eval("5", '/', "0"), Err(EvalError::DivisionByZero));
    assert_eq!(eval("5", '/', "-0"), Err(EvalError::DivisionByZero));
    assert_eq!(eval("5.0", '/', "0.0"), Err(EvalError::DivisionByZero));
    assert_eq!(eval("5", '/', "0.0"), Err(EvalError::DivisionByZero));
    assert_eq!(eval("0.0", '/', "-0.0"), Err(EvalError::DivisionByZero));
}

#[test]
fn malformed_operands_are_invalid_numbers() {
    for (left, right) in [("abc", "1"), ("1", "abc"), ("3abc", "1"), ("inf", "1"), ("1", "nan"),
                          ("1 2", "3"), ("1.2.3", "4")]
    {
        assert!(matches!(eval(left, '+', right), Err(EvalError::InvalidNumber { .. })),
                "{left} + {right}");
    }
}

#[test]
fn out_of_range_operands_and_results() {
    assert!(matches!(eval("99999999999999999999", '+', "1"),
                     Err(EvalError::OutOfRange { .. })));
    assert!(matches!(eval("9223372036854775807", '+', "1"),
                     Err(EvalError::OutOfRange { .. })));
    assert!(matches!(eval("-9223372036854775808", '/', "-1"),
                     Err(EvalError::OutOfRange { .. })));
    assert!(matches!(eval("1e999", '+', "1"), Err(EvalError::OutOfRange { .. })));
    assert!(matches!(eval("1e308", '*', "10"), Err(EvalError::OutOfRange { .. })));
    assert_integer("-9223372036854775808", '+', "0", i64::MIN);
}

#[test]
fn underflowing_literals_are_out_of_range() {
    for (left, right) in [("1e-400", "1"), ("5", "1e-400"), ("-2.5e-320", "1"),
                          ("0.000001e-310", "1")]
    {
        assert!(matches!(eval(left, '+', right), Err(EvalError::OutOfRange { .. })),
                "{left} + {right}");
    }
    assert!(matches!(eval("5", '/', "1e-400"), Err(EvalError::OutOfRange { .. })));
    assert_real("0e-400", '+', "1", 1.0, 1e-9);
    assert_real("0.000e5", '+', "2.5", 2.5, 1e-9);
    assert_real("2.3e-308", '*', "1", 2.3e-308, 1e-300);
}

#[test]
fn unknown_operator_is_reported_after_conversion() {
    assert_eq!(eval("1", '%', "2"), Err(EvalError::UnknownOperator { operator: '%' }));
    assert_eq!(eval("1.5", '^', "2"), Err(EvalError::UnknownOperator { operator: '^' }));
    assert!(matches!(eval("x", '%', "2"), Err(EvalError::InvalidNumber { .. })));
}

#[test]
fn evaluation_is_repeatable() {
    for expr in [Expression::new("7", '/', "3"),
                 Expression::new("7.0", '/', "3"),
                 Expression::new("5", '/', "0"),
                 Expression::new("abc", '*', "2")]
    {
        assert_eq!(evaluate(&expr), evaluate(&expr), "{expr}");
    }
}

#[test]
fn integer_literals_round_trip_to_canonical_form() {
    for (literal, canonical) in [("0", "0"), ("+0", "0"), ("-0", "0"), ("42", "42"),
                                 ("+789", "789"), ("-456", "-456"), ("007", "7"),
                                 ("9223372036854775807", "9223372036854775807"),
                                 ("-9223372036854775808", "-9223372036854775808")]
    {
        assert_eq!(classify(literal), OperandKind::Integer, "{literal}");
        let value = parse_integer(literal).unwrap();
        assert_eq!(NumericValue::Integer(value).to_string(), canonical);
    }
}
