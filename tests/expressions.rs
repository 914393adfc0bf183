use evalyard::{
    calculate,
    error::{CalcError, ParseError, RuntimeError},
    interpreter::{converter::to_postfix, evaluator::evaluate},
    token::{Operator, Token},
};

fn assert_value(expression: &str, expected: f64) {
    match calculate(expression) {
        Ok(value) => {
            assert_eq!(value, expected,
                       "Expression '{expression}' evaluated to {value}, expected {expected}")
        },
        Err(e) => panic!("Expression '{expression}' failed: {e}"),
    }
}

fn parse_error(expression: &str) -> ParseError {
    match calculate(expression) {
        Err(CalcError::Parse(e)) => e,
        Err(CalcError::Eval(e)) => {
            panic!("Expression '{expression}' failed during evaluation instead of parsing: {e}")
        },
        Ok(value) => {
            panic!("Expression '{expression}' evaluated to {value} but was expected to fail")
        },
    }
}

fn runtime_error(expression: &str) -> RuntimeError {
    match calculate(expression) {
        Err(CalcError::Eval(e)) => e,
        Err(CalcError::Parse(e)) => {
            panic!("Expression '{expression}' failed during parsing instead of evaluation: {e}")
        },
        Ok(value) => {
            panic!("Expression '{expression}' evaluated to {value} but was expected to fail")
        },
    }
}

#[test]
fn addition_chains_sum_left_to_right() {
    assert_value("1+2+3", 6.0);
    assert_value("1+2-3", 0.0);
    assert_value("10-4-3", 3.0);
}

#[test]
fn equal_precedence_associates_left() {
    assert_value("8-3-2", 3.0);
    assert_value("8/4/2", 1.0);
    assert_value("2*6/4", 3.0);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_value("2+3*4", 14.0);
    assert_value("2*3+4", 10.0);
    assert_value("10-2*3", 4.0);
    assert_value("1+6/2", 4.0);
}

#[test]
fn parentheses_override_precedence() {
    assert_value("(2+3)*4", 20.0);
    assert_value("2*(3+4)", 14.0);
    assert_value("(1+2)*(3+4)", 21.0);
    assert_value("((((1+2))))*3", 9.0);
}

#[test]
fn unary_signs_fold_into_literals() {
    assert_value("-5+3", -2.0);
    assert_value("+5", 5.0);
    assert_value("2*-3", -6.0);
    assert_value("5-(-2)", 7.0);
    assert_value("2+-3", -1.0);
}

#[test]
fn unary_sign_before_parenthesis_negates_the_group() {
    assert_value("-(2+3)", -5.0);
    assert_value("+(2+3)", 5.0);
    assert_value("-(2+3)*4", -20.0);
    assert_value("2*-(3+1)", -8.0);
    assert_value("8/-(2)", -4.0);
    assert_value("-(-(2))", 2.0);
}

#[test]
fn fractional_literals_evaluate_exactly() {
    assert_value("1.5+2.5", 4.0);
    assert_value("3.25-0.25", 3.0);
    assert_value(".5*4", 2.0);
    assert_value("2.*2", 4.0);
    assert_value("7/2", 3.5);
}

#[test]
fn whitespace_is_ignored_everywhere() {
    assert_value(" 1 + 2 ", 3.0);
    assert_value("\t(2+3)\t*4", 20.0);
}

#[test]
fn empty_input_is_rejected() {
    assert!(matches!(parse_error(""), ParseError::EmptyExpression));
    assert!(matches!(parse_error("   "), ParseError::EmptyExpression));
}

#[test]
fn invalid_characters_are_reported_with_position() {
    assert!(matches!(parse_error("2+a"),
                     ParseError::InvalidCharacter { character: 'a',
                                                    position:  2, }));
    assert!(matches!(parse_error("1 % 2"),
                     ParseError::InvalidCharacter { character: '%',
                                                    position:  2, }));
}

#[test]
fn malformed_literals_are_rejected_before_any_arithmetic() {
    assert!(matches!(parse_error("1..5+2"), ParseError::MalformedNumber { .. }));
    assert!(matches!(parse_error("1.2.3"), ParseError::MalformedNumber { .. }));
}

#[test]
fn dangling_signs_are_rejected() {
    assert!(matches!(parse_error("--5"), ParseError::MalformedNumber { .. }));
    assert!(matches!(parse_error("2*-"), ParseError::MalformedNumber { .. }));
    assert!(matches!(parse_error("-"), ParseError::MalformedNumber { .. }));
}

#[test]
fn unbalanced_parentheses_are_rejected() {
    assert!(matches!(parse_error("(1+2"), ParseError::UnbalancedParentheses));
    assert!(matches!(parse_error("1+2)"), ParseError::UnbalancedParentheses));
    assert!(matches!(parse_error("((1+2)"), ParseError::UnbalancedParentheses));
    assert!(matches!(parse_error("-(2"), ParseError::UnbalancedParentheses));
}

#[test]
fn division_by_zero_is_an_error() {
    assert!(matches!(runtime_error("5/0"), RuntimeError::DivisionByZero));
    assert!(matches!(runtime_error("1/(3-3)"), RuntimeError::DivisionByZero));
    assert!(matches!(runtime_error("5/-0"), RuntimeError::DivisionByZero));
}

#[test]
fn missing_operands_are_an_error() {
    assert!(matches!(runtime_error("1+"), RuntimeError::InsufficientOperands { .. }));
    assert!(matches!(runtime_error("*2"), RuntimeError::InsufficientOperands { .. }));
    assert!(matches!(runtime_error("1+*3"), RuntimeError::InsufficientOperands { .. }));
}

#[test]
fn surplus_operands_are_an_error() {
    assert!(matches!(runtime_error("2 3"), RuntimeError::TooManyOperands { count: 2 }));
    assert!(matches!(runtime_error("(1)(2)"), RuntimeError::TooManyOperands { count: 2 }));
}

#[test]
fn parenthesized_nothing_produces_no_value() {
    assert!(matches!(runtime_error("()"), RuntimeError::EmptyExpression));
    assert!(matches!(runtime_error("(())"), RuntimeError::EmptyExpression));
}

#[test]
fn evaluation_is_idempotent() {
    let first = calculate("2+3*4").unwrap();
    let second = calculate("2+3*4").unwrap();
    assert_eq!(first, second);

    assert!(matches!(calculate("5/0"), Err(CalcError::Eval(RuntimeError::DivisionByZero))));
    assert!(matches!(calculate("5/0"), Err(CalcError::Eval(RuntimeError::DivisionByZero))));
}

#[test]
fn converter_orders_by_precedence_in_isolation() {
    let infix = [Token::Number(2.0),
                 Token::Operator(Operator::Add),
                 Token::Number(3.0),
                 Token::Operator(Operator::Mul),
                 Token::Number(4.0)];

    assert_eq!(to_postfix(&infix).unwrap(),
               vec![Token::Number(2.0),
                    Token::Number(3.0),
                    Token::Number(4.0),
                    Token::Operator(Operator::Mul),
                    Token::Operator(Operator::Add)]);
}

#[test]
fn converter_pops_equal_precedence_operators() {
    let infix = [Token::Number(8.0),
                 Token::Operator(Operator::Sub),
                 Token::Number(3.0),
                 Token::Operator(Operator::Sub),
                 Token::Number(2.0)];

    // Left-associativity: `8 - 3 - 2` must become `8 3 - 2 -`.
    assert_eq!(to_postfix(&infix).unwrap(),
               vec![Token::Number(8.0),
                    Token::Number(3.0),
                    Token::Operator(Operator::Sub),
                    Token::Number(2.0),
                    Token::Operator(Operator::Sub)]);
}

#[test]
fn evaluator_reduces_postfix_in_isolation() {
    let postfix = [Token::Number(2.0),
                   Token::Number(3.0),
                   Token::Operator(Operator::Add)];
    assert_eq!(evaluate(&postfix).unwrap(), 5.0);

    let lone_operator = [Token::Operator(Operator::Add)];
    assert!(matches!(evaluate(&lone_operator),
                     Err(RuntimeError::InsufficientOperands { operator: Operator::Add })));

    let stray_paren = [Token::LeftParen];
    assert!(matches!(evaluate(&stray_paren),
                     Err(RuntimeError::UnexpectedToken { token: Token::LeftParen })));
}
