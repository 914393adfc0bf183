use crate::{
    error::RuntimeError,
    token::{Operator, Token},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates a postfix token sequence to a single number.
///
/// The evaluator maintains an operand stack: numbers push their value, and
/// each operator pops two values, with the first pop becoming the right
/// operand and the second the left, preserving the left-to-right order of
/// the original infix form. After all tokens are consumed, exactly one value
/// must remain on the stack.
///
/// # Parameters
/// - `postfix`: The token sequence in postfix order, as produced by
///   [`to_postfix`](crate::interpreter::converter::to_postfix).
///
/// # Returns
/// The computed value.
///
/// # Errors
/// - `InsufficientOperands` if an operator finds fewer than two values on
///   the stack.
/// - `TooManyOperands` if more than one value remains at the end.
/// - `EmptyExpression` if the sequence contains no operands at all.
/// - `DivisionByZero` if the right operand of `/` is exactly zero.
/// - `UnexpectedToken` if the sequence contains a parenthesis marker.
///
/// # Example
/// ```
/// use evalyard::{
///     interpreter::evaluator::evaluate,
///     token::{Operator, Token},
/// };
///
/// // `2 3 +` evaluates to 5.
/// let postfix = [Token::Number(2.0),
///                Token::Number(3.0),
///                Token::Operator(Operator::Add)];
/// assert_eq!(evaluate(&postfix).unwrap(), 5.0);
/// ```
pub fn evaluate(postfix: &[Token]) -> EvalResult<f64> {
    let mut operands: Vec<f64> = Vec::new();

    for token in postfix {
        match token {
            Token::Number(value) => operands.push(*value),

            Token::Operator(op) => {
                let right = operands.pop();
                let left = operands.pop();

                let (Some(left), Some(right)) = (left, right) else {
                    return Err(RuntimeError::InsufficientOperands { operator: *op });
                };

                operands.push(apply(*op, left, right)?);
            },

            Token::LeftParen | Token::RightParen => {
                return Err(RuntimeError::UnexpectedToken { token: *token });
            },
        }
    }

    match operands.as_slice() {
        [result] => Ok(*result),
        [] => Err(RuntimeError::EmptyExpression),
        rest => Err(RuntimeError::TooManyOperands { count: rest.len() }),
    }
}

/// Applies a binary operator to its two operands.
///
/// Division checks the right operand against exactly zero before dividing,
/// so the result is always finite.
fn apply(op: Operator, left: f64, right: f64) -> EvalResult<f64> {
    use Operator::{Add, Div, Mul, Sub};

    match op {
        Add => Ok(left + right),
        Sub => Ok(left - right),
        Mul => Ok(left * right),
        Div => {
            if right == 0.0 {
                return Err(RuntimeError::DivisionByZero);
            }
            Ok(left / right)
        },
    }
}
