use crate::{error::ParseError, token::Token};

/// Converts an infix token sequence into postfix (reverse Polish) order.
///
/// The conversion is the shunting-yard algorithm: numbers move straight to
/// the output queue, while operators wait on a stack until an operator of
/// lower precedence arrives. Because every operator in this grammar is
/// left-associative, an incoming operator also pops stack entries of equal
/// precedence, so `8 - 3 - 2` converts to `8 3 - 2 -` rather than
/// `8 3 2 - -`.
///
/// Parenthesis markers only ever live on the operator stack; the returned
/// sequence contains numbers and operators exclusively. This stage performs
/// no arithmetic.
///
/// # Parameters
/// - `tokens`: The token sequence in infix order, as produced by
///   [`tokenize`](crate::interpreter::lexer::tokenize).
///
/// # Returns
/// The token sequence in postfix order.
///
/// # Errors
/// - `UnbalancedParentheses` if a closing parenthesis has no matching
///   opening one, or an opening parenthesis is never closed.
///
/// # Example
/// ```
/// use evalyard::{
///     interpreter::converter::to_postfix,
///     token::{Operator, Token},
/// };
///
/// let infix = [Token::Number(2.0),
///              Token::Operator(Operator::Add),
///              Token::Number(3.0),
///              Token::Operator(Operator::Mul),
///              Token::Number(4.0)];
///
/// // `2 + 3 * 4` becomes `2 3 4 * +`.
/// assert_eq!(to_postfix(&infix).unwrap(),
///            vec![Token::Number(2.0),
///                 Token::Number(3.0),
///                 Token::Number(4.0),
///                 Token::Operator(Operator::Mul),
///                 Token::Operator(Operator::Add)]);
/// ```
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>, ParseError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut operators: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(_) => output.push(*token),

            Token::Operator(op) => {
                while let Some(&Token::Operator(top)) = operators.last() {
                    if top.precedence() >= op.precedence() && op.is_left_associative() {
                        operators.pop();
                        output.push(Token::Operator(top));
                    } else {
                        break;
                    }
                }
                operators.push(*token);
            },

            Token::LeftParen => operators.push(*token),

            Token::RightParen => loop {
                match operators.pop() {
                    Some(Token::LeftParen) => break,
                    Some(op) => output.push(op),
                    None => return Err(ParseError::UnbalancedParentheses),
                }
            },
        }
    }

    while let Some(top) = operators.pop() {
        if top == Token::LeftParen {
            return Err(ParseError::UnbalancedParentheses);
        }
        output.push(top);
    }

    Ok(output)
}
