use logos::Logos;

use crate::{
    error::ParseError,
    token::{Operator, Token},
};

/// Represents a raw lexical unit before sign resolution.
///
/// This enum defines the accepted alphabet of an expression. The raw stream
/// still contains standalone `+` and `-` tokens in unary position; a second
/// pass folds those into the tokens that follow before the stream leaves
/// the lexer.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum RawToken {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5` or `2.`.
    #[regex(r"[0-9]+\.[0-9]*", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    #[regex(r"[0-9]+", parse_number)]
    Number(f64),
    /// A digit run containing more than one decimal point, such as `1..5`,
    /// or a decimal point with no digits at all. Matched greedily so it
    /// outranks the valid literal prefixes.
    #[regex(r"[0-9]+\.[0-9]*\.[0-9.]*")]
    #[regex(r"\.[0-9]*\.[0-9.]*")]
    #[token(".")]
    MalformedNumber,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_number(lex: &logos::Lexer<RawToken>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Tokenizes an expression into a sequence of [`Token`]s.
///
/// Whitespace is skipped everywhere. Unary signs are resolved during
/// tokenization: a `+` or `-` at the start of the expression, after another
/// operator, or after `(` is folded into the following numeric literal, and
/// a signed parenthesis group is rewritten so that `-(expr)` tokenizes as
/// `(0 - (expr))`.
///
/// The lexer is a pure function of its input and holds no state between
/// calls.
///
/// # Parameters
/// - `text`: The raw expression text.
///
/// # Returns
/// The token sequence in infix order.
///
/// # Errors
/// - `EmptyExpression` if the input is empty or entirely whitespace.
/// - `InvalidCharacter` if a character outside the accepted alphabet
///   appears.
/// - `MalformedNumber` if a literal contains more than one decimal point,
///   or a unary sign is not followed by a digit or `(`.
///
/// # Example
/// ```
/// use evalyard::{
///     interpreter::lexer::tokenize,
///     token::{Operator, Token},
/// };
///
/// let tokens = tokenize("1 + 2").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number(1.0),
///                 Token::Operator(Operator::Add),
///                 Token::Number(2.0)]);
///
/// // The unary sign folds into the literal.
/// assert_eq!(tokenize("-5").unwrap(), vec![Token::Number(-5.0)]);
/// ```
pub fn tokenize(text: &str) -> Result<Vec<Token>, ParseError> {
    let mut raw = Vec::new();
    let mut lexer = RawToken::lexer(text);

    while let Some(item) = lexer.next() {
        match item {
            Ok(RawToken::MalformedNumber) => {
                return Err(ParseError::MalformedNumber { literal:  lexer.slice().to_string(),
                                                         position: lexer.span().start, });
            },
            Ok(token) => raw.push((token, lexer.span().start)),
            Err(()) => {
                let character = lexer.slice().chars().next().unwrap_or_default();
                return Err(ParseError::InvalidCharacter { character,
                                                          position: lexer.span().start, });
            },
        }
    }

    if raw.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    resolve_signs(&raw)
}

/// Folds unary signs in a raw token stream into the tokens that follow.
///
/// A sign is unary when the lexer is at operand position: at the start of
/// the expression, after another operator, or after `(`. A unary sign before
/// a literal negates (or keeps) its value. A unary sign before `(` emits
/// `( 0 -` (or `( 0 +`) and closes the extra group as soon as the signed
/// group itself closes, so `2*-(3+1)` tokenizes as `2 * (0 - (3+1))` and the
/// sign cannot leak precedence onto its neighbors. Any other token after a
/// unary sign is malformed.
///
/// # Parameters
/// - `raw`: Raw tokens paired with their byte offsets.
///
/// # Returns
/// The resolved token sequence.
///
/// # Errors
/// - `MalformedNumber` if a unary sign is not followed by a digit or `(`.
fn resolve_signs(raw: &[(RawToken, usize)]) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::with_capacity(raw.len());
    let mut iter = raw.iter().peekable();
    let mut expects_operand = true;
    // Depth of parentheses seen in the input, and the depths at which a
    // synthesized `( 0 -` group still owes its closing parenthesis.
    let mut depth = 0usize;
    let mut pending_closes: Vec<usize> = Vec::new();

    while let Some((token, position)) = iter.next() {
        match token {
            RawToken::Number(value) => {
                tokens.push(Token::Number(*value));
                expects_operand = false;
            },

            RawToken::Plus | RawToken::Minus if expects_operand => {
                let negative = matches!(token, RawToken::Minus);

                match iter.peek() {
                    Some((RawToken::Number(value), _)) => {
                        iter.next();
                        tokens.push(Token::Number(if negative { -value } else { *value }));
                        expects_operand = false;
                    },

                    // `-(expr)` behaves as `(0 - (expr))`. The group's own
                    // parenthesis stays in the stream for the next
                    // iteration.
                    Some((RawToken::LParen, _)) => {
                        tokens.push(Token::LeftParen);
                        tokens.push(Token::Number(0.0));
                        tokens.push(Token::Operator(if negative {
                                                        Operator::Sub
                                                    } else {
                                                        Operator::Add
                                                    }));
                        pending_closes.push(depth);
                    },

                    _ => {
                        let literal = if negative { "-" } else { "+" };
                        return Err(ParseError::MalformedNumber { literal:  literal.to_string(),
                                                                 position: *position, });
                    },
                }
            },

            RawToken::Plus => {
                tokens.push(Token::Operator(Operator::Add));
                expects_operand = true;
            },
            RawToken::Minus => {
                tokens.push(Token::Operator(Operator::Sub));
                expects_operand = true;
            },
            RawToken::Star => {
                tokens.push(Token::Operator(Operator::Mul));
                expects_operand = true;
            },
            RawToken::Slash => {
                tokens.push(Token::Operator(Operator::Div));
                expects_operand = true;
            },

            RawToken::LParen => {
                tokens.push(Token::LeftParen);
                depth += 1;
                expects_operand = true;
            },
            RawToken::RParen => {
                tokens.push(Token::RightParen);
                // Excess closing parens keep depth at zero here; the
                // converter reports the imbalance.
                depth = depth.saturating_sub(1);
                while pending_closes.last() == Some(&depth) {
                    pending_closes.pop();
                    tokens.push(Token::RightParen);
                }
                expects_operand = false;
            },

            // Filtered out before this pass runs.
            RawToken::MalformedNumber | RawToken::Ignored => unreachable!(),
        }
    }

    Ok(tokens)
}
