//! # evalyard
//!
//! evalyard is an arithmetic expression evaluator written in Rust.
//! It tokenizes an expression, converts it to postfix order with the
//! shunting-yard algorithm, and reduces the postfix sequence on an operand
//! stack, with support for parenthetical grouping, unary sign, and both
//! integral and fractional literals.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::CalcError,
    interpreter::{converter::to_postfix, evaluator::evaluate, lexer::tokenize},
};

/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing,
/// converting, or evaluating an expression. It standardizes error reporting
/// and carries detailed information about failures, including error kinds,
/// offending text, and byte offsets for user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, converter,
///   evaluator).
/// - Attaches byte offsets and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the stages of expression evaluation.
///
/// This module ties together lexing, postfix conversion, and stack-based
/// evaluation to provide a complete pipeline from raw expression text to a
/// numeric result. Control flows linearly through the stages; no stage
/// depends on a later one.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, converter, and evaluator.
/// - Provides the individual stage entry points for isolated use.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Defines the token data model shared by every stage.
///
/// This module declares the `Token` and `Operator` types that represent an
/// expression as an ordered sequence of classified units. Tokens are built
/// by the lexer and consumed, never mutated, by the converter and the
/// evaluator.
///
/// # Responsibilities
/// - Defines the closed token and operator enumerations.
/// - Carries the constant precedence and associativity table.
/// - Enables exhaustive pattern matching in every consumer.
pub mod token;

/// Evaluates an arithmetic expression and returns its numeric result.
///
/// This function runs the full pipeline on the provided expression text:
/// tokenization, infix-to-postfix conversion, and postfix evaluation. Each
/// stage aborts the pipeline on the first error it detects, so no partial
/// result is ever returned. All arithmetic is performed in double-precision
/// floating point; whether an integral-looking result prints as `4` or
/// `4.0` is the caller's concern.
///
/// The engine holds no state between calls: evaluating the same expression
/// twice yields the same result or the same error kind, and concurrent
/// calls from independent threads do not interfere.
///
/// # Parameters
/// - `expression`: One line of raw expression text.
///
/// # Returns
/// The computed value.
///
/// # Errors
/// Returns a [`CalcError`] wrapping the failure of whichever stage rejected
/// the expression; see [`error::ParseError`] and [`error::RuntimeError`]
/// for the individual kinds.
///
/// # Examples
/// ```
/// use evalyard::calculate;
///
/// // Multiplication binds tighter than addition.
/// assert_eq!(calculate("2+3*4").unwrap(), 14.0);
///
/// // Parentheses override precedence, and a leading sign negates a group.
/// assert_eq!(calculate("-(2+3)*4").unwrap(), -20.0);
///
/// // Division by zero is an error, never an infinite value.
/// assert!(calculate("5/0").is_err());
/// ```
pub fn calculate(expression: &str) -> Result<f64, CalcError> {
    let tokens = tokenize(expression)?;
    let postfix = to_postfix(&tokens)?;
    let result = evaluate(&postfix)?;

    Ok(result)
}
