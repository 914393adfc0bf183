/// The lexer module tokenizes an expression for further processing.
///
/// The lexer (tokenizer) reads the raw expression text and produces a
/// sequence of tokens: numeric literals, the four arithmetic operators, and
/// parenthesis markers. Unary signs are resolved here, so the output never
/// contains a standalone sign token. This is the first stage of evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens, skipping whitespace.
/// - Folds unary signs into numeric literals and rewrites a signed
///   parenthesis group into its binary form.
/// - Reports lexical errors for invalid or malformed input, with the byte
///   offset of the offending text.
pub mod lexer;
/// The converter module reorders infix tokens into postfix order.
///
/// The converter consumes the token sequence produced by the lexer and
/// emits the same tokens in postfix (reverse Polish) order, using an
/// operator stack to enforce precedence and left-associativity. It performs
/// no arithmetic.
///
/// # Responsibilities
/// - Applies the shunting-yard algorithm over the precedence table.
/// - Validates parenthesis nesting while unwinding the operator stack.
/// - Produces a postfix sequence free of parenthesis markers.
pub mod converter;
/// The evaluator module reduces a postfix sequence to a single number.
///
/// The evaluator walks the postfix tokens with an operand stack: numbers
/// push, operators pop two values and push their result. It is the only
/// stage that performs arithmetic.
///
/// # Responsibilities
/// - Applies each operator to its two operands in source order.
/// - Reports division by zero rather than producing a non-finite value.
/// - Rejects structurally invalid sequences with missing or surplus
///   operands.
pub mod evaluator;
