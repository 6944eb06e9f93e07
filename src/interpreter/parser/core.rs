use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::binary::parse_binary,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete program.
///
/// The whole source must form a single expression; anything left over is an
/// `UnexpectedTrailingTokens` error.
///
/// # Errors
/// Returns a `ParseError` for unknown characters, unbalanced braces or
/// parentheses, and token sequences that do not fit the grammar.
///
/// # Example
/// ```
/// use mindset::{
///     ast::{Expr, Operator},
///     interpreter::{parser::core::parse_program, value::set::Set},
/// };
///
/// let expr = parse_program("U$ + 1").unwrap();
/// assert_eq!(expr,
///            Expr::binary(Operator::Union,
///                         Expr::unary(Operator::Cardinality, Expr::label("U")),
///                         Expr::Set(Set::ordinal(1))));
///
/// assert!(parse_program("{1, 2").is_err());
/// ```
pub fn parse_program(source: &str) -> ParseResult<Expr> {
    let tokens = tokenize(source)?;
    let last_line = tokens.last().map_or(1, |(_, line)| *line);
    let mut iter = tokens.iter().peekable();

    let expr = parse_expression(&mut iter).map_err(|e| e.at_end(last_line))?;

    match iter.next() {
        None => Ok(expr),
        Some((tok, line)) => Err(ParseError::UnexpectedTrailingTokens { token: format!("{tok:?}"),
                                                                        line:  *line, }),
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. An expression is a chain
/// of intermediate expressions joined by infix operators; a chain of length
/// one is just the intermediate expression.
///
/// Grammar: `expression := binary`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_binary(tokens)
}
