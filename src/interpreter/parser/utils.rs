use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a comma-separated list of items until a closing token.
///
/// It repeatedly calls `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list. Any other
/// token after an item is reported through `mismatch`.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list.
/// - `mismatch`: Builds the error for a token that is neither `,` nor
///   `closing`, given its line.
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token,
    mismatch: impl Fn(usize) -> ParseError)
    -> Result<Vec<T>, ParseError>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.peek() {
            Some((Token::Comma, _)) => {
                tokens.next();
            },
            Some((tok, _)) if tok == closing => {
                tokens.next();
                break;
            },
            Some((_, line)) => return Err(mismatch(*line)),
            None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
        }
    }
    Ok(items)
}

/// Parses a label and returns its name.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is not a label,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_label<'a, I>(tokens: &mut Peekable<I>)
                                                         -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Label(s), _)) => Ok(s.clone()),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected label, found {tok:?}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Consumes the next token, which must equal `expected`.
pub(in crate::interpreter::parser) fn expect_token<'a, I>(tokens: &mut Peekable<I>,
                                                          expected: &Token)
                                                          -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, _)) if tok == expected => Ok(()),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected {expected:?}, found {tok:?}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses a parenthesized expression.
///
/// Grammar: `parens := "(" expression ")"`
///
/// # Errors
/// Returns a `ParseError` if:
/// - `(` is missing,
/// - the inner expression fails to parse,
/// - the closing `)` is missing.
pub(in crate::interpreter::parser) fn parse_parens<'a, I>(tokens: &mut Peekable<I>)
                                                          -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect_token(tokens, &Token::LParen)?;
    let expr = parse_expression(tokens)?;

    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        Some((_, line)) => Err(ParseError::ExpectedClosingParen { line: *line }),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses a set literal of the form `{ expr1, expr2, ..., exprN }`.
///
/// Elements are parsed using [`parse_expression`] and combined with
/// [`Expr::collection`], so a literal built only from reduced elements comes
/// back as a finished set. An empty set `{}` is accepted.
///
/// Grammar: `set := "{" (expression ("," expression)*)? "}"`.
/// # Parameters
/// - `tokens`: Token iterator positioned at `{`.
///
/// # Returns
/// An `Expr::Set` or `Expr::SetLiteral`.
///
/// # Errors
/// Returns a `ParseError` if:
/// - `{` is missing,
/// - elements fail to parse,
/// - the closing `}` is missing.
pub fn parse_set_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect_token(tokens, &Token::LBrace)?;

    let elements = parse_comma_separated(tokens,
                                         parse_expression,
                                         &Token::RBrace,
                                         |line| ParseError::ExpectedClosingBrace { line })?;

    Ok(Expr::collection(elements))
}
