use std::iter::Peekable;

use crate::{
    ast::{Expr, Operator},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses a chain of infix operators.
///
/// All infix operators share one precedence level and associate to the left,
/// so `A + B * C` is `(A + B) * C`. Operands are intermediate expressions:
/// clean operands with any suffix operators already folded in.
///
/// A `+`, `*` or `-` still in the stream after [`parse_unary`] returns is
/// followed by the start of an expression, because otherwise it would have
/// been taken as a suffix; here it is infix.
///
/// Grammar: `binary := intermediate (("+" | "*" | "-" | "<" | "[" | "=")
/// intermediate)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// A left-leaning tree of `Expr::Binary` nodes, or the single intermediate
/// expression when no infix operator follows it.
pub fn parse_binary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_unary(tokens)?;

    while let Some((token, _)) = tokens.peek() {
        let Some(op) = token_to_infix_operator(token) else {
            break;
        };

        tokens.next();
        let right = parse_unary(tokens)?;
        left = Expr::binary(op, left, right);
    }

    Ok(left)
}

/// Maps a token to the operator it denotes in infix position.
///
/// # Example
/// ```
/// use mindset::{
///     ast::Operator,
///     interpreter::{lexer::Token, parser::binary::token_to_infix_operator},
/// };
///
/// assert_eq!(token_to_infix_operator(&Token::LBracket), Some(Operator::Member));
/// assert_eq!(token_to_infix_operator(&Token::Dollar), None);
/// ```
#[must_use]
pub const fn token_to_infix_operator(token: &Token) -> Option<Operator> {
    match token {
        Token::Plus => Some(Operator::Union),
        Token::Star => Some(Operator::Intersection),
        Token::Minus => Some(Operator::Difference),
        Token::Less => Some(Operator::Subset),
        Token::LBracket => Some(Operator::Member),
        Token::Equals => Some(Operator::Equal),
        _ => None,
    }
}
