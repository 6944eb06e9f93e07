use std::iter::Peekable;

use crate::{
    ast::{Expr, Operator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            utils::{expect_token, parse_label, parse_parens, parse_set_literal},
        },
        value::set::Set,
    },
};

/// Parses an intermediate expression: a clean operand followed by any number
/// of suffix operators.
///
/// Suffix operators fold left to right, so `S-$` is `(S-)$`. There are two
/// kinds:
/// - simple: `+ * - $ ^`, applied to everything accumulated so far;
/// - binders: `#` (map) and `?` (filter), which also take a label and a
///   parenthesized body, as in `S#x:(x + 1)`.
///
/// A simple operator only counts as a suffix when the token after it cannot
/// start an expression. Otherwise the chain ends here and the operator is left
/// for [`parse_binary`](crate::interpreter::parser::binary::parse_binary),
/// which takes `+ * -` as infix and leaves `$ ^` as trailing input.
///
/// Grammar:
/// ```text
///     unary   := clean (simple | binder)*
///     simple  := ("+" | "*" | "-" | "$" | "^")   -- not followed by an expression
///     binder  := ("#" | "?") label ":" "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// The clean operand wrapped in one node per suffix operator.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut node = parse_clean(tokens)?;

    loop {
        let Some((token, _)) = tokens.peek() else {
            break;
        };

        if let Some(op) = token_to_suffix_operator(token) {
            let mut lookahead = tokens.clone();
            lookahead.next();
            if lookahead.peek().is_some_and(|(next, _)| next.starts_expression()) {
                break;
            }

            tokens.next();
            node = Expr::unary(op, node);
            continue;
        }

        if let Some(op) = token_to_binder_operator(token) {
            tokens.next();
            let label = parse_label(tokens)?;
            expect_token(tokens, &Token::Colon)?;
            let body = parse_parens(tokens)?;
            node = Expr::binder(op, node, &label, body);
            continue;
        }

        break;
    }

    Ok(node)
}

/// Parses a clean operand.
///
/// Clean operands are the atoms suffix operators attach to:
/// - parenthesized expressions,
/// - set literals (`{ ... }`),
/// - decimal literals, which denote ordinals,
/// - labels.
///
/// Grammar (simplified):
/// ```text
///     clean := "(" expression ")"
///            | "{" elements "}"
///            | NUMBER
///            | LABEL
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a clean operand.
///
/// # Returns
/// The parsed [`Expr`] or a `ParseError` on failure.
fn parse_clean<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { line: 0 })?;

    match peeked {
        (Token::LParen, _) => parse_parens(tokens),
        (Token::LBrace, _) => parse_set_literal(tokens),
        (Token::Number(n), _) => {
            let n = *n;
            tokens.next();
            Ok(Expr::Set(Set::ordinal(n)))
        },
        (Token::Label(name), _) => {
            let name = name.clone();
            tokens.next();
            Ok(Expr::Label(name))
        },
        (tok, line) => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                         line:  *line, }),
    }
}

/// Maps a token to the operator it denotes in simple suffix position.
#[must_use]
const fn token_to_suffix_operator(token: &Token) -> Option<Operator> {
    match token {
        Token::Plus => Some(Operator::Union),
        Token::Star => Some(Operator::Intersection),
        Token::Minus => Some(Operator::Difference),
        Token::Dollar => Some(Operator::Cardinality),
        Token::Caret => Some(Operator::Powerset),
        _ => None,
    }
}

/// Maps a token to the binder operator it denotes.
#[must_use]
const fn token_to_binder_operator(token: &Token) -> Option<Operator> {
    match token {
        Token::Hash => Some(Operator::Map),
        Token::Question => Some(Operator::Filter),
        _ => None,
    }
}
