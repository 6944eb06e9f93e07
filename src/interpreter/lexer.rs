use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Decimal literal tokens, such as `42`. They denote ordinals.
    #[regex(r"[0-9]+", parse_number)]
    Number(usize),
    /// Label tokens such as `U` or `line`.
    #[regex(r"[A-Za-z]+", |lex| lex.slice().to_string())]
    Label(String),
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// ```
    /// // Multi line comments.
    /// ```
    #[regex(r"/\*([^*]|\*[^/])*\*/", |lex| {
        let comment      = lex.slice();
        let newlines     = comment.chars().filter(|&c| c == '\n').count();
        lex.extras.line += newlines;
        logos::Skip
    })]
    MultiLineComment,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `:`
    #[token(":")]
    Colon,
    /// `+`
    #[token("+")]
    Plus,
    /// `*`
    #[token("*")]
    Star,
    /// `-`
    #[token("-")]
    Minus,
    /// `$`
    #[token("$")]
    Dollar,
    /// `^`
    #[token("^")]
    Caret,
    /// `<`
    #[token("<")]
    Less,
    /// `[`
    #[token("[")]
    LBracket,
    /// `=`
    #[token("=")]
    Equals,
    /// `#`
    #[token("#")]
    Hash,
    /// `?`
    #[token("?")]
    Question,

    /// Newlines only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

impl Token {
    /// Whether an expression may begin with this token.
    ///
    /// The parser uses this to tell a suffix operator from an infix one: an
    /// operator followed by the start of an expression is infix.
    #[must_use]
    pub const fn starts_expression(&self) -> bool {
        matches!(self, Self::Number(_) | Self::Label(_) | Self::LParen | Self::LBrace)
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// Automatically resets or increments as newlines are processed.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Splits source text into tokens tagged with their line numbers.
///
/// # Errors
/// - `LiteralTooLarge` for a numeric literal that does not fit in `usize`.
/// - `UnexpectedToken` for any character the language does not use.
///
/// # Example
/// ```
/// use mindset::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("U$\n+ 1").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Label("U".to_string()), 1),
///                 (Token::Dollar, 1),
///                 (Token::Plus, 2),
///                 (Token::Number(1), 2)]);
///
/// assert!(tokenize("U & 1").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        let line = lexer.extras.line;
        if let Ok(tok) = token {
            tokens.push((tok, line));
        } else {
            let slice = lexer.slice();
            if slice.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ParseError::LiteralTooLarge { line });
            }
            return Err(ParseError::UnexpectedToken { token: slice.to_string(),
                                                     line });
        }
    }

    Ok(tokens)
}

/// Parses a decimal literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(usize)`: The parsed value if it fits.
/// - `None`: If the literal overflows `usize`.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<usize> {
    lex.slice().parse().ok()
}
