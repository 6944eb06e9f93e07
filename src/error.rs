use thiserror::Error;

/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code: unknown characters, unbalanced braces and parentheses, and tokens
/// that do not fit the grammar.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: unresolved
/// labels, operators applied at the wrong arity, and non-set values reaching
/// set operations.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error produced while loading or running a program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The program or its input failed to parse.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
