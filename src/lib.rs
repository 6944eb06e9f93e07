//! # mindset
//!
//! mindset is an interpreter for MindSet, an esoteric programming language in
//! which every value is a set and the whole machine state is a single set, the
//! universe. A program is a collection of lines; each step runs the line whose
//! index matches the size of the universe and replaces the universe with the
//! line's result, until no line matches.

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
    error::Error,
    interpreter::{machine::Machine, value::set::Set},
};

/// Defines the structure of parsed code.
///
/// This module declares the operators and the `Expr` tree shared by the parser,
/// the evaluator, and the machine, including the placeholders partial
/// evaluation leaves behind.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers to parse errors.
/// - Combines both phases into one [`Error`](error::Error) for callers that
///   run whole programs.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, the set value model,
/// and the execution engine.
pub mod interpreter;

/// Runs a program to completion and returns its result.
///
/// `input`, when given, is parsed and evaluated as an expression and handed to
/// the program through the initial universe.
///
/// # Errors
/// Returns an error if the program or the input fails to parse, or if any
/// runtime error occurs.
///
/// # Examples
/// ```
/// use mindset::{get_result, interpreter::value::set::Set};
///
/// // A program without lines halts at once and hands back its input.
/// let result = get_result("0", Some("3")).unwrap();
/// assert_eq!(result, Set::ordinal(3));
///
/// // Counts the input down to zero, one step per unit.
/// let countdown = "{{{2}, {2, {{0}, {0, U--+}}}}}";
/// assert_eq!(get_result(countdown, Some("3")).unwrap(), Set::ordinal(0));
///
/// // Labels in the input are never bound.
/// assert!(get_result("0", Some("U")).is_err());
/// ```
pub fn get_result(program: &str, input: Option<&str>) -> Result<Set, Error> {
    let mut machine = Machine::from_source(program, input)?;
    Ok(machine.run()?)
}
