/// The evaluator module reduces AST nodes to sets.
///
/// It applies operators, resolves labels against a stack of bindings, and
/// runs map and filter bodies. It evaluates in two modes: full, which reduces
/// everything, and partial, which applies only forced operators and is what
/// the machine uses to select a line without running the others.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported set operations.
/// - Binds and shadows labels for map and filter bodies.
/// - Reports runtime errors such as unresolved labels or misused operators.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens tagged
/// with their line numbers: numbers, labels, punctuation, and operator
/// symbols. Whitespace and comments are dropped here.
pub mod lexer;
/// The execution engine.
///
/// Holds the universe, selects and runs one line per step, and peels the
/// result off the final universe.
pub mod machine;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// the expression tree of a program or an input. Errors carry the line they
/// were found on.
pub mod parser;
/// The value module defines sets, the only runtime data type.
///
/// # Responsibilities
/// - Defines the immutable, shared [`Set`](value::set::Set) type and its
///   canonical order.
/// - Implements the set algebra generically.
/// - Provides canonical ordinals and recognizes them.
pub mod value;
