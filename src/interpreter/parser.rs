/// Parser entry points.
///
/// Ties the lexer to the expression grammar and checks that a whole program
/// was consumed.
pub mod core;

/// Infix chains.
///
/// Parses left-to-right chains of the infix operators `+ * - < [ =`, which
/// have no precedence among each other.
pub mod binary;

/// Suffix chains and clean operands.
///
/// Parses parenthesized expressions, set literals, numbers and labels, and
/// folds the suffix operators `+ * - $ ^` and the binders `# ?` onto them.
pub mod unary;

/// Shared parsing helpers.
///
/// Comma-separated lists, labels, parentheses and set literals.
pub mod utils;
