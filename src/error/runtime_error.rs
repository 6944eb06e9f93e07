use thiserror::Error;

use crate::ast::Operator;

/// Represents all errors that can occur during evaluation.
///
/// Every runtime error is fatal to the run that raised it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// A label was referenced where nothing binds it.
    #[error("Unresolved label '{name}'.")]
    UnresolvedLabel {
        /// The name of the label.
        name: String,
    },
    /// An operator was applied to a number of operands it does not accept.
    ///
    /// Binders count as three operands: the set, the label, and the body.
    #[error("Malformed operator: '{op}' cannot take {operands} operand(s).")]
    MalformedOperator {
        /// The operator.
        op:       Operator,
        /// The number of operands it was given.
        operands: usize,
    },
    /// Something other than a set reached a place that needs one.
    #[error("Unknown construct: {details}.")]
    UnknownConstruct {
        /// What was found instead.
        details: String,
    },
}
