/// Core evaluation logic and scope management.
///
/// Contains the evaluator, the evaluation [`Mode`](core::Mode), label
/// resolution, and the dispatcher every node passes through.
pub mod core;

/// Suffix operator evaluation.
///
/// Big union, big intersection, rolling symmetric difference, cardinality,
/// and powerset, on finished sets and on partially evaluated collections.
pub mod unary;

/// Infix operator evaluation.
///
/// Union, intersection, difference, and the subset, membership, and equality
/// tests, which answer with the universe or the empty set.
pub mod binary;

/// Map and filter.
///
/// Evaluates a body once per element with a label bound to that element.
pub mod binder;
