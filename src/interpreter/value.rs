/// Generic set algebra.
///
/// Union, intersection, difference, their families, the rolling symmetric
/// difference, and the powerset, written once over any ordered element type.
/// The same routines serve fully evaluated sets and the partially evaluated
/// collections the stepper works with.
pub mod algebra;
/// Canonical ordinals.
///
/// Holds the per-thread cache of small ordinals, the recognizer that tags any
/// set structurally equal to an ordinal, and the incremental builder used to
/// synthesize ordinals past the cache.
pub mod ordinal;
/// The set value type.
///
/// Defines [`set::Set`], the only kind of value the language has: an immutable,
/// reference-counted set of sets with ordinal tagging and a canonical order.
pub mod set;
