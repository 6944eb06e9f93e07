use std::collections::BTreeSet;

use crate::{
    ast::{Expr, Operator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator, Mode, not_a_set},
        value::{algebra, set::Set},
    },
};

impl Evaluator {
    /// Evaluates a suffix operator node.
    ///
    /// The operand is always processed. The operator itself is applied when
    /// `mode` says so; otherwise the node is rebuilt around the processed
    /// operand.
    pub(in crate::interpreter::evaluator) fn eval_unary_node(&mut self,
                                                             op: Operator,
                                                             operand: &Expr,
                                                             forced: bool,
                                                             mode: Mode)
                                                             -> EvalResult<Expr> {
        if !op.is_unary() {
            return Err(RuntimeError::MalformedOperator { op, operands: 1 });
        }

        let operand = self.evaluate(operand, mode)?;

        if mode.applies(forced) {
            return Self::apply_unary(op, operand, mode);
        }

        Ok(Expr::Unary { op,
                         operand: Box::new(operand),
                         forced })
    }

    /// Applies a suffix operator to an evaluated operand.
    ///
    /// - `+`: union of the elements.
    /// - `*`: intersection of the elements, empty for an empty operand.
    /// - `-`: elements occurring in an odd number of the elements.
    /// - `$`: the ordinal counting the elements.
    /// - `^`: the powerset.
    ///
    /// Finished sets are handled directly. In partial mode the operator also
    /// applies to a collection that still holds unevaluated elements, treating
    /// each of them as an opaque element; if the operator needs the members of
    /// something that is not a collection, the node stays a placeholder.
    ///
    /// # Errors
    /// `UnknownConstruct` in full mode when the operand is not a set.
    ///
    /// # Example
    /// ```
    /// use mindset::{
    ///     ast::{Expr, Operator},
    ///     interpreter::{
    ///         evaluator::core::{Evaluator, Mode},
    ///         value::set::Set,
    ///     },
    /// };
    ///
    /// let three = Expr::Set(Set::ordinal(3));
    ///
    /// let size = Evaluator::apply_unary(Operator::Cardinality, three.clone(), Mode::Full).unwrap();
    /// assert_eq!(size, Expr::Set(Set::ordinal(3)));
    ///
    /// let top = Evaluator::apply_unary(Operator::Union, three, Mode::Full).unwrap();
    /// assert_eq!(top, Expr::Set(Set::ordinal(2)));
    /// ```
    pub fn apply_unary(op: Operator, operand: Expr, mode: Mode) -> EvalResult<Expr> {
        if let Expr::Set(set) = &operand {
            let result = match op {
                Operator::Union => set.big_union(),
                Operator::Intersection => set.big_intersection(),
                Operator::Difference => set.symmetric_multi_difference(),
                Operator::Cardinality => set.cardinality(),
                Operator::Powerset => set.powerset(),
                _ => return Err(RuntimeError::MalformedOperator { op, operands: 1 }),
            };
            return Ok(Expr::Set(result));
        }

        if mode == Mode::Full {
            return Err(not_a_set(op, &operand));
        }

        Ok(apply_to_collection(op, &operand).unwrap_or_else(|| Expr::Unary { op,
                                                                            operand:
                                                                                Box::new(operand),
                                                                            forced: true }))
    }
}

/// Applies a suffix operator to a partially evaluated collection.
///
/// Returns `None` when the operand, or one of its elements for the family
/// operators, is not a collection.
fn apply_to_collection(op: Operator, operand: &Expr) -> Option<Expr> {
    let members = operand.members()?;

    let family = || {
        members.iter()
               .map(Expr::members)
               .collect::<Option<Vec<BTreeSet<Expr>>>>()
    };

    let result = match op {
        Operator::Union => Expr::collection(algebra::big_union(&family()?)),
        Operator::Intersection => Expr::collection(algebra::big_intersection(&family()?)),
        Operator::Difference => Expr::collection(algebra::symmetric_multi_difference(&family()?)),
        Operator::Cardinality => Expr::Set(Set::ordinal(members.len())),
        Operator::Powerset => {
            Expr::collection(algebra::powerset(&members).into_iter().map(Expr::collection))
        },
        _ => return None,
    };

    Some(result)
}
