use crate::{
    ast::{Expr, Operator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator, Mode, not_a_set},
        value::algebra,
    },
};

impl Evaluator {
    /// Evaluates an infix operator node.
    ///
    /// Both operands are always processed, left first. The operator itself is
    /// applied when `mode` says so; otherwise the node is rebuilt around the
    /// processed operands.
    pub(in crate::interpreter::evaluator) fn eval_binary_node(&mut self,
                                                              op: Operator,
                                                              left: &Expr,
                                                              right: &Expr,
                                                              forced: bool,
                                                              mode: Mode)
                                                              -> EvalResult<Expr> {
        if !op.is_binary() {
            return Err(RuntimeError::MalformedOperator { op, operands: 2 });
        }

        let left = self.evaluate(left, mode)?;
        let right = self.evaluate(right, mode)?;

        if mode.applies(forced) {
            return self.apply_binary(op, left, right, mode);
        }

        Ok(Expr::Binary { op,
                          left: Box::new(left),
                          right: Box::new(right),
                          forced })
    }

    /// Applies an infix operator to two evaluated operands.
    ///
    /// - `+`, `*`, `-`: union, intersection, and difference.
    /// - `<`: whether the left operand is a subset of the right one.
    /// - `[`: whether the left operand is an element of the right one.
    /// - `=`: whether the operands are equal.
    ///
    /// Tests answer with the universe when they hold and the empty set when
    /// they do not. Equality is structural and therefore always decidable,
    /// even between placeholders. In partial mode the other operators also
    /// apply to collections holding unevaluated elements; when an operand is
    /// not a collection the node stays a placeholder.
    ///
    /// # Errors
    /// `UnknownConstruct` in full mode when an operand is not a set.
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
    /// let evaluator = Evaluator::new(Set::ordinal(7));
    /// let one = Expr::Set(Set::ordinal(1));
    /// let three = Expr::Set(Set::ordinal(3));
    ///
    /// let holds = evaluator.apply_binary(Operator::Member, one.clone(), three.clone(), Mode::Full)
    ///                      .unwrap();
    /// assert_eq!(holds, Expr::Set(Set::ordinal(7)));
    ///
    /// let fails = evaluator.apply_binary(Operator::Subset, three, one, Mode::Full).unwrap();
    /// assert_eq!(fails, Expr::Set(Set::empty()));
    /// ```
    pub fn apply_binary(&self,
                        op: Operator,
                        left: Expr,
                        right: Expr,
                        mode: Mode)
                        -> EvalResult<Expr> {
        if op == Operator::Equal {
            return Ok(Expr::Set(self.truth(left == right)));
        }

        if let (Expr::Set(l), Expr::Set(r)) = (&left, &right) {
            let result = match op {
                Operator::Union => l.union(r),
                Operator::Intersection => l.intersection(r),
                Operator::Difference => l.difference(r),
                Operator::Subset => self.truth(l.is_subset(r)),
                Operator::Member => self.truth(r.contains(l)),
                _ => return Err(RuntimeError::MalformedOperator { op, operands: 2 }),
            };
            return Ok(Expr::Set(result));
        }

        if mode == Mode::Full {
            let culprit = if left.is_reduced() { &right } else { &left };
            return Err(not_a_set(op, culprit));
        }

        Ok(self.apply_to_collections(op, &left, &right)
               .unwrap_or_else(|| Expr::Binary { op,
                                                 left: Box::new(left),
                                                 right: Box::new(right),
                                                 forced: true }))
    }

    /// Applies an infix operator to partially evaluated collections.
    ///
    /// Returns `None` when an operand the operator looks into is not a
    /// collection.
    fn apply_to_collections(&self, op: Operator, left: &Expr, right: &Expr) -> Option<Expr> {
        let right_members = right.members()?;

        if op == Operator::Member {
            return Some(Expr::Set(self.truth(right_members.contains(left))));
        }

        let left_members = left.members()?;

        let result = match op {
            Operator::Union => Expr::collection(algebra::union(&left_members, &right_members)),
            Operator::Intersection => {
                Expr::collection(algebra::intersection(&left_members, &right_members))
            },
            Operator::Difference => {
                Expr::collection(algebra::difference(&left_members, &right_members))
            },
            Operator::Subset => Expr::Set(self.truth(left_members.is_subset(&right_members))),
            _ => return None,
        };

        Some(result)
    }
}
