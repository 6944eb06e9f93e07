use crate::{
    ast::{Expr, Operator},
    error::RuntimeError,
    interpreter::evaluator::core::{EvalResult, Evaluator, Mode, not_a_set},
};

impl Evaluator {
    /// Evaluates a map (`#`) or filter (`?`) node.
    ///
    /// When the node applies, `body` is evaluated once per element of the
    /// operand with `label` bound to that element:
    /// - map collects the results, so equal results collapse;
    /// - filter keeps the elements whose result is truthy.
    ///
    /// The binding shadows any outer binding of `label` for the body only.
    ///
    /// A node that does not apply, or whose operand is not a collection in
    /// partial mode, becomes a placeholder. Its body is still processed, with
    /// `label` hidden so that outer bindings of the same name do not leak into
    /// it.
    ///
    /// # Errors
    /// - `MalformedOperator` when `op` is not a binder.
    /// - `UnknownConstruct` in full mode when the operand is not a set.
    /// - Any error raised by the body.
    ///
    /// # Example
    /// ```
    /// use mindset::interpreter::{
    ///     evaluator::core::Evaluator, parser::core::parse_program, value::set::Set,
    /// };
    ///
    /// let mut evaluator = Evaluator::with_universe(Set::ordinal(1));
    ///
    /// let mapped = evaluator.eval(&parse_program("{1, 2, 3}#x:(x + {x})").unwrap())
    ///                       .unwrap();
    /// assert_eq!(mapped.to_string(), "{2, 3, 4}");
    ///
    /// let filtered = evaluator.eval(&parse_program("5?x:(x [ {1, 3})").unwrap())
    ///                         .unwrap();
    /// assert_eq!(filtered.to_string(), "{1, 3}");
    /// ```
    pub(in crate::interpreter::evaluator) fn eval_binder_node(&mut self,
                                                              op: Operator,
                                                              operand: &Expr,
                                                              label: &str,
                                                              body: &Expr,
                                                              forced: bool,
                                                              mode: Mode)
                                                              -> EvalResult<Expr> {
        if !op.is_binder() {
            return Err(RuntimeError::MalformedOperator { op, operands: 3 });
        }

        let operand = self.evaluate(operand, mode)?;

        if mode.applies(forced) {
            if let Some(members) = operand.members() {
                return self.apply_binder(op, members, label, body, mode);
            }

            if mode == Mode::Full {
                return Err(not_a_set(op, &operand));
            }
        }

        let body = self.with_binding(label, None, |evaluator| evaluator.evaluate(body, mode))?;

        Ok(Expr::Binder { op,
                          operand: Box::new(operand),
                          label: label.to_string(),
                          body: Box::new(body),
                          forced })
    }

    fn apply_binder<I>(&mut self,
                       op: Operator,
                       members: I,
                       label: &str,
                       body: &Expr,
                       mode: Mode)
                       -> EvalResult<Expr>
        where I: IntoIterator<Item = Expr>
    {
        let mut results = Vec::new();

        for member in members {
            let value = self.with_binding(label, Some(member.clone()), |evaluator| {
                                evaluator.evaluate(body, mode)
                            })?;

            match op {
                Operator::Map => results.push(value),
                _ if value.is_truthy() => results.push(member),
                _ => {},
            }
        }

        Ok(Expr::collection(results))
    }
}
