use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::value::set::Set,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The label the current universe is bound to.
pub const UNIVERSE_LABEL: &str = "U";

/// How much of a tree evaluation reduces.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Apply every operator; every label must resolve.
    Full,
    /// Apply only forced operators; unknown labels stay as they are.
    ///
    /// Unapplied operator nodes come back as placeholders whose operands have
    /// still been processed.
    Partial,
}

impl Mode {
    /// Whether an operator node with the given `forced` flag is applied.
    #[must_use]
    pub const fn applies(self, forced: bool) -> bool {
        match self {
            Self::Full => true,
            Self::Partial => forced,
        }
    }
}

#[derive(Debug, Clone)]
struct Binding {
    label: String,
    /// `None` hides any outer binding of `label`.
    value: Option<Expr>,
}

/// Stores the evaluation context.
///
/// Holds the universe that comparisons answer with and a stack of label
/// bindings. Binders push one binding per element and pop it again once the
/// body has been evaluated, so an inner binding shadows an outer one of the
/// same name only while its body runs.
///
/// # Example
/// ```
/// use mindset::interpreter::{
///     evaluator::core::Evaluator, parser::core::parse_program, value::set::Set,
/// };
///
/// let mut evaluator = Evaluator::with_universe(Set::ordinal(3));
/// let expr = parse_program("U$ + {U}").unwrap();
///
/// let result = evaluator.eval(&expr).unwrap();
/// assert_eq!(result, Set::ordinal(4));
/// ```
#[derive(Debug, Clone)]
pub struct Evaluator {
    universe:    Set,
    scope_stack: Vec<Binding>,
}

impl Evaluator {
    /// Creates an evaluator with no bindings.
    ///
    /// `universe` is only used as the answer of comparisons that hold.
    #[must_use]
    pub const fn new(universe: Set) -> Self {
        Self { universe,
               scope_stack: Vec::new() }
    }

    /// Creates an evaluator with `U` bound to `universe`.
    #[must_use]
    pub fn with_universe(universe: Set) -> Self {
        let mut evaluator = Self::new(universe.clone());
        evaluator.define(UNIVERSE_LABEL, Expr::Set(universe));
        evaluator
    }

    #[must_use]
    pub const fn universe(&self) -> &Set {
        &self.universe
    }

    /// Binds `label` to `value` for everything evaluated afterwards.
    pub fn define(&mut self, label: &str, value: Expr) {
        self.scope_stack.push(Binding { label: label.to_string(),
                                        value: Some(value), });
    }

    /// Resolves `label` against the innermost binding of that name.
    ///
    /// Returns `None` for labels that are unbound or currently hidden.
    #[must_use]
    pub fn lookup(&self, label: &str) -> Option<&Expr> {
        self.scope_stack
            .iter()
            .rev()
            .find(|binding| binding.label == label)
            .and_then(|binding| binding.value.as_ref())
    }

    /// Evaluates an expression in full mode and returns the resulting set.
    ///
    /// # Errors
    /// - `UnresolvedLabel` for a label nothing binds.
    /// - `MalformedOperator` for an operator used at an arity it lacks.
    /// - `UnknownConstruct` when something other than a set is left over.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Set> {
        match self.evaluate(expr, Mode::Full)? {
            Expr::Set(set) => Ok(set),
            other => Err(RuntimeError::UnknownConstruct { details: format!("expected a set, found {other}") }),
        }
    }

    /// Evaluates an expression in the given mode.
    ///
    /// In [`Mode::Full`] the result is always an [`Expr::Set`]. In
    /// [`Mode::Partial`] it is the input tree with every forced operator that
    /// could be applied replaced by its value and every bound label replaced
    /// by what it is bound to.
    ///
    /// # Errors
    /// See [`Evaluator::eval`]. Partial mode never reports unresolved labels.
    pub fn evaluate(&mut self, expr: &Expr, mode: Mode) -> EvalResult<Expr> {
        match expr {
            Expr::Set(set) => Ok(Expr::Set(set.clone())),
            Expr::SetLiteral(elements) => {
                let elements = elements.iter()
                                       .map(|element| self.evaluate(element, mode))
                                       .collect::<EvalResult<Vec<_>>>()?;
                Ok(Expr::collection(elements))
            },
            Expr::Label(name) => self.eval_label(name, mode),
            Expr::Unary { op,
                          operand,
                          forced, } => self.eval_unary_node(*op, operand, *forced, mode),
            Expr::Binary { op,
                           left,
                           right,
                           forced, } => self.eval_binary_node(*op, left, right, *forced, mode),
            Expr::Binder { op,
                           operand,
                           label,
                           body,
                           forced, } => self.eval_binder_node(*op, operand, label, body, *forced, mode),
        }
    }

    fn eval_label(&self, name: &str, mode: Mode) -> EvalResult<Expr> {
        match (self.lookup(name), mode) {
            (Some(value), _) => Ok(value.clone()),
            (None, Mode::Partial) => Ok(Expr::Label(name.to_string())),
            (None, Mode::Full) => Err(RuntimeError::UnresolvedLabel { name: name.to_string() }),
        }
    }

    /// Runs `f` with `label` bound to `value`, or hidden when `value` is
    /// `None`, and removes the binding afterwards.
    pub(in crate::interpreter::evaluator) fn with_binding<T>(&mut self,
                                                             label: &str,
                                                             value: Option<Expr>,
                                                             f: impl FnOnce(&mut Self) -> EvalResult<T>)
                                                             -> EvalResult<T> {
        self.scope_stack.push(Binding { label: label.to_string(),
                                        value });
        let result = f(self);
        self.scope_stack.pop();
        result
    }

    /// The answer of a comparison: the universe when it holds, the empty set
    /// otherwise.
    pub(in crate::interpreter::evaluator) fn truth(&self, holds: bool) -> Set {
        if holds { self.universe.clone() } else { Set::empty() }
    }
}

/// The error for an operator whose operand is not a set in full mode.
pub(in crate::interpreter::evaluator) fn not_a_set(op: impl std::fmt::Display,
                                                   operand: &Expr)
                                                   -> RuntimeError {
    RuntimeError::UnknownConstruct { details: format!("'{op}' applied to {operand}, which is not a set") }
}
