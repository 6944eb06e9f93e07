use tracing::{debug, warn};

use crate::{
    ast::{Expr, Operator},
    error::{Error, RuntimeError},
    interpreter::{
        evaluator::core::{EvalResult, Evaluator, Mode},
        parser::core::parse_program,
        value::set::Set,
    },
};

/// Label the search binds each candidate line to.
///
/// Labels in source text are alphabetic, so this can never clash with one.
const LINE_LABEL: &str = "@line";
/// Label the search binds the current line index to.
const INDEX_LABEL: &str = "@index";

/// Whether the machine may take further steps.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum State {
    /// Further steps may replace the universe.
    Running,
    /// No line matched or a halt line ran; stepping does nothing.
    Halted,
}

/// The outcome of a single step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// A line ran and replaced the universe.
    Advanced {
        /// The index of the line that ran.
        index:    Set,
        /// The new universe.
        universe: Set,
    },
    /// No line ran; the machine is halted.
    Halted,
}

/// The execution engine.
///
/// A program is a collection of lines, each a Kuratowski pair
/// `{{index}, {index, body}}`. The whole machine state is one set, the
/// universe. Each step selects the line whose index equals the cardinality of
/// the universe and replaces the universe with the value of that line's body,
/// evaluated with `U` bound to the old universe. The machine halts when no
/// line matches or when the matching line's body is the empty set.
///
/// The universe starts as the pair `{{0}, {0, input}}`, which collapses to
/// `{{0}}` without input, and the result of a run is the universe with that
/// wrapper peeled off again (`U--`).
///
/// # Example
/// ```
/// use mindset::interpreter::{
///     machine::{Machine, State},
///     value::set::Set,
/// };
///
/// // One line at index 1 that adds 1 to the universe.
/// let mut machine = Machine::from_source("{{{1}, {1, U + 1}}}", None).unwrap();
///
/// assert_eq!(machine.run().unwrap(), Set::ordinal(0));
/// assert_eq!(machine.universe(), &Set::ordinal(2));
/// assert_eq!(machine.steps(), 1);
/// assert_eq!(machine.state(), State::Halted);
/// ```
#[derive(Debug, Clone)]
pub struct Machine {
    search:   Expr,
    universe: Set,
    state:    State,
    steps:    usize,
}

impl Machine {
    /// Creates a machine for a parsed program and an optional evaluated input.
    #[must_use]
    pub fn new(program: Expr, input: Option<Set>) -> Self {
        let universe = Set::pair(Set::empty(), input.unwrap_or_default());

        Self { search: search_expression(program),
               universe,
               state: State::Running,
               steps: 0 }
    }

    /// Parses a program and an optional input and creates a machine for them.
    ///
    /// The input is any expression. It is evaluated in full mode with nothing
    /// bound, so it cannot refer to `U`.
    ///
    /// # Errors
    /// - A `ParseError` if the program or the input does not parse.
    /// - A `RuntimeError` if the input fails to evaluate.
    pub fn from_source(program: &str, input: Option<&str>) -> Result<Self, Error> {
        let program = parse_program(program)?;

        let input = match input {
            Some(source) => {
                let expr = parse_program(source)?;
                Some(Evaluator::new(Set::empty()).eval(&expr)?)
            },
            None => None,
        };

        Ok(Self::new(program, input))
    }

    /// Performs one step.
    ///
    /// Stepping a halted machine does nothing and returns [`Step::Halted`].
    ///
    /// # Errors
    /// Any `RuntimeError` raised while selecting the line or evaluating its
    /// body. The universe is left as it was.
    pub fn step(&mut self) -> EvalResult<Step> {
        if self.state == State::Halted {
            return Ok(Step::Halted);
        }

        let index = self.universe.cardinality().cardinality();

        let mut evaluator = Evaluator::with_universe(self.universe.clone());
        evaluator.define(INDEX_LABEL, Expr::Set(index.clone()));

        debug!(step = self.steps, %index, search = %self.search, "searching for line");

        let matches = evaluator.evaluate(&self.search, Mode::Partial)?;
        let Some(line) = select_line(matches, &index)? else {
            debug!(%index, "no line matches; halting");
            return Ok(self.halt());
        };

        let body = extract_body(&mut evaluator, line)?;
        debug!(%index, %body, "selected line");

        if body == Expr::Set(Set::empty()) {
            debug!(%index, "halt line reached");
            return Ok(self.halt());
        }

        let universe = Evaluator::with_universe(self.universe.clone()).eval(&body)?;
        debug!(%index, %universe, "universe replaced");

        self.universe = universe.clone();
        self.steps += 1;

        Ok(Step::Advanced { index, universe })
    }

    /// Steps until the machine halts and returns the result.
    ///
    /// Programs that never halt make this loop forever.
    ///
    /// # Errors
    /// The first `RuntimeError` raised by a step.
    pub fn run(&mut self) -> EvalResult<Set> {
        self.run_with(|_| {})
    }

    /// Like [`Machine::run`], calling `on_step` after every step, including
    /// the final one that halts.
    ///
    /// # Errors
    /// The first `RuntimeError` raised by a step.
    pub fn run_with(&mut self, mut on_step: impl FnMut(&Step)) -> EvalResult<Set> {
        while self.state == State::Running {
            let step = self.step()?;
            on_step(&step);
        }

        Ok(self.result())
    }

    #[must_use]
    pub const fn universe(&self) -> &Set {
        &self.universe
    }

    #[must_use]
    pub const fn state(&self) -> State {
        self.state
    }

    /// Number of steps that replaced the universe.
    #[must_use]
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// The universe with the input wrapper peeled off (`U--`).
    ///
    /// Meaningful once the machine has halted, but defined at any time.
    #[must_use]
    pub fn result(&self) -> Set {
        self.universe
            .symmetric_multi_difference()
            .symmetric_multi_difference()
    }

    fn halt(&mut self) -> Step {
        self.state = State::Halted;
        Step::Halted
    }
}

/// Builds `program ? @line:((@line)** = @index)` with every operator forced.
///
/// Evaluated partially with `U` bound, it keeps the lines whose index matches
/// while leaving their bodies unevaluated.
fn search_expression(program: Expr) -> Expr {
    let line_index = Expr::unary(Operator::Intersection,
                                 Expr::unary(Operator::Intersection, Expr::label(LINE_LABEL)).forced())
                     .forced();
    let matches = Expr::binary(Operator::Equal, line_index, Expr::label(INDEX_LABEL)).forced();

    Expr::binder(Operator::Filter, program, LINE_LABEL, matches).forced()
}

/// Picks the line to run from the lines the search kept.
///
/// When several lines share an index the first in canonical order wins.
fn select_line(matches: Expr, index: &Set) -> EvalResult<Option<Expr>> {
    let Some(lines) = matches.members() else {
        return Err(RuntimeError::UnknownConstruct { details: format!("program is not a collection of lines: {matches}") });
    };

    if lines.len() > 1 {
        warn!(%index, candidates = lines.len(), "several lines match; running the first");
    }

    Ok(lines.into_iter().next())
}

/// Extracts the body of a line.
///
/// The forced peel `-line` turns `{{i}, {i, body}}` into `{body}`. When that
/// is not a singleton the line has some other shape and is peeled once more.
fn extract_body(evaluator: &mut Evaluator, line: Expr) -> EvalResult<Expr> {
    let content = evaluator.evaluate(&Expr::unary(Operator::Difference, line).forced(),
                                     Mode::Partial)?;

    if let Some(members) = content.members()
       && members.len() == 1
       && let Some(body) = members.into_iter().next()
    {
        return Ok(body);
    }

    evaluator.evaluate(&Expr::unary(Operator::Difference, content).forced(), Mode::Partial)
}
