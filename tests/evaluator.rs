use mindset::{
    ast::{Expr, Operator},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Evaluator, Mode},
        parser::core::parse_program,
        value::set::Set,
    },
};
use pretty_assertions::assert_eq;

fn num(n: usize) -> Expr {
    Expr::Set(Set::ordinal(n))
}

fn set_of(elements: &[usize]) -> Set {
    elements.iter().copied().map(Set::ordinal).collect()
}

fn eval_with_universe(src: &str, universe: Set) -> Result<Set, RuntimeError> {
    let expr = parse_program(src).unwrap_or_else(|e| panic!("Failed to parse {src:?}: {e}"));
    Evaluator::with_universe(universe).eval(&expr)
}

fn eval(src: &str) -> Set {
    eval_with_universe(src, Set::ordinal(1)).unwrap_or_else(|e| panic!("{src:?} failed: {e}"))
}

#[test]
fn suffix_operators() {
    assert_eq!(eval("3+"), Set::ordinal(2));
    assert_eq!(eval("{3, {5}}+"), set_of(&[0, 1, 2, 5]));
    assert_eq!(eval("{3, 5}*"), Set::ordinal(3));
    assert_eq!(eval("{}*"), Set::empty());
    assert_eq!(eval("{2, {1}}-"), Set::singleton(Set::ordinal(0)));
    assert_eq!(eval("{7, {5}, {2, 5}}$"), Set::ordinal(3));
}

#[test]
fn powerset_of_two() {
    let powerset = eval("2^");
    assert_eq!(powerset.len(), 4);
    assert_eq!(powerset.to_string(), "{0, 1, {1}, 2}");
}

#[test]
fn infix_operators() {
    assert_eq!(eval("3 + {7}"), set_of(&[0, 1, 2, 7]));
    assert_eq!(eval("5 * {1, 3, 8}"), set_of(&[1, 3]));
    assert_eq!(eval("5 - {1, 3, 8}"), set_of(&[0, 2, 4]));
}

#[test]
fn comparisons_answer_with_the_universe() {
    let universe = Set::ordinal(9);

    for (src, holds) in [("2 < 5", true),
                         ("5 < 2", false),
                         ("2 [ 5", true),
                         ("5 [ 2", false),
                         ("{0, 1} = 2", true),
                         ("{1} = 1", false)]
    {
        let expected = if holds { universe.clone() } else { Set::empty() };
        assert_eq!(eval_with_universe(src, universe.clone()).unwrap(), expected, "{src}");
    }
}

#[test]
fn map_collects_results() {
    assert_eq!(eval("{1, 2, 3}#x:(x + {x})"), set_of(&[2, 3, 4]));
    // Equal results collapse.
    assert_eq!(eval("{1, 2, 3}#x:(0)"), set_of(&[0]));
}

#[test]
fn filter_keeps_truthy_elements() {
    assert_eq!(eval("5?x:(x [ {1, 3})"), set_of(&[1, 3]));
    assert_eq!(eval("5?x:(x)"), set_of(&[1, 2, 3, 4]));
}

#[test]
fn filter_with_an_empty_universe_keeps_nothing() {
    let result = eval_with_universe("5?x:(x [ {1, 3})", Set::empty()).unwrap();
    assert_eq!(result, Set::empty());
}

#[test]
fn binder_label_shadows_only_inside_its_body() {
    let mut evaluator = Evaluator::with_universe(Set::ordinal(1));
    evaluator.define("x", num(7));

    let expr = parse_program("({1, 2}#x:(x)) + {x}").unwrap();
    assert_eq!(evaluator.eval(&expr).unwrap(), set_of(&[1, 2, 7]));

    let nested = parse_program("{1, 2}#x:({10}#x:(x) + {x})").unwrap();
    assert_eq!(evaluator.eval(&nested).unwrap(),
               Set::from_iter([set_of(&[1, 10]), set_of(&[2, 10])]));

    assert_eq!(evaluator.lookup("x"), Some(&num(7)));
}

#[test]
fn universe_label_is_bound() {
    assert_eq!(eval_with_universe("U + 1", Set::ordinal(1)).unwrap(), Set::ordinal(2));
    assert_eq!(eval_with_universe("U$$", Set::ordinal(6)).unwrap(), Set::ordinal(6));
}

#[test]
fn unresolved_label_in_full_mode() {
    assert_eq!(eval_with_universe("V + 1", Set::empty()),
               Err(RuntimeError::UnresolvedLabel { name: "V".to_string() }));
    assert!(Evaluator::new(Set::empty()).eval(&Expr::label("U")).is_err());
}

#[test]
fn operator_at_the_wrong_arity_is_malformed() {
    let mut evaluator = Evaluator::new(Set::empty());

    let unary = Expr::unary(Operator::Subset, num(1));
    assert_eq!(evaluator.eval(&unary),
               Err(RuntimeError::MalformedOperator { op:       Operator::Subset,
                                                     operands: 1, }));

    let binary = Expr::binary(Operator::Powerset, num(1), num(2));
    assert_eq!(evaluator.eval(&binary),
               Err(RuntimeError::MalformedOperator { op:       Operator::Powerset,
                                                     operands: 2, }));

    let binder = Expr::binder(Operator::Union, num(1), "x", Expr::label("x"));
    assert_eq!(evaluator.eval(&binder),
               Err(RuntimeError::MalformedOperator { op:       Operator::Union,
                                                     operands: 3, }));
}

#[test]
fn non_set_operand_in_full_mode_is_unknown() {
    let mut evaluator = Evaluator::new(Set::empty());
    evaluator.define("L", Expr::label("M"));

    let result = evaluator.eval(&parse_program("L$").unwrap());
    assert!(matches!(result, Err(RuntimeError::UnknownConstruct { .. })));
}

#[test]
fn partial_mode_leaves_unforced_operators() {
    let mut evaluator = Evaluator::new(Set::empty());
    let expr = parse_program("{U + 1, 2$}").unwrap();

    let result = evaluator.evaluate(&expr, Mode::Partial).unwrap();
    assert_eq!(result, expr);
}

#[test]
fn partial_mode_substitutes_bound_labels() {
    let mut evaluator = Evaluator::new(Set::empty());
    evaluator.define("A", num(3));

    let result = evaluator.evaluate(&parse_program("A + B").unwrap(), Mode::Partial)
                          .unwrap();
    assert_eq!(result, Expr::binary(Operator::Union, num(3), Expr::label("B")));
}

#[test]
fn partial_mode_applies_forced_operators_to_literals() {
    let mut evaluator = Evaluator::new(Set::empty());

    // {{2}, {2, U$}}** is 2 even though U$ cannot be evaluated.
    let line = parse_program("{{2}, {2, U$}}").unwrap();
    let index = Expr::unary(Operator::Intersection,
                            Expr::unary(Operator::Intersection, line.clone()).forced())
                .forced();
    assert_eq!(evaluator.evaluate(&index, Mode::Partial).unwrap(), num(2));

    // The rolling difference peels the index off and leaves the body.
    let peel = Expr::unary(Operator::Difference, line).forced();
    assert_eq!(evaluator.evaluate(&peel, Mode::Partial).unwrap(),
               Expr::collection([Expr::unary(Operator::Cardinality, Expr::label("U"))]));
}

#[test]
fn forced_operator_on_a_label_stays_a_placeholder() {
    let mut evaluator = Evaluator::new(Set::empty());
    let expr = Expr::unary(Operator::Union, Expr::label("U")).forced();

    let result = evaluator.evaluate(&expr, Mode::Partial).unwrap();
    assert_eq!(result, expr);
    assert!(result.is_truthy());
}

#[test]
fn forced_equality_is_always_decided() {
    let mut evaluator = Evaluator::new(Set::ordinal(4));

    let same = Expr::binary(Operator::Equal, Expr::label("U"), Expr::label("U")).forced();
    assert_eq!(evaluator.evaluate(&same, Mode::Partial).unwrap(), num(4));

    let different = Expr::binary(Operator::Equal, Expr::label("U"), num(1)).forced();
    assert_eq!(evaluator.evaluate(&different, Mode::Partial).unwrap(), num(0));
}

#[test]
fn unforced_binder_hides_its_label() {
    let mut evaluator = Evaluator::new(Set::empty());
    evaluator.define("x", num(7));
    evaluator.define("y", num(3));

    let expr = parse_program("U#x:(x + y)").unwrap();
    let result = evaluator.evaluate(&expr, Mode::Partial).unwrap();

    assert_eq!(result,
               Expr::binder(Operator::Map,
                            Expr::label("U"),
                            "x",
                            Expr::binary(Operator::Union, Expr::label("x"), num(3))));
}
