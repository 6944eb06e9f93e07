use mindset::{
    error::RuntimeError,
    interpreter::{
        machine::{Machine, State, Step},
        parser::core::parse_program,
        value::set::Set,
    },
};
use pretty_assertions::assert_eq;

fn machine(program: &str, input: Option<&str>) -> Machine {
    Machine::from_source(program, input).unwrap_or_else(|e| panic!("Failed to load {program:?}: {e}"))
}

#[test]
fn universe_is_seeded_from_the_input() {
    assert_eq!(machine("0", None).universe().to_string(), "{1}");
    assert_eq!(machine("0", Some("3")).universe(),
               &Set::pair(Set::empty(), Set::ordinal(3)));
    assert_eq!(machine("0", Some("0")).universe(), machine("0", None).universe());
}

#[test]
fn bare_literal_halts_on_the_first_step() {
    let mut machine = machine("5", None);

    assert_eq!(machine.step().unwrap(), Step::Halted);
    assert_eq!(machine.state(), State::Halted);
    assert_eq!(machine.steps(), 0);
    assert_eq!(machine.result(), Set::ordinal(0));
}

#[test]
fn one_line_program_steps_once_then_halts() {
    let mut machine = machine("{{{1}, {1, U + 1}}}", None);

    assert_eq!(machine.step().unwrap(),
               Step::Advanced { index:    Set::ordinal(1),
                                universe: Set::ordinal(2), });
    assert_eq!(machine.state(), State::Running);

    assert_eq!(machine.step().unwrap(), Step::Halted);
    assert_eq!(machine.universe(), &Set::ordinal(2));
    assert_eq!(machine.steps(), 1);
    assert_eq!(machine.result(), Set::ordinal(0));
}

#[test]
fn stepping_a_halted_machine_does_nothing() {
    let mut machine = machine("{{{1}, {1, U + 1}}}", None);
    machine.run().unwrap();

    let universe = machine.universe().clone();
    assert_eq!(machine.step().unwrap(), Step::Halted);
    assert_eq!(machine.universe(), &universe);
    assert_eq!(machine.steps(), 1);
}

#[test]
fn countdown_reports_every_step() {
    let mut machine = machine("{{{2}, {2, {{0}, {0, U--+}}}}}", Some("3"));
    let mut seen = Vec::new();

    let result = machine.run_with(|step| seen.push(step.clone())).unwrap();

    assert_eq!(result, Set::ordinal(0));
    assert_eq!(machine.steps(), 3);
    assert_eq!(machine.universe().to_string(), "{1}");

    let expected: Vec<Step> =
        [2, 1, 0].into_iter()
                 .map(|n| Step::Advanced { index:    Set::ordinal(2),
                                           universe: Set::pair(Set::empty(), Set::ordinal(n)), })
                 .chain([Step::Halted])
                 .collect();
    assert_eq!(seen, expected);
}

#[test]
fn successor_program() {
    let mut machine = machine("{{{2}, {2, {{0}, {0, 1, U-- + {U--}}, {1}}}}}", Some("3"));

    assert_eq!(machine.run().unwrap(), Set::ordinal(4));
    assert_eq!(machine.steps(), 1);
}

#[test]
fn empty_body_halts_without_touching_the_universe() {
    let mut machine = machine("{{{1}, {1, 0}}}", None);
    let before = machine.universe().clone();

    assert_eq!(machine.step().unwrap(), Step::Halted);
    assert_eq!(machine.universe(), &before);
    assert_eq!(machine.steps(), 0);
}

#[test]
fn first_of_several_matching_lines_runs() {
    let mut machine = machine("{{{1}, {1, U + 2}}, {{1}, {1, U + 3}}}", None);

    machine.step().unwrap();
    assert_eq!(machine.universe(), &Set::from_iter([Set::ordinal(0), Set::ordinal(1)]));
}

#[test]
fn only_the_selected_line_is_evaluated() {
    // Line 5 would fail, but the universe never has five elements.
    let mut machine = machine("{{{1}, {1, U + 1}}, {{5}, {5, Missing}}}", None);
    assert_eq!(machine.run().unwrap(), Set::ordinal(0));
}

#[test]
fn runtime_error_leaves_the_universe() {
    let mut machine = machine("{{{1}, {1, Missing}}}", None);
    let before = machine.universe().clone();

    assert_eq!(machine.step(),
               Err(RuntimeError::UnresolvedLabel { name: "Missing".to_string() }));
    assert_eq!(machine.universe(), &before);
}

#[test]
fn machine_from_a_parsed_program() {
    let program = parse_program("{{{2}, {2, {{0}, {0, 1, U--$}, {1}}}}}").unwrap();
    let input = Set::from_iter([Set::ordinal(5), Set::ordinal(7), Set::ordinal(9)]);

    let mut machine = Machine::new(program, Some(input));
    assert_eq!(machine.run().unwrap(), Set::ordinal(3));
}

#[test]
fn line_indices_may_refer_to_the_universe() {
    // Line `U` matches whenever the universe is the ordinal of its own size,
    // which first happens once line 1 has turned it into 2.
    let mut machine = machine("{
        {{1}, {1, U + 1}},
        {{U}, {U, {{0}, {0, 1, 5}, {1}}}}
    }", None);

    assert_eq!(machine.step().unwrap(),
               Step::Advanced { index:    Set::ordinal(1),
                                universe: Set::ordinal(2), });
    assert!(matches!(machine.step().unwrap(), Step::Advanced { .. }));
    assert_eq!(machine.step().unwrap(), Step::Halted);
    assert_eq!(machine.result(), Set::ordinal(5));
}
