//! Countdown locks: every step of a solution obeys the game rules, and the
//! widened goal test (target among the numbers) ends the search.

use lock_tests::fixture::fixture_policy;
use statespace_harness::contract::World;
use statespace_harness::worlds::countdown::{Countdown, Numbers, Operation};
use statespace_kernel::contract::State;
use statespace_search::search::Solution;
use statespace_search::strategy::StrategySelector;

/// Parse `<sign>[<a>,<b>]` operator names.
fn parse_operator(name: &str) -> (Operation, usize, usize) {
    let mut chars = name.chars();
    let sign = chars.next().expect("operator name has a sign");
    let operation =
        Operation::from_sign(sign).unwrap_or_else(|| panic!("unknown sign in {name}"));
    let positions = chars.as_str().trim_start_matches('[').trim_end_matches(']');
    let (a, b) = positions
        .split_once(',')
        .unwrap_or_else(|| panic!("malformed operator {name}"));
    (operation, a.parse().unwrap(), b.parse().unwrap())
}

fn solve(algorithm: &str) -> Solution<Numbers> {
    Countdown::classic()
        .state_space(StrategySelector::from(algorithm), fixture_policy())
        .solve()
        .unwrap_or_else(|e| panic!("countdown {algorithm}: {e}"))
}

fn assert_rules_hold(algorithm: &str) {
    let solution = solve(algorithm);
    let steps = solution.trail.steps();
    for pair in steps.windows(2) {
        let (before, after) = (&pair[0].state, &pair[1].state);
        let operator = pair[1]
            .operator
            .as_ref()
            .expect("non-root step has an operator");
        let (operation, a, b) = parse_operator(operator.name());
        let (x, y) = (before.numbers()[a], before.numbers()[b]);
        assert!(
            operation.can_be_used(x, y),
            "{algorithm}: {x} {} {y} breaks the rules",
            operation.sign()
        );
        let result = operation.process(x, y).unwrap();
        assert!(
            after.numbers().contains(&result),
            "{algorithm}: result {result} missing from {:?}",
            after.numbers()
        );
        assert_eq!(
            after.numbers().len() + 1,
            before.numbers().len(),
            "{algorithm}: each step consumes two numbers and adds one"
        );
    }
    assert!(solution.terminal().numbers().contains(&21));
}

#[test]
fn bfs_steps_obey_rules() {
    assert_rules_hold("BFS");
}

#[test]
fn astar_steps_obey_rules() {
    assert_rules_hold("A_STAR");
}

#[test]
fn greedy_steps_obey_rules() {
    assert_rules_hold("GREEDY");
}

#[test]
fn dfs_steps_obey_rules() {
    assert_rules_hold("DFS");
}

#[test]
fn twenty_one_needs_two_steps() {
    // No pair of 1..=6 combines to 21 directly; (6 + 1) * 3 does.
    assert_eq!(solve("BFS").path_len(), 2);
}

#[test]
fn goal_is_target_membership_not_equality() {
    let world = Countdown::classic();
    let goal = world.goal_state();
    let reached = Numbers::new(vec![4, 5, 21], 21);
    assert_ne!(reached, goal);
    assert!(reached.is_goal(&goal));
    assert!(!world.initial_state().is_goal(&goal));
}

#[test]
fn target_already_present_needs_no_step() {
    let world = Countdown::new(vec![3, 21, 7], 21).unwrap();
    let solution = world
        .state_space("BFS".into(), fixture_policy())
        .solve()
        .unwrap();
    assert_eq!(solution.path_len(), 0);
}
