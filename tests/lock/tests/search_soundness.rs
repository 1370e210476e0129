//! Soundness and completeness locks: every returned trail replays to a goal,
//! and unreachable goals exhaust the fringe instead of looping.

use lock_tests::fixture::fixture_policy;
use lock_tests::soundness::assert_sound;
use statespace_harness::contract::World;
use statespace_harness::worlds::countdown::Countdown;
use statespace_harness::worlds::eight_puzzle::EightPuzzle;
use statespace_harness::worlds::hanoi::Hanoi;
use statespace_harness::worlds::maze::{Maze, Position};
use statespace_search::error::{SearchError, TerminationReason};
use statespace_search::registry::{algorithm_names, algorithms_with};
use statespace_search::strategy::{Strategy, StrategySelector};

fn check_world<W: World>(world: &W, algorithms: &[&str]) {
    let initial = world.initial_state();
    let goal = world.goal_state();
    for &name in algorithms {
        let space = world.state_space(StrategySelector::from(name), fixture_policy());
        let solution = space
            .solve()
            .unwrap_or_else(|e| panic!("{} {name}: {e}", world.world_id()));
        assert_eq!(solution.algorithm, name);
        assert_sound(
            &format!("{} {name}", world.world_id()),
            &solution.trail,
            &initial,
            &goal,
        );
    }
}

// ---------------------------------------------------------------------------
// Soundness
// ---------------------------------------------------------------------------

#[test]
fn every_algorithm_sound_on_small_maze() {
    check_world(&Maze::small(), &algorithm_names());
}

#[test]
fn every_algorithm_sound_on_corridor_maze() {
    check_world(&Maze::corridors(), &algorithm_names());
}

#[test]
fn fringe_algorithms_sound_on_hanoi() {
    check_world(&Hanoi::new(3, 3).unwrap(), &["DFS", "BFS", "GREEDY", "A_STAR"]);
}

#[test]
fn fringe_algorithms_sound_on_countdown() {
    check_world(&Countdown::classic(), &["DFS", "BFS", "GREEDY", "A_STAR"]);
}

#[test]
fn informed_algorithms_sound_on_eight_puzzle() {
    check_world(&EightPuzzle::scrambled(), &["BFS", "GREEDY", "A_STAR"]);
}

#[test]
fn solution_traversals_agree() {
    let world = Maze::small();
    let solution = world
        .state_space(Strategy::BreadthFirst.into(), fixture_policy())
        .solve()
        .unwrap();
    let trail = &solution.trail;

    let root_first = trail.all_parents(true, false);
    let nearest_first = trail.all_parents(true, true);
    assert_eq!(root_first.len(), trail.path_len() + 1);
    assert_eq!(root_first.first(), Some(&&world.initial_state()));
    assert_eq!(nearest_first.first(), Some(&trail.terminal()));

    let applied = trail.all_applied_operators(false);
    let most_recent_first: Vec<&str> = applied
        .iter()
        .map(|op| op.name())
        .collect();
    let mut chronological = trail.operator_names();
    chronological.reverse();
    assert_eq!(most_recent_first, chronological);
}

// ---------------------------------------------------------------------------
// Completeness
// ---------------------------------------------------------------------------

/// Two open cells separated by a wall.
fn walled_off() -> Maze {
    Maze::new(
        "maze_walled_off",
        &["#####", "#.#.#", "#####"],
        Position::new(1, 1),
        Position::new(3, 1),
    )
    .unwrap()
}

#[test]
fn unreachable_goal_exhausts_fringe() {
    let world = walled_off();
    for strategy in algorithms_with(&fixture_policy())
        .into_iter()
        .filter(|s| s.selection().is_some())
    {
        let err = world
            .state_space(strategy.into(), fixture_policy())
            .solve()
            .unwrap_err();
        assert_eq!(
            err.reason(),
            Some(TerminationReason::FringeExhausted),
            "{strategy}: expected fringe exhaustion, got {err}"
        );
        assert_eq!(
            err.trail().map(|t| *t.terminal()),
            Some(Position::new(1, 1)),
            "{strategy}: last examined state"
        );
    }
}

#[test]
fn isolated_start_is_a_dead_end_for_random_walk() {
    let err = walled_off()
        .state_space("FULL_RANDOM".into(), fixture_policy())
        .solve()
        .unwrap_err();
    assert_eq!(err.reason(), Some(TerminationReason::DeadEnd));
}

#[test]
fn isolated_start_is_a_local_extremum_for_gradient() {
    let err = walled_off()
        .state_space("gradient".into(), fixture_policy())
        .solve()
        .unwrap_err();
    assert!(
        matches!(
            err,
            SearchError::NoSolutionFound {
                reason: TerminationReason::LocalExtremum,
                ..
            }
        ),
        "got {err}"
    );
}
