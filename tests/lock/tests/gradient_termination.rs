//! Gradient descent locks: the walk stops at the first state with no strictly
//! closer child, and the closed-set filter never changes that on worlds where
//! descent cannot revisit a state.

use lock_tests::fixture::fixture_policy;
use lock_tests::soundness::assert_sound;
use statespace_harness::contract::World;
use statespace_harness::worlds::hanoi::Hanoi;
use statespace_harness::worlds::maze::Maze;
use statespace_kernel::contract::State;
use statespace_search::error::TerminationReason;
use statespace_search::policy::{ClosedSetFilter, SearchPolicy};

fn policy(filter: ClosedSetFilter) -> SearchPolicy {
    SearchPolicy {
        gradient_filter: filter,
        ..fixture_policy()
    }
}

const FILTERS: [ClosedSetFilter; 2] = [ClosedSetFilter::KeepVisited, ClosedSetFilter::SkipVisited];

// ---------------------------------------------------------------------------
// Success
// ---------------------------------------------------------------------------

#[test]
fn gradient_solves_open_mazes() {
    for filter in FILTERS {
        for world in [Maze::small(), Maze::corridors()] {
            let solution = world
                .state_space("GRADIENT".into(), policy(filter))
                .solve()
                .unwrap_or_else(|e| panic!("{} {}: {e}", world.world_id(), filter.as_str()));
            assert_sound(
                world.world_id(),
                &solution.trail,
                &world.initial_state(),
                &world.goal_state(),
            );
        }
    }
}

#[test]
fn gradient_path_strictly_descends() {
    let world = Maze::corridors();
    let goal = world.goal_state();
    let solution = world
        .state_space("GRADIENT".into(), fixture_policy())
        .solve()
        .unwrap();
    let distances: Vec<f64> = solution
        .trail
        .all_parents(true, false)
        .into_iter()
        .map(|s| s.distance_from(&goal))
        .collect();
    for pair in distances.windows(2) {
        assert!(pair[1] < pair[0], "distance rose: {distances:?}");
    }
}

// ---------------------------------------------------------------------------
// Local extrema
// ---------------------------------------------------------------------------

#[test]
fn u_bend_traps_gradient_at_start() {
    let world = Maze::u_bend();
    for filter in FILTERS {
        let err = world
            .state_space("GRADIENT".into(), policy(filter))
            .solve()
            .unwrap_err();
        assert_eq!(err.reason(), Some(TerminationReason::LocalExtremum));
        let trail = err.trail().expect("local extremum carries a trail");
        assert_eq!(trail.path_len(), 0, "{}: stuck at the start", filter.as_str());
        assert_eq!(trail.terminal(), &world.initial_state());
    }
}

#[test]
fn hanoi_gradient_stops_after_one_move() {
    // Moving the smallest disk to the goal peg drops the distance to 2;
    // no single move from there lowers it again.
    let world = Hanoi::new(3, 3).unwrap();
    for filter in FILTERS {
        let err = world
            .state_space("GRADIENT".into(), policy(filter))
            .solve()
            .unwrap_err();
        assert_eq!(err.reason(), Some(TerminationReason::LocalExtremum));
        let trail = err.trail().unwrap();
        assert_eq!(trail.operator_names(), vec!["0->2"], "{}", filter.as_str());
        assert!(trail.replays());
    }
}
