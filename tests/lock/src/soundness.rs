//! Soundness checks applied to every returned trail.

use statespace_kernel::contract::State;
use statespace_kernel::trail::Trail;

/// Assert that `trail` starts at `initial`, ends on a goal state, and
/// replays from the root with every operator's guard holding.
///
/// # Panics
///
/// Panics with a descriptive message if any check fails.
pub fn assert_sound<S: State>(label: &str, trail: &Trail<S>, initial: &S, goal: &S) {
    assert_eq!(trail.root(), initial, "{label}: trail does not start at the initial state");
    assert!(
        trail.terminal().is_goal(goal),
        "{label}: terminal {:?} is not a goal state",
        trail.terminal()
    );
    assert!(
        trail.replays(),
        "{label}: trail does not replay from the root"
    );
    assert_eq!(
        trail.all_applied_operators(true).len(),
        trail.path_len(),
        "{label}: one operator per step"
    );
}
