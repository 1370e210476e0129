//! Full-random walk: no fringe, no closed set.
//!
//! Each step applies one uniformly chosen applicable operator to the current
//! state. The walk ends on the goal, on a state with no applicable operator,
//! or after `step_limit` steps.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use statespace_kernel::arena::StateArena;
use statespace_kernel::contract::{Operator, OperatorId, State};
use statespace_kernel::trail::Trail;
use tracing::trace;

use crate::error::{SearchError, TerminationReason};
use crate::search::SearchStats;

/// Walk randomly from `initial` until `goal` is reached.
///
/// `seed` fixes the walk; `None` seeds from OS entropy.
///
/// # Errors
///
/// [`SearchError::NoSolutionFound`] with [`TerminationReason::DeadEnd`] when
/// no operator applies to the current state, or with
/// [`TerminationReason::StepLimitReached`] when the goal was not reached
/// within `step_limit` steps.
pub fn walk<S: State>(
    initial: S,
    goal: &S,
    operators: &[Arc<dyn Operator<S>>],
    step_limit: u64,
    seed: Option<u64>,
) -> Result<(Trail<S>, SearchStats), SearchError<S>> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut arena = StateArena::new();
    let mut stats = SearchStats::default();
    let mut current = arena.insert_root(initial);
    let mut applicable = Vec::with_capacity(operators.len());

    for _ in 0..step_limit {
        let state = arena.state(current);
        if state.is_goal(goal) {
            return Ok((Trail::extract(&arena, current, operators), stats));
        }

        applicable.clear();
        applicable.extend(
            operators
                .iter()
                .enumerate()
                .filter(|(_, op)| op.can_apply(state))
                .map(|(index, _)| index),
        );
        let Some(&index) = applicable.choose(&mut rng) else {
            return Err(SearchError::NoSolutionFound {
                reason: TerminationReason::DeadEnd,
                trail: Trail::extract(&arena, current, operators),
                stats,
            });
        };

        let next = operators[index].apply(state);
        trace!(operator = operators[index].name(), "random step");
        current = arena.derive(current, OperatorId(index), next);
        stats.expansions += 1;
        stats.generated += 1;
    }

    let trail = Trail::extract(&arena, current, operators);
    if trail.terminal().is_goal(goal) {
        return Ok((trail, stats));
    }
    Err(SearchError::NoSolutionFound {
        reason: TerminationReason::StepLimitReached { limit: step_limit },
        trail,
        stats,
    })
}
