//! Gradient descent: always step to the child closest to the goal.
//!
//! This strategy has no fringe. From the current state it generates every
//! applicable child, keeps the one with the smallest `distance_from(goal)`
//! (first encountered on ties) and moves there, but only if that child is
//! strictly closer than the current state. Otherwise the descent is stuck at
//! a local extremum and fails.

use std::sync::Arc;

use statespace_kernel::arena::StateArena;
use statespace_kernel::contract::{Operator, OperatorId, State};
use statespace_kernel::trail::Trail;
use tracing::trace;

use crate::error::{SearchError, TerminationReason};
use crate::frontier::ClosedSet;
use crate::policy::ClosedSetFilter;
use crate::search::SearchStats;

/// Descend from `initial` towards `goal`.
///
/// With [`ClosedSetFilter::SkipVisited`] every state the descent stood on is
/// remembered and children equal to one of them are not considered.
///
/// # Errors
///
/// [`SearchError::NoSolutionFound`] with [`TerminationReason::LocalExtremum`]
/// when no remaining child is strictly closer to the goal (including when
/// there is no child at all).
pub fn descend<S: State>(
    initial: S,
    goal: &S,
    operators: &[Arc<dyn Operator<S>>],
    filter: ClosedSetFilter,
) -> Result<(Trail<S>, SearchStats), SearchError<S>> {
    let mut arena = StateArena::new();
    let mut visited = ClosedSet::new();
    let mut stats = SearchStats::default();
    let mut current = arena.insert_root(initial);

    loop {
        let state = arena.state(current);
        if state.is_goal(goal) {
            return Ok((Trail::extract(&arena, current, operators), stats));
        }
        if filter == ClosedSetFilter::SkipVisited {
            visited.insert(state.clone());
        }

        let current_distance = state.distance_from(goal);
        let mut best: Option<(OperatorId, S, f64)> = None;
        for (index, operator) in operators.iter().enumerate() {
            if !operator.can_apply(state) {
                continue;
            }
            let child = operator.apply(state);
            stats.generated += 1;
            if filter == ClosedSetFilter::SkipVisited && visited.contains(&child) {
                continue;
            }
            let distance = child.distance_from(goal);
            let improves = match &best {
                Some((_, _, best_distance)) => distance < *best_distance,
                None => true,
            };
            if improves {
                best = Some((OperatorId(index), child, distance));
            }
        }
        stats.expansions += 1;

        match best {
            Some((operator, child, distance)) if distance < current_distance => {
                trace!(from = current_distance, to = distance, "descended");
                current = arena.derive(current, operator, child);
            }
            _ => {
                return Err(SearchError::NoSolutionFound {
                    reason: TerminationReason::LocalExtremum,
                    trail: Trail::extract(&arena, current, operators),
                    stats,
                });
            }
        }
    }
}
