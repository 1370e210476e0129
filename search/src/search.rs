//! The shared fringe-driven search loop and its result types.
//!
//! DFS, BFS, Greedy and A* differ only in which fringe element is examined
//! next ([`Selection`]); everything else happens here:
//!
//! ```text
//! seed fringe with initial
//! while fringe non-empty:
//!     current = fringe.pop()            (strategy-specific)
//!     current is goal   → success
//!     current in closed → prune, continue
//!     push apply(op, current) for every applicable op, in operator order
//!     close current
//! fringe empty → NoSolutionFound(FringeExhausted)
//! ```

use std::sync::Arc;

use statespace_kernel::arena::{StateArena, StateId};
use statespace_kernel::contract::{Operator, OperatorId, State};
use statespace_kernel::trail::Trail;
use tracing::trace;

use crate::error::{SearchError, TerminationReason};
use crate::frontier::{ClosedSet, Fringe, Selection};

/// Aggregate counters of one search run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States whose successors were generated.
    pub expansions: u64,
    /// Successor states created by operator application.
    pub generated: u64,
    /// Dequeued states discarded because they were already closed.
    pub duplicates_pruned: u64,
    /// Largest fringe size reached (0 for fringe-less strategies).
    pub fringe_high_water: u64,
}

/// A successful search: the solution trail plus run counters.
#[derive(Debug, Clone)]
pub struct Solution<S: State> {
    /// Registry name of the strategy that produced this solution.
    pub algorithm: &'static str,
    /// Root-to-goal chain.
    pub trail: Trail<S>,
    pub stats: SearchStats,
}

impl<S: State> Solution<S> {
    /// The goal-satisfying terminal state.
    #[must_use]
    pub fn terminal(&self) -> &S {
        self.trail.terminal()
    }

    /// Number of operators applied from the initial state.
    #[must_use]
    pub fn path_len(&self) -> usize {
        self.trail.path_len()
    }
}

/// Mutable state of one fringe-driven search.
///
/// A run is created per `solve()` call and dropped afterwards; nothing in it
/// is shared between calls.
#[derive(Debug)]
pub struct SearchRun<'a, S: State> {
    operators: &'a [Arc<dyn Operator<S>>],
    arena: StateArena<S>,
    fringe: Fringe,
    closed: ClosedSet<S>,
    goal: Option<S>,
    stats: SearchStats,
}

impl<'a, S: State> SearchRun<'a, S> {
    /// Create a run over a fixed, ordered operator set.
    #[must_use]
    pub fn new(selection: Selection, operators: &'a [Arc<dyn Operator<S>>]) -> Self {
        Self {
            operators,
            arena: StateArena::new(),
            fringe: Fringe::new(selection),
            closed: ClosedSet::new(),
            goal: None,
            stats: SearchStats::default(),
        }
    }

    /// Bind the goal state. Must happen before [`SearchRun::solve`].
    pub fn bind_goal(&mut self, goal: S) {
        self.goal = Some(goal);
    }

    #[must_use]
    pub fn goal(&self) -> Option<&S> {
        self.goal.as_ref()
    }

    /// Seed the fringe with `initial` and search until the goal is examined,
    /// the fringe is empty, or `max_expansions` is reached.
    ///
    /// # Errors
    ///
    /// - [`SearchError::GoalNotBound`] if no goal was bound.
    /// - [`SearchError::NoSolutionFound`] with `FringeExhausted` or
    ///   `ExpansionBudgetExceeded`.
    pub fn solve(
        mut self,
        initial: S,
        max_expansions: Option<u64>,
    ) -> Result<(Trail<S>, SearchStats), SearchError<S>> {
        if self.goal.is_none() {
            return Err(SearchError::GoalNotBound);
        }

        let root = self.arena.insert_root(initial);
        self.enqueue(root)?;
        let mut last = root;

        while let Some(current) = self.next_state() {
            last = current;

            if self.reached_goal(current) {
                trace!(depth = self.arena.path_len(current), "goal examined");
                return Ok(self.finish(current));
            }

            if self.closed.contains(self.arena.state(current)) {
                self.stats.duplicates_pruned += 1;
                continue;
            }

            if let Some(limit) = max_expansions {
                if self.stats.expansions >= limit {
                    return Err(self.fail(
                        TerminationReason::ExpansionBudgetExceeded { limit },
                        current,
                    ));
                }
            }

            self.expand(current)?;
        }

        Err(self.fail(TerminationReason::FringeExhausted, last))
    }

    /// Remove the next state to examine from the fringe.
    pub fn next_state(&mut self) -> Option<StateId> {
        self.fringe.pop()
    }

    fn reached_goal(&self, id: StateId) -> bool {
        self.goal
            .as_ref()
            .is_some_and(|goal| self.arena.state(id).is_goal(goal))
    }

    /// Generate every applicable successor of `id` (in operator order),
    /// queue them, then close `id`.
    fn expand(&mut self, id: StateId) -> Result<(), SearchError<S>> {
        let operators = self.operators;
        let mut children = 0u64;
        for (index, operator) in operators.iter().enumerate() {
            let state = self.arena.state(id);
            if !operator.can_apply(state) {
                continue;
            }
            let successor = operator.apply(state);
            let child = self.arena.derive(id, OperatorId(index), successor);
            self.enqueue(child)?;
            children += 1;
        }

        trace!(
            depth = self.arena.path_len(id),
            children,
            fringe = self.fringe.len(),
            "expanded"
        );

        self.closed.insert(self.arena.state(id).clone());
        self.stats.expansions += 1;
        self.stats.generated += children;
        Ok(())
    }

    /// Push `id` with the priority its selection asks for.
    fn enqueue(&mut self, id: StateId) -> Result<(), SearchError<S>> {
        let priority = self.priority(id)?;
        self.fringe.push(id, priority);
        Ok(())
    }

    /// `h` for greedy, `g + h` for A*, 0 for uninformed selections.
    ///
    /// # Errors
    ///
    /// [`SearchError::GoalNotBound`] for informed selections without a goal.
    pub fn priority(&self, id: StateId) -> Result<f64, SearchError<S>> {
        let selection = self.fringe.selection();
        if !selection.is_informed() {
            return Ok(0.0);
        }
        let goal = self.goal.as_ref().ok_or(SearchError::GoalNotBound)?;
        let h = self.arena.state(id).distance_from(goal);
        Ok(match selection {
            Selection::LowestCost => f64::from(self.arena.path_len(id)) + h,
            _ => h,
        })
    }

    fn finish(mut self, id: StateId) -> (Trail<S>, SearchStats) {
        self.stats.fringe_high_water = self.fringe.high_water();
        (Trail::extract(&self.arena, id, self.operators), self.stats)
    }

    fn fail(self, reason: TerminationReason, last: StateId) -> SearchError<S> {
        let (trail, stats) = self.finish(last);
        SearchError::NoSolutionFound {
            reason,
            trail,
            stats,
        }
    }
}

/// Run the shared loop for one selection rule.
///
/// # Errors
///
/// See [`SearchRun::solve`].
pub fn fringe_search<S: State>(
    selection: Selection,
    initial: S,
    goal: &S,
    operators: &[Arc<dyn Operator<S>>],
    max_expansions: Option<u64>,
) -> Result<(Trail<S>, SearchStats), SearchError<S>> {
    let mut run = SearchRun::new(selection, operators);
    run.bind_goal(goal.clone());
    run.solve(initial, max_expansions)
}
