//! Search strategies as a closed set of values.
//!
//! A [`Strategy`] carries only its own parameters. All mutable search state
//! (arena, fringe, closed set, bound goal) is created inside [`Strategy::solve`]
//! and dropped when it returns, so a strategy value can be reused freely.

use std::fmt;
use std::sync::Arc;

use statespace_kernel::contract::{Operator, State};
use statespace_kernel::trail::Trail;
use tracing::debug;

use crate::error::{PolicyError, SearchError};
use crate::frontier::Selection;
use crate::gradient::descend;
use crate::policy::{ClosedSetFilter, DEFAULT_RANDOM_STEP_LIMIT};
use crate::random_walk::walk;
use crate::search::{fringe_search, SearchStats, Solution};

/// One of the built-in search algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// `DFS`: last-inserted fringe state first.
    DepthFirst,
    /// `BFS`: first-inserted fringe state first.
    BreadthFirst,
    /// `GREEDY`: fringe state nearest to the goal first.
    Greedy,
    /// `A_STAR`: fringe state with the lowest `depth + distance` first.
    AStar,
    /// `GRADIENT`: strict descent on the distance to the goal.
    Gradient { filter: ClosedSetFilter },
    /// `FULL_RANDOM`: uniformly random applicable operator per step.
    FullRandom { step_limit: u64, seed: Option<u64> },
}

impl Strategy {
    /// Gradient descent with the default (non-filtering) closed-set handling.
    #[must_use]
    pub const fn gradient() -> Self {
        Self::Gradient {
            filter: ClosedSetFilter::KeepVisited,
        }
    }

    /// Entropy-seeded random walk with the default step limit.
    #[must_use]
    pub const fn full_random() -> Self {
        Self::FullRandom {
            step_limit: DEFAULT_RANDOM_STEP_LIMIT,
            seed: None,
        }
    }

    /// Registry name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::DepthFirst => "DFS",
            Self::BreadthFirst => "BFS",
            Self::Greedy => "GREEDY",
            Self::AStar => "A_STAR",
            Self::Gradient { .. } => "GRADIENT",
            Self::FullRandom { .. } => "FULL_RANDOM",
        }
    }

    /// The fringe selection rule, for strategies driven by the shared loop.
    #[must_use]
    pub const fn selection(&self) -> Option<Selection> {
        match self {
            Self::DepthFirst => Some(Selection::Lifo),
            Self::BreadthFirst => Some(Selection::Fifo),
            Self::Greedy => Some(Selection::NearestToGoal),
            Self::AStar => Some(Selection::LowestCost),
            Self::Gradient { .. } | Self::FullRandom { .. } => None,
        }
    }

    /// Check strategy parameters.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError`] for a full-random walk with a zero step limit.
    pub fn validate(&self) -> Result<(), PolicyError> {
        match self {
            Self::FullRandom { step_limit: 0, .. } => Err(PolicyError {
                detail: "FULL_RANDOM step_limit must be at least 1".into(),
            }),
            _ => Ok(()),
        }
    }

    /// Search from `initial` for a state satisfying `goal`.
    ///
    /// `max_expansions` only bounds the fringe-driven strategies; gradient
    /// descent terminates on its own and the random walk has `step_limit`.
    ///
    /// # Errors
    ///
    /// [`SearchError::NoSolutionFound`] when the strategy terminates without
    /// reaching the goal.
    pub fn solve<S: State>(
        &self,
        initial: S,
        goal: &S,
        operators: &[Arc<dyn Operator<S>>],
        max_expansions: Option<u64>,
    ) -> Result<Solution<S>, SearchError<S>> {
        debug!(
            algorithm = self.name(),
            operators = operators.len(),
            "search started"
        );
        let outcome = match *self {
            Self::Gradient { filter } => descend(initial, goal, operators, filter),
            Self::FullRandom { step_limit, seed } => {
                walk(initial, goal, operators, step_limit, seed)
            }
            Self::DepthFirst => {
                fringe_search(Selection::Lifo, initial, goal, operators, max_expansions)
            }
            Self::BreadthFirst => {
                fringe_search(Selection::Fifo, initial, goal, operators, max_expansions)
            }
            Self::Greedy => fringe_search(
                Selection::NearestToGoal,
                initial,
                goal,
                operators,
                max_expansions,
            ),
            Self::AStar => fringe_search(
                Selection::LowestCost,
                initial,
                goal,
                operators,
                max_expansions,
            ),
        };
        self.report(outcome)
    }

    fn report<S: State>(
        &self,
        outcome: Result<(Trail<S>, SearchStats), SearchError<S>>,
    ) -> Result<Solution<S>, SearchError<S>> {
        match outcome {
            Ok((trail, stats)) => {
                debug!(
                    algorithm = self.name(),
                    path_len = trail.path_len(),
                    expansions = stats.expansions,
                    "goal reached"
                );
                Ok(Solution {
                    algorithm: self.name(),
                    trail,
                    stats,
                })
            }
            Err(err) => {
                debug!(algorithm = self.name(), error = %err, "search failed");
                Err(err)
            }
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a [`crate::space::StateSpace`] names its algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrategySelector {
    /// Looked up case-insensitively in the registry at solve time.
    ByName(String),
    /// Used as given.
    ByValue(Strategy),
}

impl From<&str> for StrategySelector {
    fn from(name: &str) -> Self {
        Self::ByName(name.to_owned())
    }
}

impl From<String> for StrategySelector {
    fn from(name: String) -> Self {
        Self::ByName(name)
    }
}

impl From<Strategy> for StrategySelector {
    fn from(strategy: Strategy) -> Self {
        Self::ByValue(strategy)
    }
}
