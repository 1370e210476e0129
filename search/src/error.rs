//! Typed search errors.
//!
//! `PolicyError` and `NoSuchAlgorithm` are pre-flight failures: they are
//! returned before any state is generated. `SearchError::NoSolutionFound` is
//! the only runtime termination that is not a success, and it always carries
//! the trail of the last examined state so the caller can replay how far the
//! search got.

use statespace_kernel::contract::State;
use statespace_kernel::trail::Trail;
use thiserror::Error;

use crate::search::SearchStats;

/// Why a search stopped without reaching the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// The fringe ran empty: the goal is unreachable from the initial state.
    FringeExhausted,
    /// Full-random walk used up its step budget.
    StepLimitReached { limit: u64 },
    /// Gradient descent found no child strictly closer to the goal.
    LocalExtremum,
    /// Full-random walk reached a state with no applicable operator.
    DeadEnd,
    /// `SearchPolicy::max_expansions` was reached.
    ExpansionBudgetExceeded { limit: u64 },
}

impl TerminationReason {
    /// Stable snake-case tag (used in reports).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FringeExhausted => "fringe_exhausted",
            Self::StepLimitReached { .. } => "step_limit_reached",
            Self::LocalExtremum => "local_extremum",
            Self::DeadEnd => "dead_end",
            Self::ExpansionBudgetExceeded { .. } => "expansion_budget_exceeded",
        }
    }
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FringeExhausted => write!(f, "fringe exhausted"),
            Self::StepLimitReached { limit } => write!(f, "step limit of {limit} reached"),
            Self::LocalExtremum => write!(
                f,
                "stuck at local extremum: no child lowers the distance to the goal"
            ),
            Self::DeadEnd => write!(f, "no operator applicable to the current state"),
            Self::ExpansionBudgetExceeded { limit } => {
                write!(f, "expansion budget of {limit} exceeded")
            }
        }
    }
}

/// A strategy name that the registry does not know.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no algorithm '{name}' found")]
pub struct NoSuchAlgorithm {
    pub name: String,
}

/// A policy or strategy parameter that cannot drive a search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid search policy: {detail}")]
pub struct PolicyError {
    pub detail: String,
}

/// Everything `solve()` can fail with.
#[derive(Debug, Error)]
pub enum SearchError<S: State> {
    /// The search terminated without reaching the goal.
    #[error("no solution found: {reason}")]
    NoSolutionFound {
        reason: TerminationReason,
        /// Ancestor chain of the last examined state.
        trail: Trail<S>,
        stats: SearchStats,
    },
    /// The strategy selector named an unknown algorithm.
    #[error(transparent)]
    NoSuchAlgorithm(#[from] NoSuchAlgorithm),
    /// An informed strategy ranked a state before a goal was bound.
    #[error("goal state was not bound before informed selection")]
    GoalNotBound,
    /// Pre-flight policy validation failed.
    #[error(transparent)]
    InvalidPolicy(#[from] PolicyError),
}

impl<S: State> SearchError<S> {
    /// The termination reason, for `NoSolutionFound`.
    #[must_use]
    pub fn reason(&self) -> Option<TerminationReason> {
        match self {
            Self::NoSolutionFound { reason, .. } => Some(*reason),
            _ => None,
        }
    }

    /// The diagnostic trail, for `NoSolutionFound`.
    #[must_use]
    pub fn trail(&self) -> Option<&Trail<S>> {
        match self {
            Self::NoSolutionFound { trail, .. } => Some(trail),
            _ => None,
        }
    }
}
