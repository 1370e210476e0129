//! The state-space façade: problem definition plus algorithm choice.

use std::sync::Arc;

use statespace_kernel::contract::{Operator, State};
use tracing::debug;

use crate::error::SearchError;
use crate::policy::SearchPolicy;
use crate::registry;
use crate::search::Solution;
use crate::strategy::{Strategy, StrategySelector};

/// A search problem: where to start, where to go, how to move, and which
/// algorithm to use.
///
/// Solving does not mutate the space; every [`StateSpace::solve`] call runs
/// on fresh bookkeeping, so the same space can be solved repeatedly.
#[derive(Debug, Clone)]
pub struct StateSpace<S: State> {
    pub initial_state: S,
    pub goal_state: S,
    /// Tried in this order on every expansion.
    pub operators: Vec<Arc<dyn Operator<S>>>,
    pub algorithm: StrategySelector,
    pub policy: SearchPolicy,
}

impl<S: State> StateSpace<S> {
    /// Create a space with the default [`SearchPolicy`].
    #[must_use]
    pub fn new(
        initial_state: S,
        goal_state: S,
        operators: Vec<Arc<dyn Operator<S>>>,
        algorithm: impl Into<StrategySelector>,
    ) -> Self {
        Self {
            initial_state,
            goal_state,
            operators,
            algorithm: algorithm.into(),
            policy: SearchPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: SearchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Resolve the configured selector to a concrete strategy.
    ///
    /// # Errors
    ///
    /// [`SearchError::NoSuchAlgorithm`] for an unknown name.
    pub fn resolve(&self) -> Result<Strategy, SearchError<S>> {
        registry::find_with(&self.algorithm, &self.policy).map_err(SearchError::from)
    }

    /// Search for a path from the initial state to the goal.
    ///
    /// # Errors
    ///
    /// - [`SearchError::InvalidPolicy`] if the policy or the resolved
    ///   strategy's parameters are invalid.
    /// - [`SearchError::NoSuchAlgorithm`] if the selector names no algorithm.
    /// - [`SearchError::NoSolutionFound`] if the strategy gives up.
    pub fn solve(&self) -> Result<Solution<S>, SearchError<S>> {
        self.policy.validate()?;
        let strategy = self.resolve()?;
        strategy.validate()?;
        debug!(algorithm = strategy.name(), "state space resolved");
        strategy.solve(
            self.initial_state.clone(),
            &self.goal_state,
            &self.operators,
            self.policy.max_expansions,
        )
    }
}
