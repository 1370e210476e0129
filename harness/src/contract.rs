//! World contract: the minimal trait a world must implement.
//!
//! Worlds provide domain data only: a start, a goal and an ordered operator
//! set. Worlds may NOT pick algorithms, enforce budgets or build reports
//! (those are search-crate and runner concerns).

use std::sync::Arc;

use statespace_kernel::contract::{Operator, State};
use statespace_search::policy::SearchPolicy;
use statespace_search::space::StateSpace;
use statespace_search::strategy::StrategySelector;
use thiserror::Error;

/// Typed failure for world construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorldError {
    /// A layout, board or disk configuration is malformed.
    #[error("invalid world layout: {detail}")]
    InvalidLayout { detail: String },
}

/// The contract a world must implement to be run by the harness runner.
///
/// A world provides:
/// - A unique identifier
/// - An initial and a goal state
/// - An operator set, in the fixed order every expansion tries them
///
/// A world does NOT provide:
/// - Algorithm choice or search budgets (runner's job)
/// - Report serialization or hashing (report module's job)
pub trait World {
    /// The state payload this world searches over.
    type State: State;

    /// Unique world identifier (e.g., `"maze_5x5"`).
    fn world_id(&self) -> &str;

    fn initial_state(&self) -> Self::State;

    fn goal_state(&self) -> Self::State;

    /// Operators in the order the search tries them.
    fn operators(&self) -> Vec<Arc<dyn Operator<Self::State>>>;

    /// Bind this world into a solvable state space.
    fn state_space(
        &self,
        algorithm: StrategySelector,
        policy: SearchPolicy,
    ) -> StateSpace<Self::State> {
        StateSpace::new(
            self.initial_state(),
            self.goal_state(),
            self.operators(),
            algorithm,
        )
        .with_policy(policy)
    }
}
