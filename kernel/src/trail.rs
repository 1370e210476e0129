//! `Trail`: a detached root-to-terminal ancestor chain.
//!
//! A search run owns its [`StateArena`] only for the duration of `solve()`.
//! What survives is the trail of the returned (or last examined) state:
//! the payloads along the chain plus shared handles to the operators that
//! produced them.

use std::sync::Arc;

use crate::arena::{StateArena, StateId};
use crate::contract::{Operator, State};

/// One state on a trail together with the operator that produced it.
#[derive(Debug, Clone)]
pub struct Step<S: State> {
    pub state: S,
    /// `None` exactly for the first (root) step.
    pub operator: Option<Arc<dyn Operator<S>>>,
}

/// A non-empty, root-first sequence of [`Step`]s.
#[derive(Debug, Clone)]
pub struct Trail<S: State> {
    steps: Vec<Step<S>>,
}

impl<S: State> Trail<S> {
    /// Copy the ancestor chain of `id` out of `arena`.
    ///
    /// `operators` must be the operator set the arena was grown with; the
    /// recorded [`crate::contract::OperatorId`]s index into it.
    ///
    /// # Panics
    ///
    /// Panics if `id` is foreign to `arena` or a recorded operator index is
    /// out of range for `operators`.
    #[must_use]
    pub fn extract(arena: &StateArena<S>, id: StateId, operators: &[Arc<dyn Operator<S>>]) -> Self {
        let steps = arena
            .all_parents(id, true, false)
            .into_iter()
            .map(|node| {
                let record = arena.record(node);
                Step {
                    state: record.state.clone(),
                    operator: record.operator.map(|op| Arc::clone(&operators[op.index()])),
                }
            })
            .collect();
        Self { steps }
    }

    /// A trail consisting of the root alone.
    #[must_use]
    pub fn root_only(state: S) -> Self {
        Self {
            steps: vec![Step {
                state,
                operator: None,
            }],
        }
    }

    /// Steps in root-to-terminal order.
    #[must_use]
    pub fn steps(&self) -> &[Step<S>] {
        &self.steps
    }

    #[must_use]
    pub fn root(&self) -> &S {
        &self.steps[0].state
    }

    /// The state the trail ends at (the solution, on success).
    #[must_use]
    pub fn terminal(&self) -> &S {
        &self.steps[self.steps.len() - 1].state
    }

    /// Number of applied operators, i.e. the ancestor count of the terminal.
    #[must_use]
    pub fn path_len(&self) -> usize {
        self.steps.len() - 1
    }

    /// Ancestors of the terminal, root first unless `reverse`.
    #[must_use]
    pub fn all_parents(&self, include_self: bool, reverse: bool) -> Vec<&S> {
        let end = if include_self {
            self.steps.len()
        } else {
            self.steps.len() - 1
        };
        let mut parents: Vec<&S> = self.steps[..end].iter().map(|s| &s.state).collect();
        if reverse {
            parents.reverse();
        }
        parents
    }

    /// Applied operators, most recent first unless `reverse`.
    #[must_use]
    pub fn all_applied_operators(&self, reverse: bool) -> Vec<&Arc<dyn Operator<S>>> {
        let mut operators: Vec<&Arc<dyn Operator<S>>> =
            self.steps.iter().filter_map(|s| s.operator.as_ref()).collect();
        if !reverse {
            operators.reverse();
        }
        operators
    }

    /// Operator names in the order they were applied.
    #[must_use]
    pub fn operator_names(&self) -> Vec<&str> {
        self.steps
            .iter()
            .filter_map(|s| s.operator.as_ref().map(|op| op.name()))
            .collect()
    }

    /// Re-apply every operator from the root and check the chain.
    ///
    /// Returns `true` when each operator reports `can_apply` on its
    /// predecessor and reproduces the recorded successor.
    #[must_use]
    pub fn replays(&self) -> bool {
        self.steps.windows(2).all(|pair| match &pair[1].operator {
            Some(op) => op.can_apply(&pair[0].state) && op.apply(&pair[0].state) == pair[1].state,
            None => false,
        })
    }
}
