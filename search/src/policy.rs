//! Search policy types.

use crate::error::PolicyError;

/// Default step budget of the full-random walk.
pub const DEFAULT_RANDOM_STEP_LIMIT: u64 = 10_000;

/// Run-level configuration shared by every strategy.
///
/// Strategy-specific knobs (`random_step_limit`, `random_seed`,
/// `gradient_filter`) are copied into the [`crate::strategy::Strategy`]
/// values the registry builds from this policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Hard cap on fringe-loop expansions. `None` searches until the goal is
    /// found or the fringe is empty.
    pub max_expansions: Option<u64>,
    /// Step budget for the full-random walk.
    pub random_step_limit: u64,
    /// Seed for the full-random walk. `None` seeds from OS entropy.
    pub random_seed: Option<u64>,
    /// Whether gradient descent skips children it has already stood on.
    pub gradient_filter: ClosedSetFilter,
}

impl SearchPolicy {
    /// Validate that this policy can drive a search.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError`] if `random_step_limit` is zero or
    /// `max_expansions` is `Some(0)`.
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.random_step_limit == 0 {
            return Err(PolicyError {
                detail: "random_step_limit must be at least 1".into(),
            });
        }
        if self.max_expansions == Some(0) {
            return Err(PolicyError {
                detail: "max_expansions must be at least 1 when set".into(),
            });
        }
        Ok(())
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            max_expansions: None,
            random_step_limit: DEFAULT_RANDOM_STEP_LIMIT,
            random_seed: None,
            gradient_filter: ClosedSetFilter::KeepVisited,
        }
    }
}

/// Closed-set handling for gradient descent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClosedSetFilter {
    /// Every applicable child is a candidate, visited or not.
    #[default]
    KeepVisited,
    /// Children equal to a state the descent already stood on are dropped.
    SkipVisited,
}

impl ClosedSetFilter {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::KeepVisited => "keep_visited",
            Self::SkipVisited => "skip_visited",
        }
    }
}
