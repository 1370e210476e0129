//! Harness runner: solves a world and packages the outcome as a report.
//!
//! The runner uses ONLY search-crate APIs (`StateSpace::solve`, the
//! registry). It does not implement any search logic itself.
//!
//! # Pipeline
//!
//! ```text
//! policy.validate() → world.state_space(selector) → solve()
//!   → SolveReport (solved | no_solution) → canonical bytes → digest
//! ```
//!
//! `NoSolutionFound` is a reportable outcome, not a run error: the report
//! carries the termination reason and the last examined trail. Every other
//! search failure aborts the run.

use statespace_kernel::contract::State;
use statespace_search::error::{NoSuchAlgorithm, PolicyError, SearchError};
use statespace_search::policy::SearchPolicy;
use statespace_search::registry;
use statespace_search::strategy::StrategySelector;
use thiserror::Error;
use tracing::{info, warn};

use crate::contract::World;
use crate::report::{CanonError, SolveReport};

/// Error during a harness run.
#[derive(Debug, Error)]
pub enum RunError {
    /// The selector named no registered algorithm.
    #[error(transparent)]
    NoSuchAlgorithm(#[from] NoSuchAlgorithm),
    /// Policy or strategy parameters failed validation.
    #[error(transparent)]
    InvalidPolicy(#[from] PolicyError),
    /// Any other search failure (wiring errors such as an unbound goal).
    #[error("search failed: {detail}")]
    SearchFailed { detail: String },
    /// Canonical JSON serialization failed.
    #[error(transparent)]
    Canon(#[from] CanonError),
}

impl RunError {
    fn from_search<S: State>(error: SearchError<S>) -> Self {
        match error {
            SearchError::NoSuchAlgorithm(inner) => Self::NoSuchAlgorithm(inner),
            SearchError::InvalidPolicy(inner) => Self::InvalidPolicy(inner),
            other => Self::SearchFailed {
                detail: other.to_string(),
            },
        }
    }
}

/// Solve `world` with one algorithm.
///
/// # Errors
///
/// Returns [`RunError`] for unknown algorithms, invalid policies, wiring
/// failures, or if the report cannot be canonicalized.
pub fn solve_world<W: World>(
    world: &W,
    selector: impl Into<StrategySelector>,
    policy: &SearchPolicy,
) -> Result<SolveReport, RunError> {
    let space = world.state_space(selector.into(), policy.clone());
    let algorithm = space.resolve().map_err(RunError::from_search)?;

    let report = match space.solve() {
        Ok(solution) => SolveReport::solved(world.world_id(), &solution),
        Err(error) => SolveReport::unsolved(world.world_id(), algorithm.name(), &error)
            .ok_or_else(|| RunError::from_search(error))?,
    };

    let digest = report.digest()?;
    if report.is_solved() {
        info!(
            world = world.world_id(),
            algorithm = algorithm.name(),
            path_len = report.path_len,
            expansions = report.stats.expansions,
            %digest,
            "solved"
        );
    } else {
        warn!(
            world = world.world_id(),
            algorithm = algorithm.name(),
            outcome = ?report.outcome,
            %digest,
            "no solution"
        );
    }
    Ok(report)
}

/// Solve `world` with every registered algorithm, in registry order.
///
/// # Errors
///
/// Returns the first [`RunError`]; `NoSolutionFound` outcomes are reported,
/// not raised.
pub fn solve_with_every_algorithm<W: World>(
    world: &W,
    policy: &SearchPolicy,
) -> Result<Vec<SolveReport>, RunError> {
    registry::algorithms_with(policy)
        .into_iter()
        .map(|strategy| solve_world(world, strategy, policy))
        .collect()
}
