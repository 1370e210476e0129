//! Solve reports: a serializable summary of one search, with a stable digest.
//!
//! # Canonical form
//!
//! 1. Object keys are sorted lexicographically (byte order).
//! 2. Compact output, no whitespace.
//! 3. Numbers must be integers. Floats are rejected so the digest does not
//!    depend on float formatting.
//!
//! The digest is `sha256:<hex>` over [`DOMAIN_SOLVE_REPORT`] followed by the
//! canonical bytes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use statespace_kernel::contract::State;
use statespace_kernel::trail::Trail;
use statespace_search::error::SearchError;
use statespace_search::search::{SearchStats, Solution};
use thiserror::Error;

/// Domain prefix for solve report hashing (null-terminated).
pub const DOMAIN_SOLVE_REPORT: &[u8] = b"STATESPACE::SOLVE_REPORT::V1\0";

/// Report schema tag.
pub const REPORT_SCHEMA_VERSION: &str = "solve_report.v1";

/// Error type for canonical JSON serialization.
#[derive(Debug, Error)]
pub enum CanonError {
    /// A JSON number was not an integer.
    #[error("non-integer number in canonical JSON: {raw}")]
    NonIntegerNumber { raw: String },
    #[error("report serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Produce canonical JSON bytes from a `serde_json::Value`.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] if any number is a float.
pub fn canonical_json_bytes(value: &Value) -> Result<Vec<u8>, CanonError> {
    Ok(serde_json::to_vec(&canonicalize(value)?)?)
}

/// Rebuild `value` with sorted object keys, rejecting floats.
fn canonicalize(value: &Value) -> Result<Value, CanonError> {
    Ok(match value {
        Value::Number(n) if n.is_f64() => {
            return Err(CanonError::NonIntegerNumber { raw: n.to_string() })
        }
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(canonicalize)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let mut sorted = Map::new();
            for key in keys {
                sorted.insert(key.clone(), canonicalize(&map[key])?);
            }
            Value::Object(sorted)
        }
        other => other.clone(),
    })
}

/// `sha256:<hex>` of `domain || bytes`.
#[must_use]
pub fn domain_digest(domain: &[u8], bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(bytes);
    format!("sha256:{}", hex::encode(hasher.finalize()))
}

/// How the search ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Solved,
    NoSolution {
        /// Snake-case termination tag, e.g. `local_extremum`.
        reason: String,
    },
}

/// Run counters, mirrored from [`SearchStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportStats {
    pub expansions: u64,
    pub generated: u64,
    pub duplicates_pruned: u64,
    pub fringe_high_water: u64,
}

impl From<SearchStats> for ReportStats {
    fn from(stats: SearchStats) -> Self {
        Self {
            expansions: stats.expansions,
            generated: stats.generated,
            duplicates_pruned: stats.duplicates_pruned,
            fringe_high_water: stats.fringe_high_water,
        }
    }
}

/// Summary of one `(world, algorithm)` search.
///
/// For `NoSolution` outcomes the path fields describe the trail of the last
/// examined state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveReport {
    pub schema_version: String,
    pub world_id: String,
    pub algorithm: String,
    pub outcome: Outcome,
    pub path_len: u64,
    /// Operator names, root to terminal.
    pub operators: Vec<String>,
    /// `Debug` rendering of the terminal state.
    pub terminal: String,
    pub stats: ReportStats,
}

impl SolveReport {
    /// Report a successful search.
    #[must_use]
    pub fn solved<S: State>(world_id: &str, solution: &Solution<S>) -> Self {
        Self::from_trail(
            world_id,
            solution.algorithm,
            Outcome::Solved,
            &solution.trail,
            solution.stats,
        )
    }

    /// Report a search that ended in `NoSolutionFound`. Returns `None` for
    /// every other error, which has no trail to report.
    #[must_use]
    pub fn unsolved<S: State>(
        world_id: &str,
        algorithm: &str,
        error: &SearchError<S>,
    ) -> Option<Self> {
        match error {
            SearchError::NoSolutionFound {
                reason,
                trail,
                stats,
            } => Some(Self::from_trail(
                world_id,
                algorithm,
                Outcome::NoSolution {
                    reason: reason.as_str().to_owned(),
                },
                trail,
                *stats,
            )),
            _ => None,
        }
    }

    fn from_trail<S: State>(
        world_id: &str,
        algorithm: &str,
        outcome: Outcome,
        trail: &Trail<S>,
        stats: SearchStats,
    ) -> Self {
        Self {
            schema_version: REPORT_SCHEMA_VERSION.to_owned(),
            world_id: world_id.to_owned(),
            algorithm: algorithm.to_owned(),
            outcome,
            path_len: u64::try_from(trail.path_len()).unwrap_or(u64::MAX),
            operators: trail
                .operator_names()
                .into_iter()
                .map(str::to_owned)
                .collect(),
            terminal: format!("{:?}", trail.terminal()),
            stats: stats.into(),
        }
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.outcome == Outcome::Solved
    }

    /// # Errors
    ///
    /// Returns [`CanonError`] if the report cannot be serialized.
    pub fn canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&serde_json::to_value(self)?)
    }

    /// Domain-separated content digest of the canonical bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if the report cannot be serialized.
    pub fn digest(&self) -> Result<String, CanonError> {
        Ok(domain_digest(
            DOMAIN_SOLVE_REPORT,
            &self.canonical_json_bytes()?,
        ))
    }
}
