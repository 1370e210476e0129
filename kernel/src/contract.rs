//! The state/operator contract every search domain implements.
//!
//! A domain provides two things:
//!
//! - a [`State`] payload type with an equality rule and a distance heuristic
//! - a set of [`Operator`]s that guard and perform transitions
//!
//! Ancestry (parent link, applying operator, depth) is NOT part of the
//! payload. It lives in [`crate::arena::StateArena`], so two payloads compare
//! equal exactly when the domain says they describe the same position,
//! regardless of how the search reached them.

use std::fmt::Debug;
use std::hash::Hash;

/// A node payload in the implicit search graph.
///
/// # Contract
///
/// - `Eq`/`Hash` define state identity for search purposes (closed-set
///   membership and goal detection). They must ignore how the state was
///   reached.
/// - `distance_from(other)` must be `>= 0.0` and must return exactly `0.0`
///   when `self == other`, and only then. Violating this breaks goal
///   detection and cycle avoidance for every strategy.
pub trait State: Clone + Eq + Hash + Debug {
    /// Heuristic distance between this state and `other`.
    fn distance_from(&self, other: &Self) -> f64;

    /// Whether this state terminates a search aimed at `goal`.
    ///
    /// Defaults to equality. Domains whose goal is a predicate rather than a
    /// single position (e.g. "any board that contains the target number")
    /// override this.
    fn is_goal(&self, goal: &Self) -> bool {
        self == goal
    }
}

/// A named, guarded transform from one state to another.
///
/// Operators are immutable and shared between states and between runs, hence
/// the `Send + Sync` bound.
pub trait Operator<S: State>: Debug + Send + Sync {
    /// Human-readable operator name (used in reports and logs).
    fn name(&self) -> &str;

    /// Whether this operator may be applied to `state`.
    fn can_apply(&self, state: &S) -> bool;

    /// Produce the successor payload.
    ///
    /// # Panics
    ///
    /// Implementations panic when called on a state for which
    /// [`Operator::can_apply`] is `false`. Callers must always guard.
    fn apply(&self, state: &S) -> S;
}

/// Index of an operator within the fixed, ordered operator set of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OperatorId(pub usize);

impl OperatorId {
    /// The position of this operator in the run's operator slice.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}
