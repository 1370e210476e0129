//! `StateArena`: the ancestor tree of a single search run.
//!
//! Every state generated during a run is appended once and never moved or
//! removed, so a [`StateId`] stays valid for the lifetime of the arena.
//! Parent links are handles rather than references, which keeps the tree
//! free of ownership cycles and makes ancestor walks plain index chasing.

use crate::contract::{OperatorId, State};

/// Stable handle to a record in a [`StateArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(u32);

impl StateId {
    /// Position of the record inside its arena.
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One generated state plus its linkage.
///
/// Invariant: `operator.is_none() == parent.is_none()` (root records have
/// neither), and `depth` equals the number of ancestors.
#[derive(Debug, Clone)]
pub struct StateRecord<S> {
    /// Domain payload.
    pub state: S,
    /// The state this one was derived from (`None` for the root).
    pub parent: Option<StateId>,
    /// The operator that produced this state from `parent`.
    pub operator: Option<OperatorId>,
    /// Ancestor count (root = 0). This is the g-cost used by A*.
    pub depth: u32,
}

/// Append-only storage for all states of one run.
#[derive(Debug, Clone)]
pub struct StateArena<S> {
    records: Vec<StateRecord<S>>,
}

impl<S: State> StateArena<S> {
    /// Create an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Insert a root state (no parent, no operator, depth 0).
    ///
    /// # Panics
    ///
    /// Panics if the arena already holds `u32::MAX` records.
    pub fn insert_root(&mut self, state: S) -> StateId {
        self.push(StateRecord {
            state,
            parent: None,
            operator: None,
            depth: 0,
        })
    }

    /// Insert `state` as the child of `parent`, produced by `operator`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this arena, or if the arena
    /// already holds `u32::MAX` records.
    pub fn derive(&mut self, parent: StateId, operator: OperatorId, state: S) -> StateId {
        let depth = self.record(parent).depth.saturating_add(1);
        self.push(StateRecord {
            state,
            parent: Some(parent),
            operator: Some(operator),
            depth,
        })
    }

    fn push(&mut self, record: StateRecord<S>) -> StateId {
        let id = u32::try_from(self.records.len()).expect("state arena exceeded u32 handle space");
        self.records.push(record);
        StateId(id)
    }

    /// The full record behind `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this arena.
    #[must_use]
    pub fn record(&self, id: StateId) -> &StateRecord<S> {
        &self.records[id.index()]
    }

    /// The payload behind `id`.
    #[must_use]
    pub fn state(&self, id: StateId) -> &S {
        &self.record(id).state
    }

    #[must_use]
    pub fn parent(&self, id: StateId) -> Option<StateId> {
        self.record(id).parent
    }

    #[must_use]
    pub fn applied_operator(&self, id: StateId) -> Option<OperatorId> {
        self.record(id).operator
    }

    /// Number of ancestors of `id` (the path length from the root).
    #[must_use]
    pub fn path_len(&self, id: StateId) -> u32 {
        self.record(id).depth
    }

    /// All ancestors of `id`.
    ///
    /// With `reverse == false` the root comes first and the nearest parent
    /// (or `id` itself, when `include_self`) comes last. With
    /// `reverse == true` the order is flipped.
    #[must_use]
    pub fn all_parents(&self, id: StateId, include_self: bool, reverse: bool) -> Vec<StateId> {
        let mut chain = Vec::with_capacity(self.record(id).depth as usize + 1);
        if include_self {
            chain.push(id);
        }
        let mut current = self.parent(id);
        while let Some(ancestor) = current {
            chain.push(ancestor);
            current = self.parent(ancestor);
        }
        if !reverse {
            chain.reverse();
        }
        chain
    }

    /// All operators applied on the way from the root to `id`.
    ///
    /// With `reverse == false` the most recently applied operator comes
    /// first. With `reverse == true` the order is root-to-`id`.
    #[must_use]
    pub fn all_applied_operators(&self, id: StateId, reverse: bool) -> Vec<OperatorId> {
        let mut operators = Vec::with_capacity(self.record(id).depth as usize);
        let mut current = Some(id);
        while let Some(node) = current {
            let record = self.record(node);
            if let (Some(_), Some(op)) = (record.parent, record.operator) {
                operators.push(op);
            }
            current = record.parent;
        }
        if reverse {
            operators.reverse();
        }
        operators
    }

    /// Number of records in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<S: State> Default for StateArena<S> {
    fn default() -> Self {
        Self::new()
    }
}
