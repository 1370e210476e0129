//! Fringe and closed-set bookkeeping for the shared search loop.
//!
//! The fringe is NOT deduplicated on insert: the same logical state may be
//! queued several times. Duplicate paths are pruned only when a state is
//! dequeued and found in the closed set, which keeps insertion O(1) (or
//! O(log n) for ranked fringes) at the cost of extra fringe growth on graphs
//! with many paths to the same state.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet, VecDeque};

use statespace_kernel::arena::StateId;
use statespace_kernel::contract::State;

/// Which fringe element a strategy examines next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Last inserted first (stack). Depth-first search.
    Lifo,
    /// First inserted first (queue). Breadth-first search.
    Fifo,
    /// Minimum `h = distance_from(goal)`. Greedy best-first search.
    NearestToGoal,
    /// Minimum `g + h` with `g` the ancestor count. A*.
    LowestCost,
}

impl Selection {
    /// Whether this selection ranks states against the goal.
    #[must_use]
    pub const fn is_informed(self) -> bool {
        matches!(self, Self::NearestToGoal | Self::LowestCost)
    }
}

/// Ranking key for informed selections: `(priority, insertion order)`.
///
/// Lower priority first; on ties the earlier insertion wins, which matches a
/// linear "first encountered minimum" scan over an insertion-ordered list.
#[derive(Debug, Clone, Copy)]
struct RankKey {
    priority: f64,
    order: u64,
}

impl PartialEq for RankKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for RankKey {}

impl PartialOrd for RankKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RankKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then(self.order.cmp(&other.order))
    }
}

/// A ranked fringe entry. `BinaryHeap` is a max-heap, so entries are
/// wrapped in `Reverse` to pop the lowest key first.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct RankedEntry {
    key: RankKey,
    id: StateId,
}

#[derive(Debug)]
enum Store {
    Stack(Vec<StateId>),
    Queue(VecDeque<StateId>),
    Ranked(BinaryHeap<Reverse<RankedEntry>>),
}

/// The frontier of not-yet-examined states.
#[derive(Debug)]
pub struct Fringe {
    selection: Selection,
    store: Store,
    next_order: u64,
    high_water: u64,
}

impl Fringe {
    /// Create an empty fringe that pops according to `selection`.
    #[must_use]
    pub fn new(selection: Selection) -> Self {
        let store = match selection {
            Selection::Lifo => Store::Stack(Vec::new()),
            Selection::Fifo => Store::Queue(VecDeque::new()),
            Selection::NearestToGoal | Selection::LowestCost => Store::Ranked(BinaryHeap::new()),
        };
        Self {
            selection,
            store,
            next_order: 0,
            high_water: 0,
        }
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Insert a state. `priority` is only read by informed selections.
    pub fn push(&mut self, id: StateId, priority: f64) {
        match &mut self.store {
            Store::Stack(stack) => stack.push(id),
            Store::Queue(queue) => queue.push_back(id),
            Store::Ranked(heap) => heap.push(Reverse(RankedEntry {
                key: RankKey {
                    priority,
                    order: self.next_order,
                },
                id,
            })),
        }
        self.next_order += 1;
        let size = self.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Remove and return the next state to examine.
    pub fn pop(&mut self) -> Option<StateId> {
        match &mut self.store {
            Store::Stack(stack) => stack.pop(),
            Store::Queue(queue) => queue.pop_front(),
            Store::Ranked(heap) => heap.pop().map(|Reverse(entry)| entry.id),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match &self.store {
            Store::Stack(stack) => stack.len(),
            Store::Queue(queue) => queue.len(),
            Store::Ranked(heap) => heap.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest size the fringe reached.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}

/// States that have already been expanded.
///
/// Membership uses the domain's `Eq`/`Hash`, never handle identity: two
/// different arena records holding equal payloads are the same closed state.
#[derive(Debug)]
pub struct ClosedSet<S> {
    states: HashSet<S>,
}

impl<S: State> ClosedSet<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            states: HashSet::new(),
        }
    }

    /// Close `state`. Returns `false` if it was already closed.
    pub fn insert(&mut self, state: S) -> bool {
        self.states.insert(state)
    }

    #[must_use]
    pub fn contains(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl<S: State> Default for ClosedSet<S> {
    fn default() -> Self {
        Self::new()
    }
}
