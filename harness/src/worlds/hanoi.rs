//! `Hanoi`: Towers of Hanoi with any number of pegs.
//!
//! All disks start on peg 0 and must end on the last peg. A move takes the
//! top disk of one peg onto an empty peg or onto a larger disk. There is one
//! operator per ordered pair of distinct pegs.

use std::sync::Arc;

use statespace_kernel::contract::{Operator, State};

use crate::contract::{World, WorldError};

/// Disk distribution over pegs. Each peg lists disk sizes bottom to top.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Towers {
    pegs: Vec<Vec<u8>>,
}

impl Towers {
    #[must_use]
    pub fn pegs(&self) -> &[Vec<u8>] {
        &self.pegs
    }

    fn top(&self, peg: usize) -> Option<u8> {
        self.pegs.get(peg).and_then(|disks| disks.last().copied())
    }

    /// Peg index of every disk, indexed by `size - 1`.
    fn placement(&self) -> Vec<usize> {
        let disks: usize = self.pegs.iter().map(Vec::len).sum();
        let mut placement = vec![0; disks];
        for (peg, sizes) in self.pegs.iter().enumerate() {
            for &size in sizes {
                if let Some(slot) = placement.get_mut(usize::from(size) - 1) {
                    *slot = peg;
                }
            }
        }
        placement
    }
}

impl State for Towers {
    /// Number of disks that sit on a different peg in `other`.
    ///
    /// One move relocates one disk, so this never overestimates.
    fn distance_from(&self, other: &Self) -> f64 {
        let misplaced = self
            .placement()
            .iter()
            .zip(other.placement())
            .filter(|(a, b)| **a != *b)
            .count();
        f64::from(u32::try_from(misplaced).unwrap_or(u32::MAX))
    }
}

/// Move the top disk of `from` onto `to`.
#[derive(Debug)]
pub struct MoveDisk {
    from: usize,
    to: usize,
    name: String,
}

impl MoveDisk {
    #[must_use]
    pub fn new(from: usize, to: usize) -> Self {
        Self {
            from,
            to,
            name: format!("{from}->{to}"),
        }
    }
}

impl Operator<Towers> for MoveDisk {
    fn name(&self) -> &str {
        &self.name
    }

    fn can_apply(&self, state: &Towers) -> bool {
        if self.to >= state.pegs.len() {
            return false;
        }
        match (state.top(self.from), state.top(self.to)) {
            (Some(disk), Some(target)) => disk < target,
            (Some(_), None) => true,
            (None, _) => false,
        }
    }

    fn apply(&self, state: &Towers) -> Towers {
        assert!(self.can_apply(state), "illegal hanoi move {}", self.name);
        let mut next = state.clone();
        if let Some(disk) = next.pegs[self.from].pop() {
            next.pegs[self.to].push(disk);
        }
        next
    }
}

/// `disks` disks on `pegs` pegs.
#[derive(Debug)]
pub struct Hanoi {
    id: String,
    disks: u8,
    pegs: usize,
}

impl Hanoi {
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidLayout`] for fewer than three pegs or
    /// no disks.
    pub fn new(disks: u8, pegs: usize) -> Result<Self, WorldError> {
        if pegs < 3 {
            return Err(WorldError::InvalidLayout {
                detail: format!("hanoi needs at least 3 pegs, got {pegs}"),
            });
        }
        if disks == 0 {
            return Err(WorldError::InvalidLayout {
                detail: "hanoi needs at least one disk".into(),
            });
        }
        Ok(Self {
            id: format!("hanoi_{disks}x{pegs}"),
            disks,
            pegs,
        })
    }

    /// Every disk stacked on `peg`, largest at the bottom.
    fn stacked_on(&self, peg: usize) -> Towers {
        let mut pegs = vec![Vec::new(); self.pegs];
        pegs[peg] = (1..=self.disks).rev().collect();
        Towers { pegs }
    }
}

impl World for Hanoi {
    type State = Towers;

    fn world_id(&self) -> &str {
        &self.id
    }

    fn initial_state(&self) -> Towers {
        self.stacked_on(0)
    }

    fn goal_state(&self) -> Towers {
        self.stacked_on(self.pegs - 1)
    }

    fn operators(&self) -> Vec<Arc<dyn Operator<Towers>>> {
        let mut operators: Vec<Arc<dyn Operator<Towers>>> = Vec::new();
        for from in 0..self.pegs {
            for to in (0..self.pegs).filter(|&to| to != from) {
                operators.push(Arc::new(MoveDisk::new(from, to)));
            }
        }
        operators
    }
}
