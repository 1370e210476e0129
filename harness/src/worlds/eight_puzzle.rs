//! `EightPuzzle`: slide tiles on a 3x3 board with one blank.
//!
//! Tiles are `1..=8`, the blank is `0`, cells are row-major with `y = 0`
//! the first row. Each operator moves the blank one cell (`L` is `+x`, `U`
//! is `+y`, `R` is `-x`, `D` is `-y`) by swapping it with the tile there.

use std::sync::Arc;

use statespace_kernel::contract::{Operator, State};

use crate::contract::{World, WorldError};

const SIDE: usize = 3;
const CELLS: usize = SIDE * SIDE;

/// A board configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    tiles: [u8; CELLS],
}

impl Board {
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidLayout`] unless `tiles` is a permutation
    /// of `0..=8`.
    pub fn new(tiles: [u8; CELLS]) -> Result<Self, WorldError> {
        let mut seen = [false; CELLS];
        for &tile in &tiles {
            match seen.get_mut(usize::from(tile)) {
                Some(slot) if !*slot => *slot = true,
                _ => {
                    return Err(WorldError::InvalidLayout {
                        detail: format!("board {tiles:?} is not a permutation of 0..=8"),
                    })
                }
            }
        }
        Ok(Self { tiles })
    }

    #[must_use]
    pub fn tiles(&self) -> [u8; CELLS] {
        self.tiles
    }

    fn blank(&self) -> usize {
        self.tiles.iter().position(|&t| t == 0).unwrap_or(0)
    }
}

impl State for Board {
    /// Number of tiles (blank excluded) not on their cell in `other`.
    fn distance_from(&self, other: &Self) -> f64 {
        let misplaced = self
            .tiles
            .iter()
            .zip(other.tiles.iter())
            .filter(|(a, b)| **a != 0 && a != b)
            .count();
        f64::from(u8::try_from(misplaced).unwrap_or(u8::MAX))
    }
}

/// Direction the blank moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slide {
    L,
    U,
    R,
    D,
}

impl Slide {
    pub const ALL: [Self; 4] = [Self::L, Self::U, Self::R, Self::D];

    /// The cell the blank moves to, if it is on the board.
    fn target(self, blank: usize) -> Option<usize> {
        let (x, y) = (blank % SIDE, blank / SIDE);
        let (x, y) = match self {
            Self::L => (x + 1, y),
            Self::U => (x, y + 1),
            Self::R => (x.checked_sub(1)?, y),
            Self::D => (x, y.checked_sub(1)?),
        };
        (x < SIDE && y < SIDE).then_some(y * SIDE + x)
    }
}

impl Operator<Board> for Slide {
    #[allow(clippy::unnecessary_literal_bound)]
    fn name(&self) -> &str {
        match self {
            Self::L => "L",
            Self::U => "U",
            Self::R => "R",
            Self::D => "D",
        }
    }

    fn can_apply(&self, state: &Board) -> bool {
        self.target(state.blank()).is_some()
    }

    fn apply(&self, state: &Board) -> Board {
        let blank = state.blank();
        let Some(target) = self.target(blank) else {
            panic!("slide {self:?} leaves the board");
        };
        let mut next = *state;
        next.tiles.swap(blank, target);
        next
    }
}

/// An eight-puzzle instance.
#[derive(Debug)]
pub struct EightPuzzle {
    id: String,
    initial: Board,
    goal: Board,
}

impl EightPuzzle {
    #[must_use]
    pub fn new(id: impl Into<String>, initial: Board, goal: Board) -> Self {
        Self {
            id: id.into(),
            initial,
            goal,
        }
    }

    /// Solved board `1 2 3 / 4 5 6 / 7 8 _`.
    #[must_use]
    pub fn solved() -> Board {
        Board {
            tiles: [1, 2, 3, 4, 5, 6, 7, 8, 0],
        }
    }

    /// A fixed instance eight moves from solved.
    #[must_use]
    pub fn scrambled() -> Self {
        Self::new(
            "eight_puzzle",
            Board {
                tiles: [2, 3, 6, 1, 0, 4, 7, 5, 8],
            },
            Self::solved(),
        )
    }
}

impl World for EightPuzzle {
    type State = Board;

    fn world_id(&self) -> &str {
        &self.id
    }

    fn initial_state(&self) -> Board {
        self.initial
    }

    fn goal_state(&self) -> Board {
        self.goal
    }

    fn operators(&self) -> Vec<Arc<dyn Operator<Board>>> {
        Slide::ALL
            .into_iter()
            .map(|slide| Arc::new(slide) as Arc<dyn Operator<Board>>)
            .collect()
    }
}
