//! `Maze`: walk a grid of walls and paths in four directions.
//!
//! Layouts are written as rows of `#` (wall) and `.` (path). Row `y = 0`
//! is the first row given; `NORTH` is `+y`, `EAST` is `+x`. Stepping off the
//! grid or into a wall is not applicable.
//!
//! Distance is Euclidean, which never overestimates the number of
//! four-directional steps, so A* returns shortest paths.

use std::sync::Arc;

use statespace_kernel::contract::{Operator, State};

use crate::contract::{World, WorldError};

/// A grid cell the walker stands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl State for Position {
    fn distance_from(&self, other: &Self) -> f64 {
        f64::from(self.x - other.x).hypot(f64::from(self.y - other.y))
    }
}

/// Wall grid shared by every direction operator.
#[derive(Debug, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    walls: Vec<bool>,
}

impl Grid {
    /// Parse `#`/`.` rows into a grid.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidLayout`] if the rows are empty, ragged,
    /// or contain another character.
    pub fn parse(rows: &[&str]) -> Result<Self, WorldError> {
        let width = rows.first().map_or(0, |row| row.len());
        if width == 0 {
            return Err(WorldError::InvalidLayout {
                detail: "maze has no cells".into(),
            });
        }
        let mut walls = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(WorldError::InvalidLayout {
                    detail: format!("row {y} has {} cells, expected {width}", row.len()),
                });
            }
            for ch in row.chars() {
                match ch {
                    '#' => walls.push(true),
                    '.' => walls.push(false),
                    other => {
                        return Err(WorldError::InvalidLayout {
                            detail: format!("unexpected cell {other:?} in row {y}"),
                        })
                    }
                }
            }
        }
        let too_large = || WorldError::InvalidLayout {
            detail: "maze dimensions exceed i32".into(),
        };
        Ok(Self {
            width: i32::try_from(width).map_err(|_| too_large())?,
            height: i32::try_from(rows.len()).map_err(|_| too_large())?,
            walls,
        })
    }

    /// Whether `position` is on the grid and not a wall.
    #[must_use]
    pub fn is_open(&self, position: Position) -> bool {
        if !(0..self.width).contains(&position.x) || !(0..self.height).contains(&position.y) {
            return false;
        }
        let (Ok(x), Ok(y), Ok(width)) = (
            usize::try_from(position.x),
            usize::try_from(position.y),
            usize::try_from(self.width),
        ) else {
            return false;
        };
        !self.walls[y * width + x]
    }
}

/// The four orthogonal directions, in operator order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    East,
    North,
    West,
    South,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::East, Self::North, Self::West, Self::South];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::East => "EAST",
            Self::North => "NORTH",
            Self::West => "WEST",
            Self::South => "SOUTH",
        }
    }

    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::East => (1, 0),
            Self::North => (0, 1),
            Self::West => (-1, 0),
            Self::South => (0, -1),
        }
    }

    const fn step(self, from: Position) -> Position {
        let (dx, dy) = self.offset();
        Position::new(from.x + dx, from.y + dy)
    }
}

/// Move one cell in a fixed direction.
#[derive(Debug)]
pub struct Walk {
    direction: Direction,
    grid: Arc<Grid>,
}

impl Operator<Position> for Walk {
    fn name(&self) -> &str {
        self.direction.name()
    }

    fn can_apply(&self, state: &Position) -> bool {
        self.grid.is_open(self.direction.step(*state))
    }

    fn apply(&self, state: &Position) -> Position {
        assert!(
            self.can_apply(state),
            "{} blocked at ({}, {})",
            self.direction.name(),
            state.x,
            state.y
        );
        self.direction.step(*state)
    }
}

/// A maze with a fixed start and goal.
#[derive(Debug)]
pub struct Maze {
    id: String,
    grid: Arc<Grid>,
    start: Position,
    goal: Position,
}

impl Maze {
    /// Build a maze from a layout.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidLayout`] if the layout does not parse or
    /// the start or goal is not an open cell.
    pub fn new(
        id: impl Into<String>,
        rows: &[&str],
        start: Position,
        goal: Position,
    ) -> Result<Self, WorldError> {
        let grid = Grid::parse(rows)?;
        for (label, position) in [("start", start), ("goal", goal)] {
            if !grid.is_open(position) {
                return Err(WorldError::InvalidLayout {
                    detail: format!("{label} ({}, {}) is not an open cell", position.x, position.y),
                });
            }
        }
        Ok(Self {
            id: id.into(),
            grid: Arc::new(grid),
            start,
            goal,
        })
    }

    /// 5x5 room with a central pillar: (1,1) to (3,3), shortest path 4.
    ///
    /// # Panics
    ///
    /// Never: the layout is a checked-in constant.
    #[must_use]
    pub fn small() -> Self {
        Self::new(
            "maze_5x5",
            &["#####", "#...#", "#.#.#", "#...#", "#####"],
            Position::new(1, 1),
            Position::new(3, 3),
        )
        .expect("built-in 5x5 maze layout is valid")
    }

    /// 7x7 corridors: (1,1) to (5,5), shortest path 8.
    ///
    /// # Panics
    ///
    /// Never: the layout is a checked-in constant.
    #[must_use]
    pub fn corridors() -> Self {
        Self::new(
            "maze_7x7",
            &[
                "#######", "#.....#", "#.###.#", "#.#...#", "#.#.#.#", "#...#.#", "#######",
            ],
            Position::new(1, 1),
            Position::new(5, 5),
        )
        .expect("built-in 7x7 maze layout is valid")
    }

    /// U-shaped corridor: (1,1) to (3,1) around a wall, shortest path 6.
    /// Every first step moves away from the goal.
    ///
    /// # Panics
    ///
    /// Never: the layout is a checked-in constant.
    #[must_use]
    pub fn u_bend() -> Self {
        Self::new(
            "maze_u_bend",
            &["#####", "#.#.#", "#.#.#", "#...#", "#####"],
            Position::new(1, 1),
            Position::new(3, 1),
        )
        .expect("built-in u-bend maze layout is valid")
    }
}

impl World for Maze {
    type State = Position;

    fn world_id(&self) -> &str {
        &self.id
    }

    fn initial_state(&self) -> Position {
        self.start
    }

    fn goal_state(&self) -> Position {
        self.goal
    }

    fn operators(&self) -> Vec<Arc<dyn Operator<Position>>> {
        Direction::ALL
            .into_iter()
            .map(|direction| {
                Arc::new(Walk {
                    direction,
                    grid: Arc::clone(&self.grid),
                }) as Arc<dyn Operator<Position>>
            })
            .collect()
    }
}
