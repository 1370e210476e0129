//! `Countdown`: combine numbers with `+ - * /` until the target appears.
//!
//! Each step takes two of the available numbers, removes them, and adds the
//! result of one operation. Operators are addressed by position in the
//! (always sorted) number list, one per operation and ordered pair of
//! distinct positions. Game rules:
//!
//! - `a - b` only when `a > b` (no zero or negative intermediates)
//! - `a / b` only when `b != 0` and `b` divides `a`
//! - `a + b` and `a * b` only when the result fits in `u64`
//!
//! A state is terminal as soon as the target is among its numbers.

use std::sync::Arc;

use statespace_kernel::contract::{Operator, State};

use crate::contract::{World, WorldError};

/// The numbers still available, plus the target they are played towards.
///
/// `numbers` is kept sorted, so equality ignores the order in which the
/// numbers were produced.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Numbers {
    numbers: Vec<u64>,
    target: u64,
}

impl Numbers {
    #[must_use]
    pub fn new(mut numbers: Vec<u64>, target: u64) -> Self {
        numbers.sort_unstable();
        Self { numbers, target }
    }

    #[must_use]
    pub fn numbers(&self) -> &[u64] {
        &self.numbers
    }

    #[must_use]
    pub fn target(&self) -> u64 {
        self.target
    }
}

impl State for Numbers {
    /// Gap between the target and the closest available number.
    #[allow(clippy::cast_precision_loss)]
    fn distance_from(&self, _other: &Self) -> f64 {
        self.numbers
            .iter()
            .map(|&n| n.abs_diff(self.target))
            .min()
            .unwrap_or(u64::MAX) as f64
    }

    fn is_goal(&self, _goal: &Self) -> bool {
        self.numbers.contains(&self.target)
    }
}

/// One of the four arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    #[must_use]
    pub const fn sign(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    #[must_use]
    pub fn from_sign(sign: char) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.sign() == sign)
    }

    /// `a op b`, or `None` when the game rules forbid it.
    #[must_use]
    pub fn process(self, a: u64, b: u64) -> Option<u64> {
        match self {
            Self::Add => a.checked_add(b),
            Self::Subtract => (a > b).then(|| a - b),
            Self::Multiply => a.checked_mul(b),
            Self::Divide => (b != 0 && a % b == 0).then(|| a / b),
        }
    }

    #[must_use]
    pub fn can_be_used(self, a: u64, b: u64) -> bool {
        self.process(a, b).is_some()
    }
}

/// Apply one operation to the numbers at two positions.
#[derive(Debug)]
pub struct Combine {
    operation: Operation,
    a: usize,
    b: usize,
    name: String,
}

impl Combine {
    /// Operator names read `<sign>[<a>,<b>]`, e.g. `*[1,4]`.
    #[must_use]
    pub fn new(operation: Operation, a: usize, b: usize) -> Self {
        Self {
            operation,
            a,
            b,
            name: format!("{}[{a},{b}]", operation.sign()),
        }
    }

    #[must_use]
    pub fn operation(&self) -> Operation {
        self.operation
    }

    #[must_use]
    pub fn positions(&self) -> (usize, usize) {
        (self.a, self.b)
    }

    fn operands(&self, state: &Numbers) -> Option<(u64, u64)> {
        Some((*state.numbers.get(self.a)?, *state.numbers.get(self.b)?))
    }
}

impl Operator<Numbers> for Combine {
    fn name(&self) -> &str {
        &self.name
    }

    fn can_apply(&self, state: &Numbers) -> bool {
        self.operands(state)
            .is_some_and(|(a, b)| self.operation.can_be_used(a, b))
    }

    fn apply(&self, state: &Numbers) -> Numbers {
        let result = self
            .operands(state)
            .and_then(|(a, b)| self.operation.process(a, b));
        let Some(result) = result else {
            panic!("{} not applicable to {:?}", self.name, state.numbers);
        };
        let mut numbers: Vec<u64> = state
            .numbers
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != self.a && i != self.b)
            .map(|(_, &n)| n)
            .collect();
        numbers.push(result);
        Numbers::new(numbers, state.target)
    }
}

/// A Countdown board.
#[derive(Debug)]
pub struct Countdown {
    id: String,
    numbers: Vec<u64>,
    target: u64,
}

impl Countdown {
    /// # Errors
    ///
    /// Returns [`WorldError::InvalidLayout`] for fewer than two numbers.
    pub fn new(numbers: Vec<u64>, target: u64) -> Result<Self, WorldError> {
        if numbers.len() < 2 {
            return Err(WorldError::InvalidLayout {
                detail: format!("countdown needs at least 2 numbers, got {}", numbers.len()),
            });
        }
        Ok(Self {
            id: format!("countdown_{target}"),
            numbers,
            target,
        })
    }

    /// `1 2 3 4 5 6`, target `21`.
    #[must_use]
    pub fn classic() -> Self {
        Self {
            id: "countdown_21".into(),
            numbers: (1..=6).collect(),
            target: 21,
        }
    }
}

impl World for Countdown {
    type State = Numbers;

    fn world_id(&self) -> &str {
        &self.id
    }

    fn initial_state(&self) -> Numbers {
        Numbers::new(self.numbers.clone(), self.target)
    }

    /// Only carries the target: terminal detection looks for the target
    /// number, not for equality with this state.
    fn goal_state(&self) -> Numbers {
        Numbers::new(self.numbers.clone(), self.target)
    }

    fn operators(&self) -> Vec<Arc<dyn Operator<Numbers>>> {
        let n = self.numbers.len();
        let mut operators: Vec<Arc<dyn Operator<Numbers>>> = Vec::new();
        for operation in Operation::ALL {
            for a in 0..n {
                for b in (0..n).filter(|&b| b != a) {
                    operators.push(Arc::new(Combine::new(operation, a, b)));
                }
            }
        }
        operators
    }
}
