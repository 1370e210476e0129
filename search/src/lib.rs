//! Statespace Search: strategies that find a path through a state space.
//!
//! This crate depends only on `statespace_kernel`. It does NOT depend on
//! `statespace_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! statespace_kernel  ←  statespace_search  ←  statespace_harness
//! (contract, arena)     (fringe, strategies)   (worlds, reports, runner)
//! ```
//!
//! # Key types
//!
//! - [`space::StateSpace`]: initial state, goal, operators and algorithm choice
//! - [`strategy::Strategy`]: `DFS`, `BFS`, `GREEDY`, `A_STAR`, `GRADIENT`, `FULL_RANDOM`
//! - [`registry`]: name lookup over the built-in strategies
//! - [`policy::SearchPolicy`]: budgets, random seed and gradient filter
//! - [`search::Solution`]: solution trail plus [`search::SearchStats`]
//! - [`error::SearchError`]: every way a solve can fail

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod frontier;
pub mod gradient;
pub mod policy;
pub mod random_walk;
pub mod registry;
pub mod search;
pub mod space;
pub mod strategy;
