//! State-space kernel: the contract every search domain implements.
//!
//! # API Surface
//!
//! - [`contract::State`] / [`contract::Operator`] -- what a domain supplies
//! - [`arena::StateArena`] -- the ancestor tree grown during one search run
//! - [`trail::Trail`] -- a detached root-to-terminal chain handed back to callers
//!
//! # Module Dependency Direction
//!
//! `contract` ← `arena` ← `trail`
//!
//! One-way only. The kernel knows nothing about fringes, strategies or
//! registries; those live in `statespace_search`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arena;
pub mod contract;
pub mod trail;
