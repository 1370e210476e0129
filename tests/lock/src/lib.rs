//! Shared helpers for the cross-crate lock tests and fixture binaries.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod fixture;
pub mod soundness;
