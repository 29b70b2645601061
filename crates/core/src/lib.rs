//! Core traits for the TDoA workspace.
//!
//! This crate defines the shared abstractions that solvers, observers, and the
//! locator build on:
//!
//! - [`Objective`]: maps solver variables `x: [f64; N]` to a scalar to minimize
//! - [`Gradient`]: an objective that also provides its analytic gradient
//! - [`Observer`]: receives solver events and optionally returns control actions

mod objective;
mod observer;

pub use objective::{Gradient, Objective};
pub use observer::Observer;
