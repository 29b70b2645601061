//! Reusable observers for the TDoA solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the solvers in [`tdoa_solvers`].
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for cross-solver observers
//!   ([`HasObjective`], [`HasIteration`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`TraceObserver`]: reports every solver iteration as a `tracing` event
//!
//! [`Observer`]: tdoa_core::Observer
//! [`HasObjective`]: traits::HasObjective
//! [`HasIteration`]: traits::HasIteration
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod trace;

pub use trace::TraceObserver;
