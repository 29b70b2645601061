//! Numerical solvers for the TDoA workspace.
//!
//! Solvers are plain functions over the problem traits in [`tdoa_core`]. The
//! caller picks a method by calling its module directly; there is no runtime
//! strategy object.

pub mod optimization;
