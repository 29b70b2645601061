//! Solvers for optimization problems: minimizing an objective.
//!
//! An [`Objective`] maps solver variables `x: [f64; N]` to a scalar. Solvers in
//! this module search for an `x` that drives that scalar below a configured
//! threshold.
//!
//! # Solvers
//!
//! - [`nelder_mead`]: derivative-free simplex search, robust from poor
//!   starting points
//! - [`bfgs`]: quasi-Newton search for a [`Gradient`] objective, fast near a
//!   minimum
//!
//! # Convergence
//!
//! Both solvers report [`Status::Converged`] only once the objective value
//! drops below the configured `objective_threshold`. A search that stops
//! making progress above the threshold reports [`Status::Stalled`] instead,
//! so callers can treat "converged" as "good enough to use".
//!
//! [`Objective`]: tdoa_core::Objective
//! [`Gradient`]: tdoa_core::Gradient

mod error;
mod evaluate;
mod point;
mod solution;
mod vector;

pub use error::Error;
pub use evaluate::evaluate;
pub use point::Point;
pub use solution::{Solution, Status};

pub mod bfgs;
pub mod nelder_mead;
