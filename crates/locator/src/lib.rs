//! Locates a signal source on a plane from the times three towers heard it.
//!
//! The [`Locator`] orders the measurements by arrival, converts arrival
//! deltas to distance differences, and runs a solver cascade:
//!
//! 1. [`nonlinear`] multi-start minimization (Nelder-Mead then BFGS), seeded
//!    by the closed-form estimate when one exists
//! 2. [`linear`] closed-form estimate as a fallback
//!
//! Every candidate must pass [`validate`] and is clamped to the operating
//! rectangle before being reported as a [`Detection`].
//!
//! # Example
//!
//! ```
//! use tdoa_locator::{Locator, Position, TowerMeasurement};
//!
//! let locator = Locator::default();
//! let detection = locator.locate(&[
//!     TowerMeasurement::new("a", Position::new(100.0, 100.0), 1_000.0),
//!     TowerMeasurement::new("b", Position::new(900.0, 100.0), 1_000.0),
//!     TowerMeasurement::new("c", Position::new(500.0, 900.0), 1_000.0),
//! ]);
//! assert!(detection.is_solved());
//! ```

mod candidate;
mod config;
mod detection;
mod error;
mod geometry;
mod locator;
mod measurement;
mod problem;
mod validate;

pub mod linear;
pub mod nonlinear;
pub mod synthesize;

pub use candidate::{Candidate, Method};
pub use config::{ConfigError, LinearConfig, LocatorConfig, NonlinearConfig, SPEED_OF_SOUND};
pub use detection::{Detection, DetectionRecord, SENTINEL};
pub use error::{LocateError, TowerPair};
pub use geometry::{Bounds, Position};
pub use locator::Locator;
pub use measurement::{SignalBundle, Tower, TowerMeasurement};
pub use problem::TdoaProblem;
pub use validate::validate;
