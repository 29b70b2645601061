use std::fmt;

/// A pair of towers in a [`TdoaProblem`](crate::TdoaProblem), by canonical index.
///
/// Tower 1 is always the earliest arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TowerPair {
    OneTwo,
    OneThree,
    TwoThree,
}

impl fmt::Display for TowerPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::OneTwo => "1-2",
            Self::OneThree => "1-3",
            Self::TwoThree => "2-3",
        };
        f.write_str(label)
    }
}

/// Reasons a localization attempt can fail.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LocateError {
    #[error("expected exactly 3 tower measurements, got {count}")]
    InvalidInputCount { count: usize },

    #[error("measurement from tower {id:?} has a non-finite position or arrival time")]
    NonFiniteMeasurement { id: String },

    #[error("distance difference {delta} across towers {pair} exceeds their separation {baseline}")]
    PhysicallyImpossible {
        pair: TowerPair,
        delta: f64,
        baseline: f64,
    },

    #[error("towers are collinear or coincident (determinant {determinant:e})")]
    SingularGeometry { determinant: f64 },

    #[error("no candidate converged from {seeds} seeds")]
    NoConvergence { seeds: usize },

    #[error("candidate ({x}, {y}) is not finite or lies outside the acceptance bounds")]
    InvalidSolution { x: f64, y: f64 },
}
