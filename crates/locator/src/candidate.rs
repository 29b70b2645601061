use std::fmt;

use crate::Position;

/// Which solver stage produced a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Method {
    /// Nonlinear broad search.
    NelderMead,

    /// Nonlinear refinement.
    Bfgs,

    /// Closed-form linear fallback.
    Linear,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NelderMead => "nelder_mead",
            Self::Bfgs => "bfgs",
            Self::Linear => "linear",
        };
        f.write_str(name)
    }
}

/// A validated position with its score and provenance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub position: Position,

    /// Objective value for nonlinear candidates, sum of squared TDoA
    /// residuals for linear ones. Lower is better.
    pub residual: f64,

    pub method: Method,
}
