use crate::{LocateError, Method, Position};

/// Coordinate and timestamp value that marks a failed localization in a
/// [`DetectionRecord`].
pub const SENTINEL: f64 = -1.0;

/// The outcome of one localization attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Detection {
    /// A position estimate inside the operating bounds.
    Solved {
        position: Position,

        /// Arrival time at the earliest tower, in milliseconds.
        timestamp: f64,

        /// The stage that produced `position`.
        method: Method,

        /// Score of the chosen candidate; see [`Candidate::residual`](crate::Candidate::residual).
        residual: f64,
    },

    /// Every stage failed; `reason` is the last failure in the cascade.
    Unsolved { reason: LocateError },
}

impl Detection {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        matches!(self, Self::Solved { .. })
    }

    #[must_use]
    pub fn position(&self) -> Option<Position> {
        match self {
            Self::Solved { position, .. } => Some(*position),
            Self::Unsolved { .. } => None,
        }
    }

    #[must_use]
    pub fn timestamp(&self) -> Option<f64> {
        match self {
            Self::Solved { timestamp, .. } => Some(*timestamp),
            Self::Unsolved { .. } => None,
        }
    }

    /// Flattens into the `{ x, y, timestamp }` record consumed downstream,
    /// encoding failure with [`SENTINEL`] in every field.
    #[must_use]
    pub fn to_record(&self) -> DetectionRecord {
        match self {
            Self::Solved {
                position,
                timestamp,
                ..
            } => DetectionRecord {
                x: position.x,
                y: position.y,
                timestamp: *timestamp,
            },
            Self::Unsolved { .. } => DetectionRecord::sentinel(),
        }
    }
}

/// Flat detection record for collaborators without a failure channel.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DetectionRecord {
    pub x: f64,
    pub y: f64,
    pub timestamp: f64,
}

impl DetectionRecord {
    #[must_use]
    pub const fn sentinel() -> Self {
        Self {
            x: SENTINEL,
            y: SENTINEL,
            timestamp: SENTINEL,
        }
    }

    /// Returns true if every field holds [`SENTINEL`].
    #[must_use]
    pub fn is_sentinel(&self) -> bool {
        *self == Self::sentinel()
    }
}
