use crate::Position;

/// A fixed receiver on the plane.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tower {
    pub id: String,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub position: Position,
}

impl Tower {
    #[must_use]
    pub fn new(id: impl Into<String>, position: Position) -> Self {
        Self {
            id: id.into(),
            position,
        }
    }

    /// Records that this tower heard a signal at `arrival_ms`.
    #[must_use]
    pub fn hear(&self, arrival_ms: f64) -> TowerMeasurement {
        TowerMeasurement {
            id: self.id.clone(),
            position: self.position,
            arrival_ms,
        }
    }
}

/// One tower's report of when it heard a signal.
///
/// Serialized as `{ "id", "x", "y", "heard_at" }`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TowerMeasurement {
    pub id: String,

    #[cfg_attr(feature = "serde", serde(flatten))]
    pub position: Position,

    /// Arrival time in milliseconds since an arbitrary shared epoch.
    #[cfg_attr(feature = "serde", serde(rename = "heard_at"))]
    pub arrival_ms: f64,
}

impl TowerMeasurement {
    #[must_use]
    pub fn new(id: impl Into<String>, position: Position, arrival_ms: f64) -> Self {
        Self {
            id: id.into(),
            position,
            arrival_ms,
        }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.arrival_ms.is_finite()
    }
}

/// The reports gathered for a single emitted signal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignalBundle {
    /// Emission time as reported by the source, in milliseconds.
    ///
    /// Informational only; the locator never uses it.
    pub signal_timestamp: f64,

    pub towers: Vec<TowerMeasurement>,
}
