//! Shared fixtures for the end-to-end tests.

use tdoa_locator::{
    Position, SPEED_OF_SOUND, Tower, TowerMeasurement,
    synthesize::{self, Quantization},
};
use uom::si::{f64::Velocity, velocity::meter_per_second};

/// Emission time used by every synthesized signal, in milliseconds.
pub const EMITTED_AT_MS: f64 = 5_000.0;

/// The reference deployment: three towers spread across a 1000×1000 plane.
#[must_use]
pub fn reference_towers() -> [Tower; 3] {
    [
        Tower::new("tower-1", Position::new(100.0, 100.0)),
        Tower::new("tower-2", Position::new(900.0, 100.0)),
        Tower::new("tower-3", Position::new(500.0, 900.0)),
    ]
}

/// Exact arrival times at `towers` for a signal from `source`.
#[must_use]
pub fn heard(towers: &[Tower], source: Position) -> Vec<TowerMeasurement> {
    synthesize::arrivals(
        source,
        EMITTED_AT_MS,
        towers,
        speed_of_sound(),
        Quantization::Exact,
    )
}

#[must_use]
pub fn speed_of_sound() -> Velocity {
    Velocity::new::<meter_per_second>(SPEED_OF_SOUND)
}

