//! Arrival times a source would produce at a set of towers.
//!
//! Useful for driving a [`Locator`](crate::Locator) end to end without field
//! data.

use uom::si::{
    f64::{Length, Time, Velocity},
    length::meter,
    time::millisecond,
};

use crate::{Position, Tower, TowerMeasurement};

/// How propagation delays are rounded before being added to the emission time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Quantization {
    /// Keep full precision.
    #[default]
    Exact,

    /// Truncate each delay toward zero to whole milliseconds, like a clock
    /// with millisecond ticks.
    WholeMillis,
}

/// Returns one measurement per tower for a signal emitted at `source`.
///
/// Measurements are in `towers` order.
#[must_use]
pub fn arrivals(
    source: Position,
    emitted_at_ms: f64,
    towers: &[Tower],
    speed: Velocity,
    quantization: Quantization,
) -> Vec<TowerMeasurement> {
    towers
        .iter()
        .map(|tower| {
            let distance = Length::new::<meter>(source.distance(&tower.position));
            let delay: Time = distance / speed;
            let delay_ms = match quantization {
                Quantization::Exact => delay.get::<millisecond>(),
                Quantization::WholeMillis => delay.get::<millisecond>().trunc(),
            };
            tower.hear(emitted_at_ms + delay_ms)
        })
        .collect()
}
