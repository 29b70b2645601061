use uom::si::{
    f64::{Length, Time, Velocity},
    length::meter,
    time::millisecond,
};

use crate::{LocateError, Position, TowerMeasurement, TowerPair};

/// Relative slack allowed when comparing a distance difference to its
/// baseline, so that exact measurements on a baseline extension survive
/// floating-point rounding.
const BASELINE_SLACK: f64 = 1e-9;

/// Three tower positions and their distance differences, canonicalized so that
/// tower 1 is the earliest arrival.
///
/// `d12` and `d13` are the extra distances the signal travelled to reach
/// towers 2 and 3 compared to tower 1, so both are non-negative when built
/// from measurements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TdoaProblem {
    towers: [Position; 3],
    d12: f64,
    d13: f64,
    reference_ms: f64,
}

impl TdoaProblem {
    /// Creates a problem from canonical towers and distance differences.
    #[must_use]
    pub fn new(towers: [Position; 3], d12: f64, d13: f64, reference_ms: f64) -> Self {
        Self {
            towers,
            d12,
            d13,
            reference_ms,
        }
    }

    /// Orders measurements by arrival and converts arrival deltas to distances.
    ///
    /// The input is not modified; sorting happens on a view.
    /// Measurements with equal arrival times keep their input order.
    ///
    /// # Errors
    ///
    /// Returns [`LocateError::InvalidInputCount`] unless there are exactly three
    /// measurements, and [`LocateError::NonFiniteMeasurement`] if any position
    /// or arrival time is NaN or infinite.
    pub fn from_measurements(
        measurements: &[TowerMeasurement],
        propagation_speed: Velocity,
    ) -> Result<Self, LocateError> {
        let [a, b, c] = measurements else {
            return Err(LocateError::InvalidInputCount {
                count: measurements.len(),
            });
        };

        if let Some(bad) = measurements.iter().find(|m| !m.is_finite()) {
            return Err(LocateError::NonFiniteMeasurement { id: bad.id.clone() });
        }

        let mut ordered = [a, b, c];
        ordered.sort_by(|lhs, rhs| lhs.arrival_ms.total_cmp(&rhs.arrival_ms));
        let [first, second, third] = ordered;

        let distance = |later: &TowerMeasurement| -> f64 {
            let delay = Time::new::<millisecond>(later.arrival_ms - first.arrival_ms);
            let length: Length = propagation_speed * delay;
            length.get::<meter>()
        };

        Ok(Self {
            towers: [first.position, second.position, third.position],
            d12: distance(second),
            d13: distance(third),
            reference_ms: first.arrival_ms,
        })
    }

    /// Tower positions in canonical order.
    #[must_use]
    pub fn towers(&self) -> &[Position; 3] {
        &self.towers
    }

    /// Distance difference between tower 2 and tower 1.
    #[must_use]
    pub fn d12(&self) -> f64 {
        self.d12
    }

    /// Distance difference between tower 3 and tower 1.
    #[must_use]
    pub fn d13(&self) -> f64 {
        self.d13
    }

    /// Distance difference between tower 3 and tower 2.
    #[must_use]
    pub fn d23(&self) -> f64 {
        self.d13 - self.d12
    }

    /// Arrival time at tower 1, in milliseconds.
    #[must_use]
    pub fn reference_ms(&self) -> f64 {
        self.reference_ms
    }

    /// The two towers of `pair`.
    #[must_use]
    pub fn endpoints(&self, pair: TowerPair) -> (Position, Position) {
        let [t1, t2, t3] = self.towers;
        match pair {
            TowerPair::OneTwo => (t1, t2),
            TowerPair::OneThree => (t1, t3),
            TowerPair::TwoThree => (t2, t3),
        }
    }

    /// The measured distance difference across `pair`.
    #[must_use]
    pub fn delta(&self, pair: TowerPair) -> f64 {
        match pair {
            TowerPair::OneTwo => self.d12,
            TowerPair::OneThree => self.d13,
            TowerPair::TwoThree => self.d23(),
        }
    }

    /// Separation between the two towers of `pair`.
    #[must_use]
    pub fn baseline(&self, pair: TowerPair) -> f64 {
        let (a, b) = self.endpoints(pair);
        a.distance(&b)
    }

    /// Checks that the distance difference across `pair` does not exceed
    /// the separation of its towers.
    ///
    /// # Errors
    ///
    /// Returns [`LocateError::PhysicallyImpossible`] if it does.
    pub fn check_pair(&self, pair: TowerPair) -> Result<(), LocateError> {
        let delta = self.delta(pair);
        let baseline = self.baseline(pair);
        if delta.abs() > baseline * (1.0 + BASELINE_SLACK) {
            return Err(LocateError::PhysicallyImpossible {
                pair,
                delta,
                baseline,
            });
        }
        Ok(())
    }

    /// TDoA residuals `[r1, r2]` at `p`, in plane units.
    ///
    /// `r1 = (|p - T2| - |p - T1|) - d12` and `r2 = (|p - T3| - |p - T1|) - d13`.
    #[must_use]
    pub fn residuals(&self, p: Position) -> [f64; 2] {
        let [t1, t2, t3] = self.towers;
        let r1 = p.distance(&t1);
        [
            (p.distance(&t2) - r1) - self.d12,
            (p.distance(&t3) - r1) - self.d13,
        ]
    }

    /// Sum of squared TDoA residuals at `p`.
    #[must_use]
    pub fn residual(&self, p: Position) -> f64 {
        let [r1, r2] = self.residuals(p);
        r1 * r1 + r2 * r2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::velocity::meter_per_second;

    fn speed() -> Velocity {
        Velocity::new::<meter_per_second>(343.0)
    }

    fn measurement(id: &str, x: f64, y: f64, arrival_ms: f64) -> TowerMeasurement {
        TowerMeasurement::new(id, Position::new(x, y), arrival_ms)
    }

    #[test]
    fn orders_by_arrival_and_converts_to_distance() {
        let measurements = vec![
            measurement("c", 500.0, 900.0, 1_002.0),
            measurement("a", 100.0, 100.0, 1_000.0),
            measurement("b", 900.0, 100.0, 1_001.0),
        ];

        let problem = TdoaProblem::from_measurements(&measurements, speed()).unwrap();

        assert_eq!(
            problem.towers(),
            &[
                Position::new(100.0, 100.0),
                Position::new(900.0, 100.0),
                Position::new(500.0, 900.0),
            ]
        );
        // 1 ms at 343 m/s is 0.343 m.
        assert_relative_eq!(problem.d12(), 0.343, epsilon = 1e-12);
        assert_relative_eq!(problem.d13(), 0.686, epsilon = 1e-12);
        assert_relative_eq!(problem.d23(), 0.343, epsilon = 1e-12);
        assert_relative_eq!(problem.reference_ms(), 1_000.0);

        // The caller's slice is untouched.
        assert_eq!(measurements[0].id, "c");
    }

    #[test]
    fn ties_keep_input_order() {
        let measurements = [
            measurement("x", 0.0, 0.0, 5.0),
            measurement("y", 10.0, 0.0, 5.0),
            measurement("z", 0.0, 10.0, 4.0),
        ];

        let problem = TdoaProblem::from_measurements(&measurements, speed()).unwrap();

        assert_eq!(problem.towers()[0], Position::new(0.0, 10.0));
        assert_eq!(problem.towers()[1], Position::new(0.0, 0.0));
        assert_eq!(problem.towers()[2], Position::new(10.0, 0.0));
    }

    #[test]
    fn rejects_wrong_counts() {
        let three = [
            measurement("a", 0.0, 0.0, 0.0),
            measurement("b", 1.0, 0.0, 0.0),
            measurement("c", 0.0, 1.0, 0.0),
        ];

        for count in [0, 1, 2] {
            let err = TdoaProblem::from_measurements(&three[..count], speed()).unwrap_err();
            assert_eq!(err, LocateError::InvalidInputCount { count });
        }

        let four = [three.as_slice(), &three[..1]].concat();
        let err = TdoaProblem::from_measurements(&four, speed()).unwrap_err();
        assert_eq!(err, LocateError::InvalidInputCount { count: 4 });
    }

    #[test]
    fn rejects_non_finite_measurements() {
        let measurements = [
            measurement("a", 0.0, 0.0, 0.0),
            measurement("b", f64::NAN, 0.0, 0.0),
            measurement("c", 0.0, 1.0, f64::INFINITY),
        ];

        let err = TdoaProblem::from_measurements(&measurements, speed()).unwrap_err();
        assert_eq!(
            err,
            LocateError::NonFiniteMeasurement {
                id: "b".to_string()
            }
        );
    }

    #[test]
    fn check_pair_flags_impossible_deltas() {
        let towers = [
            Position::new(0.0, 0.0),
            Position::new(100.0, 0.0),
            Position::new(0.0, 100.0),
        ];

        let ok = TdoaProblem::new(towers, 100.0, 50.0, 0.0);
        assert!(ok.check_pair(TowerPair::OneTwo).is_ok());
        assert!(ok.check_pair(TowerPair::OneThree).is_ok());
        assert!(ok.check_pair(TowerPair::TwoThree).is_ok());

        let bad = TdoaProblem::new(towers, 100.5, 0.0, 0.0);
        assert!(matches!(
            bad.check_pair(TowerPair::OneTwo),
            Err(LocateError::PhysicallyImpossible {
                pair: TowerPair::OneTwo,
                ..
            })
        ));
    }

    #[test]
    fn residuals_vanish_at_the_source() {
        let towers = [
            Position::new(100.0, 100.0),
            Position::new(900.0, 100.0),
            Position::new(500.0, 900.0),
        ];
        let source = Position::new(300.0, 400.0);
        let r = towers.map(|t| source.distance(&t));
        let problem = TdoaProblem::new(towers, r[1] - r[0], r[2] - r[0], 0.0);

        assert_relative_eq!(problem.residual(source), 0.0, epsilon = 1e-20);
        assert!(problem.residual(Position::new(500.0, 500.0)) > 1.0);
    }
}
