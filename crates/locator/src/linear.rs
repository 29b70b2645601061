//! Closed-form solver for the linearized TDoA equations.
//!
//! With tower 1 translated to the origin, subtracting its squared-range
//! equation from those of towers 2 and 3 removes the quadratic term and leaves
//! a 2×2 linear system:
//!
//! ```text
//! 2·x2·x + 2·y2·y = x2² + y2² - d12²
//! 2·x3·x + 2·y3·y = x3² + y3² - d13²
//! ```
//!
//! Lengths are divided by the longer of the two baselines before solving so
//! that the determinant threshold does not depend on the size of the plane.

use crate::{Bounds, LinearConfig, LocateError, Position, TdoaProblem, TowerPair};

/// A linear solver estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearEstimate {
    /// The estimate, clamped to the operating bounds.
    pub position: Position,

    /// Sum of squared TDoA residuals at `position`, for diagnostics only.
    pub residual: f64,
}

/// Solves the linearized system.
///
/// # Errors
///
/// Returns [`LocateError::PhysicallyImpossible`] if `d12` or `d13` exceeds its
/// baseline, and [`LocateError::SingularGeometry`] if the towers coincide or
/// are (nearly) collinear.
pub fn solve(
    problem: &TdoaProblem,
    config: &LinearConfig,
    operating: &Bounds,
) -> Result<LinearEstimate, LocateError> {
    problem.check_pair(TowerPair::OneTwo)?;
    problem.check_pair(TowerPair::OneThree)?;

    let [t1, t2, t3] = *problem.towers();
    let scale = problem
        .baseline(TowerPair::OneTwo)
        .max(problem.baseline(TowerPair::OneThree));
    if scale <= 0.0 || scale.is_nan() {
        return Err(LocateError::SingularGeometry { determinant: 0.0 });
    }

    let (x2, y2) = ((t2.x - t1.x) / scale, (t2.y - t1.y) / scale);
    let (x3, y3) = ((t3.x - t1.x) / scale, (t3.y - t1.y) / scale);
    let d12 = problem.d12() / scale;
    let d13 = problem.d13() / scale;

    let (a, b, c, d) = (2.0 * x2, 2.0 * y2, 2.0 * x3, 2.0 * y3);
    let e = x2 * x2 + y2 * y2 - d12 * d12;
    let f = x3 * x3 + y3 * y3 - d13 * d13;

    let determinant = a * d - b * c;
    if determinant.abs() < config.determinant_tol {
        return Err(LocateError::SingularGeometry { determinant });
    }

    let x = (e * d - b * f) / determinant;
    let y = (a * f - e * c) / determinant;

    let position = operating.clamp(Position::new(t1.x + x * scale, t1.y + y * scale));
    Ok(LinearEstimate {
        position,
        residual: problem.residual(position),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn operating() -> Bounds {
        Bounds::square(100.0, 900.0)
    }

    fn problem_for(towers: [Position; 3], source: Position) -> TdoaProblem {
        let r = towers.map(|t| source.distance(&t));
        TdoaProblem::new(towers, r[1] - r[0], r[2] - r[0], 0.0)
    }

    #[test]
    fn equidistant_source_is_exact() {
        // The circumcenter of this triangle is (500, 540000 / 1400).
        let towers = [
            Position::new(100.0, 150.0),
            Position::new(900.0, 150.0),
            Position::new(500.0, 850.0),
        ];
        let problem = TdoaProblem::new(towers, 0.0, 0.0, 0.0);

        let estimate = solve(&problem, &LinearConfig::default(), &operating()).unwrap();

        let r = towers.map(|t| estimate.position.distance(&t));
        assert_relative_eq!(r[0], r[1], epsilon = 1e-9);
        assert_relative_eq!(r[0], r[2], epsilon = 1e-9);
        assert_relative_eq!(estimate.position.x, 500.0, epsilon = 1e-9);
        assert_relative_eq!(estimate.position.y, 540_000.0 / 1_400.0, epsilon = 1e-9);
        assert_relative_eq!(estimate.residual, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn collinear_towers_are_singular() {
        let towers = [
            Position::new(100.0, 500.0),
            Position::new(500.0, 500.0),
            Position::new(900.0, 500.0),
        ];
        let problem = problem_for(towers, Position::new(300.0, 300.0));

        let err = solve(&problem, &LinearConfig::default(), &operating()).unwrap_err();
        assert!(matches!(err, LocateError::SingularGeometry { .. }));
    }

    #[test]
    fn coincident_towers_are_singular() {
        let p = Position::new(400.0, 400.0);
        let problem = TdoaProblem::new([p, p, p], 0.0, 0.0, 0.0);

        let err = solve(&problem, &LinearConfig::default(), &operating()).unwrap_err();
        assert_eq!(err, LocateError::SingularGeometry { determinant: 0.0 });
    }

    #[test]
    fn impossible_deltas_are_rejected() {
        let towers = [
            Position::new(100.0, 100.0),
            Position::new(200.0, 100.0),
            Position::new(100.0, 900.0),
        ];
        let problem = TdoaProblem::new(towers, 150.0, 10.0, 0.0);

        let err = solve(&problem, &LinearConfig::default(), &operating()).unwrap_err();
        assert!(matches!(
            err,
            LocateError::PhysicallyImpossible {
                pair: TowerPair::OneTwo,
                ..
            }
        ));
    }

    #[test]
    fn output_is_clamped() {
        // Equidistant point of a thin triangle lies far outside the plane.
        let towers = [
            Position::new(100.0, 100.0),
            Position::new(900.0, 110.0),
            Position::new(500.0, 115.0),
        ];
        let problem = TdoaProblem::new(towers, 0.0, 0.0, 0.0);

        let estimate = solve(&problem, &LinearConfig::default(), &operating()).unwrap();

        assert!(operating().contains(estimate.position));
    }
}
