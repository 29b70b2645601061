use std::convert::Infallible;

use tdoa_core::{Gradient, Objective};

use crate::{Bounds, NonlinearConfig, Position, TdoaProblem, TowerPair};

/// Scaled TDoA least-squares objective with soft boundary and centroid terms.
///
/// ```text
/// f(p) = r1² + r2² + w_b·B(p)/s² + w_r·|p - c|²/s²
/// ```
///
/// where `r1`, `r2` are the TDoA residuals divided by `s`, the mean pairwise
/// tower separation, `B` is the squared distance by which `p` strays past the
/// operating bounds grown by the boundary margin, and `c` is the tower
/// centroid.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TdoaObjective<'a> {
    problem: &'a TdoaProblem,
    inv_scale: f64,
    centroid: Position,
    soft: Bounds,
    boundary_weight: f64,
    regularization_weight: f64,
}

impl<'a> TdoaObjective<'a> {
    /// Returns `None` when the towers coincide and there is no length scale.
    pub(crate) fn new(
        problem: &'a TdoaProblem,
        config: &NonlinearConfig,
        operating: &Bounds,
    ) -> Option<Self> {
        let scale = [TowerPair::OneTwo, TowerPair::OneThree, TowerPair::TwoThree]
            .map(|pair| problem.baseline(pair))
            .iter()
            .sum::<f64>()
            / 3.0;
        if scale <= 0.0 || !scale.is_finite() {
            return None;
        }

        Some(Self {
            problem,
            inv_scale: scale.recip(),
            centroid: Position::centroid(problem.towers()),
            soft: operating.outset(config.boundary_margin),
            boundary_weight: config.boundary_weight,
            regularization_weight: config.regularization_weight,
        })
    }

    pub(crate) fn centroid(&self) -> Position {
        self.centroid
    }

    fn evaluate(&self, x: &[f64; 2]) -> (f64, [f64; 2]) {
        let p = Position::from(*x);
        let [t1, t2, t3] = *self.problem.towers();
        let inv2 = self.inv_scale * self.inv_scale;

        let (n1, u1) = unit(p, t1);
        let (n2, u2) = unit(p, t2);
        let (n3, u3) = unit(p, t3);
        let r1 = ((n2 - n1) - self.problem.d12()) * self.inv_scale;
        let r2 = ((n3 - n1) - self.problem.d13()) * self.inv_scale;

        let ox = overshoot(p.x, self.soft.x_min, self.soft.x_max);
        let oy = overshoot(p.y, self.soft.y_min, self.soft.y_max);
        let boundary = self.boundary_weight * inv2;

        let dx = p.x - self.centroid.x;
        let dy = p.y - self.centroid.y;
        let regularization = self.regularization_weight * inv2;

        let value = r1 * r1
            + r2 * r2
            + boundary * (ox * ox + oy * oy)
            + regularization * (dx * dx + dy * dy);

        let gradient = [
            2.0 * self.inv_scale * (r1 * (u2[0] - u1[0]) + r2 * (u3[0] - u1[0]))
                + 2.0 * boundary * ox
                + 2.0 * regularization * dx,
            2.0 * self.inv_scale * (r1 * (u2[1] - u1[1]) + r2 * (u3[1] - u1[1]))
                + 2.0 * boundary * oy
                + 2.0 * regularization * dy,
        ];

        (value, gradient)
    }
}

impl Objective<2> for TdoaObjective<'_> {
    type Error = Infallible;

    fn value(&self, x: &[f64; 2]) -> Result<f64, Self::Error> {
        Ok(self.evaluate(x).0)
    }
}

impl Gradient<2> for TdoaObjective<'_> {
    fn gradient(&self, x: &[f64; 2]) -> Result<[f64; 2], Self::Error> {
        Ok(self.evaluate(x).1)
    }

    fn value_and_gradient(&self, x: &[f64; 2]) -> Result<(f64, [f64; 2]), Self::Error> {
        Ok(self.evaluate(x))
    }
}

/// Distance from `tower` to `p` and the unit vector pointing from `tower` to `p`.
///
/// The unit vector is zero when `p` sits exactly on the tower.
fn unit(p: Position, tower: Position) -> (f64, [f64; 2]) {
    let d = p.distance(&tower);
    if d > 0.0 {
        (d, [(p.x - tower.x) / d, (p.y - tower.y) / d])
    } else {
        (0.0, [0.0, 0.0])
    }
}

/// Signed distance past `[lo, hi]`, zero inside.
fn overshoot(v: f64, lo: f64, hi: f64) -> f64 {
    if v < lo {
        v - lo
    } else if v > hi {
        v - hi
    } else {
        0.0
    }
}
