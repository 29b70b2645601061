use std::array;

use crate::optimization::vector;

/// Inverse Hessian approximation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct InverseHessian<const N: usize> {
    h: [[f64; N]; N],
    updated: bool,
}

impl<const N: usize> InverseHessian<N> {
    pub(super) fn identity() -> Self {
        Self {
            h: array::from_fn(|i| array::from_fn(|j| if i == j { 1.0 } else { 0.0 })),
            updated: false,
        }
    }

    /// Returns the quasi-Newton direction `-H·g`.
    pub(super) fn direction(&self, g: &[f64; N]) -> [f64; N] {
        array::from_fn(|i| -vector::dot(&self.h[i], g))
    }

    /// Applies the BFGS update for step `s` and gradient change `y`.
    ///
    /// Updates with non-positive curvature (`s·y <= 0`) are skipped to keep
    /// `H` positive definite. Before the first update, `H` is rescaled to
    /// `(s·y / y·y)·I`.
    pub(super) fn update(&mut self, s: &[f64; N], y: &[f64; N]) {
        let sy = vector::dot(s, y);
        let threshold = f64::EPSILON * vector::norm(s) * vector::norm(y);
        if !sy.is_finite() || sy <= threshold {
            return;
        }

        if !self.updated {
            *self = Self::identity();
            let scale = sy / vector::dot(y, y);
            for i in 0..N {
                self.h[i][i] = scale;
            }
            self.updated = true;
        }

        let rho = 1.0 / sy;
        let hy: [f64; N] = array::from_fn(|i| vector::dot(&self.h[i], y));
        let yhy = vector::dot(y, &hy);

        // H' = H - rho (H y sᵀ + s yᵀ H) + (rho² yᵀHy + rho) s sᵀ, with H symmetric.
        let coeff = rho * rho * yhy + rho;
        for i in 0..N {
            for j in 0..N {
                self.h[i][j] += coeff * s[i] * s[j] - rho * (hy[i] * s[j] + s[i] * hy[j]);
            }
        }
    }
}
