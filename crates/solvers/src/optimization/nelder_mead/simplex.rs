use std::array;

use tdoa_core::Objective;

use crate::optimization::{Error, Point, evaluate, vector};

/// The `N + 1` vertices of a Nelder-Mead simplex.
///
/// After [`Simplex::order`], vertices are sorted by objective so that index 0
/// is the best and the last index is the worst. Ties keep their previous
/// relative order.
pub(super) struct Simplex<const N: usize> {
    vertices: Vec<Point<N>>,
}

impl<const N: usize> Simplex<N> {
    /// Builds the initial simplex: `x0` plus one vertex per axis offset by `step`.
    pub(super) fn new<F: Objective<N>>(objective: &F, x0: [f64; N], step: f64) -> Result<Self, Error> {
        let mut vertices = Vec::with_capacity(N + 1);
        vertices.push(evaluate(objective, x0)?);
        for axis in 0..N {
            let mut x = x0;
            x[axis] += step;
            vertices.push(evaluate(objective, x)?);
        }

        let mut simplex = Self { vertices };
        simplex.order();
        Ok(simplex)
    }

    pub(super) fn order(&mut self) {
        self.vertices
            .sort_by(|a, b| a.objective.total_cmp(&b.objective));
    }

    pub(super) fn vertices(&self) -> &[Point<N>] {
        &self.vertices
    }

    pub(super) fn best(&self) -> Point<N> {
        self.vertices[0]
    }

    pub(super) fn worst(&self) -> Point<N> {
        self.vertices[N]
    }

    pub(super) fn second_worst(&self) -> Point<N> {
        self.vertices[N.saturating_sub(1)]
    }

    /// Centroid of every vertex except the worst.
    pub(super) fn centroid(&self) -> [f64; N] {
        let count = N as f64;
        array::from_fn(|i| self.vertices[..N].iter().map(|v| v.x[i]).sum::<f64>() / count)
    }

    /// Largest distance from the best vertex to any other vertex.
    pub(super) fn diameter(&self) -> f64 {
        let best = self.vertices[0].x;
        self.vertices[1..]
            .iter()
            .map(|v| vector::norm(&vector::sub(&v.x, &best)))
            .fold(0.0, f64::max)
    }

    pub(super) fn replace_worst(&mut self, point: Point<N>) {
        self.vertices[N] = point;
    }

    /// Moves every vertex toward the best one by `factor` and re-evaluates.
    pub(super) fn shrink<F: Objective<N>>(&mut self, objective: &F, factor: f64) -> Result<(), Error> {
        let best = self.vertices[0].x;
        for vertex in &mut self.vertices[1..] {
            let offset = vector::sub(&vertex.x, &best);
            *vertex = evaluate(objective, vector::add_scaled(&best, factor, &offset))?;
        }
        Ok(())
    }
}
