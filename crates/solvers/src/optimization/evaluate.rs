use tdoa_core::Objective;

use super::{Error, Point};

/// Evaluates the objective at `x`.
///
/// Non-finite objective values are mapped to `f64::INFINITY` so that every
/// comparison ranks them behind any finite value.
///
/// # Errors
///
/// Returns [`Error::Objective`] if the objective cannot be computed.
pub fn evaluate<F, const N: usize>(objective: &F, x: [f64; N]) -> Result<Point<N>, Error>
where
    F: Objective<N>,
{
    let value = objective
        .value(&x)
        .map_err(|error| Error::Objective(Box::new(error)))?;

    Ok(Point::new(x, sanitize(value)))
}

/// Maps NaN and infinities to `+inf`.
pub(crate) fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        f64::INFINITY
    }
}
