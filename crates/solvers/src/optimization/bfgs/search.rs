use tdoa_core::{Gradient, Observer};

use crate::optimization::{Error, Point, Solution, Status, evaluate::sanitize, vector};

use super::{Action, Config, Event, hessian::InverseHessian, line_search};

/// Core BFGS implementation.
pub(super) fn search<F, Obs, const N: usize>(
    objective: &F,
    x0: [f64; N],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<N>, Error>
where
    F: Gradient<N>,
    Obs: Observer<Event<N>, Action>,
{
    if !vector::is_finite(&x0) {
        return Err(Error::NonFiniteStart);
    }

    let (value, mut gradient) = objective
        .value_and_gradient(&x0)
        .map_err(|error| Error::Objective(Box::new(error)))?;
    let mut point = Point::new(x0, sanitize(value));

    if point.objective.is_infinite() || !vector::is_finite(&gradient) {
        return Ok(Solution::new(point, Status::Stalled, 0));
    }

    let mut hessian = InverseHessian::identity();
    let finish = |point: Point<N>, iters: usize| -> Result<Solution<N>, Error> {
        let status = if point.objective < config.objective_threshold() {
            Status::Converged
        } else {
            Status::Stalled
        };
        Ok(Solution::new(point, status, iters))
    };

    for iter in 1..=config.max_iters() {
        let gradient_norm = vector::norm(&gradient);
        if gradient_norm <= config.gradient_tol() {
            return finish(point, iter - 1);
        }

        let mut direction = hessian.direction(&gradient);
        let mut slope = vector::dot(&gradient, &direction);
        if slope >= 0.0 || slope.is_nan() {
            // Lost descent; restart from steepest descent.
            hessian = InverseHessian::identity();
            direction = gradient.map(|g| -g);
            slope = -gradient_norm * gradient_norm;
        }

        // Unit-length first step, full quasi-Newton steps afterwards.
        let alpha = if iter == 1 { 1.0 / gradient_norm } else { 1.0 };

        let Some(accepted) = line_search::backtrack(
            objective,
            &point.x,
            point.objective,
            &direction,
            slope,
            alpha,
        )?
        else {
            return finish(point, iter - 1);
        };

        let next_gradient = objective
            .gradient(&accepted.x)
            .map_err(|error| Error::Objective(Box::new(error)))?;
        if !vector::is_finite(&next_gradient) {
            return finish(Point::new(accepted.x, accepted.value), iter);
        }

        let s = vector::sub(&accepted.x, &point.x);
        let y = vector::sub(&next_gradient, &gradient);
        hessian.update(&s, &y);

        point = Point::new(accepted.x, accepted.value);
        gradient = next_gradient;

        let event = Event {
            iter,
            point,
            gradient_norm: vector::norm(&gradient),
            step_length: accepted.alpha * vector::norm(&direction),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::new(point, Status::StoppedByObserver, iter));
        }

        if point.objective < config.objective_threshold() {
            return Ok(Solution::new(point, Status::Converged, iter));
        }
    }

    Ok(Solution::new(point, Status::MaxIters, config.max_iters()))
}
