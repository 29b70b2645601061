use tdoa_core::{Objective, Observer};

use crate::optimization::{Error, Point, Solution, Status, evaluate, vector};

use super::{Action, Config, Event, Step, simplex::Simplex};

const REFLECTION: f64 = 1.0;
const EXPANSION: f64 = 2.0;
const CONTRACTION: f64 = 0.5;
const SHRINKAGE: f64 = 0.5;

/// Core Nelder-Mead implementation.
///
/// Convergence is checked against the best vertex at the start of every
/// iteration, so a starting point already below the threshold returns
/// immediately with zero iterations.
pub(super) fn search<F, Obs, const N: usize>(
    objective: &F,
    x0: [f64; N],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<N>, Error>
where
    F: Objective<N>,
    Obs: for<'a> Observer<Event<'a, N>, Action>,
{
    if !vector::is_finite(&x0) {
        return Err(Error::NonFiniteStart);
    }

    let mut simplex = Simplex::new(objective, x0, config.initial_step())?;

    for iter in 1..=config.max_iters() {
        if let Some(status) = check(&simplex, config) {
            return Ok(Solution::new(simplex.best(), status, iter - 1));
        }

        let step = advance(objective, &mut simplex)?;
        simplex.order();

        let event = Event {
            iter,
            step,
            best: simplex.best(),
            simplex: simplex.vertices(),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::new(
                simplex.best(),
                Status::StoppedByObserver,
                iter,
            ));
        }
    }

    let status = check(&simplex, config).unwrap_or(Status::MaxIters);
    Ok(Solution::new(simplex.best(), status, config.max_iters()))
}

/// Returns a terminal status if the ordered simplex should stop.
fn check<const N: usize>(simplex: &Simplex<N>, config: &Config) -> Option<Status> {
    if simplex.best().objective < config.objective_threshold() {
        Some(Status::Converged)
    } else if simplex.diameter() <= config.x_abs_tol() {
        Some(Status::Stalled)
    } else {
        None
    }
}

/// Applies one Nelder-Mead update to an ordered simplex.
fn advance<F, const N: usize>(objective: &F, simplex: &mut Simplex<N>) -> Result<Step, Error>
where
    F: Objective<N>,
{
    let best = simplex.best();
    let worst = simplex.worst();
    let second_worst = simplex.second_worst();
    let centroid = simplex.centroid();
    let toward_worst = vector::sub(&worst.x, &centroid);

    let reflected = evaluate(
        objective,
        vector::add_scaled(&centroid, -REFLECTION, &toward_worst),
    )?;

    if reflected.objective < best.objective {
        let expanded = evaluate(
            objective,
            vector::add_scaled(&centroid, -EXPANSION, &toward_worst),
        )?;
        if expanded.objective < reflected.objective {
            simplex.replace_worst(expanded);
            return Ok(Step::Expand);
        }
        simplex.replace_worst(reflected);
        return Ok(Step::Reflect);
    }

    if reflected.objective < second_worst.objective {
        simplex.replace_worst(reflected);
        return Ok(Step::Reflect);
    }

    let (contracted, step, limit) = if reflected.objective < worst.objective {
        let x = vector::add_scaled(&centroid, -CONTRACTION, &toward_worst);
        (evaluate(objective, x)?, Step::ContractOutside, reflected)
    } else {
        let x = vector::add_scaled(&centroid, CONTRACTION, &toward_worst);
        (evaluate(objective, x)?, Step::ContractInside, worst)
    };

    if accepts(&contracted, &limit, step) {
        simplex.replace_worst(contracted);
        return Ok(step);
    }

    simplex.shrink(objective, SHRINKAGE)?;
    Ok(Step::Shrink)
}

/// Outside contractions must not be worse than the reflected point; inside
/// contractions must beat the worst vertex.
fn accepts<const N: usize>(contracted: &Point<N>, limit: &Point<N>, step: Step) -> bool {
    match step {
        Step::ContractOutside => contracted.objective <= limit.objective,
        _ => contracted.objective < limit.objective,
    }
}
