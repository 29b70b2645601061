//! Multi-start minimization of the true TDoA residual.
//!
//! Every seed gets a Nelder-Mead broad search. A broad result that converges
//! and validates is recorded, then refined with BFGS; a refined result that
//! converges and validates is recorded too. The lowest recorded objective
//! wins, ties going to whichever was recorded first.

mod best;
mod objective;
mod seeds;

use tracing::trace;

use tdoa_observers::TraceObserver;
use tdoa_solvers::optimization::{Solution, bfgs, nelder_mead};

use crate::{
    Bounds, Candidate, LocateError, Method, NonlinearConfig, Position, TdoaProblem, TowerPair,
    validate::validate,
};

use best::Best;
use objective::TdoaObjective;
use seeds::{SEED_COUNT, seeds};

/// Runs the multi-start search.
///
/// `linear` is the linear solver's estimate, if it produced one; it becomes
/// the first seed. The returned position is clamped to `operating`.
///
/// # Errors
///
/// Returns [`LocateError::PhysicallyImpossible`] if any distance difference
/// exceeds its baseline, [`LocateError::SingularGeometry`] if all towers
/// coincide, and [`LocateError::NoConvergence`] if no seed produced a
/// validated candidate.
pub fn solve(
    problem: &TdoaProblem,
    linear: Option<Position>,
    config: &NonlinearConfig,
    operating: &Bounds,
    acceptance: &Bounds,
) -> Result<Candidate, LocateError> {
    for pair in [TowerPair::OneTwo, TowerPair::OneThree, TowerPair::TwoThree] {
        problem.check_pair(pair)?;
    }

    let objective = TdoaObjective::new(problem, config, operating)
        .ok_or(LocateError::SingularGeometry { determinant: 0.0 })?;
    trace!(centroid = %objective.centroid(), "nonlinear search");

    let mut best = Best::empty();
    for (run, seed) in seeds(problem, linear, operating).into_iter().enumerate() {
        trace!(run, seed = %seed, "starting broad search");

        let start: [f64; 2] = seed.into();
        let broad = nelder_mead::minimize(
            &objective,
            start,
            &config.nelder_mead,
            TraceObserver::new("nelder_mead", run),
        );
        let Some(broad) = record(&mut best, broad, Method::NelderMead, acceptance, run) else {
            continue;
        };

        let start: [f64; 2] = broad.position.into();
        let refined = bfgs::minimize(
            &objective,
            start,
            &config.bfgs,
            TraceObserver::new("bfgs", run),
        );
        record(&mut best, refined, Method::Bfgs, acceptance, run);
    }

    let mut winner = best.finish(SEED_COUNT)?;
    winner.position = operating.clamp(winner.position);
    Ok(winner)
}

/// Records a converged, validated search result and returns it as a candidate.
fn record<E: std::fmt::Display>(
    best: &mut Best,
    result: Result<Solution<2>, E>,
    method: Method,
    acceptance: &Bounds,
    run: usize,
) -> Option<Candidate> {
    let solution = match result {
        Ok(solution) => solution,
        Err(error) => {
            trace!(run, %method, %error, "search failed");
            return None;
        }
    };

    if !solution.is_converged() {
        trace!(run, %method, status = ?solution.status, objective = solution.objective, "search did not converge");
        return None;
    }

    let position = match validate(Position::from(solution.x), acceptance) {
        Ok(position) => position,
        Err(error) => {
            trace!(run, %method, %error, "rejected candidate");
            return None;
        }
    };

    let candidate = Candidate {
        position,
        residual: solution.objective,
        method,
    };
    trace!(run, %method, %position, residual = candidate.residual, "recorded candidate");
    best.update(candidate);
    Some(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;

    fn operating() -> Bounds {
        Bounds::square(100.0, 900.0)
    }

    fn acceptance() -> Bounds {
        Bounds::square(50.0, 950.0)
    }

    fn problem_for(towers: [Position; 3], source: Position) -> TdoaProblem {
        let mut towers = towers;
        towers.sort_by(|a, b| source.distance(a).total_cmp(&source.distance(b)));
        let r = towers.map(|t| source.distance(&t));
        TdoaProblem::new(towers, r[1] - r[0], r[2] - r[0], 0.0)
    }

    fn run(problem: &TdoaProblem, linear: Option<Position>) -> Result<Candidate, LocateError> {
        solve(
            problem,
            linear,
            &NonlinearConfig::default(),
            &operating(),
            &acceptance(),
        )
    }

    #[test]
    fn recovers_sources_anywhere_in_the_operating_rectangle() {
        let towers = [
            Position::new(100.0, 100.0),
            Position::new(900.0, 100.0),
            Position::new(500.0, 900.0),
        ];

        for source in [
            Position::new(500.0, 500.0),
            Position::new(300.0, 250.0),
            Position::new(600.0, 500.0),
            Position::new(500.0, 700.0),
            Position::new(150.0, 800.0),
            Position::new(880.0, 650.0),
            Position::new(500.0, 100.0),
            Position::new(105.0, 895.0),
            Position::new(900.0, 900.0),
        ] {
            let candidate = run(&problem_for(towers, source), None).unwrap();
            assert_abs_diff_eq!(candidate.position.x, source.x, epsilon = 2.0);
            assert_abs_diff_eq!(candidate.position.y, source.y, epsilon = 2.0);
            assert!(candidate.residual < 1e-8);
            assert_ne!(candidate.method, Method::Linear);
        }
    }

    #[test]
    fn symmetric_source_with_zero_deltas() {
        // All three towers are 300 units from (500, 500).
        let towers = [
            Position::new(200.0, 500.0),
            Position::new(500.0, 800.0),
            Position::new(800.0, 500.0),
        ];
        let problem = TdoaProblem::new(towers, 0.0, 0.0, 0.0);

        let candidate = run(&problem, None).unwrap();

        assert_abs_diff_eq!(candidate.position.x, 500.0, epsilon = 0.5);
        assert_abs_diff_eq!(candidate.position.y, 500.0, epsilon = 0.5);
    }

    #[test]
    fn collinear_towers_never_produce_non_finite_output() {
        let towers = [
            Position::new(100.0, 500.0),
            Position::new(500.0, 500.0),
            Position::new(900.0, 500.0),
        ];

        for source in [Position::new(300.0, 300.0), Position::new(650.0, 700.0)] {
            match run(&problem_for(towers, source), None) {
                Ok(candidate) => {
                    assert!(candidate.position.is_finite());
                    assert!(operating().contains(candidate.position));
                }
                Err(error) => assert_eq!(error, LocateError::NoConvergence { seeds: 6 }),
            }
        }
    }

    #[test]
    fn rejects_impossible_third_baseline() {
        // d12 and d13 fit their baselines, but d23 = 700 exceeds |T2 - T3| = 100.
        let towers = [
            Position::new(100.0, 100.0),
            Position::new(900.0, 100.0),
            Position::new(900.0, 200.0),
        ];
        let problem = TdoaProblem::new(towers, 0.0, 700.0, 0.0);

        let err = run(&problem, None).unwrap_err();
        assert!(matches!(
            err,
            LocateError::PhysicallyImpossible {
                pair: TowerPair::TwoThree,
                ..
            }
        ));
    }

    #[test]
    fn identical_inputs_give_identical_outputs() {
        let towers = [
            Position::new(150.0, 120.0),
            Position::new(820.0, 260.0),
            Position::new(430.0, 880.0),
        ];
        let problem = problem_for(towers, Position::new(610.0, 420.0));

        let first = run(&problem, Some(Position::new(600.0, 400.0))).unwrap();
        let second = run(&problem, Some(Position::new(600.0, 400.0))).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.position.x.to_bits(), second.position.x.to_bits());
    }
}
