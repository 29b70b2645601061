use crate::{Bounds, Position, TdoaProblem, TowerPair};

/// Number of starting points tried by the multi-start search.
pub(crate) const SEED_COUNT: usize = 6;

/// Deterministic starting points, in the order they are tried:
///
/// 1. the linear estimate, or the operating center without one
/// 2. the operating center
/// 3. the tower centroid
/// 4. one point per baseline (1-2, 1-3, 2-3) where the distance difference
///    along the baseline matches the measured one
pub(crate) fn seeds(
    problem: &TdoaProblem,
    linear: Option<Position>,
    operating: &Bounds,
) -> [Position; SEED_COUNT] {
    let center = operating.center();
    [
        linear.unwrap_or(center),
        center,
        Position::centroid(problem.towers()),
        on_baseline(problem, TowerPair::OneTwo),
        on_baseline(problem, TowerPair::OneThree),
        on_baseline(problem, TowerPair::TwoThree),
    ]
}

/// The point on the segment between the towers of `pair` whose distance
/// difference equals the measured one: the midpoint shifted by half the
/// delta toward the earlier tower.
fn on_baseline(problem: &TdoaProblem, pair: TowerPair) -> Position {
    let (a, b) = problem.endpoints(pair);
    let mid = Position::new(0.5 * (a.x + b.x), 0.5 * (a.y + b.y));
    let length = a.distance(&b);
    if length == 0.0 {
        return mid;
    }

    let shift = 0.5 * problem.delta(pair) / length;
    Position::new(mid.x - shift * (b.x - a.x), mid.y - shift * (b.y - a.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn seeds_follow_documented_order() {
        let towers = [
            Position::new(100.0, 100.0),
            Position::new(900.0, 100.0),
            Position::new(100.0, 700.0),
        ];
        let problem = TdoaProblem::new(towers, 200.0, 100.0, 0.0);
        let operating = Bounds::square(100.0, 900.0);

        let with_linear = seeds(&problem, Some(Position::new(1.0, 2.0)), &operating);
        let without = seeds(&problem, None, &operating);

        assert_eq!(with_linear[0], Position::new(1.0, 2.0));
        assert_eq!(without[0], Position::new(500.0, 500.0));
        assert_eq!(without[1], Position::new(500.0, 500.0));
        assert_eq!(without[2], Position::new(1_100.0 / 3.0, 300.0));
        assert_eq!(with_linear[1..], without[1..]);
    }

    #[test]
    fn baseline_seed_matches_delta() {
        let towers = [
            Position::new(100.0, 100.0),
            Position::new(900.0, 100.0),
            Position::new(100.0, 700.0),
        ];
        let problem = TdoaProblem::new(towers, 200.0, 100.0, 0.0);

        for pair in [TowerPair::OneTwo, TowerPair::OneThree, TowerPair::TwoThree] {
            let (a, b) = problem.endpoints(pair);
            let p = on_baseline(&problem, pair);
            assert_relative_eq!(
                p.distance(&b) - p.distance(&a),
                problem.delta(pair),
                epsilon = 1e-9
            );
        }
    }
}
