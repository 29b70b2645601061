use crate::{Bounds, LocateError, Position};

/// Accepts a candidate position only if it is finite and inside `acceptance`.
///
/// # Errors
///
/// Returns [`LocateError::InvalidSolution`] otherwise.
pub fn validate(position: Position, acceptance: &Bounds) -> Result<Position, LocateError> {
    if position.is_finite() && acceptance.contains(position) {
        Ok(position)
    } else {
        Err(LocateError::InvalidSolution {
            x: position.x,
            y: position.y,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_inside_including_edges() {
        let acceptance = Bounds::square(50.0, 950.0);
        for p in [
            Position::new(500.0, 500.0),
            Position::new(50.0, 950.0),
            Position::new(950.0, 50.0),
        ] {
            assert_eq!(validate(p, &acceptance), Ok(p));
        }
    }

    #[test]
    fn rejects_outside_and_non_finite() {
        let acceptance = Bounds::square(50.0, 950.0);
        for p in [
            Position::new(49.9, 500.0),
            Position::new(500.0, 950.1),
            Position::new(f64::INFINITY, 500.0),
            Position::new(500.0, f64::NEG_INFINITY),
        ] {
            assert_eq!(
                validate(p, &acceptance),
                Err(LocateError::InvalidSolution { x: p.x, y: p.y })
            );
        }

        let nan = validate(Position::new(f64::NAN, 1.0), &acceptance);
        assert!(matches!(nan, Err(LocateError::InvalidSolution { .. })));
    }
}
