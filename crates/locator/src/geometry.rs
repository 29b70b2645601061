use std::fmt;

/// A point on the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(&self, other: &Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Mean of a set of positions.
    ///
    /// Returns the origin for an empty slice.
    #[must_use]
    pub fn centroid(points: &[Position]) -> Self {
        if points.is_empty() {
            return Self::default();
        }
        let n = points.len() as f64;
        let (sx, sy) = points
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        Self::new(sx / n, sy / n)
    }
}

impl From<[f64; 2]> for Position {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Position> for [f64; 2] {
    fn from(p: Position) -> Self {
        [p.x, p.y]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An axis-aligned rectangle, inclusive of its edges.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    #[must_use]
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// The same `[min, max]` range on both axes.
    #[must_use]
    pub const fn square(min: f64, max: f64) -> Self {
        Self::new(min, max, min, max)
    }

    /// Returns true if every edge is finite and each range is non-empty.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        [self.x_min, self.x_max, self.y_min, self.y_max]
            .iter()
            .all(|v| v.is_finite())
            && self.x_min < self.x_max
            && self.y_min < self.y_max
    }

    #[must_use]
    pub fn contains(&self, p: Position) -> bool {
        (self.x_min..=self.x_max).contains(&p.x) && (self.y_min..=self.y_max).contains(&p.y)
    }

    /// Returns true if `other` lies entirely inside `self`.
    #[must_use]
    pub fn encloses(&self, other: &Bounds) -> bool {
        self.x_min <= other.x_min
            && other.x_max <= self.x_max
            && self.y_min <= other.y_min
            && other.y_max <= self.y_max
    }

    /// Nearest point inside the rectangle.
    ///
    /// NaN coordinates are passed through unchanged.
    #[must_use]
    pub fn clamp(&self, p: Position) -> Position {
        Position::new(
            p.x.clamp(self.x_min, self.x_max),
            p.y.clamp(self.y_min, self.y_max),
        )
    }

    #[must_use]
    pub fn center(&self) -> Position {
        Position::new(
            0.5 * (self.x_min + self.x_max),
            0.5 * (self.y_min + self.y_max),
        )
    }

    /// Moves every edge outward by `margin`.
    #[must_use]
    pub fn outset(&self, margin: f64) -> Bounds {
        Bounds::new(
            self.x_min - margin,
            self.x_max + margin,
            self.y_min - margin,
            self.y_max + margin,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn distance_and_centroid() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert_relative_eq!(a.distance(&b), 5.0);

        let c = Position::centroid(&[a, b, Position::new(6.0, -1.0)]);
        assert_relative_eq!(c.x, 3.0);
        assert_relative_eq!(c.y, 1.0);
    }

    #[test]
    fn clamp_and_contains() {
        let bounds = Bounds::square(100.0, 900.0);

        assert!(bounds.contains(Position::new(100.0, 900.0)));
        assert!(!bounds.contains(Position::new(99.9, 500.0)));
        assert!(!bounds.contains(Position::new(f64::NAN, 500.0)));

        let clamped = bounds.clamp(Position::new(-20.0, 1500.0));
        assert_eq!(clamped, Position::new(100.0, 900.0));
    }

    #[test]
    fn validity_and_enclosure() {
        let operating = Bounds::square(100.0, 900.0);
        let acceptance = Bounds::square(50.0, 950.0);

        assert!(operating.is_valid());
        assert!(!Bounds::square(5.0, 5.0).is_valid());
        assert!(!Bounds::new(0.0, f64::INFINITY, 0.0, 1.0).is_valid());
        assert!(acceptance.encloses(&operating));
        assert!(!operating.encloses(&acceptance));
        assert_eq!(operating.outset(20.0), Bounds::square(80.0, 920.0));
        assert!(operating.outset(20.0).encloses(&operating));
        assert_eq!(operating.center(), Position::new(500.0, 500.0));
    }
}
