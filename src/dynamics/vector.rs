use nalgebra::Vector2 as NaVector2;

// ---------------------------------------------------------------------------
// Quantized 2D vector (simulator units)
// ---------------------------------------------------------------------------

/// Integer point or displacement on the simulator grid. Plain value type:
/// equality is componentwise and nothing is ever mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vector2 {
    pub x: i32,
    pub y: i32,
}

#[allow(clippy::should_implement_trait)]
impl Vector2 {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn add(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x + other.x, self.y + other.y)
    }

    pub fn subtract(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x - other.x, self.y - other.y)
    }

    pub fn equals(self, other: Vector2) -> bool {
        self == other
    }

    /// Elevation angle (deg) of the line to `other`, from |dy| / |dx| as a
    /// real ratio. Returns exactly 0 when the points share an x coordinate.
    pub fn angle_to(self, other: Vector2) -> f64 {
        let adjacent = (i64::from(self.x) - i64::from(other.x)).abs();
        let opposite = (i64::from(self.y) - i64::from(other.y)).abs();
        if adjacent == 0 {
            return 0.0;
        }
        (opposite as f64 / adjacent as f64).atan().to_degrees()
    }

    /// Euclidean length.
    pub fn magnitude(self) -> f64 {
        NaVector2::<f64>::from(self).norm()
    }

    pub fn distance_to(self, other: Vector2) -> f64 {
        other.subtract(self).magnitude()
    }
}

impl From<Vector2> for NaVector2<f64> {
    fn from(v: Vector2) -> Self {
        NaVector2::new(f64::from(v.x), f64::from(v.y))
    }
}

impl std::fmt::Display for Vector2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn componentwise_arithmetic() {
        let a = Vector2::new(3, -4);
        let b = Vector2::new(10, 20);
        assert_eq!(a.add(b), Vector2::new(13, 16));
        assert_eq!(b.subtract(a), Vector2::new(7, 24));
        assert!(a.equals(Vector2::new(3, -4)));
        assert!(!a.equals(b));
    }

    #[test]
    fn angle_to_vertical_alignment_is_zero() {
        let a = Vector2::new(500, 0);
        assert_eq!(a.angle_to(Vector2::new(500, 2500)), 0.0);
        assert_eq!(a.angle_to(a), 0.0);
    }

    #[test]
    fn angle_to_uses_absolute_deltas() {
        let a = Vector2::new(0, 0);
        assert_relative_eq!(a.angle_to(Vector2::new(100, 100)), 45.0, epsilon = 1e-9);
        assert_relative_eq!(a.angle_to(Vector2::new(-100, -100)), 45.0, epsilon = 1e-9);
        assert_relative_eq!(a.angle_to(Vector2::new(100, 0)), 0.0);
    }

    #[test]
    fn angle_to_keeps_fractional_slopes() {
        // Real-valued ratio: a shallow slope is not truncated to 0 degrees.
        let a = Vector2::new(0, 0);
        assert_relative_eq!(a.angle_to(Vector2::new(100, 50)), 26.565_051_177, epsilon = 1e-6);
        assert!(Vector2::new(i32::MIN, 0).angle_to(Vector2::new(i32::MAX, 1)) < 1e-6);
    }

    #[test]
    fn magnitude_and_distance() {
        assert_relative_eq!(Vector2::new(3, 4).magnitude(), 5.0);
        assert_relative_eq!(Vector2::new(1, 1).distance_to(Vector2::new(4, 5)), 5.0);
    }

    #[test]
    fn display_matches_wire_pair() {
        assert_eq!(Vector2::new(2000, -5).to_string(), "2000,-5");
    }
}
