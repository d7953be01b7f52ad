use super::vector::Vector2;

// ---------------------------------------------------------------------------
// Vehicle state, refreshed wholesale every tick
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VehicleState {
    pub position: Vector2, // units, y up from datum
    pub velocity: Vector2, // units/tick
    pub fuel: i32,         // litres remaining
    pub rotation: i32,     // deg, 0 = upright
    pub thrust: i32,       // current thrust level
}

impl VehicleState {
    /// Scalar speed, as shown on the simulator HUD.
    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }
}

// ---------------------------------------------------------------------------
// Control output
// ---------------------------------------------------------------------------

/// One command, applied by the simulator on the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Command {
    pub angle: i32,  // deg, may leave [-90, 90] after velocity damping
    pub thrust: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn speed_is_velocity_norm() {
        let s = VehicleState {
            velocity: Vector2::new(-30, 40),
            ..Default::default()
        };
        assert_relative_eq!(s.speed(), 50.0);
    }
}
