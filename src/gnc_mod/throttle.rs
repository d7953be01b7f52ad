use crate::config::ControllerConfig;

// ---------------------------------------------------------------------------
// Throttle: braking-distance estimate and the final-deceleration latch
// ---------------------------------------------------------------------------

/// Altitude needed to bleed vertical speed down to the touchdown limit,
/// d = (vi^2 - vf^2) / 2a with a ~ (max_deceleration - g) / 2. Truncated.
pub fn deceleration_distance(vy: i32, gravity: f64, cfg: &ControllerConfig) -> i32 {
    let vi = f64::from(vy);
    let vf = f64::from(cfg.speed_limit_y);
    ((vi * vi - vf * vf) / (cfg.max_deceleration - gravity)) as i32
}

/// Ticks to cancel vy at full deceleration.
pub fn deceleration_time(vy: i32, cfg: &ControllerConfig) -> f64 {
    f64::from(vy) / -cfg.max_deceleration
}

/// One-way switch into the braking burn. Once engaged it stays engaged for
/// the rest of the run; there is deliberately no way to clear it.
#[derive(Debug, Clone, Default)]
pub struct FinalDecelerationLatch {
    engaged: bool,
}

impl FinalDecelerationLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    /// Engage if braking now needs more altitude than remains.
    /// Returns true only on the tick that flips the latch.
    pub fn update(&mut self, deceleration_distance: i32, altitude: i32) -> bool {
        if deceleration_distance > altitude && !self.engaged {
            self.engaged = true;
            return true;
        }
        false
    }

    pub fn thrust(&self, cfg: &ControllerConfig) -> i32 {
        if self.engaged {
            cfg.braking_thrust
        } else {
            cfg.cruise_thrust
        }
    }
}
