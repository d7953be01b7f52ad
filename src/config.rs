use std::path::Path;

use serde::Deserialize;

use crate::error::{AutopilotError, Result};

// ---------------------------------------------------------------------------
// Physical constants
// ---------------------------------------------------------------------------

pub const MARS_GRAVITY: f64 = 3.711; // m/s^2

// ---------------------------------------------------------------------------
// Controller tuning
// ---------------------------------------------------------------------------

/// Tunables for the descent heuristic. Defaults are the flight-proven values;
/// a JSON file may override any subset of them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub aim_offset: i32,         // units left of corridor center to aim at
    pub boost_range: i32,        // minimum steering window, units
    pub correction_margin: i32,  // base window for horizontal velocity damping
    pub velocity_gain: f64,      // degrees of tilt per unit of vx
    pub speed_limit_y: i32,      // max safe vertical touchdown speed
    pub max_deceleration: f64,   // nominal vertical deceleration at full burn
    pub cruise_thrust: i32,
    pub braking_thrust: i32,
    pub min_corridor_width: i32, // units
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            aim_offset: 250,
            boost_range: 1000,
            correction_margin: 250,
            velocity_gain: 2.5,
            speed_limit_y: 40,
            max_deceleration: 4.0,
            cruise_thrust: 2,
            braking_thrust: 4,
            min_corridor_width: 1000,
        }
    }
}

impl ControllerConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject tunables the controller cannot fly with. A zero steering
    /// window would divide by zero on the first on-target tick.
    pub fn validate(&self) -> Result<()> {
        if self.boost_range <= 0 {
            return Err(AutopilotError::InvalidConfig(format!(
                "boost_range must be positive, got {}",
                self.boost_range
            )));
        }
        if self.min_corridor_width <= 0 {
            return Err(AutopilotError::InvalidConfig(format!(
                "min_corridor_width must be positive, got {}",
                self.min_corridor_width
            )));
        }
        Ok(())
    }

    /// Braking must out-pull gravity, or the stopping distance is meaningless.
    pub fn validate_for_gravity(&self, gravity: f64) -> Result<()> {
        self.validate()?;
        if self.max_deceleration <= gravity {
            return Err(AutopilotError::InvalidConfig(format!(
                "max_deceleration {} does not exceed gravity {}",
                self.max_deceleration, gravity
            )));
        }
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}
