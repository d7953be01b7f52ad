use crate::dynamics::{Command, Vector2, VehicleState};
use crate::planet::Planet;

/// Which part of the corridor the vehicle is above (or beside).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Center,
    Right,
}

/// Intermediate values behind a decision. Advisory only: nothing here feeds
/// back into the control loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Telemetry {
    pub distance: i32,              // signed dx to target
    pub span: i32,                  // steering window dx was mapped over
    pub deceleration_distance: i32,
    pub deceleration_time: f64,
    pub angle_to_target: f64,       // deg
    pub side: Side,
    pub over_corridor: bool,
    pub final_deceleration: bool,
}

/// Output of one tick: the command for the simulator, plus the aim point and
/// telemetry for the diagnostic side-channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decision {
    pub command: Command,
    pub target: Vector2,
    pub telemetry: Telemetry,
}

/// Trait for descent controllers.
///
/// The tick driver calls `decide` exactly once per simulation tick, in order.
pub trait Controller {
    /// Compute the next command from the freshly read vehicle state.
    fn decide(&mut self, state: &VehicleState, planet: &Planet) -> Decision;

    /// Human-readable name for logging.
    fn name(&self) -> &str {
        "unnamed"
    }
}
