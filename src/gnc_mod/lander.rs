use crate::config::ControllerConfig;
use crate::dynamics::{Command, VehicleState};
use crate::planet::{Corridor, Planet};
use super::controller::{Controller, Decision, Side, Telemetry};
use super::guidance::{select_target, steering_angle, velocity_correction};
use super::throttle::{deceleration_distance, deceleration_time, FinalDecelerationLatch};

// ---------------------------------------------------------------------------
// Lander controller: single-pass guidance + braking latch
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct LanderController {
    pub config: ControllerConfig,
    latch: FinalDecelerationLatch,
}

impl LanderController {
    pub fn new(config: ControllerConfig) -> Self {
        Self { config, latch: FinalDecelerationLatch::new() }
    }

    pub fn final_deceleration_engaged(&self) -> bool {
        self.latch.is_engaged()
    }

    /// Compute this tick's command. The only state carried between calls is
    /// the final-deceleration latch.
    pub fn update(&mut self, state: &VehicleState, planet: &Planet) -> Decision {
        let cfg = &self.config;
        let corridor = &planet.corridor;

        let target = select_target(state, corridor, cfg);
        let dx = state.position.x.saturating_sub(target.x);

        let (mut angle, span) = steering_angle(dx, cfg.boost_range);
        angle = angle.saturating_add(velocity_correction(dx, state.velocity.x, cfg));
        if !(-90..=90).contains(&angle) {
            // Left unclamped; the simulator limits rotation itself.
            log::debug!("commanded angle {angle} outside [-90, 90]");
        }

        let decel_dist = deceleration_distance(state.velocity.y, planet.gravity, cfg);
        if self.latch.update(decel_dist, state.position.y) {
            log::info!(
                "final deceleration engaged at altitude {} (needs {})",
                state.position.y,
                decel_dist
            );
        }

        let command = Command { angle, thrust: self.latch.thrust(cfg) };
        log::debug!("dx={dx} span={span} decel={decel_dist} -> {command:?}");

        Decision {
            command,
            target,
            telemetry: Telemetry {
                distance: dx,
                span,
                deceleration_distance: decel_dist,
                deceleration_time: deceleration_time(state.velocity.y, cfg),
                angle_to_target: state.position.angle_to(target),
                side: corridor_side(state, corridor),
                over_corridor: over_corridor(state, corridor),
                final_deceleration: self.latch.is_engaged(),
            },
        }
    }
}

impl Default for LanderController {
    fn default() -> Self {
        Self::new(ControllerConfig::default())
    }
}

impl Controller for LanderController {
    fn decide(&mut self, state: &VehicleState, planet: &Planet) -> Decision {
        self.update(state, planet)
    }

    fn name(&self) -> &str {
        "LanderController"
    }
}

/// True while the vehicle is horizontally within the corridor endpoints.
pub fn over_corridor(state: &VehicleState, corridor: &Corridor) -> bool {
    corridor.contains_x(state.position.x)
}

/// Side of the corridor center the vehicle is on. Center is a window of
/// 2.5% of the corridor width around the midpoint, bounds exclusive.
pub fn corridor_side(state: &VehicleState, corridor: &Corridor) -> Side {
    let center = corridor.center().x;
    let half_window = f64::from(corridor.width()) * 0.025 / 2.0;
    let low = (f64::from(center) - half_window) as i32;
    let high = (f64::from(center) + half_window) as i32;
    let x = state.position.x;

    if x > low && x < high {
        Side::Center
    } else if x < center {
        Side::Left
    } else {
        Side::Right
    }
}
