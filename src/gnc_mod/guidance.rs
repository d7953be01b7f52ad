use crate::config::ControllerConfig;
use crate::dynamics::{Vector2, VehicleState};
use crate::planet::Corridor;

// ---------------------------------------------------------------------------
// Guidance: aim point and steering angle
// ---------------------------------------------------------------------------

/// Aim point for this tick.
/// - x: fixed offset left of the corridor center
/// - y: current altitude minus one tick of vertical velocity
pub fn select_target(state: &VehicleState, corridor: &Corridor, cfg: &ControllerConfig) -> Vector2 {
    Vector2::new(
        corridor.center().x.saturating_sub(cfg.aim_offset),
        state.position.y.saturating_sub(state.velocity.y),
    )
}

/// Integer linear remap. Division truncates toward zero, which is what
/// makes small offsets on the right map to 0 but on the left to -1.
/// Worked in i64 so extreme inputs cannot overflow; `in_max != in_min`.
pub fn map_linear(x: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> i32 {
    let num = (i64::from(x) - i64::from(in_min)) * (i64::from(out_max) - i64::from(out_min));
    let mapped = num / (i64::from(in_max) - i64::from(in_min)) + i64::from(out_min);
    mapped.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Steering angle before velocity damping, and the span it was mapped over.
/// `dx` is signed: positive when the vehicle is right of the target.
/// The span never shrinks below `boost_range`, so steering keeps authority
/// close to the target instead of collapsing to zero.
pub fn steering_angle(dx: i32, boost_range: i32) -> (i32, i32) {
    if dx >= 0 {
        let span = dx.max(boost_range);
        (map_linear(dx, 0, span, 0, 90), span)
    } else {
        let span = dx.min(boost_range.saturating_neg());
        (map_linear(dx, span, 0, -90, 0), span)
    }
}

/// Extra tilt to damp horizontal velocity once the vehicle is close enough
/// for vx to matter more than position. Zero outside that window.
pub fn velocity_correction(dx: i32, vx: i32, cfg: &ControllerConfig) -> i32 {
    let window = i64::from(cfg.correction_margin) + i64::from(vx.unsigned_abs());
    if i64::from(dx.unsigned_abs()) < window {
        (f64::from(vx) * cfg.velocity_gain).round() as i32
    } else {
        0
    }
}
