use std::io::{self, Write};

use crate::dynamics::VehicleState;
use crate::gnc::Decision;

/// Write the per-tick diagnostic block. The `TARGET:x,y` line always comes
/// first; overlay tools parse only that line and ignore the rest.
pub fn write_diagnostics<W: Write>(
    writer: &mut W,
    state: &VehicleState,
    decision: &Decision,
) -> io::Result<()> {
    let t = &decision.telemetry;
    writeln!(writer, "TARGET:{},{}", decision.target.x, decision.target.y)?;
    writeln!(writer, "Dist to target: {}", t.distance)?;
    writeln!(writer, "Span: {}", t.span)?;
    writeln!(
        writer,
        "Deceldist at {}m/s: {}",
        state.thrust.max(1),
        t.deceleration_distance
    )?;
    writeln!(writer, "Deceltime at 4m/s: {}", t.deceleration_time)?;
    writeln!(writer, "Angle to target: {:.2}", t.angle_to_target)?;
    writeln!(
        writer,
        "Corridor: {:?}{} speed={:.1} braking={}",
        t.side,
        if t.over_corridor { " (over)" } else { "" },
        state.speed(),
        t.final_deceleration
    )?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MARS_GRAVITY;
    use crate::dynamics::Vector2;
    use crate::gnc::LanderController;
    use crate::planet::Planet;

    #[test]
    fn target_line_comes_first() {
        let surface = vec![Vector2::new(1750, 100), Vector2::new(2750, 100)];
        let planet = Planet::new(MARS_GRAVITY, surface, 1000).unwrap();
        let state = VehicleState {
            position: Vector2::new(3000, 2000),
            velocity: Vector2::new(10, -50),
            fuel: 500,
            rotation: 0,
            thrust: 0,
        };
        let decision = LanderController::default().update(&state, &planet);

        let mut buf = Vec::new();
        write_diagnostics(&mut buf, &state, &decision).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "TARGET:2000,2050");
        assert_eq!(lines[1], "Dist to target: 1000");
        assert_eq!(lines[3], "Deceldist at 1m/s: 3114");
        assert_eq!(lines[4], "Deceltime at 4m/s: 12.5");
        assert_eq!(text.matches("TARGET:").count(), 1);
    }
}
