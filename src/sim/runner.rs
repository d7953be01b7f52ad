use std::io::{BufRead, Write};

use crate::config::ControllerConfig;
use crate::error::Result;
use crate::gnc::{Controller, Decision, LanderController};
use crate::io::{read_surface, read_tick, write_command, write_diagnostics};
use crate::planet::Planet;
use super::event::{default_detectors, TickEvent};

// ---------------------------------------------------------------------------
// Tick driver
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct DriverConfig {
    pub max_ticks: Option<u64>, // None: run until input closes
    pub diagnostics: bool,      // emit the TARGET side-channel
}

/// What happened over a run.
#[derive(Debug, Clone, Default)]
pub struct TickReport {
    pub ticks: u64,
    pub final_deceleration_tick: Option<u64>,
    pub min_angle: Option<i32>,
    pub max_angle: Option<i32>,
    pub events: Vec<TickEvent>,
}

impl TickReport {
    fn record(&mut self, decision: &Decision) {
        let angle = decision.command.angle;
        self.min_angle = Some(self.min_angle.map_or(angle, |a| a.min(angle)));
        self.max_angle = Some(self.max_angle.map_or(angle, |a| a.max(angle)));
        if self.final_deceleration_tick.is_none() && decision.telemetry.final_deceleration {
            self.final_deceleration_tick = Some(self.ticks);
        }
        self.ticks += 1;
    }
}

/// Read state, decide, write command; once per tick, strictly in sequence.
/// Stops when the input closes between ticks or after `max_ticks`. A
/// malformed tick aborts the run.
pub fn run_ticks<R: BufRead, W: Write, D: Write>(
    input: &mut R,
    output: &mut W,
    diagnostics: &mut D,
    planet: &Planet,
    controller: &mut dyn Controller,
    config: &DriverConfig,
) -> Result<TickReport> {
    let mut report = TickReport::default();
    let mut detectors = default_detectors();
    let mut prev: Option<Decision> = None;

    log::info!("{} flying to corridor center {}", controller.name(), planet.corridor.center());

    while config.max_ticks.is_none_or(|max| report.ticks < max) {
        let Some(state) = read_tick(input)? else {
            log::info!("input closed after {} ticks", report.ticks);
            break;
        };

        let decision = controller.decide(&state, planet);
        if config.diagnostics {
            write_diagnostics(diagnostics, &state, &decision)?;
        }
        write_command(output, &decision.command)?;

        for det in detectors.iter_mut() {
            if let Some(kind) = det.check(prev.as_ref(), &decision) {
                log::info!("tick {}: {:?}", report.ticks, kind);
                report.events.push(TickEvent { tick: report.ticks, kind });
            }
        }

        report.record(&decision);
        prev = Some(decision);
    }

    Ok(report)
}

/// Full run: read the surface block, locate the corridor, then drive the
/// default lander controller until input ends.
pub fn run<R: BufRead, W: Write, D: Write>(
    input: &mut R,
    output: &mut W,
    diagnostics: &mut D,
    gravity: f64,
    controller_config: ControllerConfig,
    driver_config: &DriverConfig,
) -> Result<TickReport> {
    controller_config.validate_for_gravity(gravity)?;
    let surface = read_surface(input)?;
    let planet = Planet::new(gravity, surface, controller_config.min_corridor_width)?;
    let mut controller = LanderController::new(controller_config);
    run_ticks(input, output, diagnostics, &planet, &mut controller, driver_config)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
