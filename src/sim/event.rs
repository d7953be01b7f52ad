use crate::gnc::Decision;

// ---------------------------------------------------------------------------
// Flight events
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    FinalDeceleration,
    EnteredCorridor,
    Custom(String),
}

/// A discrete event observed at a given tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TickEvent {
    pub tick: u64,
    pub kind: EventKind,
}

/// Trait for passive event detectors.
/// Implementations inspect consecutive decisions and report events; `prev`
/// is None on the first tick.
pub trait EventDetector {
    fn check(&mut self, prev: Option<&Decision>, current: &Decision) -> Option<EventKind>;
}

/// Fires on the tick the braking latch engages.
pub struct FinalDecelerationDetector;

impl EventDetector for FinalDecelerationDetector {
    fn check(&mut self, prev: Option<&Decision>, current: &Decision) -> Option<EventKind> {
        let was_engaged = prev.is_some_and(|p| p.telemetry.final_deceleration);
        if current.telemetry.final_deceleration && !was_engaged {
            Some(EventKind::FinalDeceleration)
        } else {
            None
        }
    }
}

/// Fires once, the first time the vehicle is above the corridor.
#[derive(Default)]
pub struct CorridorApproachDetector {
    fired: bool,
}

impl CorridorApproachDetector {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventDetector for CorridorApproachDetector {
    fn check(&mut self, _prev: Option<&Decision>, current: &Decision) -> Option<EventKind> {
        if self.fired || !current.telemetry.over_corridor {
            return None;
        }
        self.fired = true;
        Some(EventKind::EnteredCorridor)
    }
}

pub fn default_detectors() -> Vec<Box<dyn EventDetector>> {
    vec![
        Box::new(FinalDecelerationDetector),
        Box::new(CorridorApproachDetector::new()),
    ]
}
