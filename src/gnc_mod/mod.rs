pub mod controller;
pub mod guidance;
pub mod lander;
pub mod throttle;

pub use controller::{Controller, Decision, Side, Telemetry};
pub use guidance::{map_linear, select_target, steering_angle, velocity_correction};
pub use lander::LanderController;
pub use throttle::{deceleration_distance, FinalDecelerationLatch};
