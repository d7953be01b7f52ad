pub mod event;
pub mod runner;

pub use runner::{run, run_ticks, DriverConfig, TickReport};
