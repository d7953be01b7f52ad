pub mod config;
pub mod dynamics;
pub mod error;
mod gnc_mod;
pub mod io;
pub mod planet;
pub mod sim;

// The gnc module: expose gnc_mod as `gnc` publicly
pub mod gnc {
    pub use crate::gnc_mod::*;
}

pub mod types {
    pub use crate::config::{ControllerConfig, MARS_GRAVITY};
    pub use crate::dynamics::{Command, Vector2, VehicleState};
    pub use crate::error::{AutopilotError, Result};
    pub use crate::planet::{Corridor, Planet};
}
