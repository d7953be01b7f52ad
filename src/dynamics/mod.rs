pub mod state;
pub mod vector;

pub use state::{Command, VehicleState};
pub use vector::Vector2;
