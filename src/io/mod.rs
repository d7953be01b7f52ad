pub mod diagnostics;
pub mod protocol;

pub use diagnostics::write_diagnostics;
pub use protocol::{parse_tick, read_surface, read_tick, write_command};
