pub mod corridor;

pub use corridor::{locate_corridor, Corridor};

use crate::dynamics::Vector2;
use crate::error::Result;

// ---------------------------------------------------------------------------
// Planet: static level geometry, built once at startup
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Planet {
    pub gravity: f64, // m/s^2
    pub surface: Vec<Vector2>,
    pub corridor: Corridor,
}

impl Planet {
    /// Locate the landing corridor on `surface`. Fails if the level has no
    /// flat run wide enough, since there is nothing to steer for.
    pub fn new(gravity: f64, surface: Vec<Vector2>, min_corridor_width: i32) -> Result<Self> {
        let corridor = locate_corridor(&surface, min_corridor_width)?;
        log::info!(
            "landing corridor {} .. {} ({} units wide)",
            corridor.begin(),
            corridor.end(),
            corridor.width()
        );
        Ok(Self { gravity, surface, corridor })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MARS_GRAVITY;

    #[test]
    fn planet_carries_located_corridor() {
        let surface = vec![
            Vector2::new(0, 100),
            Vector2::new(1000, 500),
            Vector2::new(1500, 1500),
            Vector2::new(3000, 1000),
            Vector2::new(4000, 150),
            Vector2::new(5500, 150),
            Vector2::new(6999, 800),
        ];
        let planet = Planet::new(MARS_GRAVITY, surface, 1000).unwrap();
        assert_eq!(planet.corridor.begin(), Vector2::new(4000, 150));
        assert_eq!(planet.corridor.center(), Vector2::new(4750, 150));
        assert_eq!(planet.surface.len(), 7);
    }

    #[test]
    fn planet_without_corridor_is_rejected() {
        let surface = vec![Vector2::new(0, 100), Vector2::new(7000, 200)];
        assert!(Planet::new(MARS_GRAVITY, surface, 1000).is_err());
    }
}
