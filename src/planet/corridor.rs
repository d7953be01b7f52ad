use crate::dynamics::Vector2;
use crate::error::{AutopilotError, Result};

// ---------------------------------------------------------------------------
// Landing corridor: the flat strip we steer for
// ---------------------------------------------------------------------------

/// Flat ground segment. Both endpoints share `y`; `end.x - begin.x` is at
/// least the minimum width it was located with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Corridor {
    begin: Vector2,
    end: Vector2,
}

impl Corridor {
    pub fn begin(&self) -> Vector2 {
        self.begin
    }

    pub fn end(&self) -> Vector2 {
        self.end
    }

    pub fn width(&self) -> i32 {
        self.end.x.saturating_sub(self.begin.x)
    }

    /// Midpoint in x, at ground level.
    pub fn center(&self) -> Vector2 {
        let mid = (i64::from(self.end.x) + i64::from(self.begin.x)) / 2;
        Vector2::new(mid as i32, self.end.y)
    }

    pub fn contains_x(&self, x: i32) -> bool {
        x >= self.begin.x && x <= self.end.x
    }
}

/// Greedy left-to-right scan for the first flat run at least `min_width`
/// units wide. A y change restarts the candidate run at that point.
pub fn locate_corridor(surface: &[Vector2], min_width: i32) -> Result<Corridor> {
    let mut points = surface.iter().copied();
    let mut begin = points.next().ok_or(AutopilotError::EmptySurface)?;

    for end in points {
        if end.y != begin.y {
            begin = end;
            continue;
        }
        if end.x.saturating_sub(begin.x) >= min_width {
            return Ok(Corridor { begin, end });
        }
    }

    Err(AutopilotError::NoFlatCorridor { min_width })
}
