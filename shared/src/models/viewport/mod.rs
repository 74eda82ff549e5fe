use serde::{Deserialize, Serialize};

use super::{point::Point, range::Range};

/// Lower and upper legal values of [`Viewport::min`].
pub const MIN_BOUND_LIMITS: (f64, f64) = (-2.5, 0.0);
/// Lower and upper legal values of [`Viewport::max`].
pub const MAX_BOUND_LIMITS: (f64, f64) = (0.0, 2.5);

/// Direction of a single pan step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pan {
    Up,
    Down,
    Left,
    Right,
}

impl Pan {
    pub const ALL: [Pan; 4] = [Pan::Up, Pan::Down, Pan::Left, Pan::Right];
}

/// The visible region of the complex plane.
///
/// Both axes share a single pair of bounds: the real axis and the imaginary
/// axis each span `[min, max]`. Panning "up" therefore moves the left edge as
/// well as the top edge. This is the observed behavior of the viewer and is
/// kept as is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub min: f64,
    pub max: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(-0.5, 0.5)
    }
}

impl Viewport {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Moves one bound by `step` in the direction of `pan`, clamping it to its
    /// legal range.
    pub fn pan(&mut self, pan: Pan, step: f64) {
        let (min_lo, min_hi) = MIN_BOUND_LIMITS;
        let (max_lo, max_hi) = MAX_BOUND_LIMITS;
        match pan {
            Pan::Up => self.min = (self.min - step).max(min_lo),
            Pan::Down => self.min = (self.min + step).min(min_hi),
            Pan::Left => self.max = (self.max - step).max(max_lo),
            Pan::Right => self.max = (self.max + step).min(max_hi),
        }
    }

    pub fn range(&self) -> Range {
        Range::new(
            Point::new(self.min, self.min),
            Point::new(self.max, self.max),
        )
    }
}
