use super::point::Point;

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle of the complex plane, `min` and `max` being opposite corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    pub fn x_bounds(&self) -> (f64, f64) {
        (self.min.x, self.max.x)
    }

    pub fn y_bounds(&self) -> (f64, f64) {
        (self.min.y, self.max.y)
    }
}
