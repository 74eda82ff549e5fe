use serde::{Deserialize, Serialize};

use crate::models::{resolution::Resolution, viewport::Viewport};

pub const TITLE: &str = "Fractals";
pub const WIDTH: u32 = 680;
pub const HEIGHT: u32 = 460;
pub const MAX_ITERATIONS: u32 = 100;
pub const PAN_STEP: f64 = 0.01;

/// Fixed parameters of a viewer session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    pub pan_step: f64,
    pub viewport: Viewport,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: TITLE.to_string(),
            width: WIDTH,
            height: HEIGHT,
            max_iterations: MAX_ITERATIONS,
            pan_step: PAN_STEP,
            viewport: Viewport::default(),
        }
    }
}

impl ViewerConfig {
    pub fn resolution(&self) -> Resolution {
        Resolution::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_fixed_window() {
        let config = ViewerConfig::default();
        assert_eq!(config.resolution(), Resolution::new(680, 460));
        assert_eq!(config.max_iterations, 100);
        assert_eq!(config.viewport, Viewport::new(-0.5, 0.5));
    }
}
