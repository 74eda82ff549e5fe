use crate::models::{range::Range, resolution::Resolution};

/// Fills `dst` with values evenly spaced from `lo` to `hi` inclusive.
///
/// Expects `dst.len() >= 2`. A single slot receives `lo`; an empty slice is
/// left alone. The last slot is set to `hi` exactly rather than accumulated.
pub fn span(dst: &mut [f64], lo: f64, hi: f64) {
    let n = dst.len();
    match n {
        0 => {}
        1 => dst[0] = lo,
        _ => {
            let step = (hi - lo) / (n - 1) as f64;
            for (i, value) in dst.iter_mut().enumerate() {
                *value = lo + step * i as f64;
            }
            dst[n - 1] = hi;
        }
    }
}

/// Per-axis sample coordinates for a grid of fixed resolution.
#[derive(Debug, Clone)]
pub struct Axes {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl Axes {
    pub fn new(resolution: Resolution) -> Self {
        Self {
            xs: vec![0.0; resolution.nx as usize],
            ys: vec![0.0; resolution.ny as usize],
        }
    }

    /// Recomputes both axes so they span `range`.
    pub fn resample(&mut self, range: &Range) {
        let (x_lo, x_hi) = range.x_bounds();
        let (y_lo, y_hi) = range.y_bounds();
        span(&mut self.xs, x_lo, x_hi);
        span(&mut self.ys, y_lo, y_hi);
    }
}
