use complex_rs::complex::Complex;
use serde::{Deserialize, Serialize};

use super::fractal::Fractal;

/// Divergence threshold on `|z|`, compared squared.
const ESCAPE_RADIUS_SQ: f64 = 4.0;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default)]
pub struct Mandelbrot {}

impl Mandelbrot {
    pub fn new() -> Self {
        Self {}
    }
}

impl Fractal for Mandelbrot {
    fn escape_time(&self, c: Complex, max_iterations: u32) -> u32 {
        let mut z = Complex::default();

        for n in 0..max_iterations {
            if z.arg_sq() > ESCAPE_RADIUS_SQ {
                return n;
            }
            z = z.square() + c;
        }

        max_iterations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{iteration_grid::IterationGrid, resolution::Resolution};

    const CAP: u32 = 100;

    fn escape(re: f64, im: f64) -> u32 {
        Mandelbrot::new().escape_time(Complex::new(re, im), CAP)
    }

    #[test]
    fn origin_never_escapes() {
        assert_eq!(escape(0.0, 0.0), CAP);
    }

    #[test]
    fn period_two_point_never_escapes() {
        assert_eq!(escape(-1.0, 0.0), CAP);
    }

    // z0 = 0 is always inside the radius, so the earliest observable escape is n = 1.
    #[test]
    fn far_point_escapes_after_first_step() {
        assert_eq!(escape(3.0, 0.0), 1);
        assert_eq!(escape(0.0, -2.5), 1);
    }

    #[test]
    fn two_sits_on_the_radius_for_one_step() {
        // z1 = 2 is not strictly beyond the radius, z2 = 6 is.
        assert_eq!(escape(2.0, 0.0), 2);
    }

    #[test]
    fn zero_budget_reports_cap() {
        assert_eq!(Mandelbrot::new().escape_time(Complex::new(5.0, 5.0), 0), 0);
    }

    #[test]
    fn compute_grid_fills_columns_from_xs_and_rows_from_ys() {
        let mut grid = IterationGrid::new(Resolution::new(2, 2));
        let xs = [0.0, 3.0];
        let ys = [0.0, 0.0];
        Mandelbrot::new().compute_grid(&xs, &ys, CAP, &mut grid);
        assert_eq!(grid.get(0, 0), CAP);
        assert_eq!(grid.get(1, 0), 1);
        assert_eq!(grid.get(0, 1), CAP);
        assert_eq!(grid.get(1, 1), 1);
    }

    #[test]
    fn counts_stay_within_budget() {
        let mut grid = IterationGrid::new(Resolution::new(8, 8));
        let xs: Vec<f64> = (0..8).map(|i| -2.0 + i as f64 * 0.5).collect();
        let ys = xs.clone();
        Mandelbrot::new().compute_grid(&xs, &ys, CAP, &mut grid);
        assert!(grid.iter().all(|(_, _, count)| count <= CAP));
    }
}
