use complex_rs::complex::Complex;

use crate::models::iteration_grid::IterationGrid;

/// An escape-time fractal.
pub trait Fractal {
    /// Number of iterations before the orbit of `c` escapes, or
    /// `max_iterations` when it stays bounded for the whole budget.
    fn escape_time(&self, c: Complex, max_iterations: u32) -> u32;

    /// Evaluates every grid point formed by `xs` (columns) and `ys` (rows).
    ///
    /// Points are independent of each other, so the order is irrelevant.
    fn compute_grid(&self, xs: &[f64], ys: &[f64], max_iterations: u32, grid: &mut IterationGrid) {
        for (j, &y) in ys.iter().enumerate() {
            for (i, &x) in xs.iter().enumerate() {
                let count = self.escape_time(Complex::new(x, y), max_iterations);
                grid.set(i as u32, j as u32, count);
            }
        }
    }
}
