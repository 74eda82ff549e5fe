#[allow(clippy::module_inception)]
pub mod fractal;
pub mod mandelbrot;
