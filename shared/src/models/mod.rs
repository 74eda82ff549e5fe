pub mod fractal;
pub mod iteration_grid;
pub mod point;
pub mod range;
pub mod resolution;
pub mod viewport;
