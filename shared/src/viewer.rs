use log::{debug, trace};

use crate::{
    config::ViewerConfig,
    graphics::{
        canvas::Canvas,
        color::{brightness, grayscale},
        result::GraphicsResult,
    },
    input::KeyboardState,
    models::{
        fractal::{fractal::Fractal, mandelbrot::Mandelbrot},
        iteration_grid::IterationGrid,
        viewport::{Pan, Viewport},
    },
    sampling::Axes,
};

/// Everything the frame loop mutates: the view, the sample axes and the
/// latest escape counts.
pub struct Viewer {
    config: ViewerConfig,
    fractal: Mandelbrot,
    viewport: Viewport,
    axes: Axes,
    grid: IterationGrid,
}

impl Viewer {
    pub fn new(config: ViewerConfig) -> Self {
        let resolution = config.resolution();
        Self {
            fractal: Mandelbrot::new(),
            viewport: config.viewport,
            axes: Axes::new(resolution),
            grid: IterationGrid::new(resolution),
            config,
        }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn axes(&self) -> &Axes {
        &self.axes
    }

    pub fn grid(&self) -> &IterationGrid {
        &self.grid
    }

    /// Applies every held pan key, then recomputes the whole image.
    pub fn update(&mut self, keys: &impl KeyboardState) {
        let before = self.viewport;
        for pan in Pan::ALL {
            if keys.is_held(pan) {
                self.viewport.pan(pan, self.config.pan_step);
            }
        }
        if self.viewport != before {
            debug!("Viewport moved to [{}, {}]", self.viewport.min, self.viewport.max);
        }

        self.axes.resample(&self.viewport.range());
        self.fractal.compute_grid(
            &self.axes.xs,
            &self.axes.ys,
            self.config.max_iterations,
            &mut self.grid,
        );
        trace!("Iteration grid refreshed");
    }

    /// Draws the current grid as one gray cell per pixel and presents it.
    pub fn draw(&self, canvas: &mut impl Canvas) -> GraphicsResult<()> {
        canvas.begin();
        for (x, y, count) in self.grid.iter() {
            let intensity = brightness(count, self.config.max_iterations);
            canvas.draw_rect(x, y, grayscale(intensity));
        }
        canvas.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::HeldKeys;

    #[test]
    fn new_viewer_starts_from_configured_viewport() {
        let viewer = Viewer::new(ViewerConfig::default());
        assert_eq!(viewer.viewport(), Viewport::new(-0.5, 0.5));
        assert_eq!(viewer.axes().xs.len(), 680);
        assert_eq!(viewer.axes().ys.len(), 460);
    }

    #[test]
    fn opposite_keys_apply_in_the_same_frame() {
        let mut viewer = Viewer::new(ViewerConfig::default());
        let keys = HeldKeys::none()
            .with(Pan::Up)
            .with(Pan::Down)
            .with(Pan::Right);
        viewer.update(&keys);
        let viewport = viewer.viewport();
        assert!((viewport.min - (-0.5)).abs() < 1e-12);
        assert!((viewport.max - 0.51).abs() < 1e-12);
    }

    #[test]
    fn holding_up_for_ten_frames() {
        let mut viewer = Viewer::new(ViewerConfig {
            width: 4,
            height: 4,
            ..ViewerConfig::default()
        });
        let keys = HeldKeys::none().with(Pan::Up);
        for _ in 0..10 {
            viewer.update(&keys);
        }
        assert!((viewer.viewport().min - (-0.6)).abs() < 1e-9);
        assert_eq!(viewer.axes().xs[0], viewer.viewport().min);
        assert_eq!(viewer.axes().ys[0], viewer.viewport().min);
    }
}
