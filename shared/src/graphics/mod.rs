pub mod canvas;
pub mod color;
pub mod error;
pub mod result;

use error_iter::ErrorIter as _;
use log::{debug, error, info};
use pixels::{Pixels, SurfaceTexture};
use winit::dpi::LogicalSize;
use winit::event::{Event, VirtualKeyCode};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;
use winit_input_helper::WinitInputHelper;

use crate::{config::ViewerConfig, viewer::Viewer};

use self::{canvas::PixelsCanvas, result::GraphicsResult};

/// Opens the window and runs the frame loop until Escape or a close request.
///
/// Only returns on a setup failure; once the loop starts the process exits
/// from inside it.
pub fn start_graphics(config: ViewerConfig) -> GraphicsResult<()> {
    let event_loop = EventLoop::new();
    let mut input = WinitInputHelper::new();

    info!(
        "Opening \"{}\" at {}x{}, {} iterations per point",
        config.title, config.width, config.height, config.max_iterations
    );
    if let Ok(json) = serde_json::to_string(&config) {
        debug!("Viewer config: {}", json);
    }

    let window = {
        let size = LogicalSize::new(config.width as f64, config.height as f64);
        WindowBuilder::new()
            .with_title(&config.title)
            .with_inner_size(size)
            .with_min_inner_size(size)
            .build(&event_loop)?
    };

    let mut pixels = {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
        Pixels::new(config.width, config.height, surface_texture)?
    };

    let width = config.width;
    let mut viewer = Viewer::new(config);

    event_loop.run(move |event, _, control_flow| {
        // Draw the current frame
        if let Event::RedrawRequested(_) = event {
            let mut canvas = PixelsCanvas::new(&mut pixels, width);
            if let Err(err) = viewer.draw(&mut canvas) {
                log_error("pixels.render", err);
                *control_flow = ControlFlow::Exit;
                return;
            }
        }

        if let Event::LoopDestroyed = event {
            info!("Closing...");
            return;
        }

        // Handle input events
        if input.update(&event) {
            // Close events
            if input.key_pressed(VirtualKeyCode::Escape) || input.close_requested() {
                *control_flow = ControlFlow::Exit;
                return;
            }

            // Resize the window
            if let Some(size) = input.window_resized() {
                if let Err(err) = pixels.resize_surface(size.width, size.height) {
                    log_error("pixels.resize_surface", err);
                    *control_flow = ControlFlow::Exit;
                    return;
                }
            }

            // Pan, recompute and request a redraw
            viewer.update(&input);
            window.request_redraw();
        }
    });
}

pub fn log_error<E: std::error::Error + 'static>(method_name: &str, err: E) {
    error!("{method_name}() failed: {err}");
    for source in err.sources().skip(1) {
        error!("  Caused by: {source}");
    }
}
