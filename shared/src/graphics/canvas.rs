use pixels::Pixels;

use super::{
    color::{Rgba, BLACK},
    result::GraphicsResult,
};

/// The drawing surface the viewer renders into.
pub trait Canvas {
    /// Starts a frame by clearing the surface.
    fn begin(&mut self);

    /// Fills the unit rectangle whose top-left corner is `(x, y)`.
    fn draw_rect(&mut self, x: u32, y: u32, color: Rgba);

    /// Presents the finished frame.
    fn end(&mut self) -> GraphicsResult<()>;
}

fn put_pixel(frame: &mut [u8], width: u32, x: u32, y: u32, color: Rgba) {
    let offset = (y as usize * width as usize + x as usize) * 4;
    if let Some(pixel) = frame.get_mut(offset..offset + 4) {
        pixel.copy_from_slice(&color);
    }
}

fn clear(frame: &mut [u8]) {
    for pixel in frame.chunks_exact_mut(4) {
        pixel.copy_from_slice(&BLACK);
    }
}

/// Canvas backed by the `pixels` framebuffer of the window.
pub struct PixelsCanvas<'a> {
    pixels: &'a mut Pixels,
    width: u32,
}

impl<'a> PixelsCanvas<'a> {
    pub fn new(pixels: &'a mut Pixels, width: u32) -> Self {
        Self { pixels, width }
    }
}

impl Canvas for PixelsCanvas<'_> {
    fn begin(&mut self) {
        clear(self.pixels.frame_mut());
    }

    fn draw_rect(&mut self, x: u32, y: u32, color: Rgba) {
        put_pixel(self.pixels.frame_mut(), self.width, x, y, color);
    }

    fn end(&mut self) -> GraphicsResult<()> {
        Ok(self.pixels.render()?)
    }
}

/// In-memory RGBA canvas. Frames are kept rather than shown.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    frame: Vec<u8>,
    presented: usize,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            frame: vec![0; width as usize * height as usize * 4],
            presented: 0,
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        let mut rgba = BLACK;
        rgba.copy_from_slice(&self.frame[offset..offset + 4]);
        rgba
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of frames presented so far.
    pub fn presented(&self) -> usize {
        self.presented
    }
}

impl Canvas for FrameBuffer {
    fn begin(&mut self) {
        clear(&mut self.frame);
    }

    fn draw_rect(&mut self, x: u32, y: u32, color: Rgba) {
        put_pixel(&mut self.frame, self.width, x, y, color);
    }

    fn end(&mut self) -> GraphicsResult<()> {
        self.presented += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_clears_to_opaque_black() {
        let mut canvas = FrameBuffer::new(3, 2);
        canvas.draw_rect(1, 1, [9, 9, 9, 9]);
        canvas.begin();
        assert_eq!(canvas.pixel(1, 1), BLACK);
        assert_eq!(canvas.pixel(0, 0), BLACK);
    }

    #[test]
    fn draw_rect_touches_a_single_pixel() {
        let mut canvas = FrameBuffer::new(3, 2);
        canvas.begin();
        canvas.draw_rect(2, 1, [200, 100, 50, 255]);
        assert_eq!(canvas.pixel(2, 1), [200, 100, 50, 255]);
        assert_eq!(canvas.pixel(1, 1), BLACK);
        assert_eq!(canvas.pixel(2, 0), BLACK);
    }

    #[test]
    fn out_of_bounds_rect_is_ignored() {
        let mut canvas = FrameBuffer::new(2, 2);
        canvas.begin();
        canvas.draw_rect(0, 5, [1, 1, 1, 1]);
        assert_eq!(canvas.pixel(1, 1), BLACK);
    }

    #[test]
    fn end_counts_presented_frames() {
        let mut canvas = FrameBuffer::new(1, 1);
        canvas.end().unwrap();
        canvas.end().unwrap();
        assert_eq!(canvas.presented(), 2);
    }
}
