/// Red, green, blue and alpha channels of one pixel.
pub type Rgba = [u8; 4];

pub const BLACK: Rgba = [0x0, 0x0, 0x0, 0xff];

/// Maps an escape count to a gray level.
///
/// The level is `√n` rescaled from `[0, 1]` to `[0, 255]` and saturated, so
/// any point that escapes after at least one iteration is drawn at full
/// intensity. Points that never escaped are black.
pub fn brightness(count: u32, max_iterations: u32) -> u8 {
    if count == max_iterations {
        return 0;
    }
    ((count as f64).sqrt() * 255.0).clamp(0.0, 255.0) as u8
}

pub fn grayscale(intensity: u8) -> Rgba {
    [intensity, intensity, intensity, 0xff]
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAP: u32 = 100;

    #[test]
    fn zero_iterations_is_black() {
        assert_eq!(brightness(0, CAP), 0);
    }

    #[test]
    fn inside_points_are_black() {
        assert_eq!(brightness(CAP, CAP), 0);
    }

    #[test]
    fn single_iteration_saturates() {
        assert_eq!(brightness(1, CAP), 255);
        assert_eq!(brightness(CAP - 1, CAP), 255);
    }

    #[test]
    fn grayscale_is_opaque() {
        assert_eq!(grayscale(17), [17, 17, 17, 0xff]);
    }
}
