use super::resolution::Resolution;

/// Escape iteration for every pixel of the window, stored row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationGrid {
    resolution: Resolution,
    counts: Vec<u32>,
}

impl IterationGrid {
    pub fn new(resolution: Resolution) -> Self {
        Self {
            resolution,
            counts: vec![0; resolution.pixel_count()],
        }
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn get(&self, x: u32, y: u32) -> u32 {
        self.counts[self.index(x, y)]
    }

    pub fn set(&mut self, x: u32, y: u32, count: u32) {
        let index = self.index(x, y);
        self.counts[index] = count;
    }

    /// Iterates `(x, y, count)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32, u32)> + '_ {
        let nx = self.resolution.nx;
        self.counts
            .iter()
            .enumerate()
            .map(move |(i, &count)| (i as u32 % nx, i as u32 / nx, count))
    }

    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.resolution.nx && y < self.resolution.ny);
        y as usize * self.resolution.nx as usize + x as usize
    }
}
