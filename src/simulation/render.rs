use crate::models::Vec2;

/// Per-step rendering hook. The simulation is indifferent to what a sink
/// does with the frame: write a file, fill a buffer, or nothing at all.
pub trait FrameSink {
    fn render_frame(&mut self, step: usize, domain_size: f64, positions: &[Vec2]);
}

/// Discards every frame.
pub struct NullSink;

impl FrameSink for NullSink {
    fn render_frame(&mut self, _step: usize, _domain_size: f64, _positions: &[Vec2]) {}
}

/// A caller-owned boolean raster. Each frame overwrites the previous one;
/// the buffer is allocated once and reused deterministically instead of
/// living in hidden process-wide state.
pub struct PixelGrid {
    size: usize,
    pixels: Vec<bool>,
}

impl PixelGrid {
    pub fn new(size: usize) -> Self {
        PixelGrid {
            size,
            pixels: vec![false; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major pixel buffer of the most recent frame.
    pub fn pixels(&self) -> &[bool] {
        &self.pixels
    }

    pub fn is_set(&self, x: usize, y: usize) -> bool {
        self.pixels[y * self.size + x]
    }
}

impl FrameSink for PixelGrid {
    fn render_frame(&mut self, _step: usize, domain_size: f64, positions: &[Vec2]) {
        self.pixels.fill(false);
        for p in positions {
            let x = ((p.x / domain_size * self.size as f64) as usize) % self.size;
            let y = ((p.y / domain_size * self.size as f64) as usize) % self.size;
            self.pixels[y * self.size + x] = true;
        }
    }
}
