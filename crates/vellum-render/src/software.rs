//! CPU-side canvas backed by a packed RGBA8 pixel buffer.

use crate::{Canvas, CanvasNew, Color};

/// A canvas that keeps its pixels in main memory.
///
/// Pixels are stored row-major as packed `0xRRGGBBAA` values. Resizing
/// reallocates the buffer and clears it to [`Color::TRANSPARENT`]; disposing
/// frees it. Accessing pixels after disposal yields `None`.
///
/// The buffer holds at most [`SoftwareCanvas::MAX_PIXELS`] pixels. Larger
/// sizes are still reported by `width()`/`height()`, but no buffer is
/// allocated: [`is_allocated`](SoftwareCanvas::is_allocated) is `false` and
/// every pixel access yields `None`.
#[derive(Debug, Clone)]
pub struct SoftwareCanvas {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
    frames: u64,
    disposed: bool,
}

impl SoftwareCanvas {
    /// Largest buffer allocated, in pixels (1 GiB of RGBA8).
    pub const MAX_PIXELS: usize = 1 << 28;

    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::TRANSPARENT.pack(); pixel_count(width, height)],
            frames: 0,
            disposed: false,
        }
    }

    /// Number of frames finished with [`Canvas::end`].
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Whether a pixel buffer backs the current size.
    pub fn is_allocated(&self) -> bool {
        !self.disposed
            && (self.width as usize).checked_mul(self.height as usize) == Some(self.pixels.len())
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color.pack());
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.index(x, y).map(|i| Color::unpack(self.pixels[i]))
    }

    /// Write a single pixel. Returns `false` when `(x, y)` is off the canvas.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.pixels[i] = color.pack();
                true
            }
            None => false,
        }
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if !self.is_allocated() || x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }
}

/// Buffer length for a `width` x `height` canvas, or zero when it would
/// exceed [`SoftwareCanvas::MAX_PIXELS`].
fn pixel_count(width: u32, height: u32) -> usize {
    match (width as usize).checked_mul(height as usize) {
        Some(count) if count <= SoftwareCanvas::MAX_PIXELS => count,
        _ => {
            tracing::warn!(
                "Software canvas {}x{} exceeds {} pixels, leaving it unallocated",
                width,
                height,
                SoftwareCanvas::MAX_PIXELS
            );
            0
        }
    }
}

impl Canvas for SoftwareCanvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width == self.width && height == self.height {
            return;
        }
        tracing::trace!("Resizing software canvas to {}x{}", width, height);
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels
            .resize(pixel_count(width, height), Color::TRANSPARENT.pack());
    }

    fn end(&mut self) {
        self.frames += 1;
    }

    fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        tracing::debug!(
            "Disposing software canvas ({}x{}, {} frames)",
            self.width,
            self.height,
            self.frames
        );
        self.pixels = Vec::new();
        self.disposed = true;
    }

    fn is_disposed(&self) -> bool {
        self.disposed
    }
}

impl CanvasNew for SoftwareCanvas {
    fn with_size(width: u32, height: u32) -> Self {
        Self::new(width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_transparent() {
        let canvas = SoftwareCanvas::new(3, 2);
        assert_eq!(canvas.pixels().len(), 6);
        assert_eq!(canvas.pixel(2, 1), Some(Color::TRANSPARENT));
        assert_eq!(canvas.pixel(3, 0), None);
    }

    #[test]
    fn test_resize_reallocates_and_clears() {
        let mut canvas = SoftwareCanvas::new(2, 2);
        canvas.clear(Color::RED);
        canvas.resize(4, 1);
        assert_eq!(canvas.dimensions().width, 4);
        assert_eq!(canvas.pixels().len(), 4);
        assert_eq!(canvas.pixel(3, 0), Some(Color::TRANSPARENT));
    }

    #[test]
    fn test_resize_to_same_size_keeps_contents() {
        let mut canvas = SoftwareCanvas::new(2, 2);
        canvas.clear(Color::BLUE);
        canvas.resize(2, 2);
        assert_eq!(canvas.pixel(1, 1), Some(Color::BLUE));
    }

    #[test]
    fn test_set_pixel_bounds() {
        let mut canvas = SoftwareCanvas::new(2, 2);
        assert!(canvas.set_pixel(1, 1, Color::GREEN));
        assert!(!canvas.set_pixel(2, 0, Color::GREEN));
        assert_eq!(canvas.pixel(1, 1), Some(Color::GREEN));
    }

    #[test]
    fn test_end_counts_frames() {
        let mut canvas = SoftwareCanvas::new(1, 1);
        canvas.end();
        canvas.end();
        assert_eq!(canvas.frame_count(), 2);
    }

    #[test]
    fn test_dispose_releases_pixels() {
        let mut canvas = SoftwareCanvas::new(8, 8);
        canvas.dispose();
        assert!(canvas.is_disposed());
        assert!(canvas.pixels().is_empty());
        assert_eq!(canvas.pixel(0, 0), None);
        // Idempotent
        canvas.dispose();
        assert!(canvas.is_disposed());
    }

    #[test]
    fn test_oversized_canvas_is_unallocated() {
        let max = i32::MAX as u32;
        let mut canvas = SoftwareCanvas::new(max, max);
        assert_eq!(canvas.dimensions().width, max);
        assert!(!canvas.is_allocated());
        assert!(canvas.pixels().is_empty());
        assert_eq!(canvas.pixel(0, 0), None);
        assert!(!canvas.set_pixel(0, 0, Color::RED));

        canvas.resize(4, 4);
        assert!(canvas.is_allocated());
        assert_eq!(canvas.pixel(3, 3), Some(Color::TRANSPARENT));
    }

    #[test]
    fn test_zero_sized_canvas() {
        let canvas = SoftwareCanvas::new(0, 0);
        assert!(canvas.dimensions().is_empty());
        assert!(canvas.pixels().is_empty());
    }
}
