//! The four drawing operations the scratch engine needs from a host surface, and a
//! software implementation over [`FrameBuffer`].

use crate::types::{CompositeMode, Dimensions, FrameBuffer, Point, Rect};

/// Anything that can host the scratch engine: a software framebuffer, a GPU canvas,
/// a retained bitmap.
pub trait PaintSurface {
    /// Reallocate to `dims`. Old content is not preserved.
    fn resize(&mut self, dims: Dimensions);

    /// Fill `rect` with `color` (0xAARRGGBB) under the current composite mode.
    /// `color` also becomes the fill color for later circles.
    fn fill_rect(&mut self, rect: Rect, color: u32);

    fn set_composite(&mut self, mode: CompositeMode);

    /// Fill a circle under the current composite mode.
    fn fill_circle(&mut self, center: Point, radius: f32);
}

/// Software canvas: a framebuffer plus the drawing state a 2-D context would carry.
#[derive(Clone, Debug, Default)]
pub struct Canvas {
    fb: FrameBuffer,
    mode: CompositeMode,
    fill: u32,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn mode(&self) -> CompositeMode {
        self.mode
    }

    /// Count of pixels whose alpha is zero.
    pub fn cleared_pixels(&self) -> usize {
        self.fb.pixels.iter().filter(|px| *px >> 24 == 0).count()
    }

    #[inline]
    fn apply(&mut self, idx: usize) {
        self.fb.pixels[idx] = match self.mode {
            CompositeMode::Draw => self.fill,
            CompositeMode::Erase => 0,
        };
    }
}

impl PaintSurface for Canvas {
    fn resize(&mut self, dims: Dimensions) {
        self.fb = FrameBuffer::new(dims.width as usize, dims.height as usize);
        // A fresh 2-D context starts over in draw mode.
        self.mode = CompositeMode::Draw;
    }

    fn fill_rect(&mut self, rect: Rect, color: u32) {
        self.fill = color;
        let x0 = (rect.x as usize).min(self.fb.width);
        let y0 = (rect.y as usize).min(self.fb.height);
        let x1 = (rect.x as usize + rect.width as usize).min(self.fb.width);
        let y1 = (rect.y as usize + rect.height as usize).min(self.fb.height);
        for y in y0..y1 {
            for x in x0..x1 {
                self.apply(y * self.fb.width + x);
            }
        }
    }

    fn set_composite(&mut self, mode: CompositeMode) {
        self.mode = mode;
    }

    fn fill_circle(&mut self, center: Point, radius: f32) {
        if radius <= 0.0 || self.fb.width == 0 || self.fb.height == 0 {
            return;
        }
        let r2 = radius * radius;

        // Scan just the bounding box, clipped to the buffer.
        let x0 = (center.x - radius).floor().max(0.0) as usize;
        let y0 = (center.y - radius).floor().max(0.0) as usize;
        let x1 = ((center.x + radius).ceil().max(0.0) as usize).min(self.fb.width);
        let y1 = ((center.y + radius).ceil().max(0.0) as usize).min(self.fb.height);

        for y in y0..y1 {
            let dy = y as f32 + 0.5 - center.y;
            for x in x0..x1 {
                let dx = x as f32 + 0.5 - center.x;
                if dx * dx + dy * dy > r2 {
                    continue; // outside the circle
                }
                self.apply(y * self.fb.width + x);
            }
        }
    }
}
