// Core types shared by the tracker, the engine and the window host.

/// Viewport size in pixels. `(0,0)` means "not measured yet".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const UNMEASURED: Dimensions = Dimensions { width: 0, height: 0 };

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Both sides non-zero; anything else is the startup "not ready" state.
    pub fn is_ready(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// A point in buffer-local coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Project onto `[0,width] × [0,height]` instead of rejecting out-of-range input.
    pub fn clamp_to(self, dims: Dimensions) -> Self {
        Self {
            x: self.x.clamp(0.0, dims.width as f32),
            y: self.y.clamp(0.0, dims.height as f32),
        }
    }

    /// `a*(1-t) + b*t` on both axes.
    pub fn lerp(a: Point, b: Point, t: f32) -> Point {
        Point {
            x: lerp(a.x, b.x, t),
            y: lerp(a.y, b.y, t),
        }
    }
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Integer pixel rectangle, used for fills.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn covering(dims: Dimensions) -> Self {
        Self { x: 0, y: 0, width: dims.width, height: dims.height }
    }
}

/// How circle stamps combine with what is already in the buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CompositeMode {
    /// Write the current fill color (source-over with an opaque source).
    #[default]
    Draw,
    /// Clear opacity to zero under the shape (destination-out).
    Erase,
}

/// Software framebuffer. Each entry is 0xAARRGGBB; alpha 0 means fully scratched away.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameBuffer {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u32>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width as u32, self.height as u32)
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    #[inline]
    pub fn alpha_at(&self, x: usize, y: usize) -> Option<u8> {
        self.get(x, y).map(|px| (px >> 24) as u8)
    }
}
