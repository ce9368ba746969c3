// Window + software overlay utilities for the desktop host.
// Visual effects provided here:
// 1) A resizable window that shows the scratch card over its backdrop.
// 2) A crosshair that follows the mouse over the card.

use crate::error::{Error, Result};
use crate::types::{Dimensions, FrameBuffer};
use minifb::{Key, MouseMode, Window, WindowOptions};

pub struct Drawer {
    window: Window,
}

impl Drawer {
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self> {
        let opts = WindowOptions { resize: true, ..WindowOptions::default() };
        let mut window =
            Window::new(title, width, height, opts).map_err(|e| Error::window_init(e.to_string()))?;
        window.set_target_fps(60);
        // The crosshair replaces the system cursor over the card.
        window.set_cursor_visibility(false);
        Ok(Self { window })
    }

    /// Current client area in pixels; the host's resize signal polls this each frame.
    pub fn size(&self) -> Dimensions {
        let (w, h) = self.window.get_size();
        Dimensions::new(w as u32, h as u32)
    }

    /// Push the pixels for this frame to the screen.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<()> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::window_update(e.to_string()))
    }

    /// Pump window events without a new frame (used while the viewport is unmeasured).
    pub fn idle(&mut self) {
        self.window.update();
    }

    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Mouse position in window pixels, only while the cursor is over the window.
    /// `None` is the host's "leave" signal.
    pub fn mouse_pos(&self) -> Option<(f32, f32)> {
        self.window.get_mouse_pos(MouseMode::Discard)
    }
}

/* ---------- Software drawing: pixels, crosshair ---------- */

/// Write one pixel, silently skipping anything off the frame.
/// Visual: the exact pixel at (x,y) takes the color; off-screen parts of a shape vanish.
#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Bresenham line between (x0,y0) and (x1,y1).
/// Visual: a 1-pixel line drawn over the composed card, no anti-aliasing.
fn draw_line(fb: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
    let (mut x0, mut y0) = (x0, y0);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        put_pixel(fb, x0, y0, color);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// A "+" with a small gap at the center, drawn over the composed frame.
/// Visual: replaces the hidden system cursor so the scratch point stays visible on the
/// dark cover; the gap keeps the exact stamp center readable.
pub fn draw_crosshair(fb: &mut FrameBuffer, cx: i32, cy: i32, size: i32, color: u32) {
    draw_line(fb, cx - size, cy, cx - 2, cy, color);
    draw_line(fb, cx + 2, cy, cx + size, cy, color);
    draw_line(fb, cx, cy - size, cx, cy - 2, color);
    draw_line(fb, cx, cy + 2, cx, cy + size, color);
    put_pixel(fb, cx, cy, color);
}
