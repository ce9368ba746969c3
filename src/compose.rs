// Presentation: the paint layer over a static backdrop, flattened for the window.
// Visual: where the cover is scratched away, the backdrop shows through.

use std::path::Path;

use image::{RgbaImage, imageops::FilterType};

use crate::error::{Error, Result};
use crate::types::{Dimensions, FrameBuffer};

#[inline]
fn mul_div255(a: u32, b: u32) -> u32 {
    // Rounded a*b/255 for 8-bit channels.
    let x = a * b + 128;
    (x + (x >> 8)) >> 8
}

#[inline]
fn channel(px: u32, shift: u32) -> u32 {
    (px >> shift) & 0xFF
}

/// Source-over of one ARGB pixel onto an opaque 0x00RRGGBB pixel.
#[inline]
pub fn over(dst: u32, src: u32) -> u32 {
    let a = src >> 24;
    match a {
        0 => dst & 0x00FF_FFFF,
        0xFF => src & 0x00FF_FFFF,
        _ => {
            let inv = 255 - a;
            let mut out = 0u32;
            for shift in [16, 8, 0] {
                let c = mul_div255(channel(src, shift), a) + mul_div255(channel(dst, shift), inv);
                out |= c.min(255) << shift;
            }
            out
        }
    }
}

/// Flatten `paint` over `backdrop` into `out` (0x00RRGGBB, ready for minifb).
pub fn compose_over(
    backdrop: &FrameBuffer,
    paint: &FrameBuffer,
    out: &mut FrameBuffer,
) -> Result<()> {
    for fb in [paint, &*out] {
        if fb.width != backdrop.width || fb.height != backdrop.height {
            return Err(Error::SizeMismatch {
                expected_w: backdrop.width,
                expected_h: backdrop.height,
                got_w: fb.width,
                got_h: fb.height,
            });
        }
    }
    for ((o, b), p) in out.pixels.iter_mut().zip(&backdrop.pixels).zip(&paint.pixels) {
        *o = over(*b, *p);
    }
    Ok(())
}

/// Static content revealed by scratching.
pub enum Backdrop {
    /// Vertical gradient between two 0x00RRGGBB colors.
    Gradient { top: u32, bottom: u32 },
    /// Image stretched to the viewport.
    Image(RgbaImage),
}

impl Default for Backdrop {
    fn default() -> Self {
        Backdrop::Gradient { top: 0x00_2B_1B_5E, bottom: 0x00_E0_6C_3C }
    }
}

impl Backdrop {
    pub fn from_image_file(path: &Path) -> Result<Self> {
        let img = image::open(path)
            .map_err(|e| Error::backdrop(format!("open '{}': {e}", path.display())))?;
        Ok(Backdrop::Image(img.to_rgba8()))
    }

    /// Render at `dims`. Called once per viewport change, not per frame.
    pub fn render(&self, dims: Dimensions) -> FrameBuffer {
        let mut fb = FrameBuffer::new(dims.width as usize, dims.height as usize);
        if !dims.is_ready() {
            return fb;
        }
        match self {
            Backdrop::Gradient { top, bottom } => {
                let span = (fb.height.max(2) - 1) as u32;
                for y in 0..fb.height {
                    let t = y as u32;
                    let mut row = 0u32;
                    for shift in [16, 8, 0] {
                        let c = (channel(*top, shift) * (span - t)
                            + channel(*bottom, shift) * t)
                            / span;
                        row |= c << shift;
                    }
                    fb.pixels[y * fb.width..(y + 1) * fb.width].fill(row);
                }
            }
            Backdrop::Image(img) => {
                let scaled =
                    image::imageops::resize(img, dims.width, dims.height, FilterType::Triangle);
                for (dst, px) in fb.pixels.iter_mut().zip(scaled.pixels()) {
                    let [r, g, b, a] = px.0;
                    // Transparent image regions fall back to black.
                    let argb = (u32::from(a) << 24)
                        | (u32::from(r) << 16)
                        | (u32::from(g) << 8)
                        | u32::from(b);
                    *dst = over(0, argb);
                }
            }
        }
        fb
    }
}
