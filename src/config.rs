//! Tunable constants for the scratch effect.
//!
//! Stroke thickness and step spacing are aesthetic choices; they are loaded from JSON or
//! overridden from the command line, then checked once by [`ScratchConfig::validate`].

use std::{fs::File, io::BufReader, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Radius of every stamp laid down by a stroke.
pub const DEFAULT_STROKE_RADIUS: f32 = 55.0;
/// Pixels of pointer movement per interpolated stamp.
pub const DEFAULT_STEP_DIVISOR: f32 = 8.0;
/// Opaque near-black cover (#050505).
pub const DEFAULT_COVER_COLOR: u32 = 0xFF_05_05_05;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScratchConfig {
    pub stroke_radius: f32,
    pub step_divisor: f32,
    /// 0xAARRGGBB; alpha is forced to 0xFF when painted.
    pub cover_color: u32,
}

impl Default for ScratchConfig {
    fn default() -> Self {
        Self {
            stroke_radius: DEFAULT_STROKE_RADIUS,
            step_divisor: DEFAULT_STEP_DIVISOR,
            cover_color: DEFAULT_COVER_COLOR,
        }
    }
}

impl ScratchConfig {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let f = File::open(path)
            .map_err(|e| Error::config(format!("open '{}': {e}", path.display())))?;
        let cfg: ScratchConfig = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| Error::config(format!("parse '{}': {e}", path.display())))?;
        Ok(cfg)
    }

    /// Consecutive stroke stamps sit at most `step_divisor` apart, so a divisor below the
    /// stroke radius keeps the trail gap-free.
    pub fn validate(&self) -> Result<()> {
        for (name, v) in [
            ("stroke_radius", self.stroke_radius),
            ("step_divisor", self.step_divisor),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(Error::config(format!("{name} must be finite and > 0, got {v}")));
            }
        }
        if self.step_divisor >= self.stroke_radius {
            return Err(Error::config(format!(
                "step_divisor ({}) must be smaller than stroke_radius ({}) or strokes leave gaps",
                self.step_divisor, self.stroke_radius
            )));
        }
        Ok(())
    }

    /// Cover color with the alpha channel forced opaque.
    pub fn opaque_cover(&self) -> u32 {
        self.cover_color | 0xFF_00_00_00
    }
}
