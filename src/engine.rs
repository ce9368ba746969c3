//! Scratch-to-reveal engine: an opaque cover erased along the pointer path.
//!
//! Every handler runs synchronously to completion inside the host's event callback.
//! Events must arrive in order: each stroke interpolates from the anchor left by the
//! previous event. No handler returns an error; the not-ready state and malformed touch
//! events are dropped silently.

use tracing::{debug, trace};

use crate::config::ScratchConfig;
use crate::surface::PaintSurface;
use crate::types::{CompositeMode, Dimensions, Point, Rect};

/// Mouse move as delivered by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerMove {
    pub client_x: f32,
    pub client_y: f32,
    /// Distance moved since the previous event; zero when the platform does not report it.
    pub movement_x: f32,
    pub movement_y: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    pub client_x: f32,
    pub client_y: f32,
}

/// Whether the host must suppress its default scroll/pan for a touch event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    Captured,
    Ignored,
}

/// Host events the engine understands, for hosts that forward a single stream.
#[derive(Clone, Debug, PartialEq)]
pub enum ScratchEvent {
    Resize(Dimensions),
    PointerMove(PointerMove),
    PointerLeave,
    TouchStart(Vec<TouchPoint>),
    TouchMove(Vec<TouchPoint>),
    TouchEnd,
    TouchCancel,
}

pub struct ScratchEngine<S: PaintSurface> {
    surface: S,
    config: ScratchConfig,
    dims: Dimensions,
    anchor: Option<Point>,
}

impl<S: PaintSurface> ScratchEngine<S> {
    /// The surface stays untouched until the first non-zero [`reinit`](Self::reinit).
    pub fn new(surface: S, config: ScratchConfig) -> Self {
        Self { surface, config, dims: Dimensions::UNMEASURED, anchor: None }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn config(&self) -> &ScratchConfig {
        &self.config
    }

    /// Last viewport size reported through [`reinit`](Self::reinit); `(0,0)` until then.
    /// When non-zero the buffer has exactly this size.
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn is_ready(&self) -> bool {
        self.dims.is_ready()
    }

    /// Last scratch position, the interpolation anchor for the next move.
    pub fn anchor(&self) -> Option<Point> {
        self.anchor
    }

    /// Record a viewport size report and repaint the cover when it changed.
    ///
    /// A repeated identical report is ignored. A report with a zero side puts the engine
    /// back into the not-ready state; the next non-zero report reinitializes even if it
    /// matches the old buffer. Any prior scratching and in-flight stroke are discarded.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn reinit(&mut self, dims: Dimensions) {
        if dims == self.dims {
            return;
        }
        self.dims = dims;
        self.anchor = None;
        if !dims.is_ready() {
            debug!(width = dims.width, height = dims.height, "viewport unmeasured, paused");
            return;
        }
        self.surface.resize(dims);
        self.surface.fill_rect(Rect::covering(dims), self.config.opaque_cover());
        self.surface.set_composite(CompositeMode::Erase);
        debug!(width = dims.width, height = dims.height, "scratch surface reinitialized");
    }

    /// Erase one filled circle.
    pub fn stamp(&mut self, center: Point, radius: f32) {
        if !self.is_ready() {
            return;
        }
        self.surface.fill_circle(center, radius);
    }

    /// Erase a gap-free trail from the anchor to `(x, y)`.
    ///
    /// `(dx, dy)` is the movement since the last sample and only decides how many stamps
    /// are laid: one per `step_divisor` pixels of the larger axis, at least one. The count
    /// never exceeds what the clamped anchor-to-target distance needs, so a bogus delta
    /// cannot flood the buffer with stamps.
    pub fn paint_stroke(&mut self, x: f32, y: f32, dx: f32, dy: f32) {
        if !self.is_ready() {
            return;
        }
        let target = Point::new(x, y).clamp_to(self.dims);
        let radius = self.config.stroke_radius;

        match self.anchor {
            Some(prev) => {
                let span = (target.x - prev.x).abs().max((target.y - prev.y).abs());
                let steps = self.step_count(dx, dy).min(self.step_count(span, 0.0));
                // Fractional step counts are kept: 2.5 steps stamps at t = 0, 0.4, 0.8.
                let mut i = 0u32;
                while (i as f32) < steps {
                    let t = i as f32 / steps;
                    self.surface.fill_circle(Point::lerp(prev, target, t), radius);
                    i += 1;
                }
                trace!(stamps = i, x = target.x, y = target.y, "stroke");
            }
            None => {
                self.surface.fill_circle(target, radius);
                trace!(x = target.x, y = target.y, "stroke start");
            }
        }
        self.anchor = Some(target);
    }

    fn step_count(&self, dx: f32, dy: f32) -> f32 {
        let steps = dx.abs().max(dy.abs()) / self.config.step_divisor;
        if steps.is_finite() && steps > 0.0 { steps } else { 1.0 }
    }

    pub fn pointer_move(&mut self, ev: PointerMove) {
        self.paint_stroke(ev.client_x, ev.client_y, ev.movement_x, ev.movement_y);
    }

    /// The pointer left the surface; the next move starts a fresh stroke.
    pub fn pointer_leave(&mut self) {
        self.anchor = None;
    }

    /// Seed the anchor from the first touch so the first touch-move does not jump.
    pub fn touch_start(&mut self, touches: &[TouchPoint]) {
        if !self.is_ready() {
            return;
        }
        let Some(t) = touches.first() else {
            return;
        };
        self.anchor = Some(Point::new(t.client_x, t.client_y).clamp_to(self.dims));
    }

    /// Stroke to the first touch point. Touches carry no movement delta, so it is
    /// measured from the anchor.
    pub fn touch_move(&mut self, touches: &[TouchPoint]) -> Gesture {
        let Some(t) = touches.first() else {
            return Gesture::Ignored;
        };
        let prev = self.anchor.unwrap_or(Point::new(t.client_x, t.client_y));
        self.paint_stroke(t.client_x, t.client_y, t.client_x - prev.x, t.client_y - prev.y);
        Gesture::Captured
    }

    pub fn touch_end(&mut self) {
        self.anchor = None;
    }

    pub fn touch_cancel(&mut self) {
        self.anchor = None;
    }

    /// Dispatch one host event. Returns the gesture decision for touch moves.
    pub fn handle(&mut self, event: &ScratchEvent) -> Gesture {
        match event {
            ScratchEvent::Resize(dims) => self.reinit(*dims),
            ScratchEvent::PointerMove(ev) => self.pointer_move(*ev),
            ScratchEvent::PointerLeave => self.pointer_leave(),
            ScratchEvent::TouchStart(touches) => self.touch_start(touches),
            ScratchEvent::TouchMove(touches) => return self.touch_move(touches),
            ScratchEvent::TouchEnd => self.touch_end(),
            ScratchEvent::TouchCancel => self.touch_cancel(),
        }
        Gesture::Ignored
    }
}
