//! Scratch-to-reveal paint surface.
//!
//! A [`ViewportTracker`] publishes the host size; a [`ScratchEngine`] keeps an opaque
//! cover the same size and erases a gap-free trail of circles along pointer and touch
//! movement. [`ScratchScene`] wires the two together for a host event loop.

pub mod compose;
pub mod config;
pub mod draw;
pub mod engine;
pub mod error;
pub mod scene;
pub mod surface;
pub mod types;
pub mod viewport;

pub use compose::{Backdrop, compose_over};
pub use config::ScratchConfig;
pub use engine::{Gesture, PointerMove, ScratchEngine, ScratchEvent, TouchPoint};
pub use error::{Error, Result};
pub use scene::ScratchScene;
pub use surface::{Canvas, PaintSurface};
pub use types::{CompositeMode, Dimensions, FrameBuffer, Point, Rect};
pub use viewport::{ResizeSignal, Subscription, ViewportTracker};
