//! One mounted scratch surface: a viewport tracker driving one engine.

use crate::config::ScratchConfig;
use crate::engine::{Gesture, ScratchEngine, ScratchEvent};
use crate::surface::PaintSurface;
use crate::types::Dimensions;
use crate::viewport::{ResizeSignal, ViewportTracker};

pub struct ScratchScene<S: PaintSurface> {
    tracker: ViewportTracker,
    engine: ScratchEngine<S>,
}

impl<S: PaintSurface> ScratchScene<S> {
    /// Measure, subscribe, and paint the cover if the size is already known.
    pub fn mount(
        signal: &ResizeSignal,
        measured: Dimensions,
        surface: S,
        config: ScratchConfig,
    ) -> Self {
        let mut scene = Self {
            tracker: ViewportTracker::mount(signal, measured),
            engine: ScratchEngine::new(surface, config),
        };
        scene.sync();
        scene
    }

    /// Report the published viewport size to the engine. Cheap when nothing changed.
    pub fn sync(&mut self) {
        self.engine.reinit(self.tracker.dimensions());
    }

    /// Route one host event. Resize events are taken from the tracker, not the event.
    pub fn handle(&mut self, event: &ScratchEvent) -> Gesture {
        self.sync();
        match event {
            ScratchEvent::Resize(_) => Gesture::Ignored,
            other => self.engine.handle(other),
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.tracker.dimensions()
    }

    pub fn engine(&self) -> &ScratchEngine<S> {
        &self.engine
    }
}
