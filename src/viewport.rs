//! Host viewport size as an explicitly owned, reactive value.
//!
//! The host owns a [`ResizeSignal`] and emits on every resize. A [`ViewportTracker`]
//! subscribes when mounted and holds the [`Subscription`] guard; dropping the tracker
//! (normal teardown, early return, unwind) removes the listener.

use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
};

use tracing::debug;

use crate::types::Dimensions;

type Listener = Box<dyn FnMut(Dimensions)>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    active: Vec<(u64, Listener)>,
    /// Ids removed while their callbacks were checked out by `emit`.
    dropped: Vec<u64>,
    emitting: bool,
}

/// Single-threaded resize broadcaster. Delivery is synchronous, in subscription order.
#[derive(Clone, Default)]
pub struct ResizeSignal {
    inner: Rc<RefCell<Listeners>>,
}

impl ResizeSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: impl FnMut(Dimensions) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.active.push((id, Box::new(listener)));
        debug!(id, "resize listener subscribed");
        Subscription { id, signal: Rc::downgrade(&self.inner) }
    }

    /// Deliver `dims` to every listener. Listeners may subscribe or unsubscribe from
    /// inside their callback; new listeners first hear the next emit.
    pub fn emit(&self, dims: Dimensions) {
        let mut batch = {
            let mut inner = self.inner.borrow_mut();
            inner.emitting = true;
            std::mem::take(&mut inner.active)
        };

        for (_, listener) in batch.iter_mut() {
            listener(dims);
        }

        let mut inner = self.inner.borrow_mut();
        inner.emitting = false;
        let dropped = std::mem::take(&mut inner.dropped);
        batch.retain(|(id, _)| !dropped.contains(id));
        // Listeners added during delivery go after the existing ones.
        let added = std::mem::take(&mut inner.active);
        inner.active = batch;
        inner.active.extend(added);
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().active.len()
    }

    fn unsubscribe(inner: &RefCell<Listeners>, id: u64) {
        let mut inner = inner.borrow_mut();
        let before = inner.active.len();
        inner.active.retain(|(lid, _)| *lid != id);
        if inner.active.len() == before && inner.emitting {
            inner.dropped.push(id);
        }
        debug!(id, "resize listener unsubscribed");
    }
}

/// Registration guard; unsubscribes on drop. Outliving the signal is harmless.
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    signal: Weak<RefCell<Listeners>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.signal.upgrade() {
            ResizeSignal::unsubscribe(&inner, self.id);
        }
    }
}

/// Publishes the current viewport size. No debouncing: every resize republishes.
pub struct ViewportTracker {
    dims: Rc<Cell<Dimensions>>,
    _subscription: Subscription,
}

impl ViewportTracker {
    /// Publish `measured` immediately, then follow `signal`.
    pub fn mount(signal: &ResizeSignal, measured: Dimensions) -> Self {
        let dims = Rc::new(Cell::new(measured));
        let published = Rc::clone(&dims);
        let subscription = signal.subscribe(move |d| published.set(d));
        debug!(width = measured.width, height = measured.height, "viewport tracker mounted");
        Self { dims, _subscription: subscription }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims.get()
    }

    /// `(0,0)` or a zero side means consumers must wait.
    pub fn is_ready(&self) -> bool {
        self.dims.get().is_ready()
    }
}
