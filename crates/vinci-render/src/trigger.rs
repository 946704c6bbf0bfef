//! Render trigger backed by `std` synchronization primitives.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use vinci_core::RenderTrigger;

type Waker = Arc<dyn Fn() + Send + Sync + 'static>;

/// Records render requests so an outer loop can poll for them, and optionally
/// wakes that loop.
pub struct StdTrigger {
    requested: AtomicBool,
    last_reason: RwLock<Option<String>>,
    waker: RwLock<Option<Waker>>,
}

impl StdTrigger {
    pub fn new() -> Self {
        Self {
            requested: AtomicBool::new(false),
            last_reason: RwLock::new(None),
            waker: RwLock::new(None),
        }
    }

    /// Returns whether a render has been requested since the last call.
    pub fn take_render_request(&self) -> bool {
        self.requested.swap(false, Ordering::SeqCst)
    }

    pub fn last_reason(&self) -> Option<String> {
        self.last_reason
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Registers a waker invoked on every render request.
    pub fn set_waker(&self, waker: impl Fn() + Send + Sync + 'static) {
        *self.waker.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(waker));
    }

    pub fn clear_waker(&self) {
        *self.waker.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    fn wake(&self) {
        let waker = self
            .waker
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        if let Some(waker) = waker {
            waker();
        }
    }
}

impl Default for StdTrigger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StdTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdTrigger")
            .field("requested", &self.requested.load(Ordering::SeqCst))
            .field("last_reason", &self.last_reason())
            .finish()
    }
}

impl RenderTrigger for StdTrigger {
    fn request_render(&self, reason: &str) {
        *self
            .last_reason
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(reason.to_owned());
        self.requested.store(true, Ordering::SeqCst);
        self.wake();
    }
}
