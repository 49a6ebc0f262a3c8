//! One-shot completion signaling for refresh cycles.
use std::cell::Cell;
use std::rc::Rc;

/// A one-shot handle that finishes a refresh cycle.
///
/// A listener that intercepts `on_refresh_complete` keeps a clone of the
/// signal and calls [`notify_complete`](Self::notify_complete) once its own
/// work is done. Only the first call has an effect; the signal is inert
/// afterwards and is not reused across refresh cycles.
#[derive(Debug, Clone)]
pub struct RefreshSignal {
    pending: Rc<Cell<bool>>,
    fired: Rc<Cell<bool>>,
}

impl RefreshSignal {
    pub(crate) fn new(pending: Rc<Cell<bool>>) -> Self {
        Self {
            pending,
            fired: Rc::new(Cell::new(false)),
        }
    }

    /// Requests the deferred reset of the refresh container.
    ///
    /// The reset runs on the container's next frame tick.
    pub fn notify_complete(&self) {
        if !self.fired.replace(true) {
            self.pending.set(true);
        }
    }

    /// Whether [`notify_complete`](Self::notify_complete) was already called.
    pub fn is_complete(&self) -> bool {
        self.fired.get()
    }
}
