//! Cancellable poll-tick registration.
//!
//! Focus changes that dispatch no reliable event (focus vanishing into a
//! cross-origin frame) are caught by a low-frequency host tick. The engine
//! does not own a timer; it hands the host a [`PollHandle`] per lock, and
//! the host calls [`FocusLockEngine::poll`](crate::FocusLockEngine::poll)
//! while any handle is live. Deactivation cancels the handle synchronously
//! before returning, so no tick ever arbitrates against a torn-down lock.

use std::cell::Cell;
use std::rc::Rc;

/// Shared cancellation flag for a lock's poll registration.
#[derive(Clone, Debug)]
pub struct PollHandle {
    cancelled: Rc<Cell<bool>>,
}

impl PollHandle {
    pub(crate) fn new() -> Self {
        Self {
            cancelled: Rc::new(Cell::new(false)),
        }
    }

    /// Stop this registration. All clones observe the cancellation
    /// immediately.
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_is_visible_through_clones() {
        let handle = PollHandle::new();
        let clone = handle.clone();
        assert!(!clone.is_cancelled());
        handle.cancel();
        assert!(clone.is_cancelled());
    }
}
