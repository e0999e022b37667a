//! "New frame available" flag shared with the producer thread.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Latest-frame signal.
///
/// Producers call [`mark`](FrameSignal::mark) from any thread. Only whether
/// a newer frame exists matters, not how many arrived, so repeated marks
/// collapse into one.
#[derive(Debug, Clone, Default)]
pub struct FrameSignal(Arc<AtomicBool>);

impl FrameSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_pending(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Clear the flag, returning whether it was set.
    ///
    /// A mark racing with this call is either consumed now or left pending
    /// for the next frame; it is never lost.
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::AcqRel)
    }
}
