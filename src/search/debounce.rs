use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Trailing-edge debounce.
///
/// Every call to [`Debouncer::arm`] supersedes the handles armed before it, so
/// a burst of calls inside the quiet window settles exactly once, for the last
/// call. Nothing fires on the leading edge. Clones share the same generation
/// counter, which lets a component keep one debouncer for its whole lifetime.
#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Restarts the quiet window and returns a handle for this call.
    pub fn arm(&self) -> Pending {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        Pending {
            generation,
            window: self.window,
            latest: Arc::clone(&self.generation),
        }
    }

    /// Invalidates every outstanding handle
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

/// One armed call of a [`Debouncer`].
#[derive(Debug)]
pub struct Pending {
    generation: u64,
    window: Duration,
    latest: Arc<AtomicU64>,
}

impl Pending {
    /// Waits out the quiet window. Returns `true` when no later call was armed
    /// in the meantime, i.e. this call is the one that should act.
    pub async fn settled(self) -> bool {
        tokio::time::sleep(self.window).await;
        self.is_current()
    }

    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::SeqCst) == self.generation
    }
}
