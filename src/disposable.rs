//! Release callbacks run when their owner is torn down.

/// An owned collection of release callbacks.
///
/// Each callback runs at most once: [`DisposableBag::dispose`] drains the
/// bag, so calling it again is a no-op. Dropping the bag disposes it.
#[derive(Default)]
pub struct DisposableBag {
    items: Vec<Box<dyn FnOnce() + Send>>,
}

impl DisposableBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback to run on dispose.
    pub fn push(&mut self, release: impl FnOnce() + Send + 'static) {
        self.items.push(Box::new(release));
    }

    /// Number of callbacks not yet run.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Run every registered callback in registration order.
    pub fn dispose(&mut self) {
        if self.items.is_empty() {
            return;
        }
        tracing::debug!("Releasing {} registration(s)", self.items.len());
        for release in self.items.drain(..) {
            release();
        }
    }
}

impl Drop for DisposableBag {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl std::fmt::Debug for DisposableBag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DisposableBag")
            .field("pending", &self.items.len())
            .finish()
    }
}
