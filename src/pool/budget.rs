use std::sync::atomic::{AtomicUsize, Ordering};

/// Shared count of iterations still allowed to start.
#[derive(Debug)]
pub struct IterationBudget {
    limit: usize,
    issued: AtomicUsize,
}

impl IterationBudget {
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self {
            limit,
            issued: AtomicUsize::new(0),
        }
    }

    /// Claims one iteration. Returns `false` once all have been claimed.
    #[must_use]
    pub fn try_reserve(&self) -> bool {
        loop {
            let current = self.issued.load(Ordering::Relaxed);
            if current >= self.limit {
                return false;
            }
            let Some(next) = current.checked_add(1) else {
                return false;
            };
            if self
                .issued
                .compare_exchange(current, next, Ordering::Relaxed, Ordering::Relaxed)
                .is_ok()
            {
                return true;
            }
        }
    }

    #[must_use]
    pub fn issued(&self) -> usize {
        self.issued.load(Ordering::Relaxed)
    }
}
