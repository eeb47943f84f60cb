//! Clock-driven debouncing of committed values.
//!
//! The debouncer never spawns anything itself: callers pass in the current
//! time and poll for due values, which keeps entries deterministic in tests.
//! Async hosts can await [`wait_until_due`] to know when to poll.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Pending<V> {
    value: V,
    due: Instant,
}

/// Holds at most one pending value and releases it once `delay` has passed
/// without a newer one.
#[derive(Debug, Clone)]
pub struct Debouncer<V> {
    delay: Duration,
    pending: Option<Pending<V>>,
}

impl<V> Debouncer<V> {
    pub fn new(delay: Duration) -> Self {
        Self { delay, pending: None }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Change the delay for values scheduled from now on.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Schedule `value`, replacing any pending one.
    /// Returns true if a pending value was superseded.
    pub fn schedule(&mut self, value: V, now: Instant) -> bool {
        let superseded = self.pending.is_some();
        self.pending = Some(Pending {
            value,
            due: now + self.delay,
        });
        superseded
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value becomes due.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.due)
    }

    /// Drop the pending value without releasing it.
    pub fn cancel(&mut self) -> Option<V> {
        self.pending.take().map(|p| p.value)
    }

    /// Release the pending value if it is due at `now`.
    pub fn take_due(&mut self, now: Instant) -> Option<V> {
        match &self.pending {
            Some(pending) if pending.due <= now => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// Release the pending value right away.
    pub fn flush(&mut self) -> Option<V> {
        self.pending.take().map(|p| p.value)
    }
}

/// Sleep until the debouncer has a due value.
///
/// Returns right away when nothing is pending or the value is already due.
pub async fn wait_until_due<V>(debouncer: &Debouncer<V>) {
    wait_until(debouncer.deadline()).await;
}

/// Sleep until `deadline`, e.g. a field's [`deadline`](crate::components::text_field::TextField::deadline).
pub async fn wait_until(deadline: Option<Instant>) {
    if let Some(due) = deadline {
        tokio::time::sleep_until(tokio::time::Instant::from_std(due)).await;
    }
}
