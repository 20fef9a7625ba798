//! Timer contract used for debouncing and delayed UI resets.

use std::{cell::RefCell, future::Future, pin::Pin, time::Duration};

/// Object-safe boxed future used by [`TimerService`].
pub type TimerFuture<'a> = Pin<Box<dyn Future<Output = ()> + 'a>>;

/// Host service resolving a future after a delay.
pub trait TimerService {
    /// Resolves after `delay`.
    fn sleep(&self, delay: Duration) -> TimerFuture<'_>;
}

#[derive(Debug, Default)]
/// Timer that resolves immediately and records requested delays.
pub struct ImmediateTimer {
    delays: RefCell<Vec<Duration>>,
}

impl ImmediateTimer {
    /// Delays requested so far.
    pub fn delays(&self) -> Vec<Duration> {
        self.delays.borrow().clone()
    }
}

impl TimerService for ImmediateTimer {
    fn sleep(&self, delay: Duration) -> TimerFuture<'_> {
        self.delays.borrow_mut().push(delay);
        Box::pin(async {})
    }
}
