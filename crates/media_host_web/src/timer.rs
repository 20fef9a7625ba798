//! `setTimeout`-backed timer adapter.

use std::time::Duration;

use media_host::{TimerFuture, TimerService};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Browser timer resolving through `window.setTimeout`.
pub struct WebTimerService;

impl TimerService for WebTimerService {
    fn sleep(&self, delay: Duration) -> TimerFuture<'_> {
        let ms = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Box::pin(async move { bridge::sleep_ms(ms).await })
    }
}
