use std::time::{Duration, Instant};

/// Caller-owned inter-frame timer for latency diagnostics.
#[derive(Debug, Default)]
pub struct FrameTimer {
    last: Option<Instant>,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time since the previous tick; `None` on the first call.
    pub fn tick(&mut self) -> Option<Duration> {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> Option<Duration> {
        let elapsed = self.last.map(|prev| now.saturating_duration_since(prev));
        self.last = Some(now);
        elapsed
    }
}
