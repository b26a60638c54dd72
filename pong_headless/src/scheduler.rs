use std::time::{Duration, Instant};

use game_core::Scheduler;

/// Sleeps until each tick's deadline, at a fixed interval.
///
/// If the host falls more than one interval behind, the missed ticks are
/// dropped instead of replayed back to back.
pub struct FixedRateScheduler {
    interval: Duration,
    next_deadline: Option<Instant>,
    remaining: Option<u64>,
}

impl FixedRateScheduler {
    pub fn new(interval: Duration, limit: Option<u64>) -> Self {
        Self {
            interval,
            next_deadline: None,
            remaining: limit,
        }
    }
}

impl Scheduler for FixedRateScheduler {
    fn wait_for_tick(&mut self) -> bool {
        if let Some(remaining) = self.remaining.as_mut() {
            if *remaining == 0 {
                return false;
            }
            *remaining -= 1;
        }

        let now = Instant::now();
        let deadline = match self.next_deadline {
            // First tick runs immediately
            None => now,
            Some(deadline) if now > deadline + self.interval => {
                tracing::warn!(
                    behind_ms = (now - deadline).as_millis() as u64,
                    "Tick loop fell behind, resyncing"
                );
                now
            }
            Some(deadline) => deadline,
        };
        if deadline > now {
            std::thread::sleep(deadline - now);
        }
        self.next_deadline = Some(deadline + self.interval);
        true
    }
}
