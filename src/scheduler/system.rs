//! Wall-clock scheduler for hosts with a real event loop.

use super::queue::{TimerId, TimerQueue};
use super::Scheduler;
use std::time::Instant;

/// Scheduler reading a monotonic clock that started at construction.
///
/// Timers fire when the host polls the cascade at or after their deadline,
/// typically once per animation frame.
#[derive(Debug)]
pub struct SystemScheduler {
    origin: Instant,
    queue: TimerQueue,
}

impl SystemScheduler {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            queue: TimerQueue::new(),
        }
    }

    /// Milliseconds until the next timer is due, if any is pending.
    /// Zero when a timer is already overdue.
    pub fn until_next_ms(&self) -> Option<u64> {
        let due = self.queue.next_deadline()?;
        Some(due.saturating_sub(self.now_ms()))
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }
}

impl Default for SystemScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for SystemScheduler {
    fn now_ms(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    fn set_timeout(&mut self, delay_ms: u64) -> TimerId {
        let now = self.now_ms();
        self.queue.insert_timeout(now.saturating_add(delay_ms))
    }

    fn set_interval(&mut self, period_ms: u64) -> TimerId {
        let now = self.now_ms();
        self.queue.insert_interval(now, period_ms)
    }

    fn clear_timeout(&mut self, id: TimerId) {
        self.queue.remove(id);
    }

    fn clear_interval(&mut self, id: TimerId) {
        self.queue.remove(id);
    }

    fn pop_due(&mut self, until_ms: u64) -> Option<TimerId> {
        self.queue.pop_due(until_ms).map(|(id, _)| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn future_timer_is_not_due_yet() {
        let mut scheduler = SystemScheduler::new();
        scheduler.set_timeout(60_000);

        let now = scheduler.now_ms();
        assert_eq!(scheduler.pop_due(now), None);
        assert!(scheduler.until_next_ms().is_some_and(|ms| ms > 0));
    }

    #[test]
    fn zero_delay_timer_is_due_immediately() {
        let mut scheduler = SystemScheduler::new();
        let id = scheduler.set_timeout(0);

        let now = scheduler.now_ms();
        assert_eq!(scheduler.pop_due(now), Some(id));
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn cleared_timer_never_fires() {
        let mut scheduler = SystemScheduler::new();
        let id = scheduler.set_timeout(0);
        scheduler.clear_timeout(id);

        assert_eq!(scheduler.pop_due(u64::MAX), None);
    }
}
