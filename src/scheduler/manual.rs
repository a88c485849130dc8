//! Virtual-clock scheduler.

use super::queue::{TimerId, TimerKind, TimerQueue};
use super::Scheduler;

/// Scheduler whose clock only moves when told to.
///
/// Popping a due timer moves the clock to that timer's deadline, so a
/// handler observes the time at which it was meant to fire. It also counts
/// every scheduling and cancellation call, which lets tests assert that
/// teardown cancelled the pending timers.
///
/// # Example
///
/// ```rust
/// use text_cascade::scheduler::{ManualScheduler, Scheduler};
///
/// let mut scheduler = ManualScheduler::new();
/// let id = scheduler.set_timeout(100);
///
/// assert_eq!(scheduler.pop_due(99), None);
/// assert_eq!(scheduler.pop_due(150), Some(id));
/// assert_eq!(scheduler.now_ms(), 100);
/// ```
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now_ms: u64,
    queue: TimerQueue,
    stats: SchedulerStats,
}

/// Call counts recorded by [`ManualScheduler`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerStats {
    pub timeouts_set: usize,
    pub intervals_set: usize,
    pub timeouts_cleared: usize,
    pub intervals_cleared: usize,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the clock at `now_ms`.
    pub fn starting_at(now_ms: u64) -> Self {
        Self {
            now_ms,
            ..Self::default()
        }
    }

    /// Move the clock forward to `ms` without firing anything.
    /// Never moves it backwards.
    pub fn advance_to(&mut self, ms: u64) {
        self.now_ms = self.now_ms.max(ms);
    }

    pub fn stats(&self) -> SchedulerStats {
        self.stats
    }

    /// Number of timers still pending.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn pending_of(&self, kind: TimerKind) -> usize {
        self.queue.count(kind)
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.queue.next_deadline()
    }
}

impl Scheduler for ManualScheduler {
    fn now_ms(&self) -> u64 {
        self.now_ms
    }

    fn set_timeout(&mut self, delay_ms: u64) -> TimerId {
        self.stats.timeouts_set += 1;
        self.queue.insert_timeout(self.now_ms.saturating_add(delay_ms))
    }

    fn set_interval(&mut self, period_ms: u64) -> TimerId {
        self.stats.intervals_set += 1;
        self.queue.insert_interval(self.now_ms, period_ms)
    }

    fn clear_timeout(&mut self, id: TimerId) {
        self.stats.timeouts_cleared += 1;
        self.queue.remove(id);
    }

    fn clear_interval(&mut self, id: TimerId) {
        self.stats.intervals_cleared += 1;
        self.queue.remove(id);
    }

    fn pop_due(&mut self, until_ms: u64) -> Option<TimerId> {
        let (id, due_ms) = self.queue.pop_due(until_ms)?;
        self.advance_to(due_ms);
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_starts_at_zero() {
        assert_eq!(ManualScheduler::new().now_ms(), 0);
        assert_eq!(ManualScheduler::starting_at(500).now_ms(), 500);
    }

    #[test]
    fn timeout_deadline_is_relative_to_now() {
        let mut scheduler = ManualScheduler::starting_at(1000);
        scheduler.set_timeout(50);
        assert_eq!(scheduler.next_deadline(), Some(1050));
    }

    #[test]
    fn clock_never_moves_backwards() {
        let mut scheduler = ManualScheduler::starting_at(100);
        scheduler.advance_to(50);
        assert_eq!(scheduler.now_ms(), 100);
    }

    #[test]
    fn stats_track_every_call() {
        let mut scheduler = ManualScheduler::new();
        let timeout = scheduler.set_timeout(10);
        let interval = scheduler.set_interval(10);
        scheduler.clear_timeout(timeout);
        scheduler.clear_interval(interval);

        assert_eq!(
            scheduler.stats(),
            SchedulerStats {
                timeouts_set: 1,
                intervals_set: 1,
                timeouts_cleared: 1,
                intervals_cleared: 1,
            }
        );
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn popping_interval_moves_clock_to_each_tick() {
        let mut scheduler = ManualScheduler::new();
        let tick = scheduler.set_interval(60);

        assert_eq!(scheduler.pop_due(130), Some(tick));
        assert_eq!(scheduler.now_ms(), 60);
        assert_eq!(scheduler.pop_due(130), Some(tick));
        assert_eq!(scheduler.now_ms(), 120);
        assert_eq!(scheduler.pop_due(130), None);
        assert_eq!(scheduler.pending_of(TimerKind::Interval), 1);
    }
}
