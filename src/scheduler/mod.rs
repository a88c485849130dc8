//! Timer scheduling.
//!
//! A cascade never sleeps or spawns anything. It asks its [`Scheduler`]
//! for one-shot and repeating timers, and the host hands due timers back to
//! the cascade by polling it. Two implementations are provided:
//!
//! - [`ManualScheduler`]: virtual clock, deterministic, for tests and
//!   frame-stepped hosts
//! - [`SystemScheduler`]: monotonic wall clock

mod manual;
mod queue;
mod system;

pub use manual::{ManualScheduler, SchedulerStats};
pub use queue::{TimerId, TimerKind, TimerQueue};
pub use system::SystemScheduler;

/// Timer primitives and clock used by a cascade.
///
/// All times are milliseconds on the scheduler's own clock.
pub trait Scheduler {
    /// Current clock reading.
    fn now_ms(&self) -> u64;

    /// Schedule a one-shot timer `delay_ms` from now.
    fn set_timeout(&mut self, delay_ms: u64) -> TimerId;

    /// Schedule a timer repeating every `period_ms`, first firing one
    /// period from now.
    fn set_interval(&mut self, period_ms: u64) -> TimerId;

    /// Cancel a one-shot timer. Unknown ids are ignored.
    fn clear_timeout(&mut self, id: TimerId);

    /// Cancel a repeating timer. Unknown ids are ignored.
    fn clear_interval(&mut self, id: TimerId);

    /// Remove and return the earliest timer due at or before `until_ms`.
    /// Repeating timers are re-armed for their next period.
    fn pop_due(&mut self, until_ms: u64) -> Option<TimerId>;
}
