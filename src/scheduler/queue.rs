//! Deadline-ordered timer storage shared by the scheduler implementations.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The two timer primitives a cascade uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TimerKind {
    /// One-shot phase-completion delay
    Timeout,
    /// Repeating glow-frame tick
    Interval,
}

/// Identifies one scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimerId {
    kind: TimerKind,
    seq: u64,
}

impl TimerId {
    pub fn kind(&self) -> TimerKind {
        self.kind
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    id: TimerId,
    period_ms: Option<u64>,
}

/// Timers keyed by `(deadline, insertion order)`.
///
/// Timers sharing a deadline fire in the order they were scheduled.
/// Intervals are re-armed when popped, before the caller handles them, so
/// the handler may cancel the re-armed entry.
#[derive(Debug, Default)]
pub struct TimerQueue {
    entries: BTreeMap<(u64, u64), Entry>,
    next_seq: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    fn bump(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    /// Schedule a one-shot timer at `due_ms`.
    pub fn insert_timeout(&mut self, due_ms: u64) -> TimerId {
        let seq = self.bump();
        let id = TimerId {
            kind: TimerKind::Timeout,
            seq,
        };
        self.entries.insert(
            (due_ms, seq),
            Entry {
                id,
                period_ms: None,
            },
        );
        id
    }

    /// Schedule a repeating timer first firing at `now_ms + period_ms`.
    /// A zero period is treated as one millisecond.
    pub fn insert_interval(&mut self, now_ms: u64, period_ms: u64) -> TimerId {
        let period_ms = period_ms.max(1);
        let seq = self.bump();
        let id = TimerId {
            kind: TimerKind::Interval,
            seq,
        };
        self.entries.insert(
            (now_ms.saturating_add(period_ms), seq),
            Entry {
                id,
                period_ms: Some(period_ms),
            },
        );
        id
    }

    /// Remove `id`; returns whether it was pending.
    pub fn remove(&mut self, id: TimerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.id != id);
        self.entries.len() != before
    }

    /// Pop the earliest timer due at or before `until_ms`, returning it with
    /// its deadline.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<(TimerId, u64)> {
        let (&(due_ms, seq), _) = self.entries.first_key_value()?;
        if due_ms > until_ms {
            return None;
        }
        let entry = self.entries.remove(&(due_ms, seq))?;
        if let Some(period_ms) = entry.period_ms {
            let rearm_seq = self.bump();
            self.entries
                .insert((due_ms.saturating_add(period_ms), rearm_seq), entry);
        }
        Some((entry.id, due_ms))
    }

    /// Deadline of the earliest pending timer.
    pub fn next_deadline(&self) -> Option<u64> {
        self.entries.keys().next().map(|&(due_ms, _)| due_ms)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of pending timers of `kind`.
    pub fn count(&self, kind: TimerKind) -> usize {
        self.entries.values().filter(|e| e.id.kind == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeouts_pop_in_deadline_order() {
        let mut queue = TimerQueue::new();
        let late = queue.insert_timeout(200);
        let early = queue.insert_timeout(100);

        assert_eq!(queue.pop_due(50), None);
        assert_eq!(queue.pop_due(1000), Some((early, 100)));
        assert_eq!(queue.pop_due(1000), Some((late, 200)));
        assert!(queue.is_empty());
    }

    #[test]
    fn equal_deadlines_pop_in_schedule_order() {
        let mut queue = TimerQueue::new();
        let first = queue.insert_timeout(100);
        let second = queue.insert_timeout(100);

        assert_eq!(queue.pop_due(100).map(|(id, _)| id), Some(first));
        assert_eq!(queue.pop_due(100).map(|(id, _)| id), Some(second));
    }

    #[test]
    fn intervals_rearm_after_popping() {
        let mut queue = TimerQueue::new();
        let tick = queue.insert_interval(0, 60);

        assert_eq!(queue.pop_due(200), Some((tick, 60)));
        assert_eq!(queue.pop_due(200), Some((tick, 120)));
        assert_eq!(queue.pop_due(200), Some((tick, 180)));
        assert_eq!(queue.pop_due(200), None);
        assert_eq!(queue.next_deadline(), Some(240));
    }

    #[test]
    fn removing_interval_stops_rearming() {
        let mut queue = TimerQueue::new();
        let tick = queue.insert_interval(0, 60);

        queue.pop_due(60);
        assert!(queue.remove(tick));
        assert!(queue.is_empty());
        assert!(!queue.remove(tick));
    }

    #[test]
    fn zero_period_interval_still_advances() {
        let mut queue = TimerQueue::new();
        queue.insert_interval(10, 0);
        assert_eq!(queue.next_deadline(), Some(11));
    }

    #[test]
    fn count_by_kind() {
        let mut queue = TimerQueue::new();
        queue.insert_timeout(10);
        queue.insert_interval(0, 10);

        assert_eq!(queue.count(TimerKind::Timeout), 1);
        assert_eq!(queue.count(TimerKind::Interval), 1);
        assert_eq!(queue.len(), 2);
    }
}
