//! Phase transition history.
//!
//! A bounded, ordered record of the phase changes a cascade went through,
//! stamped with the scheduler clock. Useful for diagnostics and tests.

use super::phase::Phase;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Default number of transitions retained.
pub const DEFAULT_HISTORY_CAPACITY: usize = 64;

/// Record of a single phase transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseTransition {
    /// The phase being left
    pub from: Phase,
    /// The phase being entered
    pub to: Phase,
    /// Scheduler clock reading, in milliseconds
    pub at_ms: u64,
}

/// Ordered history of phase transitions, oldest first.
///
/// Once `capacity` transitions are stored, recording a new one drops the
/// oldest.
///
/// # Example
///
/// ```rust
/// use text_cascade::core::{Phase, PhaseHistory, PhaseTransition};
///
/// let mut history = PhaseHistory::new();
/// history.record(PhaseTransition { from: Phase::Idle, to: Phase::Entering, at_ms: 0 });
/// history.record(PhaseTransition { from: Phase::Entering, to: Phase::Visible, at_ms: 390 });
///
/// assert_eq!(history.path(), vec![Phase::Idle, Phase::Entering, Phase::Visible]);
/// assert_eq!(history.duration_ms(), Some(390));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PhaseHistory {
    transitions: VecDeque<PhaseTransition>,
    capacity: usize,
}

impl Default for PhaseHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl PhaseHistory {
    /// Create an empty history with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Create an empty history that retains at most `capacity` transitions.
    /// A capacity of zero records nothing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            transitions: VecDeque::with_capacity(capacity.min(DEFAULT_HISTORY_CAPACITY)),
            capacity,
        }
    }

    /// Append a transition, evicting the oldest when full.
    pub fn record(&mut self, transition: PhaseTransition) {
        if self.capacity == 0 {
            return;
        }
        if self.transitions.len() == self.capacity {
            self.transitions.pop_front();
        }
        self.transitions.push_back(transition);
    }

    /// Phases traversed: the first retained `from`, then every `to`.
    pub fn path(&self) -> Vec<Phase> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(first.from);
        }
        path.extend(self.transitions.iter().map(|t| t.to));
        path
    }

    /// Milliseconds between the first and last retained transitions.
    pub fn duration_ms(&self) -> Option<u64> {
        let first = self.transitions.front()?;
        let last = self.transitions.back()?;
        Some(last.at_ms.saturating_sub(first.at_ms))
    }

    /// All retained transitions, oldest first.
    pub fn transitions(&self) -> impl ExactSizeIterator<Item = &PhaseTransition> {
        self.transitions.iter()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Number of times `phase` was entered among retained transitions.
    pub fn count_entries(&self, phase: Phase) -> usize {
        self.transitions.iter().filter(|t| t.to == phase).count()
    }
}
