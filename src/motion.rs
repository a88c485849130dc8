//! Reduced-motion preference.
//!
//! The preference is owned by the host (an OS setting, a media query, a user
//! toggle). A cascade only reads it, once per operation or timer callback.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Source of the reduced-motion accessibility preference.
pub trait MotionPreference {
    fn prefers_reduced_motion(&self) -> bool;
}

/// A fixed preference.
impl MotionPreference for bool {
    fn prefers_reduced_motion(&self) -> bool {
        *self
    }
}

/// Shared, externally updated reduced-motion flag.
///
/// Clones observe the same flag, so a settings watcher can keep one clone
/// and flip it while cascades hold the others.
///
/// # Example
///
/// ```rust
/// use text_cascade::motion::{MotionPreference, ReducedMotionSignal};
///
/// let signal = ReducedMotionSignal::new(false);
/// let reader = signal.clone();
///
/// signal.set(true);
/// assert!(reader.prefers_reduced_motion());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ReducedMotionSignal {
    reduced: Arc<AtomicBool>,
}

impl ReducedMotionSignal {
    pub fn new(reduced: bool) -> Self {
        Self {
            reduced: Arc::new(AtomicBool::new(reduced)),
        }
    }

    pub fn set(&self, reduced: bool) {
        self.reduced.store(reduced, Ordering::Relaxed);
    }

    pub fn get(&self) -> bool {
        self.reduced.load(Ordering::Relaxed)
    }
}

impl MotionPreference for ReducedMotionSignal {
    fn prefers_reduced_motion(&self) -> bool {
        self.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_preference() {
        assert!(true.prefers_reduced_motion());
        assert!(!false.prefers_reduced_motion());
    }

    #[test]
    fn signal_defaults_to_full_motion() {
        assert!(!ReducedMotionSignal::default().prefers_reduced_motion());
    }

    #[test]
    fn clones_share_the_flag() {
        let signal = ReducedMotionSignal::new(true);
        let reader = signal.clone();

        signal.set(false);
        assert!(!reader.get());

        reader.set(true);
        assert!(signal.prefers_reduced_motion());
    }

    #[test]
    fn signal_can_be_flipped_from_another_thread() {
        let signal = ReducedMotionSignal::new(false);
        let writer = signal.clone();

        std::thread::spawn(move || writer.set(true))
            .join()
            .unwrap();

        assert!(signal.get());
    }
}
