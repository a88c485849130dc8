//! Core cascade types.
//!
//! This module contains the pure pieces of the state machine:
//! - The `Phase` enumeration
//! - Guard predicates that gate public operations
//! - Bounded phase history
//!
//! Nothing here schedules timers or holds mutable machine state.

mod guard;
mod history;
mod phase;

pub use guard::{Guard, OperationGuards};
pub use history::{PhaseHistory, PhaseTransition, DEFAULT_HISTORY_CAPACITY};
pub use phase::Phase;
