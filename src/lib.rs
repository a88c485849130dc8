//! Text Cascade: a timer-driven state machine for animated text
//!
//! A text cascade reveals a string character by character, dismisses it in
//! reverse, can be interrupted mid-animation, and morphs into a second
//! string with a traveling highlight on confirmation ("Copy" -> "Copied").
//! Reduced motion collapses every animated path into an immediate change.
//!
//! The crate follows a "pure core, imperative shell" layout:
//!
//! - **Pure**: [`core`] phases and guards, [`glow`] frame generation,
//!   [`timing`] configuration, [`render`] projection
//! - **Shell**: [`cascade::TextCascade`] owns the phase, the timers (through
//!   a [`scheduler::Scheduler`]) and publishes snapshots
//!
//! # Example
//!
//! ```rust
//! use text_cascade::builder::CascadeBuilder;
//! use text_cascade::core::Phase;
//! use text_cascade::scheduler::ManualScheduler;
//!
//! let mut cascade = CascadeBuilder::new(ManualScheduler::new())
//!     .text("Copy")
//!     .click_text("Copied")
//!     .build()
//!     .unwrap();
//!
//! cascade.enter();
//! cascade.advance(330);
//! assert_eq!(cascade.phase(), Phase::Visible);
//!
//! cascade.confirm();
//! cascade.advance(6 * 60);
//! assert_eq!(cascade.phase(), Phase::Confirmed);
//! assert_eq!(cascade.state().display_text, "Copied");
//! ```

pub mod builder;
pub mod cascade;
pub mod core;
pub mod glow;
pub mod motion;
pub mod render;
pub mod scheduler;
pub mod timing;

// Re-export commonly used types
pub use builder::{BuildError, CascadeBuilder};
pub use cascade::{CascadeHandle, CascadeState, HostEvent, LifecycleEvent, TextCascade};
pub use core::Phase;
pub use glow::{generate_glow_transition, GlowFrame, GlowTransition};
pub use motion::{MotionPreference, ReducedMotionSignal};
pub use scheduler::{ManualScheduler, Scheduler, SystemScheduler};
pub use timing::{CascadeTiming, Easing};
