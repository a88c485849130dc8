//! The cascade state machine and its host-facing surface.
//!
//! This module is the imperative shell around the pure pieces in
//! [`core`](crate::core), [`glow`](crate::glow) and
//! [`timing`](crate::timing):
//!
//! - **Machine**: [`TextCascade`] owns the phase, the timers and the
//!   internal refs, and publishes a [`CascadeState`] after every change
//! - **Handle**: [`CascadeHandle`] is the imperative surface a parent holds
//! - **Events**: [`LifecycleEvent`] notifications out, [`HostEvent`] input in
//!
//! All work happens on the caller's thread: operations and timer callbacks
//! are totally ordered by `&mut self`.

mod events;
mod machine;
mod state;

pub use events::{CascadeHandle, HostEvent, LifecycleEvent};
pub use machine::TextCascade;
pub use state::CascadeState;

pub(crate) use events::Observers;
pub(crate) use machine::{CascadeParts, GlowSource};
