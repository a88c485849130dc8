//! Host-facing events and the imperative handle.

use super::state::CascadeState;
use crate::core::Phase;
use serde::{Deserialize, Serialize};

/// Notification fired to the host on lifecycle boundaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleEvent {
    /// Left idle for `Entering` (or `Visible` under reduced motion)
    Entered,
    /// Returned to idle
    Exited,
    /// Reached `Confirmed`
    Confirmed,
}

impl LifecycleEvent {
    /// The event, if any, for a published phase change from `prev` to `curr`.
    pub fn between(prev: Phase, curr: Phase) -> Option<Self> {
        if prev == curr {
            return None;
        }
        match (prev, curr) {
            (Phase::Idle, Phase::Entering | Phase::Visible) => Some(Self::Entered),
            (_, Phase::Idle) => Some(Self::Exited),
            (_, Phase::Confirmed) => Some(Self::Confirmed),
            _ => None,
        }
    }
}

/// Raw user input a host forwards to a cascade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostEvent {
    PointerEnter,
    PointerLeave,
    Click,
}

/// The imperative surface a parent component holds.
pub trait CascadeHandle {
    fn enter(&mut self);
    fn exit(&mut self);
    fn confirm(&mut self);
    fn phase(&self) -> Phase;
    fn is_expanded(&self) -> bool;
    fn is_confirmed(&self) -> bool;
}

pub(crate) type ChangeListener = Box<dyn FnMut(&CascadeState)>;
pub(crate) type LifecycleListener = Box<dyn FnMut(LifecycleEvent)>;
pub(crate) type ClickListener = Box<dyn FnMut()>;

/// Registered callbacks.
#[derive(Default)]
pub(crate) struct Observers {
    pub on_change: Vec<ChangeListener>,
    pub on_lifecycle: Vec<LifecycleListener>,
    pub on_click: Vec<ClickListener>,
}

impl Observers {
    pub fn clear(&mut self) {
        self.on_change.clear();
        self.on_lifecycle.clear();
        self.on_click.clear();
    }

    /// Wrap a hook that should only run for one kind of event.
    pub fn only<F>(kind: LifecycleEvent, mut hook: F) -> LifecycleListener
    where
        F: FnMut() + 'static,
    {
        Box::new(move |event| {
            if event == kind {
                hook();
            }
        })
    }
}
