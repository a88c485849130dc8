//! The cascade state machine.

use super::events::{CascadeHandle, HostEvent, LifecycleEvent, Observers};
use super::state::{CascadeState, StateRefs};
use crate::core::{OperationGuards, Phase, PhaseHistory, PhaseTransition};
use crate::glow::{GlowTransition, GlowTransitionCache};
use crate::motion::MotionPreference;
use crate::scheduler::{ManualScheduler, Scheduler, TimerId};
use crate::timing::CascadeTiming;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// What the pending one-shot timer completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DelayAction {
    FinishEnter,
    FinishExit,
    EndHold,
}

#[derive(Clone, Copy, Debug)]
struct PendingDelay {
    id: TimerId,
    action: DelayAction,
}

/// Source of the glow transition, kept so `set_text` can re-derive it.
#[derive(Clone, Debug)]
pub(crate) enum GlowSource {
    None,
    ClickText(String),
    Fixed(Arc<GlowTransition>),
}

/// Everything [`TextCascade`] is assembled from.
pub(crate) struct CascadeParts<S: Scheduler> {
    pub text: String,
    pub glow_source: GlowSource,
    pub timing: CascadeTiming,
    pub scheduler: S,
    pub motion: Box<dyn MotionPreference>,
    pub history_capacity: usize,
    pub observers: Observers,
}

/// A text cascade: phase state machine, timers and derived snapshot.
///
/// The cascade owns its scheduler and therefore every timer it starts.
/// Hosts forward user input through [`enter`](Self::enter),
/// [`exit`](Self::exit) and [`confirm`](Self::confirm), and hand control
/// back for due timers with [`poll`](Self::poll) (or
/// [`advance`](Self::advance) on a virtual clock). Operations invoked from
/// a phase where they do not apply are silent no-ops.
///
/// # Example
///
/// ```rust
/// use text_cascade::cascade::TextCascade;
/// use text_cascade::core::Phase;
/// use text_cascade::scheduler::ManualScheduler;
///
/// let mut cascade = TextCascade::new("Hi", ManualScheduler::new());
///
/// cascade.enter();
/// assert_eq!(cascade.phase(), Phase::Entering);
///
/// // (2 - 1) * 60 + 150
/// cascade.advance(210);
/// assert_eq!(cascade.phase(), Phase::Visible);
/// assert_eq!(cascade.state().reveal_count, 2);
/// ```
pub struct TextCascade<S: Scheduler = ManualScheduler> {
    text: String,
    text_len: usize,
    glow_source: GlowSource,
    glow: Option<Arc<GlowTransition>>,
    glow_cache: GlowTransitionCache,
    timing: CascadeTiming,
    scheduler: S,
    motion: Box<dyn MotionPreference>,
    guards: OperationGuards,

    phase: Phase,
    glow_frame: usize,
    reveal_count: usize,
    exit_text: String,
    enter_started_ms: u64,
    interval: Option<TimerId>,
    timeout: Option<PendingDelay>,

    history: PhaseHistory,
    published: CascadeState,
    observers: Observers,
    torn_down: bool,
}

impl<S: Scheduler> TextCascade<S> {
    /// A cascade for `text` with default timing, no glow transition and
    /// full motion.
    pub fn new(text: impl Into<String>, scheduler: S) -> Self {
        Self::from_parts(CascadeParts {
            text: text.into(),
            glow_source: GlowSource::None,
            timing: CascadeTiming::default(),
            scheduler,
            motion: Box::new(false),
            history_capacity: crate::core::DEFAULT_HISTORY_CAPACITY,
            observers: Observers::default(),
        })
    }

    pub(crate) fn from_parts(parts: CascadeParts<S>) -> Self {
        let mut glow_cache = GlowTransitionCache::new();
        let glow = resolve_glow(&mut glow_cache, &parts.text, &parts.glow_source);
        let published = CascadeState::idle(&parts.text, parts.timing.char_step_ms);

        Self {
            text_len: parts.text.chars().count(),
            exit_text: parts.text.clone(),
            text: parts.text,
            glow_source: parts.glow_source,
            glow,
            glow_cache,
            timing: parts.timing,
            scheduler: parts.scheduler,
            motion: parts.motion,
            guards: OperationGuards::standard(),
            phase: Phase::Idle,
            glow_frame: 0,
            reveal_count: 0,
            enter_started_ms: 0,
            interval: None,
            timeout: None,
            history: PhaseHistory::with_capacity(parts.history_capacity),
            published,
            observers: parts.observers,
            torn_down: false,
        }
    }

    // ----- public operations -------------------------------------------

    /// Begin the reveal. Only applies while idle.
    pub fn enter(&mut self) {
        if !self.admits(Operation::Enter) {
            return;
        }

        if self.reduced_motion() {
            self.reveal_count = self.text_len;
            self.set_phase(Phase::Visible);
        } else {
            self.enter_started_ms = self.scheduler.now_ms();
            self.set_phase(Phase::Entering);
            let duration = self.timing.cascade_duration_ms(self.text_len);
            self.schedule_delay(duration, DelayAction::FinishEnter);
        }
        self.publish();
    }

    /// Begin the dismissal. Only applies while entering or visible; an
    /// in-flight reveal is reversed from the characters already shown.
    pub fn exit(&mut self) {
        if !self.admits(Operation::Exit) {
            return;
        }

        let reduced = self.reduced_motion();
        match self.phase {
            Phase::Entering | Phase::Visible if reduced => {
                self.clear_timers();
                self.reveal_count = 0;
                self.set_phase(Phase::Idle);
            }
            Phase::Entering => {
                let count = self.interrupted_count();
                debug!(
                    revealed = count,
                    total = self.text_len,
                    "reversing interrupted reveal"
                );
                let text = self.text.clone();
                self.start_exiting(text, count);
            }
            Phase::Visible => {
                let text = self.text.clone();
                self.start_exiting(text, self.text_len);
            }
            _ => return,
        }
        self.publish();
    }

    /// Begin the glow-morph confirmation. No-op without a glow transition
    /// or while a confirmation is already running.
    pub fn confirm(&mut self) {
        let Some(glow) = self.glow.clone() else {
            trace!("confirm ignored: no glow transition");
            return;
        };
        if !self.admits(Operation::Confirm) {
            return;
        }

        self.clear_timers();
        if self.reduced_motion() {
            self.set_phase(Phase::Confirmed);
            self.reveal_count = glow.confirmed_len();
            self.exit_text = glow.confirmed_text.clone();
            self.schedule_delay(self.timing.confirm_hold_ms, DelayAction::EndHold);
        } else {
            self.set_phase(Phase::Glowing);
            self.glow_frame = 0;
            let id = self.scheduler.set_interval(self.timing.char_step_ms);
            trace!(?id, period_ms = self.timing.char_step_ms, "glow tick scheduled");
            self.interval = Some(id);
        }
        self.publish();
    }

    /// Route a raw host event: pointer enter and leave map to `enter` and
    /// `exit`; a click runs the click listeners, then confirms when a glow
    /// transition is configured. Confirmation does not depend on a click
    /// listener being registered: a glow transition alone makes clicks
    /// confirm.
    pub fn dispatch(&mut self, event: HostEvent) {
        if self.torn_down {
            return;
        }
        match event {
            HostEvent::PointerEnter => self.enter(),
            HostEvent::PointerLeave => self.exit(),
            HostEvent::Click => {
                for listener in &mut self.observers.on_click {
                    listener();
                }
                if self.glow.is_some() {
                    self.confirm();
                }
            }
        }
    }

    /// Fire every timer due on the scheduler's clock.
    pub fn poll(&mut self) {
        let now = self.scheduler.now_ms();
        self.run_due(now);
    }

    /// Cancel both timers and disable the cascade. Later operations,
    /// polls and timer deadlines do nothing, and no listener is called
    /// again. Also runs on drop.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        debug!(phase = %self.phase, "tearing down cascade");
        self.clear_timers();
        self.observers.clear();
        self.torn_down = true;
    }

    /// Replace the texts. The glow transition is re-derived only when the
    /// `(text, click_text)` pair changed. Phase and timers are untouched.
    pub fn set_text(&mut self, text: impl Into<String>, click_text: Option<&str>) {
        if self.torn_down {
            return;
        }
        self.text = text.into();
        self.text_len = self.text.chars().count();
        if let Some(click) = click_text {
            self.glow_source = GlowSource::ClickText(click.to_string());
        } else if matches!(self.glow_source, GlowSource::ClickText(_)) {
            self.glow_source = GlowSource::None;
        }
        self.glow = resolve_glow(&mut self.glow_cache, &self.text, &self.glow_source);
        self.publish();
    }

    /// Register a listener for every published snapshot.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&CascadeState) + 'static,
    {
        self.observers.on_change.push(Box::new(listener));
    }

    /// Register a listener for lifecycle events.
    pub fn on_lifecycle<F>(&mut self, listener: F)
    where
        F: FnMut(LifecycleEvent) + 'static,
    {
        self.observers.on_lifecycle.push(Box::new(listener));
    }

    // ----- getters ------------------------------------------------------

    /// The latest published snapshot.
    pub fn state(&self) -> &CascadeState {
        &self.published
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_expanded(&self) -> bool {
        self.published.is_expanded
    }

    pub fn is_confirmed(&self) -> bool {
        self.published.is_confirmed
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn glow_transition(&self) -> Option<&GlowTransition> {
        self.glow.as_deref()
    }

    pub fn timing(&self) -> &CascadeTiming {
        &self.timing
    }

    pub fn history(&self) -> &PhaseHistory {
        &self.history
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Whether a one-shot or repeating timer is outstanding.
    pub fn has_pending_timers(&self) -> bool {
        self.interval.is_some() || self.timeout.is_some()
    }

    // ----- internals ----------------------------------------------------

    fn admits(&self, operation: Operation) -> bool {
        if self.torn_down {
            trace!(?operation, "ignored after teardown");
            return false;
        }
        let guard = match operation {
            Operation::Enter => &self.guards.enter,
            Operation::Exit => &self.guards.exit,
            Operation::Confirm => &self.guards.confirm,
        };
        let admitted = guard.check(self.phase);
        if !admitted {
            trace!(operation = guard.operation(), phase = %self.phase, "guard rejected");
        }
        admitted
    }

    fn reduced_motion(&self) -> bool {
        self.motion.prefers_reduced_motion()
    }

    /// Characters shown when a reveal is interrupted:
    /// `min(floor(elapsed / step) + 1, len)`.
    fn interrupted_count(&self) -> usize {
        let elapsed = self
            .scheduler
            .now_ms()
            .saturating_sub(self.enter_started_ms);
        let step = self.timing.char_step_ms.max(1);
        let shown = usize::try_from(elapsed / step)
            .unwrap_or(usize::MAX)
            .saturating_add(1);
        shown.min(self.text_len)
    }

    fn start_exiting(&mut self, exit_text: String, count: usize) {
        self.clear_timers();
        self.exit_text = exit_text;

        if count == 0 || self.reduced_motion() {
            self.reveal_count = 0;
            self.set_phase(Phase::Idle);
            return;
        }

        self.reveal_count = count;
        self.set_phase(Phase::Exiting);
        let duration = self.timing.cascade_duration_ms(count);
        self.schedule_delay(duration, DelayAction::FinishExit);
    }

    fn set_phase(&mut self, to: Phase) {
        let from = self.phase;
        if from == to {
            return;
        }
        let at_ms = self.scheduler.now_ms();
        debug!(%from, %to, at_ms, "cascade phase transition");
        self.history.record(PhaseTransition { from, to, at_ms });
        self.phase = to;
    }

    fn schedule_delay(&mut self, delay_ms: u64, action: DelayAction) {
        if let Some(pending) = self.timeout.take() {
            self.scheduler.clear_timeout(pending.id);
        }
        let id = self.scheduler.set_timeout(delay_ms);
        trace!(?id, delay_ms, ?action, "delay scheduled");
        self.timeout = Some(PendingDelay { id, action });
    }

    fn clear_timers(&mut self) {
        if let Some(id) = self.interval.take() {
            self.scheduler.clear_interval(id);
        }
        if let Some(pending) = self.timeout.take() {
            self.scheduler.clear_timeout(pending.id);
        }
    }

    pub(crate) fn run_due(&mut self, until_ms: u64) {
        while !self.torn_down {
            let Some(id) = self.scheduler.pop_due(until_ms) else {
                break;
            };
            self.fire(id);
        }
    }

    fn fire(&mut self, id: TimerId) {
        match self.timeout {
            Some(pending) if pending.id == id => {
                self.timeout = None;
                self.on_delay(pending.action);
                self.publish();
                return;
            }
            _ => {}
        }
        if self.interval == Some(id) {
            self.on_tick();
            self.publish();
            return;
        }
        trace!(?id, "stale timer ignored");
    }

    fn on_delay(&mut self, action: DelayAction) {
        match action {
            DelayAction::FinishEnter => {
                self.reveal_count = self.text_len;
                self.set_phase(Phase::Visible);
            }
            DelayAction::FinishExit => {
                self.reveal_count = 0;
                self.set_phase(Phase::Idle);
            }
            DelayAction::EndHold => match self.glow.clone() {
                Some(glow) => {
                    self.start_exiting(glow.confirmed_text.clone(), glow.confirmed_len())
                }
                None => {
                    let text = self.text.clone();
                    self.start_exiting(text, self.text_len)
                }
            },
        }
    }

    fn on_tick(&mut self) {
        let frames = self.glow.as_ref().map_or(0, |g| g.len());
        let next = self.glow_frame + 1;
        trace!(frame = next, frames, "glow tick");

        if next >= frames {
            if let Some(id) = self.interval.take() {
                self.scheduler.clear_interval(id);
            }
            self.set_phase(Phase::Confirmed);
            self.schedule_delay(self.timing.confirm_hold_ms, DelayAction::EndHold);
        } else {
            self.glow_frame = next;
        }
    }

    fn derive(&self) -> CascadeState {
        StateRefs {
            phase: self.phase,
            text: &self.text,
            glow: self.glow.as_deref(),
            glow_frame: self.glow_frame,
            exit_text: &self.exit_text,
            reveal_count: self.reveal_count,
            char_step_ms: self.timing.char_step_ms,
        }
        .derive()
    }

    /// Publish the current snapshot if it changed, then fire the lifecycle
    /// event implied by the phase change.
    fn publish(&mut self) {
        let next = self.derive();
        if next == self.published {
            return;
        }
        let prev_phase = self.published.phase;
        self.published = next;

        for listener in &mut self.observers.on_change {
            listener(&self.published);
        }
        if let Some(event) = LifecycleEvent::between(prev_phase, self.published.phase) {
            debug!(?event, "cascade lifecycle event");
            for listener in &mut self.observers.on_lifecycle {
                listener(event);
            }
        }
    }
}

impl TextCascade<ManualScheduler> {
    /// Move the virtual clock forward by `ms`, firing every timer due on
    /// the way in deadline order.
    pub fn advance(&mut self, ms: u64) {
        let target = self.scheduler.now_ms().saturating_add(ms);
        self.run_due(target);
        self.scheduler.advance_to(target);
    }
}

impl<S: Scheduler> CascadeHandle for TextCascade<S> {
    fn enter(&mut self) {
        TextCascade::enter(self)
    }

    fn exit(&mut self) {
        TextCascade::exit(self)
    }

    fn confirm(&mut self) {
        TextCascade::confirm(self)
    }

    fn phase(&self) -> Phase {
        TextCascade::phase(self)
    }

    fn is_expanded(&self) -> bool {
        TextCascade::is_expanded(self)
    }

    fn is_confirmed(&self) -> bool {
        TextCascade::is_confirmed(self)
    }
}

impl<S: Scheduler> Drop for TextCascade<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl<S: Scheduler> fmt::Debug for TextCascade<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextCascade")
            .field("text", &self.text)
            .field("phase", &self.phase)
            .field("reveal_count", &self.reveal_count)
            .field("glow_frame", &self.glow_frame)
            .field("interval", &self.interval)
            .field("timeout", &self.timeout)
            .field("torn_down", &self.torn_down)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Copy, Debug)]
enum Operation {
    Enter,
    Exit,
    Confirm,
}

fn resolve_glow(
    cache: &mut GlowTransitionCache,
    text: &str,
    source: &GlowSource,
) -> Option<Arc<GlowTransition>> {
    match source {
        GlowSource::None => None,
        GlowSource::ClickText(click) => Some(cache.get(text, click)),
        GlowSource::Fixed(transition) => Some(Arc::clone(transition)),
    }
}
