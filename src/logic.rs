//! The progress state machine: `(Command, AppState) -> (AppState, Effect, events)`.

use tracing::{debug, info};

use crate::animation::{AnimationFlag, AnimationTimings};
use crate::command::Command;
use crate::effect::Effect;
use crate::event::ProgressEvent;
use crate::format::{LocaleFormatter, ValueFormatter};
use crate::i18n::{Catalog, Translator};
use crate::state::AppState;
use crate::view::Snapshot;

/// Output of one [`ProgressLogic::update`] step.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: AppState,
    pub effect: Effect,
    pub events: Vec<ProgressEvent>,
}

/// Pure transition rules plus the presentation collaborators used by `view`.
///
/// Implements three functions in the Model-View-Update style:
/// - [`init`](Self::init): arm the start-up timers for a fresh state
/// - [`update`](Self::update): `(Command, AppState) -> Transition`
/// - [`view`](Self::view): derive the renderer-facing [`Snapshot`]
///
/// None of them touch a clock or perform I/O. Timer work is described by the
/// returned [`Effect`] and carried out by whoever drives the logic, normally an
/// [`AppController`](crate::AppController).
pub struct ProgressLogic {
    timings: AnimationTimings,
    formatter: Box<dyn ValueFormatter + Send>,
    translator: Box<dyn Translator + Send>,
}

impl Default for ProgressLogic {
    fn default() -> Self {
        Self::new(AnimationTimings::default())
    }
}

impl ProgressLogic {
    #[must_use]
    pub fn new(timings: AnimationTimings) -> Self {
        Self {
            timings,
            formatter: Box::new(LocaleFormatter),
            translator: Box::new(Catalog),
        }
    }

    /// Replace the value formatter used for labels.
    #[must_use]
    pub fn with_formatter(mut self, formatter: impl ValueFormatter + Send + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    /// Replace the text lookup used for labels.
    #[must_use]
    pub fn with_translator(mut self, translator: impl Translator + Send + 'static) -> Self {
        self.translator = Box::new(translator);
        self
    }

    /// Prepare a state for its first render.
    ///
    /// Arms the entry reveal delay; everything else starts idle.
    pub fn init(&self, mut state: AppState) -> (AppState, Effect) {
        let effect = state.animation.schedule_entry(&self.timings);
        (state, effect)
    }

    /// Apply one command.
    ///
    /// After the mutation the completion check runs: if the goal was not met
    /// before and is met now, [`ProgressEvent::Completed`] is appended. A
    /// confirmed reset never produces a completion. Every resulting event is
    /// then fed to the animation controller, whose timer work becomes the
    /// transition's effect.
    pub fn update(&self, command: Command, state: &AppState) -> Transition {
        let mut next = state.clone();
        let mut events = Vec::new();

        if next.shut_down {
            debug!(?command, "controller is shut down, command ignored");
            return Transition {
                state: next,
                effect: Effect::none(),
                events,
            };
        }

        let was_complete = next.progress.is_complete();

        match command {
            Command::SetGoal(raw) => next.progress.set_goal(raw),
            Command::SetType(goal_type) => {
                next.progress.set_type(goal_type);
                next.staging.clear();
            }
            Command::SetPendingAmount(raw) => {
                next.staging
                    .set_pending_amount(raw, next.progress.goal_type());
            }
            Command::CommitIncrement => match next.staging.commit(&mut next.progress) {
                Some(increment) => {
                    info!(
                        requested = increment.requested,
                        applied = increment.applied,
                        current = next.progress.current(),
                        "increment committed"
                    );
                    events.push(ProgressEvent::Incremented(increment));
                }
                None => debug!("nothing staged, commit ignored"),
            },
            Command::RequestReset => {
                if next.reset_flow.request() {
                    events.push(ProgressEvent::ResetRequested);
                }
            }
            Command::ConfirmReset => {
                if let Some(previous) = next.reset_flow.confirm(&mut next.progress) {
                    info!(previous, "progress reset");
                    events.push(ProgressEvent::Reset { previous });
                }
            }
            Command::CancelReset => {
                if next.reset_flow.cancel() {
                    events.push(ProgressEvent::ResetCancelled);
                }
            }
            Command::SetLocale(locale) => next.locale = locale,
            Command::AnimationExpired(handle) => {
                if next.animation.expire(handle) == Some(AnimationFlag::EntryReveal) {
                    events.push(ProgressEvent::EntryReady);
                }
            }
            Command::Shutdown => {
                next.shut_down = true;
                let effect = next.animation.teardown();
                debug!(cancelled = effect.ops().len(), "controller torn down");
                return Transition {
                    state: next,
                    effect,
                    events,
                };
            }
        }

        let reset = events
            .iter()
            .any(|event| matches!(event, ProgressEvent::Reset { .. }));
        if !reset && !was_complete && next.progress.is_complete() {
            info!(goal = next.progress.goal(), "goal completed");
            events.push(ProgressEvent::Completed);
        }

        let mut effect = Effect::none();
        for event in &events {
            effect = effect.and(next.animation.on_event(event, &self.timings));
        }

        Transition {
            state: next,
            effect,
            events,
        }
    }

    /// Derive the snapshot a renderer displays.
    #[must_use]
    pub fn view(&self, state: &AppState) -> Snapshot {
        Snapshot::build(state, self.formatter.as_ref(), self.translator.as_ref())
    }
}
