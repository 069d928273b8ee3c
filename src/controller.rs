//! The controller that owns the state and drives the update loop.

use flume::Receiver;
use tracing::{debug, debug_span};

use crate::config::Config;
use crate::event::ProgressEvent;
use crate::i18n::Locale;
use crate::logic::{ProgressLogic, Transition};
use crate::model::GoalType;
use crate::renderer::Renderer;
use crate::scheduler::Scheduler;
use crate::state::AppState;
use crate::view::Snapshot;
use crate::{Command, Emitter};

/// Owns one tracker session and runs its Model-View-Update loop.
///
/// For every command the controller:
/// 1. Runs [`ProgressLogic::update`] on the current state
/// 2. Swaps in the resulting state as a whole
/// 3. Hands the transition's timer effect to the [`Scheduler`]
/// 4. Derives a [`Snapshot`] via [`ProgressLogic::view`] and renders it
///
/// Commands are processed one at a time to completion, so a renderer or a
/// caller of [`snapshot`](Self::snapshot) never observes a half-applied
/// change.
///
/// Commands can be applied directly with [`dispatch`](Self::dispatch) (or the
/// named helpers like [`commit_increment`](Self::commit_increment)), or queued
/// through an [`Emitter`] and drained with [`process_queued`](Self::process_queued)
/// or the async [`run`](Self::run) loop. Timer expiries always take the queued
/// path.
///
/// Dropping the controller cancels every pending timer.
///
/// # Type Parameters
///
/// * `R` - The renderer receiving snapshots (implements [`Renderer`])
/// * `S` - The timer backend (implements [`Scheduler`])
pub struct AppController<R: Renderer, S: Scheduler> {
    logic: ProgressLogic,
    state: AppState,
    renderer: R,
    scheduler: S,
    emitter: Emitter,
    receiver: Receiver<Command>,
    started: bool,
}

impl<R: Renderer, S: Scheduler> AppController<R, S> {
    /// Create a controller for a fresh session.
    ///
    /// Nothing is rendered and no timer is armed until
    /// [`start`](Self::start) is called.
    pub fn new(config: Config, renderer: R, scheduler: S) -> Self {
        let state = AppState::from_config(&config);
        Self::with_state(ProgressLogic::new(config.animation), state, renderer, scheduler)
    }

    /// Create a controller around a prepared state and logic, e.g. one
    /// with a custom translator or a progress model restored by the host.
    pub fn with_state(logic: ProgressLogic, state: AppState, renderer: R, scheduler: S) -> Self {
        let (sender, receiver) = flume::unbounded();
        Self {
            logic,
            state,
            renderer,
            scheduler,
            emitter: Emitter::new(sender),
            receiver,
            started: false,
        }
    }

    /// Arm start-up timers and render the initial snapshot. Calling it again,
    /// or after shutdown, does nothing.
    pub fn start(&mut self) {
        if self.started || self.state.shut_down {
            return;
        }
        self.started = true;
        let (state, effect) = self.logic.init(self.state.clone());
        self.state = state;
        effect.execute(&mut self.scheduler, &self.emitter);
        self.renderer.render(self.logic.view(&self.state));
    }

    /// Apply one command synchronously and render the result.
    ///
    /// Returns the domain events the command produced. Commands after
    /// shutdown are ignored and produce nothing.
    pub fn dispatch(&mut self, command: Command) -> Vec<ProgressEvent> {
        let span = debug_span!("dispatch", ?command);
        let _entered = span.enter();

        if self.state.shut_down {
            debug!("controller is shut down, command ignored");
            return Vec::new();
        }
        debug!(user = command.is_user_command(), "dispatching command");

        let Transition {
            state,
            effect,
            events,
        } = self.logic.update(command, &self.state);
        self.state = state;
        effect.execute(&mut self.scheduler, &self.emitter);
        if self.state.shut_down {
            self.scheduler.cancel_all();
        }

        self.renderer.render(self.logic.view(&self.state));
        events
    }

    /// Process every queued command until the queue is empty.
    ///
    /// Returns the number of commands processed.
    pub fn process_queued(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(command) = self.receiver.try_recv() {
            self.dispatch(command);
            processed += 1;
        }
        processed
    }

    /// Start the session and process queued commands as they arrive.
    ///
    /// Returns once a [`Command::Shutdown`] has been processed, or right away
    /// if the controller is already shut down. Commands and timer expiries are
    /// always handled on the task awaiting this future.
    pub async fn run(&mut self) {
        if self.state.shut_down {
            return;
        }
        self.start();
        let receiver = self.receiver.clone();
        while let Ok(command) = receiver.recv_async().await {
            self.dispatch(command);
            if self.state.shut_down {
                break;
            }
        }
    }

    /// Handle for queueing commands from the rendering layer.
    #[must_use]
    pub fn emitter(&self) -> Emitter {
        self.emitter.clone()
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.logic.view(&self.state)
    }

    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    #[must_use]
    pub fn is_shut_down(&self) -> bool {
        self.state.shut_down
    }

    /// Tear down: cancel all timers and ignore further commands.
    pub fn shutdown(&mut self) {
        self.dispatch(Command::Shutdown);
    }

    pub fn set_goal(&mut self, raw: f64) -> Vec<ProgressEvent> {
        self.dispatch(Command::SetGoal(raw))
    }

    pub fn set_type(&mut self, goal_type: GoalType) -> Vec<ProgressEvent> {
        self.dispatch(Command::SetType(goal_type))
    }

    pub fn set_pending_amount(&mut self, raw: f64) -> Vec<ProgressEvent> {
        self.dispatch(Command::SetPendingAmount(raw))
    }

    pub fn commit_increment(&mut self) -> Vec<ProgressEvent> {
        self.dispatch(Command::CommitIncrement)
    }

    pub fn request_reset(&mut self) -> Vec<ProgressEvent> {
        self.dispatch(Command::RequestReset)
    }

    pub fn confirm_reset(&mut self) -> Vec<ProgressEvent> {
        self.dispatch(Command::ConfirmReset)
    }

    pub fn cancel_reset(&mut self) -> Vec<ProgressEvent> {
        self.dispatch(Command::CancelReset)
    }

    pub fn set_locale(&mut self, locale: Locale) -> Vec<ProgressEvent> {
        self.dispatch(Command::SetLocale(locale))
    }
}

impl<R: Renderer, S: Scheduler> Drop for AppController<R, S> {
    fn drop(&mut self) {
        if self.state.shut_down {
            return;
        }
        // No render here; the rendering layer is going away with us.
        let transition = self.logic.update(Command::Shutdown, &self.state);
        self.state = transition.state;
        transition.effect.execute(&mut self.scheduler, &self.emitter);
        self.scheduler.cancel_all();
    }
}
