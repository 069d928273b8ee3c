//! Inputs accepted by the controller.

use crate::animation::TimerHandle;
use crate::i18n::Locale;
use crate::model::GoalType;

/// Every way the outside world can ask the tracker to change.
///
/// User commands come from the rendering layer through an
/// [`Emitter`](crate::Emitter) or a direct [`dispatch`] call. Timer expiries
/// arrive the same way, sent by the [`Scheduler`](crate::Scheduler).
///
/// All numeric payloads are raw input; the state machine normalizes them.
///
/// [`dispatch`]: crate::AppController::dispatch
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    SetGoal(f64),
    SetType(GoalType),
    SetPendingAmount(f64),
    CommitIncrement,
    RequestReset,
    ConfirmReset,
    CancelReset,
    SetLocale(Locale),
    /// A scheduled animation timer fired.
    AnimationExpired(TimerHandle),
    /// Tear down: cancel all timers and stop [`run`](crate::AppController::run).
    Shutdown,
}

impl Command {
    /// Whether the command came from a person rather than a timer.
    #[must_use]
    pub fn is_user_command(&self) -> bool {
        !matches!(self, Self::AnimationExpired(_) | Self::Shutdown)
    }
}
