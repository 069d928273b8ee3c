//! Declarative timer work returned alongside every state transition.

use std::time::Duration;

use crate::animation::TimerHandle;
use crate::scheduler::Scheduler;
use crate::Emitter;

/// A single instruction for the [`Scheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerOp {
    /// Deliver [`Command::AnimationExpired`](crate::Command::AnimationExpired)
    /// with `handle` once `after` has elapsed.
    Start { handle: TimerHandle, after: Duration },
    /// Drop a previously started timer so it never fires.
    Cancel(TimerHandle),
}

/// Declarative description of timer work.
///
/// Effects are produced by [`ProgressLogic`](crate::ProgressLogic) next to the
/// new state. The logic never touches a clock itself; the controller hands the
/// effect to its scheduler after the state has been committed.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use progress_mvu::{AnimationFlag, Effect, TimerHandle};
///
/// let old = TimerHandle::new(AnimationFlag::AddPulse, 1);
/// let new = TimerHandle::new(AnimationFlag::AddPulse, 2);
///
/// // Restart a pulse: cancel the old timer, start a fresh one.
/// let effect = Effect::batch(vec![
///     Effect::cancel_timer(old),
///     Effect::start_timer(new, Duration::from_millis(600)),
/// ]);
/// assert_eq!(effect.ops().len(), 2);
///
/// // No timer work
/// assert!(Effect::none().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Effect {
    ops: Vec<TimerOp>,
}

impl Effect {
    /// No timer work.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn start_timer(handle: TimerHandle, after: Duration) -> Self {
        Self {
            ops: vec![TimerOp::Start { handle, after }],
        }
    }

    #[must_use]
    pub fn cancel_timer(handle: TimerHandle) -> Self {
        Self {
            ops: vec![TimerOp::Cancel(handle)],
        }
    }

    /// Combine effects, preserving order.
    #[must_use]
    pub fn batch(effects: Vec<Effect>) -> Self {
        Self {
            ops: effects.into_iter().flat_map(|effect| effect.ops).collect(),
        }
    }

    /// Append `other` after this effect.
    #[must_use]
    pub fn and(mut self, other: Effect) -> Self {
        self.ops.extend(other.ops);
        self
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        self.ops.is_empty()
    }

    #[must_use]
    pub fn ops(&self) -> &[TimerOp] {
        &self.ops
    }

    /// Run every instruction against `scheduler`. Expiries are delivered
    /// through `emitter`.
    pub fn execute<S: Scheduler + ?Sized>(&self, scheduler: &mut S, emitter: &Emitter) {
        for op in &self.ops {
            match *op {
                TimerOp::Start { handle, after } => scheduler.schedule(handle, after, emitter),
                TimerOp::Cancel(handle) => scheduler.cancel(handle),
            }
        }
    }
}
