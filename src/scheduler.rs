//! Timer backends that carry out [`Effect`](crate::Effect)s.

use std::sync::Arc;
use std::time::Duration;

use spin::Mutex;
use tracing::trace;

use crate::animation::TimerHandle;
use crate::{Command, Emitter};

/// Executes timer instructions on some notion of time.
///
/// This abstraction lets the host decide where time comes from: a tokio
/// runtime, a frame clock in a game loop, or a test that advances time by
/// hand. When a timer fires, the scheduler sends
/// [`Command::AnimationExpired`] through the emitter it was given.
///
/// Cancelling a timer that already fired or was never scheduled must be a
/// no-op.
pub trait Scheduler {
    fn schedule(&mut self, handle: TimerHandle, after: Duration, emitter: &Emitter);

    fn cancel(&mut self, handle: TimerHandle);

    /// Cancel everything still pending. Called on controller teardown.
    fn cancel_all(&mut self);
}

impl<S: Scheduler + ?Sized> Scheduler for Box<S> {
    fn schedule(&mut self, handle: TimerHandle, after: Duration, emitter: &Emitter) {
        (**self).schedule(handle, after, emitter);
    }

    fn cancel(&mut self, handle: TimerHandle) {
        (**self).cancel(handle);
    }

    fn cancel_all(&mut self) {
        (**self).cancel_all();
    }
}

struct PendingTimer {
    handle: TimerHandle,
    deadline: Duration,
    emitter: Emitter,
}

#[derive(Default)]
struct VirtualClock {
    now: Duration,
    timers: Vec<PendingTimer>,
}

/// Scheduler driven by an explicit virtual clock.
///
/// Nothing fires until [`advance`](Self::advance) moves time forward. Useful
/// for frame-driven hosts that already tick on their own, and for tests.
/// Clones share one clock.
#[derive(Clone)]
pub struct ManualScheduler {
    clock: Arc<Mutex<VirtualClock>>,
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self {
            clock: Arc::new(Mutex::new(VirtualClock::default())),
        }
    }

    /// Virtual time elapsed since creation.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock.lock().now
    }

    /// Number of timers waiting to fire.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.clock.lock().timers.len()
    }

    #[must_use]
    pub fn is_scheduled(&self, handle: TimerHandle) -> bool {
        self.clock
            .lock()
            .timers
            .iter()
            .any(|timer| timer.handle == handle)
    }

    /// Move the clock forward and fire every timer that came due, earliest
    /// first. Returns how many fired.
    pub fn advance(&self, delta: Duration) -> usize {
        let mut due = {
            let mut clock = self.clock.lock();
            clock.now += delta;
            let now = clock.now;
            let (due, waiting): (Vec<_>, Vec<_>) = clock
                .timers
                .drain(..)
                .partition(|timer| timer.deadline <= now);
            clock.timers = waiting;
            due
        };
        due.sort_by_key(|timer| (timer.deadline, timer.handle.id()));
        for timer in &due {
            trace!(handle = ?timer.handle, "virtual timer fired");
            timer.emitter.emit(Command::AnimationExpired(timer.handle));
        }
        due.len()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, handle: TimerHandle, after: Duration, emitter: &Emitter) {
        let mut clock = self.clock.lock();
        let deadline = clock.now + after;
        clock.timers.retain(|timer| timer.handle != handle);
        clock.timers.push(PendingTimer {
            handle,
            deadline,
            emitter: emitter.clone(),
        });
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.clock.lock().timers.retain(|timer| timer.handle != handle);
    }

    fn cancel_all(&mut self) {
        self.clock.lock().timers.clear();
    }
}

#[cfg(feature = "tokio")]
pub use self::tokio_backend::TokioScheduler;

#[cfg(feature = "tokio")]
mod tokio_backend {
    use std::collections::HashMap;
    use std::time::Duration;

    use tokio::runtime::{Handle, TryCurrentError};
    use tokio::task::JoinHandle;
    use tracing::trace;

    use super::Scheduler;
    use crate::animation::TimerHandle;
    use crate::{Command, Emitter};

    /// Scheduler backed by tokio tasks.
    ///
    /// Each timer is a task sleeping for its duration; cancelling aborts the
    /// task. Dropping the scheduler aborts everything still pending.
    pub struct TokioScheduler {
        runtime: Handle,
        timers: HashMap<TimerHandle, JoinHandle<()>>,
    }

    impl TokioScheduler {
        /// Bind to the runtime the caller is running on.
        pub fn from_current() -> Result<Self, TryCurrentError> {
            Handle::try_current().map(Self::with_handle)
        }

        #[must_use]
        pub fn with_handle(runtime: Handle) -> Self {
            Self {
                runtime,
                timers: HashMap::new(),
            }
        }

        /// Timers that have not fired or been cancelled yet.
        #[must_use]
        pub fn pending(&self) -> usize {
            self.timers.values().filter(|task| !task.is_finished()).count()
        }
    }

    impl Scheduler for TokioScheduler {
        fn schedule(&mut self, handle: TimerHandle, after: Duration, emitter: &Emitter) {
            self.timers.retain(|_, task| !task.is_finished());
            let emitter = emitter.clone();
            let task = self.runtime.spawn(async move {
                tokio::time::sleep(after).await;
                emitter.emit(Command::AnimationExpired(handle));
            });
            if let Some(previous) = self.timers.insert(handle, task) {
                previous.abort();
            }
        }

        fn cancel(&mut self, handle: TimerHandle) {
            if let Some(task) = self.timers.remove(&handle) {
                trace!(?handle, "aborting timer task");
                task.abort();
            }
        }

        fn cancel_all(&mut self) {
            for (_, task) in self.timers.drain() {
                task.abort();
            }
        }
    }

    impl Drop for TokioScheduler {
        fn drop(&mut self) {
            self.cancel_all();
        }
    }
}
