//! Command emitter handed to the rendering layer and to timers.

use flume::Sender;
use tracing::trace;

use crate::Command;

/// Cloneable handle for queueing [`Command`]s on a controller.
///
/// The rendering layer keeps one to turn clicks and key presses into
/// commands; the scheduler keeps one per running timer to report expiry.
/// Commands sent here are processed in order by
/// [`AppController::process_queued`](crate::AppController::process_queued)
/// or [`AppController::run`](crate::AppController::run).
///
/// # Example
///
/// ```rust
/// use progress_mvu::{AppController, Command, ManualScheduler, Renderer, Snapshot};
///
/// struct Discard;
/// impl Renderer for Discard {
///     fn render(&mut self, _snapshot: Snapshot) {}
/// }
///
/// let mut controller = AppController::new(Default::default(), Discard, ManualScheduler::new());
/// let emitter = controller.emitter();
///
/// emitter.emit(Command::SetPendingAmount(25.0));
/// emitter.emit(Command::CommitIncrement);
/// controller.process_queued();
///
/// assert_eq!(controller.snapshot().current, 25.0);
/// ```
#[derive(Clone)]
pub struct Emitter(pub(crate) Sender<Command>);

impl Emitter {
    pub(crate) fn new(sender: Sender<Command>) -> Self {
        Self(sender)
    }

    /// Queue a command.
    ///
    /// Sending after the controller is gone is silently ignored.
    pub fn emit(&self, command: Command) {
        if self.0.send(command).is_err() {
            trace!(?command, "controller gone, command dropped");
        }
    }
}
