//! Domain events produced by state transitions.

use serde::Serialize;

use crate::staging::Increment;

/// Something that happened as the direct result of a command.
///
/// Events drive the animation flags and are handed back to the caller of
/// [`AppController::dispatch`](crate::AppController::dispatch) so hosts can
/// react (sound, haptics, analytics) without diffing snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum ProgressEvent {
    /// The entry reveal delay elapsed; the main panel may be shown.
    EntryReady,
    /// A staged increment was committed.
    Incremented(Increment),
    /// `current` reached the goal. Fires once per below-to-at-goal transition.
    Completed,
    /// A reset was requested and now waits for confirmation.
    ResetRequested,
    /// A requested reset was backed out.
    ResetCancelled,
    /// A confirmed reset wiped `previous` worth of progress.
    Reset { previous: f64 },
}
