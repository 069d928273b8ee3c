//! Two-step confirmation guarding the reset of accumulated progress.

use serde::Serialize;
use tracing::debug;

use crate::model::ProgressModel;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum ResetFlowState {
    #[default]
    Idle,
    AwaitingConfirmation,
}

/// `Idle -> AwaitingConfirmation -> Idle`, with the progress wiped only on the
/// confirming edge. There is no way to reset from `Idle` in one step.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResetFlow {
    state: ResetFlowState,
}

impl ResetFlow {
    #[must_use]
    pub fn state(&self) -> ResetFlowState {
        self.state
    }

    #[must_use]
    pub fn is_awaiting_confirmation(&self) -> bool {
        self.state == ResetFlowState::AwaitingConfirmation
    }

    /// Ask for confirmation. Returns `false` if already waiting for it.
    pub fn request(&mut self) -> bool {
        if self.is_awaiting_confirmation() {
            debug!("reset already awaiting confirmation");
            return false;
        }
        self.state = ResetFlowState::AwaitingConfirmation;
        true
    }

    /// Zero `current` if a reset was requested.
    ///
    /// Returns the progress that was discarded, or `None` when the flow was
    /// idle and nothing happened.
    pub fn confirm(&mut self, model: &mut ProgressModel) -> Option<f64> {
        if !self.is_awaiting_confirmation() {
            debug!("reset confirmation without a pending request ignored");
            return None;
        }
        self.state = ResetFlowState::Idle;
        let previous = model.current();
        model.set_current(0.0);
        Some(previous)
    }

    /// Back out of a requested reset. Returns `false` if nothing was pending.
    pub fn cancel(&mut self) -> bool {
        if !self.is_awaiting_confirmation() {
            debug!("reset cancel without a pending request ignored");
            return false;
        }
        self.state = ResetFlowState::Idle;
        true
    }
}
