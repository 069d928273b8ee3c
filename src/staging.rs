//! Staging area for the amount the user wants to add.

use serde::Serialize;
use tracing::debug;

use crate::model::{round_cents, GoalType, ProgressModel};

/// Result of a commit that actually ran.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Increment {
    /// Amount that was staged.
    pub requested: f64,
    /// Amount that made it into `current` after clamping to the goal.
    pub applied: f64,
}

impl Increment {
    /// True when remaining capacity cut the increment short.
    #[must_use]
    pub fn was_clamped(&self) -> bool {
        self.applied < self.requested
    }
}

/// Advisory limits for the amount entry widget.
///
/// The commit-time clamp is what actually protects the goal; these bounds only
/// guide the input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InputBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl InputBounds {
    #[must_use]
    pub fn for_model(model: &ProgressModel) -> Self {
        let unit = model.goal_type().minimum_unit();
        Self {
            min: unit,
            max: model.goal_type().quantize(model.remaining()),
            step: unit,
        }
    }
}

/// Holds the pending increment until it is committed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IncrementStaging {
    amount: f64,
}

impl IncrementStaging {
    #[must_use]
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Stage a raw amount.
    ///
    /// Anything that is not a finite positive number stages `0`, which makes
    /// the next commit a no-op. Element counts are rounded to whole items.
    pub fn set_pending_amount(&mut self, raw: f64, goal_type: GoalType) {
        if !raw.is_finite() || raw <= 0.0 {
            if raw != 0.0 {
                debug!(raw, "pending amount is not a positive number, staging 0");
            }
            self.amount = 0.0;
            return;
        }
        self.amount = match goal_type {
            GoalType::Currency => raw,
            GoalType::Elements => raw.round(),
        };
    }

    pub fn clear(&mut self) {
        self.amount = 0.0;
    }

    /// Apply the staged amount to `model`.
    ///
    /// Returns `None` when nothing was staged. Otherwise `current` becomes
    /// `min(goal, current + amount)` (cents for currency), the stage is cleared
    /// and the returned [`Increment`] carries the delta that was really applied.
    /// A commit never lowers `current`, even when a reduced goal left it above
    /// the goal.
    pub fn commit(&mut self, model: &mut ProgressModel) -> Option<Increment> {
        let requested = self.amount;
        if requested <= 0.0 {
            return None;
        }
        self.amount = 0.0;

        let before = model.current();
        let mut after = (before + requested).min(model.goal());
        if model.goal_type() == GoalType::Currency {
            after = round_cents(after);
        }
        let after = after.max(before);
        model.set_current(after);

        let mut applied = after - before;
        if model.goal_type() == GoalType::Currency {
            applied = round_cents(applied);
        }
        let increment = Increment { requested, applied };
        if increment.was_clamped() {
            debug!(
                requested,
                applied,
                goal = model.goal(),
                "increment clamped to remaining capacity"
            );
        }
        Some(increment)
    }
}
