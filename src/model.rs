//! Goal, accumulated progress and the rules that keep them consistent.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ParseGoalTypeError;

/// Goal used when a session starts without configuration.
pub const DEFAULT_GOAL: f64 = 100.0;

/// What the tracked quantity is measured in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalType {
    /// Monetary amount with two-decimal precision.
    #[default]
    Currency,
    /// Count of discrete items.
    Elements,
}

impl GoalType {
    /// Smallest amount a single increment is expected to carry.
    #[must_use]
    pub const fn minimum_unit(self) -> f64 {
        match self {
            Self::Currency => 0.01,
            Self::Elements => 1.0,
        }
    }

    /// Snap a value onto this type's precision.
    ///
    /// Currency rounds to cents, elements to whole items.
    #[must_use]
    pub fn quantize(self, value: f64) -> f64 {
        match self {
            Self::Currency => round_cents(value),
            Self::Elements => value.round(),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Currency => "currency",
            Self::Elements => "elements",
        }
    }
}

impl fmt::Display for GoalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoalType {
    type Err = ParseGoalTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "currency" | "money" => Ok(Self::Currency),
            "elements" | "items" => Ok(Self::Elements),
            _ => Err(ParseGoalTypeError(s.to_string())),
        }
    }
}

/// Round to two decimal places, dropping any floating point tail.
///
/// Magnitudes too large to scale by 100 have no cents and are returned as is.
#[must_use]
pub fn round_cents(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / 100.0
}

/// Normalize raw goal input: anything that is not a positive finite number
/// becomes 1, and the result never drops below 1.
pub(crate) fn normalize_goal(raw: f64, goal_type: GoalType) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        debug!(raw, "goal is not a positive number, normalizing to 1");
        return 1.0;
    }
    goal_type.quantize(raw).max(1.0)
}

/// The goal being tracked and the progress made toward it.
///
/// `current` only moves up through [`IncrementStaging::commit`] and only moves
/// down through [`ResetFlow::confirm`]. Changing the goal never rewrites
/// `current`, so a lowered goal can leave `current` above it; percent-complete
/// is capped at 100 in that case.
///
/// [`IncrementStaging::commit`]: crate::IncrementStaging::commit
/// [`ResetFlow::confirm`]: crate::ResetFlow::confirm
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressModel {
    goal: f64,
    current: f64,
    goal_type: GoalType,
}

impl Default for ProgressModel {
    fn default() -> Self {
        Self::new(DEFAULT_GOAL, GoalType::default())
    }
}

impl ProgressModel {
    /// Fresh model with no progress.
    #[must_use]
    pub fn new(goal: f64, goal_type: GoalType) -> Self {
        Self {
            goal: normalize_goal(goal, goal_type),
            current: 0.0,
            goal_type,
        }
    }

    /// Rebuild a model from values held outside the session.
    ///
    /// The goal is normalized like [`set_goal`](Self::set_goal); `current` is
    /// clamped into `[0, goal]` and a non-finite value counts as no progress.
    #[must_use]
    pub fn restore(goal: f64, current: f64, goal_type: GoalType) -> Self {
        let goal = normalize_goal(goal, goal_type);
        let current = if current.is_finite() {
            current.clamp(0.0, goal)
        } else {
            0.0
        };
        Self {
            goal,
            current,
            goal_type,
        }
    }

    #[must_use]
    pub fn goal(&self) -> f64 {
        self.goal
    }

    #[must_use]
    pub fn current(&self) -> f64 {
        self.current
    }

    #[must_use]
    pub fn goal_type(&self) -> GoalType {
        self.goal_type
    }

    /// Remaining capacity before the goal is reached, never negative.
    #[must_use]
    pub fn remaining(&self) -> f64 {
        (self.goal - self.current).max(0.0)
    }

    pub fn set_goal(&mut self, raw: f64) {
        self.goal = normalize_goal(raw, self.goal_type);
    }

    /// Switch the unit of measure. Values are not rescaled.
    ///
    /// Callers are responsible for dropping any staged increment; the
    /// [`ProgressLogic`](crate::ProgressLogic) does this for you.
    pub fn set_type(&mut self, next: GoalType) {
        self.goal_type = next;
    }

    /// Percent of the goal reached, rounded and capped to `0..=100`.
    #[must_use]
    pub fn percent_complete(&self) -> u8 {
        if self.goal <= 0.0 {
            return 0;
        }
        let percent = (100.0 * self.current / self.goal).min(100.0).round();
        percent.max(0.0) as u8
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.goal > 0.0 && self.current >= self.goal
    }

    pub(crate) fn set_current(&mut self, value: f64) {
        self.current = value;
    }
}
