//! The complete, explicit state owned by one controller.

use crate::animation::AnimationController;
use crate::config::Config;
use crate::i18n::Locale;
use crate::model::ProgressModel;
use crate::reset::ResetFlow;
use crate::staging::IncrementStaging;

/// Everything the tracker knows at one instant.
///
/// Transitions never mutate a state in place from the outside; the logic
/// derives a new value and the controller swaps it in whole, so observers
/// only ever see complete states.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub progress: ProgressModel,
    pub staging: IncrementStaging,
    pub reset_flow: ResetFlow,
    pub animation: AnimationController,
    pub locale: Locale,
    /// Set once the controller has been torn down.
    pub shut_down: bool,
}

impl AppState {
    /// Fresh session state from configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::with_progress(
            ProgressModel::new(config.goal, config.goal_type),
            config.locale,
        )
    }

    /// Session state around an existing model, e.g. one restored by the host.
    #[must_use]
    pub fn with_progress(progress: ProgressModel, locale: Locale) -> Self {
        Self {
            progress,
            locale,
            ..Self::default()
        }
    }
}
