//! The read-only snapshot handed to renderers.

use serde::Serialize;

use crate::animation::AnimationFlags;
use crate::format::{progress_label, ValueFormatter};
use crate::i18n::{Locale, MessageKey, Translator};
use crate::model::GoalType;
use crate::reset::ResetFlowState;
use crate::staging::InputBounds;
use crate::state::AppState;

/// Translated labels for the current locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewTexts {
    pub title: String,
    pub goal: String,
    pub change_type: String,
    /// Name of the active goal type.
    pub goal_type: String,
    pub language: String,
    pub add_progress: String,
    pub add_placeholder: String,
    pub reset_progress: String,
    /// Only present while a reset waits for confirmation.
    pub confirm_reset: Option<String>,
    pub yes: String,
    pub no: String,
    /// Accessible labels for the settings menu toggle.
    pub open_menu: String,
    pub close_menu: String,
}

impl ViewTexts {
    fn build(translator: &dyn Translator, state: &AppState) -> Self {
        let locale = state.locale;
        let t = |key| translator.translate(key, locale).into_owned();
        let goal_type = match state.progress.goal_type() {
            GoalType::Currency => MessageKey::TypeCurrency,
            GoalType::Elements => MessageKey::TypeElements,
        };
        Self {
            title: t(MessageKey::Title),
            goal: t(MessageKey::Goal),
            change_type: t(MessageKey::ChangeType),
            goal_type: t(goal_type),
            language: t(MessageKey::Language),
            add_progress: t(MessageKey::AddProgress),
            add_placeholder: t(MessageKey::AddPlaceholder),
            reset_progress: t(MessageKey::ResetProgress),
            confirm_reset: state
                .reset_flow
                .is_awaiting_confirmation()
                .then(|| t(MessageKey::ConfirmReset)),
            yes: t(MessageKey::Yes),
            no: t(MessageKey::No),
            open_menu: t(MessageKey::OpenMenu),
            close_menu: t(MessageKey::CloseMenu),
        }
    }
}

/// Everything a renderer may show, derived from one consistent [`AppState`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub goal: f64,
    pub current: f64,
    pub goal_type: GoalType,
    /// `0..=100`.
    pub percent: u8,
    pub complete: bool,
    pub pending_amount: f64,
    pub reset_flow: ResetFlowState,
    pub animation: AnimationFlags,
    pub locale: Locale,
    /// `current / goal` caption, formatted for the locale.
    pub label: String,
    pub input_bounds: InputBounds,
    pub texts: ViewTexts,
}

impl Snapshot {
    pub(crate) fn build(
        state: &AppState,
        formatter: &dyn ValueFormatter,
        translator: &dyn Translator,
    ) -> Self {
        let progress = &state.progress;
        Self {
            goal: progress.goal(),
            current: progress.current(),
            goal_type: progress.goal_type(),
            percent: progress.percent_complete(),
            complete: progress.is_complete(),
            pending_amount: state.staging.amount(),
            reset_flow: state.reset_flow.state(),
            animation: state.animation.flags(),
            locale: state.locale,
            label: progress_label(
                formatter,
                progress.current(),
                progress.goal(),
                progress.goal_type(),
                state.locale,
            ),
            input_bounds: InputBounds::for_model(progress),
            texts: ViewTexts::build(translator, state),
        }
    }
}
