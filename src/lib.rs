//! Goal progress tracker core built as a Model-View-Update state machine.
//!
//! A user sets a numeric goal, counts either money or discrete items toward
//! it, adds increments, and may reset through a confirmation step. Visual
//! feedback (pulses, a shake, a delayed entry reveal) is modelled as flags
//! with cancelable timers, so any renderer can show them without owning a
//! clock.
//!
//! The moving parts:
//! - [`ProgressLogic`] is pure: `(Command, AppState) -> Transition`
//! - [`AppController`] owns the state, runs commands one at a time, hands
//!   timer [`Effect`]s to a [`Scheduler`] and pushes [`Snapshot`]s to a
//!   [`Renderer`]
//! - Timer expiries come back as [`Command::AnimationExpired`] through the
//!   same [`Emitter`] the rendering layer uses
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//! use progress_mvu::{AppController, Config, ManualScheduler, ProgressEvent, Renderer, Snapshot};
//!
//! struct Print;
//! impl Renderer for Print {
//!     fn render(&mut self, snapshot: Snapshot) {
//!         println!("{} {}%", snapshot.label, snapshot.percent);
//!     }
//! }
//!
//! let scheduler = ManualScheduler::new();
//! let mut controller = AppController::new(Config::default(), Print, scheduler.clone());
//! controller.start();
//!
//! controller.set_pending_amount(100.0);
//! let events = controller.commit_increment();
//! assert!(events.contains(&ProgressEvent::Completed));
//! assert!(controller.snapshot().animation.complete_pulse_active);
//!
//! // Let the pulses run out.
//! scheduler.advance(Duration::from_millis(1100));
//! controller.process_queued();
//! assert!(!controller.snapshot().animation.complete_pulse_active);
//! ```

mod animation;
mod command;
mod config;
mod controller;
mod effect;
mod emitter;
mod error;
mod event;
mod format;
mod i18n;
mod logic;
mod model;
mod renderer;
mod reset;
mod scheduler;
mod staging;
mod state;
mod view;

#[cfg(feature = "cli")]
pub mod console;

// Public re-exports
pub use animation::{AnimationController, AnimationFlag, AnimationFlags, AnimationTimings, TimerHandle};
pub use command::Command;
pub use config::{Config, ENV_GOAL, ENV_GOAL_TYPE, ENV_LOCALE};
pub use controller::AppController;
pub use effect::{Effect, TimerOp};
pub use emitter::Emitter;
#[cfg(feature = "cli")]
pub use error::CommandParseError;
pub use error::{ConfigError, ParseGoalTypeError, ParseLocaleError};
pub use event::ProgressEvent;
pub use format::{progress_label, LocaleFormatter, ValueFormatter};
pub use i18n::{Catalog, Locale, MessageKey, Translator};
pub use logic::{ProgressLogic, Transition};
pub use model::{round_cents, GoalType, ProgressModel, DEFAULT_GOAL};
pub use renderer::Renderer;
pub use reset::{ResetFlow, ResetFlowState};
#[cfg(feature = "tokio")]
pub use scheduler::TokioScheduler;
pub use scheduler::{ManualScheduler, Scheduler};
pub use staging::{Increment, IncrementStaging, InputBounds};
pub use state::AppState;
pub use view::{Snapshot, ViewTexts};

// Test utilities (only available with 'testing' feature or during tests)
#[cfg(any(test, feature = "testing"))]
pub use renderer::TestRenderer;
