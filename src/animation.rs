//! Transient visual flags and the timers that expire them.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::effect::Effect;
use crate::event::ProgressEvent;

/// One of the animated states a renderer can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AnimationFlag {
    /// The delayed entry reveal of the main panel.
    EntryReveal,
    AddPulse,
    CompletePulse,
    ResetShake,
}

impl AnimationFlag {
    pub const ALL: [AnimationFlag; 4] = [
        Self::EntryReveal,
        Self::AddPulse,
        Self::CompletePulse,
        Self::ResetShake,
    ];

    const fn slot(self) -> usize {
        match self {
            Self::EntryReveal => 0,
            Self::AddPulse => 1,
            Self::CompletePulse => 2,
            Self::ResetShake => 3,
        }
    }
}

/// Identifies one scheduled timer.
///
/// Handles are never reused within a controller, so an expiry that arrives
/// after its timer was replaced is recognized as stale and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TimerHandle {
    flag: AnimationFlag,
    id: u64,
}

impl TimerHandle {
    #[must_use]
    pub const fn new(flag: AnimationFlag, id: u64) -> Self {
        Self { flag, id }
    }

    #[must_use]
    pub fn flag(&self) -> AnimationFlag {
        self.flag
    }

    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }
}

/// How long each animated state lasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationTimings {
    /// Delay before the main panel is revealed after start.
    pub entry_delay_ms: u64,
    pub add_pulse_ms: u64,
    pub complete_pulse_ms: u64,
    pub reset_shake_ms: u64,
}

impl Default for AnimationTimings {
    fn default() -> Self {
        Self {
            entry_delay_ms: 200,
            add_pulse_ms: 600,
            complete_pulse_ms: 1100,
            reset_shake_ms: 500,
        }
    }
}

impl AnimationTimings {
    #[must_use]
    pub fn duration(&self, flag: AnimationFlag) -> Duration {
        let ms = match flag {
            AnimationFlag::EntryReveal => self.entry_delay_ms,
            AnimationFlag::AddPulse => self.add_pulse_ms,
            AnimationFlag::CompletePulse => self.complete_pulse_ms,
            AnimationFlag::ResetShake => self.reset_shake_ms,
        };
        Duration::from_millis(ms)
    }
}

/// Snapshot of which animations are currently showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AnimationFlags {
    pub entry_revealed: bool,
    pub add_pulse_active: bool,
    pub complete_pulse_active: bool,
    pub reset_shake_active: bool,
}

impl AnimationFlags {
    #[must_use]
    pub fn is_set(&self, flag: AnimationFlag) -> bool {
        match flag {
            AnimationFlag::EntryReveal => self.entry_revealed,
            AnimationFlag::AddPulse => self.add_pulse_active,
            AnimationFlag::CompletePulse => self.complete_pulse_active,
            AnimationFlag::ResetShake => self.reset_shake_active,
        }
    }

    fn set(&mut self, flag: AnimationFlag, on: bool) {
        match flag {
            AnimationFlag::EntryReveal => self.entry_revealed = on,
            AnimationFlag::AddPulse => self.add_pulse_active = on,
            AnimationFlag::CompletePulse => self.complete_pulse_active = on,
            AnimationFlag::ResetShake => self.reset_shake_active = on,
        }
    }
}

/// Maps domain events to animation flags and owns their timers.
///
/// Each flag has at most one live timer. Setting a flag that is already on
/// cancels its timer and starts a new one, so pulses restart instead of
/// stacking. The entry reveal is the one exception to "set now, clear later":
/// its timer is a start-up delay after which `entry_revealed` turns on and
/// stays on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnimationController {
    flags: AnimationFlags,
    timers: [Option<TimerHandle>; 4],
    next_id: u64,
}

impl AnimationController {
    #[must_use]
    pub fn flags(&self) -> AnimationFlags {
        self.flags
    }

    /// Live timer for `flag`, if any.
    #[must_use]
    pub fn timer(&self, flag: AnimationFlag) -> Option<TimerHandle> {
        self.timers[flag.slot()]
    }

    fn arm(&mut self, flag: AnimationFlag, after: Duration) -> Effect {
        self.next_id += 1;
        let handle = TimerHandle::new(flag, self.next_id);
        let replaced = self.timers[flag.slot()].replace(handle);
        trace!(?handle, ?after, "animation timer armed");
        let start = Effect::start_timer(handle, after);
        match replaced {
            Some(old) => Effect::cancel_timer(old).and(start),
            None => start,
        }
    }

    /// Schedule the one-shot entry reveal. Does nothing once revealed.
    pub fn schedule_entry(&mut self, timings: &AnimationTimings) -> Effect {
        if self.flags.entry_revealed {
            return Effect::none();
        }
        self.arm(
            AnimationFlag::EntryReveal,
            timings.duration(AnimationFlag::EntryReveal),
        )
    }

    /// React to a domain event.
    pub fn on_event(&mut self, event: &ProgressEvent, timings: &AnimationTimings) -> Effect {
        let flag = match event {
            ProgressEvent::EntryReady => {
                self.flags.entry_revealed = true;
                return match self.timers[AnimationFlag::EntryReveal.slot()].take() {
                    Some(handle) => Effect::cancel_timer(handle),
                    None => Effect::none(),
                };
            }
            ProgressEvent::Incremented(_) => AnimationFlag::AddPulse,
            ProgressEvent::Completed => AnimationFlag::CompletePulse,
            ProgressEvent::Reset { .. } => AnimationFlag::ResetShake,
            ProgressEvent::ResetRequested | ProgressEvent::ResetCancelled => {
                return Effect::none()
            }
        };
        self.flags.set(flag, true);
        self.arm(flag, timings.duration(flag))
    }

    /// Handle a timer expiry.
    ///
    /// Returns the flag whose timer this was, or `None` for a stale handle
    /// that was cancelled or replaced before it fired.
    pub fn expire(&mut self, handle: TimerHandle) -> Option<AnimationFlag> {
        let flag = handle.flag();
        let slot = &mut self.timers[flag.slot()];
        if *slot != Some(handle) {
            trace!(?handle, "stale animation timer ignored");
            return None;
        }
        *slot = None;
        // The entry timer is a delay; the logic turns it into `EntryReady`.
        if flag != AnimationFlag::EntryReveal {
            self.flags.set(flag, false);
        }
        Some(flag)
    }

    /// Cancel every live timer and clear the transient flags.
    pub fn teardown(&mut self) -> Effect {
        let mut effect = Effect::none();
        for flag in AnimationFlag::ALL {
            if let Some(handle) = self.timers[flag.slot()].take() {
                effect = effect.and(Effect::cancel_timer(handle));
            }
        }
        self.flags = AnimationFlags {
            entry_revealed: self.flags.entry_revealed,
            ..AnimationFlags::default()
        };
        effect
    }
}
