//! One-shot visual effect timers.
//!
//! Deadline-based feedback state read by render and expired in the
//! reducer's Tick arm. Render never mutates these.

use std::time::{Duration, Instant};

/// Brief scale/highlight feedback after a successful action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pulse {
    until: Instant,
}

impl Pulse {
    pub fn start(now: Instant, duration: Duration) -> Self {
        Self {
            until: now + duration,
        }
    }

    pub fn active(&self, now: Instant) -> bool {
        now < self.until
    }
}

/// Expires a pulse slot in place.
pub fn expire_pulse(slot: &mut Option<Pulse>, now: Instant) {
    if slot.is_some_and(|p| !p.active(now)) {
        *slot = None;
    }
}

/// Horizontal shake feedback on rejected input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shake {
    started: Instant,
    until: Instant,
}

/// How often the shake flips direction.
const SHAKE_PERIOD_MS: u128 = 80;

impl Shake {
    pub fn start(now: Instant, duration: Duration) -> Self {
        Self {
            started: now,
            until: now + duration,
        }
    }

    pub fn active(&self, now: Instant) -> bool {
        now < self.until
    }

    /// Column offset to apply while the shake is active.
    pub fn offset(&self, now: Instant) -> i16 {
        if !self.active(now) {
            return 0;
        }
        let elapsed = now.duration_since(self.started).as_millis();
        if (elapsed / SHAKE_PERIOD_MS) % 2 == 0 { -1 } else { 1 }
    }
}

/// Expires a shake slot in place.
pub fn expire_shake(slot: &mut Option<Shake>, now: Instant) {
    if slot.is_some_and(|s| !s.active(now)) {
        *slot = None;
    }
}

/// Card entrance reveal on screen mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entrance {
    mounted_at: Instant,
}

/// Render treatment for the entrance window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntranceStage {
    Hidden,
    Easing,
    Settled,
}

/// Delay before the card becomes visible at all.
const ENTRANCE_DELAY: Duration = Duration::from_millis(100);

impl Entrance {
    pub fn new(now: Instant) -> Self {
        Self { mounted_at: now }
    }

    pub fn stage(&self, now: Instant, window: Duration) -> EntranceStage {
        let elapsed = now.duration_since(self.mounted_at);
        if elapsed < ENTRANCE_DELAY {
            EntranceStage::Hidden
        } else if elapsed < ENTRANCE_DELAY + window {
            EntranceStage::Easing
        } else {
            EntranceStage::Settled
        }
    }

    pub fn is_settling(&self, now: Instant, window: Duration) -> bool {
        self.stage(now, window) != EntranceStage::Settled
    }
}

/// Async control state for a submit button or link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Loading,
    Success(Pulse),
}

impl SubmitState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SubmitState::Loading)
    }

    /// Transition from Loading back to Idle with a success pulse.
    pub fn settle(&mut self, now: Instant, pulse: Duration) {
        *self = SubmitState::Success(Pulse::start(now, pulse));
    }

    /// Clears an expired success pulse.
    pub fn expire(&mut self, now: Instant) {
        if let SubmitState::Success(pulse) = self
            && !pulse.active(now)
        {
            *self = SubmitState::Idle;
        }
    }
}
