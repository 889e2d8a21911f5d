//! Passcode view state.

use std::time::Instant;

use anteroom_core::otp::{OTP_LEN, OtpCells};

use crate::common::fx::{self, Pulse, Shake, SubmitState};

/// State of the resend link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResendState {
    #[default]
    Idle,
    /// Simulated resend in flight; the link is inert.
    Sending,
    /// Showing the "Sent!" label until the label timer fires.
    Sent,
}

/// The passcode view: the cell machine plus its visual feedback.
#[derive(Debug, Default)]
pub struct OtpEntry {
    /// The six-cell machine.
    pub cells: OtpCells,
    /// Per-cell fill pulse.
    pub cell_pulse: [Option<Pulse>; OTP_LEN],
    /// Row shake on a rejected submission.
    pub shake: Option<Shake>,
    /// Set once the post-transition focus delay has elapsed; cell
    /// input is inert before that.
    pub focus_armed: bool,
    /// Verify button state.
    pub verify: SubmitState,
    /// Resend link state.
    pub resend: ResendState,
}

impl OtpEntry {
    /// Resets the view for the next visit (cells cleared, focus disarmed).
    pub fn reset(&mut self) {
        self.cells.clear();
        self.cell_pulse = [None; OTP_LEN];
        self.shake = None;
        self.focus_armed = false;
    }

    /// Clears expired feedback timers.
    pub fn expire_fx(&mut self, now: Instant) {
        for slot in &mut self.cell_pulse {
            fx::expire_pulse(slot, now);
        }
        fx::expire_shake(&mut self.shake, now);
        self.verify.expire(now);
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.cell_pulse.iter().any(|p| p.is_some_and(|p| p.active(now)))
            || self.shake.is_some_and(|s| s.active(now))
            || matches!(self.verify, SubmitState::Success(_))
    }
}
