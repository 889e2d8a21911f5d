//! Login screen state.

use std::time::Instant;

use anteroom_core::validate::Credentials;

use crate::common::fx::{Entrance, SubmitState};
use crate::common::FieldBuffer;
use crate::features::otp::OtpEntry;

/// Which card is showing. Exactly one view is interactive at a time;
/// the Hiding* states cover the fade between them, during which form
/// input is inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginView {
    Credentials,
    HidingCredentials,
    Otp,
    HidingOtp,
}

/// Focus cycle on the credentials card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginFocus {
    Email,
    Password,
    RememberMe,
    Submit,
    ForgotPassword,
}

impl LoginFocus {
    pub fn next(self) -> Self {
        match self {
            LoginFocus::Email => LoginFocus::Password,
            LoginFocus::Password => LoginFocus::RememberMe,
            LoginFocus::RememberMe => LoginFocus::Submit,
            LoginFocus::Submit => LoginFocus::ForgotPassword,
            LoginFocus::ForgotPassword => LoginFocus::Email,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            LoginFocus::Email => LoginFocus::ForgotPassword,
            LoginFocus::Password => LoginFocus::Email,
            LoginFocus::RememberMe => LoginFocus::Password,
            LoginFocus::Submit => LoginFocus::RememberMe,
            LoginFocus::ForgotPassword => LoginFocus::Submit,
        }
    }
}

/// The login screen.
#[derive(Debug)]
pub struct LoginScreen {
    pub view: LoginView,
    pub email: FieldBuffer,
    pub password: FieldBuffer,
    /// Password rendered as mask glyphs when true (the default).
    pub password_masked: bool,
    pub remember_me: bool,
    pub focus: LoginFocus,
    /// Sign-in button state.
    pub submit: SubmitState,
    /// The passcode fallback view.
    pub otp: OtpEntry,
    pub entrance: Entrance,
}

impl LoginScreen {
    pub fn new(now: Instant) -> Self {
        Self {
            view: LoginView::Credentials,
            email: FieldBuffer::default(),
            password: FieldBuffer::default(),
            password_masked: true,
            remember_me: false,
            focus: LoginFocus::Email,
            submit: SubmitState::default(),
            otp: OtpEntry::default(),
            entrance: Entrance::new(now),
        }
    }

    /// Values read at submit time; never stored anywhere else.
    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.text().to_string(),
            password: self.password.text().to_string(),
            remember_me: self.remember_me,
        }
    }

    /// True while a card fade is in progress.
    pub fn in_transition(&self) -> bool {
        matches!(
            self.view,
            LoginView::HidingCredentials | LoginView::HidingOtp
        )
    }

    /// Clears expired feedback timers.
    pub fn expire_fx(&mut self, now: Instant) {
        self.submit.expire(now);
        self.otp.expire_fx(now);
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        matches!(self.submit, SubmitState::Success(_)) || self.otp.is_animating(now)
    }
}
