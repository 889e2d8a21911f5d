//! Signup screen state.

use std::time::Instant;

use anteroom_core::strength::Strength;
use anteroom_core::validate::{SignupField, SignupProfile};

use crate::common::fx::{self, Entrance, Shake, SubmitState};
use crate::common::FieldBuffer;

/// Focus cycle on the signup card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupFocus {
    FirstName,
    LastName,
    Email,
    Password,
    Submit,
}

impl SignupFocus {
    pub fn next(self) -> Self {
        match self {
            SignupFocus::FirstName => SignupFocus::LastName,
            SignupFocus::LastName => SignupFocus::Email,
            SignupFocus::Email => SignupFocus::Password,
            SignupFocus::Password => SignupFocus::Submit,
            SignupFocus::Submit => SignupFocus::FirstName,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            SignupFocus::FirstName => SignupFocus::Submit,
            SignupFocus::LastName => SignupFocus::FirstName,
            SignupFocus::Email => SignupFocus::LastName,
            SignupFocus::Password => SignupFocus::Email,
            SignupFocus::Submit => SignupFocus::Password,
        }
    }
}

impl From<SignupField> for SignupFocus {
    fn from(field: SignupField) -> Self {
        match field {
            SignupField::FirstName => SignupFocus::FirstName,
            SignupField::LastName => SignupFocus::LastName,
            SignupField::Email => SignupFocus::Email,
            SignupField::Password => SignupFocus::Password,
        }
    }
}

/// Strength indicator below the password field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrengthPopup {
    #[default]
    Hidden,
    Visible(Strength),
}

/// The signup screen.
#[derive(Debug)]
pub struct SignupScreen {
    pub first_name: FieldBuffer,
    pub last_name: FieldBuffer,
    pub email: FieldBuffer,
    pub password: FieldBuffer,
    pub password_masked: bool,
    pub focus: SignupFocus,
    /// Debounced strength indicator.
    pub strength: StrengthPopup,
    /// Too-long password popup and red border highlight.
    pub length_error: bool,
    /// Inline validation or success message.
    pub message: Option<&'static str>,
    /// Shake on the password field after a rejected submit.
    pub password_shake: Option<Shake>,
    pub submit: SubmitState,
    /// Set once the account is created; blocks further edits while the
    /// redirect timer runs.
    pub redirecting: bool,
    pub entrance: Entrance,
}

impl SignupScreen {
    pub fn new(now: Instant) -> Self {
        Self {
            first_name: FieldBuffer::default(),
            last_name: FieldBuffer::default(),
            email: FieldBuffer::default(),
            password: FieldBuffer::default(),
            password_masked: true,
            focus: SignupFocus::FirstName,
            strength: StrengthPopup::default(),
            length_error: false,
            message: None,
            password_shake: None,
            submit: SubmitState::default(),
            redirecting: false,
            entrance: Entrance::new(now),
        }
    }

    /// Values read at submit time; logged once, never stored.
    pub fn profile(&self) -> SignupProfile {
        SignupProfile {
            first_name: self.first_name.text().to_string(),
            last_name: self.last_name.text().to_string(),
            email: self.email.text().to_string(),
            password: self.password.text().to_string(),
        }
    }

    /// Clears expired feedback timers.
    pub fn expire_fx(&mut self, now: Instant) {
        fx::expire_shake(&mut self.password_shake, now);
        self.submit.expire(now);
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.password_shake.is_some_and(|s| s.active(now))
            || matches!(self.submit, SubmitState::Success(_))
    }
}
