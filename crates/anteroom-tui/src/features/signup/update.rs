//! Signup screen reducer.
//!
//! Field editing with the debounced strength evaluation, the ordered
//! validation chain on submit, and the post-success redirect.

use std::time::Instant;

use anteroom_core::config::TimingConfig;
use anteroom_core::strength;
use anteroom_core::validate::{self, SignupError};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::common::fx::{Shake, SubmitState};
use crate::common::{TaskKind, TaskSeq, Tasks};
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::{AppState, Screen};

use super::state::{SignupFocus, SignupScreen, StrengthPopup};

/// Message shown once the simulated account creation settles.
const SUCCESS_MESSAGE: &str = "Account created! Redirecting to sign in...";

pub fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let AppState {
        screen,
        tasks,
        task_seq,
        timing,
        ..
    } = state;
    let Screen::Signup(screen) = screen else {
        return vec![];
    };

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if key.code == KeyCode::Esc {
        return vec![UiEffect::Quit];
    }

    // Edits are frozen while the redirect timer runs.
    if screen.redirecting {
        return vec![];
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            screen.focus = screen.focus.next();
            vec![]
        }
        KeyCode::BackTab | KeyCode::Up => {
            screen.focus = screen.focus.prev();
            vec![]
        }
        KeyCode::Char('t') if ctrl => {
            screen.password_masked = !screen.password_masked;
            vec![]
        }
        KeyCode::Char('v') if ctrl => vec![UiEffect::ReadClipboard],
        KeyCode::Enter => submit(screen, task_seq, timing),
        _ => {
            let changed = match screen.focus {
                SignupFocus::FirstName => screen.first_name.input(key),
                SignupFocus::LastName => screen.last_name.input(key),
                SignupFocus::Email => screen.email.input(key),
                SignupFocus::Password => screen.password.input(key),
                SignupFocus::Submit => false,
            };
            if changed && screen.focus == SignupFocus::Password {
                return password_changed(screen, tasks, task_seq, timing);
            }
            vec![]
        }
    }
}

/// The password changed: hide both popups immediately, drop any pending
/// evaluation, and schedule a fresh one after the quiet period.
pub fn password_changed(
    screen: &mut SignupScreen,
    tasks: &Tasks,
    task_seq: &mut TaskSeq,
    timing: &TimingConfig,
) -> Vec<UiEffect> {
    screen.strength = StrengthPopup::Hidden;
    screen.length_error = false;

    let mut effects = Vec::new();
    let pending = tasks.state(TaskKind::StrengthEval);
    if pending.is_running() {
        effects.push(UiEffect::CancelTask {
            kind: TaskKind::StrengthEval,
            token: pending.cancel.clone(),
        });
    }
    effects.push(UiEffect::schedule(
        task_seq,
        TaskKind::StrengthEval,
        timing.strength_debounce(),
        UiEvent::StrengthEvalDue,
        true,
    ));
    effects
}

/// The quiet period elapsed; rate the password as it stands now.
pub fn strength_eval_due(state: &mut AppState) -> Vec<UiEffect> {
    let Screen::Signup(screen) = &mut state.screen else {
        return vec![];
    };

    let password = screen.password.text();
    let len = password.chars().count();

    if len >= validate::MAX_PASSWORD_LEN {
        screen.strength = StrengthPopup::Hidden;
        screen.length_error = true;
    } else if len > 0 {
        screen.length_error = false;
        if let Some(rating) = strength::classify(password) {
            screen.strength = StrengthPopup::Visible(rating);
        }
    } else {
        screen.strength = StrengthPopup::Hidden;
        screen.length_error = false;
    }
    vec![]
}

/// Runs the validation chain; the first failure surfaces its message
/// and focus target, a pass starts the simulated account creation.
fn submit(
    screen: &mut SignupScreen,
    task_seq: &mut TaskSeq,
    timing: &TimingConfig,
) -> Vec<UiEffect> {
    if screen.submit.is_loading() || screen.redirecting {
        return vec![];
    }

    let profile = screen.profile();
    match validate::validate_signup(&profile) {
        Err(error) => {
            screen.message = Some(error.message());
            if error == SignupError::PasswordTooLong {
                screen.strength = StrengthPopup::Hidden;
                screen.length_error = true;
                screen.password_shake = Some(Shake::start(Instant::now(), timing.shake()));
            }
            if let Some(field) = error.focus() {
                screen.focus = field.into();
            }
            vec![]
        }
        Ok(()) => {
            screen.message = None;
            screen.submit = SubmitState::Loading;
            vec![UiEffect::SubmitSignup {
                task: task_seq.next_id(),
                profile,
            }]
        }
    }
}

/// The simulated account creation settled; pulse, announce, and start
/// the redirect timer.
pub fn signup_settled(state: &mut AppState) -> Vec<UiEffect> {
    let AppState {
        screen,
        task_seq,
        timing,
        ..
    } = state;
    let Screen::Signup(screen) = screen else {
        return vec![];
    };

    screen.submit.settle(Instant::now(), timing.pulse());
    screen.message = Some(SUCCESS_MESSAGE);
    screen.redirecting = true;
    vec![UiEffect::schedule(
        task_seq,
        TaskKind::SignupRedirect,
        timing.redirect_delay(),
        UiEvent::NavigateToLogin,
        false,
    )]
}
