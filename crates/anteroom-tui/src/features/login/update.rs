//! Login screen reducer.
//!
//! Key handling for the credentials card and the timer-sequenced
//! transitions between the credentials and passcode views. The
//! passcode view's own keys live in the otp feature.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::common::TaskKind;
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::otp;
use crate::state::{AppState, Screen};

use super::state::{LoginFocus, LoginView};

pub fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let AppState {
        screen,
        task_seq,
        timing,
        ..
    } = state;
    let Screen::Login(screen) = screen else {
        return vec![];
    };

    // Input is inert while a card fade is in progress.
    if screen.in_transition() {
        return vec![];
    }

    match screen.view {
        LoginView::Otp => otp::update::handle_key(screen, task_seq, timing, key),
        LoginView::Credentials => {
            let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

            match key.code {
                KeyCode::Esc => vec![UiEffect::Quit],
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
                KeyCode::Char(' ') if screen.focus == LoginFocus::RememberMe => {
                    screen.remember_me = !screen.remember_me;
                    vec![]
                }
                KeyCode::Enter => match screen.focus {
                    LoginFocus::ForgotPassword => {
                        screen.view = LoginView::HidingCredentials;
                        vec![UiEffect::schedule(
                            task_seq,
                            TaskKind::ViewSwitch,
                            timing.view_fade(),
                            UiEvent::ShowOtpView,
                            false,
                        )]
                    }
                    LoginFocus::RememberMe => {
                        screen.remember_me = !screen.remember_me;
                        vec![]
                    }
                    _ => {
                        if screen.submit.is_loading() {
                            return vec![];
                        }
                        let credentials = screen.credentials();
                        screen.submit = crate::common::SubmitState::Loading;
                        vec![UiEffect::SubmitLogin {
                            task: task_seq.next_id(),
                            credentials,
                        }]
                    }
                },
                _ => {
                    match screen.focus {
                        LoginFocus::Email => {
                            screen.email.input(key);
                        }
                        LoginFocus::Password => {
                            screen.password.input(key);
                        }
                        _ => {}
                    }
                    vec![]
                }
            }
        }
        LoginView::HidingCredentials | LoginView::HidingOtp => vec![],
    }
}

/// The credentials card finished fading out; show the passcode view
/// and arm its delayed focus.
pub fn show_otp_view(state: &mut AppState) -> Vec<UiEffect> {
    let AppState {
        screen,
        task_seq,
        timing,
        ..
    } = state;
    let Screen::Login(screen) = screen else {
        return vec![];
    };
    if screen.view != LoginView::HidingCredentials {
        return vec![];
    }

    screen.view = LoginView::Otp;
    screen.otp.focus_armed = false;
    vec![UiEffect::schedule(
        task_seq,
        TaskKind::OtpFocus,
        timing.otp_focus_delay(),
        UiEvent::FocusOtpFirstCell,
        false,
    )]
}

/// The passcode card finished fading out; restore the credentials view.
/// The return trip clears all passcode cells; login fields are kept.
pub fn show_login_view(state: &mut AppState) -> Vec<UiEffect> {
    let Screen::Login(screen) = &mut state.screen else {
        return vec![];
    };
    if screen.view != LoginView::HidingOtp {
        return vec![];
    }

    screen.view = LoginView::Credentials;
    screen.otp.reset();
    vec![]
}

/// The post-transition focus delay elapsed.
pub fn focus_first_cell(state: &mut AppState) -> Vec<UiEffect> {
    let Screen::Login(screen) = &mut state.screen else {
        return vec![];
    };
    if screen.view != LoginView::Otp {
        return vec![];
    }

    screen.otp.focus_armed = true;
    screen.otp.cells.focus(0);
    vec![]
}

/// The simulated login exchange settled.
pub fn login_settled(state: &mut AppState) -> Vec<UiEffect> {
    let Screen::Login(screen) = &mut state.screen else {
        return vec![];
    };

    screen
        .submit
        .settle(Instant::now(), state.timing.pulse());
    vec![]
}
