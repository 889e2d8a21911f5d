//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls
//! `update(state, event)` and executes the returned effects.
//!
//! This is the single source of truth for how events modify state.

use std::time::Instant;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::login::state::{LoginFocus, LoginScreen, LoginView};
use crate::features::signup::state::SignupFocus;
use crate::features::{login, otp, signup};
use crate::state::{AppState, Screen};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns
/// effects for the runtime to execute.
pub fn update(state: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            state.spinner_frame = state.spinner_frame.wrapping_add(1);
            state.expire_fx(Instant::now());
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(state, term_event),

        UiEvent::TaskStarted { kind, started } => {
            state.tasks.state_mut(kind).on_started(&started);
            vec![]
        }
        UiEvent::TaskCompleted { kind, completed } => {
            let ok = state.tasks.state_mut(kind).finish_if_active(completed.id);
            if !ok {
                vec![]
            } else {
                update(state, *completed.result)
            }
        }
        UiEvent::TimerCancelled => vec![],

        UiEvent::ShowOtpView => login::update::show_otp_view(state),
        UiEvent::ShowLoginView => login::update::show_login_view(state),
        UiEvent::FocusOtpFirstCell => login::update::focus_first_cell(state),

        UiEvent::StrengthEvalDue => signup::update::strength_eval_due(state),
        UiEvent::ResendLabelExpired => otp::update::resend_label_expired(state),
        UiEvent::NavigateToLogin => {
            state.screen = Screen::Login(LoginScreen::new(Instant::now()));
            vec![]
        }

        UiEvent::LoginSettled => login::update::login_settled(state),
        UiEvent::OtpSettled => otp::update::otp_settled(state),
        UiEvent::CodeResent => otp::update::code_resent(state),
        UiEvent::SignupSettled => signup::update::signup_settled(state),

        UiEvent::ClipboardPasted(text) => route_paste(state, &text),
    }
}

// ============================================================================
// Terminal Event Handlers
// ============================================================================

fn handle_terminal_event(state: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) => handle_key(state, key),
        Event::Paste(text) => route_paste(state, &text),
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if matches!(key.kind, KeyEventKind::Release) {
        return vec![];
    }

    // Ctrl+C quits from anywhere, regardless of screen or view.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return vec![UiEffect::Quit];
    }

    if matches!(state.screen, Screen::Login(_)) {
        login::update::handle_key(state, key)
    } else {
        signup::update::handle_key(state, key)
    }
}

/// Routes pasted text (bracketed paste or a clipboard read) to the
/// focused control.
fn route_paste(state: &mut AppState, text: &str) -> Vec<UiEffect> {
    let AppState {
        screen,
        tasks,
        task_seq,
        timing,
        ..
    } = state;

    match screen {
        Screen::Login(screen) => {
            match screen.view {
                LoginView::Otp => otp::update::handle_paste(screen, timing, text),
                LoginView::Credentials => match screen.focus {
                    LoginFocus::Email => screen.email.insert_str(text),
                    LoginFocus::Password => screen.password.insert_str(text),
                    _ => {}
                },
                LoginView::HidingCredentials | LoginView::HidingOtp => {}
            }
            vec![]
        }
        Screen::Signup(screen) => {
            if screen.redirecting {
                return vec![];
            }
            match screen.focus {
                SignupFocus::FirstName => screen.first_name.insert_str(text),
                SignupFocus::LastName => screen.last_name.insert_str(text),
                SignupFocus::Email => screen.email.insert_str(text),
                SignupFocus::Password => {
                    screen.password.insert_str(text);
                    return signup::update::password_changed(screen, tasks, task_seq, timing);
                }
                SignupFocus::Submit => {}
            }
            vec![]
        }
    }
}

#[cfg(test)]
mod tests {
    use anteroom_core::config::Config;
    use anteroom_core::otp::OTP_LEN;

    use super::*;
    use crate::common::fx::SubmitState;
    use crate::common::{TaskKind, TaskStarted};
    use crate::features::otp::ResendState;
    use crate::features::signup::state::StrengthPopup;
    use crate::state::StartPage;

    fn login_app() -> AppState {
        AppState::new(&Config::default(), StartPage::Login)
    }

    fn signup_app() -> AppState {
        AppState::new(&Config::default(), StartPage::Signup)
    }

    fn key(code: KeyCode) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn ctrl_key(ch: char) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(
            KeyCode::Char(ch),
            KeyModifiers::CONTROL,
        )))
    }

    fn type_str(state: &mut AppState, text: &str) {
        for ch in text.chars() {
            update(state, key(KeyCode::Char(ch)));
        }
    }

    /// Drives the login screen through forgot-password onto the armed
    /// passcode view, acknowledging each sequencing timer by hand.
    fn open_otp_view(state: &mut AppState) {
        let Screen::Login(screen) = &mut state.screen else {
            panic!("expected login screen");
        };
        screen.focus = LoginFocus::ForgotPassword;

        let effects = update(state, key(KeyCode::Enter));
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::ScheduleEvent {
                kind: TaskKind::ViewSwitch,
                ..
            }]
        ));

        let effects = update(state, UiEvent::ShowOtpView);
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::ScheduleEvent {
                kind: TaskKind::OtpFocus,
                ..
            }]
        ));

        update(state, UiEvent::FocusOtpFirstCell);
    }

    fn login_screen(state: &AppState) -> &LoginScreen {
        match &state.screen {
            Screen::Login(screen) => screen,
            Screen::Signup(_) => panic!("expected login screen"),
        }
    }

    #[test]
    fn forgot_password_sequences_view_then_focus() {
        let mut state = login_app();
        open_otp_view(&mut state);

        let screen = login_screen(&state);
        assert_eq!(screen.view, LoginView::Otp);
        assert!(screen.otp.focus_armed);
        assert_eq!(screen.otp.cells.focused(), 0);
    }

    #[test]
    fn otp_view_is_shown_before_focus_arrives() {
        let mut state = login_app();
        let Screen::Login(screen) = &mut state.screen else {
            unreachable!()
        };
        screen.focus = LoginFocus::ForgotPassword;

        update(&mut state, key(KeyCode::Enter));
        assert_eq!(login_screen(&state).view, LoginView::HidingCredentials);

        update(&mut state, UiEvent::ShowOtpView);
        let screen = login_screen(&state);
        assert_eq!(screen.view, LoginView::Otp);
        assert!(!screen.otp.focus_armed);

        // Typing before the focus delay has elapsed is inert.
        update(&mut state, key(KeyCode::Char('1')));
        assert_eq!(login_screen(&state).otp.cells.cell(0), None);
    }

    #[test]
    fn back_from_otp_clears_cells_but_keeps_login_fields() {
        let mut state = login_app();
        type_str(&mut state, "ada@example.com");
        open_otp_view(&mut state);
        type_str(&mut state, "123");

        update(&mut state, key(KeyCode::Esc));
        assert_eq!(login_screen(&state).view, LoginView::HidingOtp);

        update(&mut state, UiEvent::ShowLoginView);
        let screen = login_screen(&state);
        assert_eq!(screen.view, LoginView::Credentials);
        assert_eq!(screen.email.text(), "ada@example.com");
        assert!((0..OTP_LEN).all(|i| screen.otp.cells.cell(i).is_none()));
    }

    #[test]
    fn otp_digits_advance_and_enter_moves_instead_of_submitting() {
        let mut state = login_app();
        open_otp_view(&mut state);
        type_str(&mut state, "12");

        let Screen::Login(screen) = &mut state.screen else {
            unreachable!()
        };
        screen.otp.cells.focus(1);

        let effects = update(&mut state, key(KeyCode::Enter));
        assert!(effects.is_empty());
        let screen = login_screen(&state);
        assert_eq!(screen.otp.cells.focused(), 2);
        assert!(!screen.otp.verify.is_loading());
    }

    #[test]
    fn otp_submit_with_empty_cell_shakes_and_spawns_nothing() {
        let mut state = login_app();
        open_otp_view(&mut state);
        type_str(&mut state, "12345");

        let effects = update(&mut state, key(KeyCode::Enter));
        assert!(effects.is_empty());
        let screen = login_screen(&state);
        assert!(screen.otp.shake.is_some());
        assert!(!screen.otp.verify.is_loading());
    }

    #[test]
    fn otp_submit_with_full_code_spawns_verify_once() {
        let mut state = login_app();
        open_otp_view(&mut state);
        type_str(&mut state, "123456");

        let effects = update(&mut state, key(KeyCode::Enter));
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::VerifyOtp { code, .. }] if code == "123456"
        ));
        assert!(login_screen(&state).otp.verify.is_loading());

        // Re-entry is blocked while the verification runs.
        let effects = update(&mut state, key(KeyCode::Enter));
        assert!(effects.is_empty());

        update(&mut state, UiEvent::OtpSettled);
        assert!(matches!(
            login_screen(&state).otp.verify,
            SubmitState::Success(_)
        ));
    }

    #[test]
    fn otp_paste_fills_cells_and_focuses_last() {
        let mut state = login_app();
        open_otp_view(&mut state);

        update(
            &mut state,
            UiEvent::Terminal(Event::Paste("123456".to_string())),
        );
        let screen = login_screen(&state);
        assert_eq!(screen.otp.cells.code().as_deref(), Some("123456"));
        assert_eq!(screen.otp.cells.focused(), 5);
    }

    #[test]
    fn otp_paste_rejects_bad_payloads() {
        let mut state = login_app();
        open_otp_view(&mut state);
        type_str(&mut state, "9");

        update(
            &mut state,
            UiEvent::Terminal(Event::Paste("12345".to_string())),
        );
        update(
            &mut state,
            UiEvent::Terminal(Event::Paste("12a456".to_string())),
        );
        let screen = login_screen(&state);
        assert_eq!(screen.otp.cells.cell(0), Some('9'));
        assert_eq!(screen.otp.cells.cell(1), None);
    }

    #[test]
    fn resend_runs_once_then_shows_sent_label() {
        let mut state = login_app();
        open_otp_view(&mut state);

        let effects = update(&mut state, ctrl_key('r'));
        assert!(matches!(effects.as_slice(), [UiEffect::ResendCode { .. }]));
        assert_eq!(login_screen(&state).otp.resend, ResendState::Sending);

        // A second Ctrl+R while sending is ignored.
        assert!(update(&mut state, ctrl_key('r')).is_empty());

        let effects = update(&mut state, UiEvent::CodeResent);
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::ScheduleEvent {
                kind: TaskKind::ResendLabel,
                ..
            }]
        ));
        assert_eq!(login_screen(&state).otp.resend, ResendState::Sent);

        update(&mut state, UiEvent::ResendLabelExpired);
        assert_eq!(login_screen(&state).otp.resend, ResendState::Idle);
    }

    #[test]
    fn password_toggle_twice_restores_masked_state() {
        let mut state = login_app();
        assert!(login_screen(&state).password_masked);

        update(&mut state, ctrl_key('t'));
        assert!(!login_screen(&state).password_masked);
        update(&mut state, ctrl_key('t'));
        assert!(login_screen(&state).password_masked);
    }

    #[test]
    fn login_submit_reads_credentials_and_blocks_reentry() {
        let mut state = login_app();
        type_str(&mut state, "ada@example.com");
        update(&mut state, key(KeyCode::Tab));
        type_str(&mut state, "hunter2");
        let Screen::Login(screen) = &mut state.screen else {
            unreachable!()
        };
        screen.remember_me = true;

        let effects = update(&mut state, key(KeyCode::Enter));
        match effects.as_slice() {
            [UiEffect::SubmitLogin { credentials, .. }] => {
                assert_eq!(credentials.email, "ada@example.com");
                assert_eq!(credentials.password, "hunter2");
                assert!(credentials.remember_me);
            }
            other => panic!("unexpected effects: {other:?}"),
        }
        assert!(login_screen(&state).submit.is_loading());
        assert!(update(&mut state, key(KeyCode::Enter)).is_empty());

        update(&mut state, UiEvent::LoginSettled);
        assert!(matches!(
            login_screen(&state).submit,
            SubmitState::Success(_)
        ));
    }

    #[test]
    fn signup_long_password_rejected_before_other_checks() {
        let mut state = signup_app();
        // Every other field is blank and the email is absent; the
        // length rule still fires first.
        let Screen::Signup(screen) = &mut state.screen else {
            unreachable!()
        };
        screen.focus = SignupFocus::Password;
        type_str(&mut state, "abcdefgh");

        let effects = update(&mut state, key(KeyCode::Enter));
        // The debounce schedule from typing aside, no submission spawns.
        assert!(
            !effects
                .iter()
                .any(|e| matches!(e, UiEffect::SubmitSignup { .. }))
        );
        let Screen::Signup(screen) = &state.screen else {
            unreachable!()
        };
        assert!(screen.length_error);
        assert!(screen.password_shake.is_some());
        assert_eq!(
            screen.message,
            Some("Password must be less than 8 characters")
        );
        assert_eq!(screen.focus, SignupFocus::Password);
    }

    #[test]
    fn signup_blank_fields_then_bad_email_then_success() {
        let mut state = signup_app();

        let effects = update(&mut state, key(KeyCode::Enter));
        assert!(effects.is_empty());
        let Screen::Signup(screen) = &state.screen else {
            unreachable!()
        };
        assert_eq!(screen.message, Some("Please fill in all fields"));

        type_str(&mut state, "Ada");
        update(&mut state, key(KeyCode::Tab));
        type_str(&mut state, "Lovelace");
        update(&mut state, key(KeyCode::Tab));
        type_str(&mut state, "ada@example");
        update(&mut state, key(KeyCode::Tab));
        type_str(&mut state, "abc123!");

        let effects = update(&mut state, key(KeyCode::Enter));
        assert!(effects.is_empty());
        let Screen::Signup(screen) = &state.screen else {
            unreachable!()
        };
        assert_eq!(screen.message, Some("Please enter a valid email address"));
        assert_eq!(screen.focus, SignupFocus::Email);

        type_str(&mut state, ".com");
        let effects = update(&mut state, key(KeyCode::Enter));
        match effects.as_slice() {
            [UiEffect::SubmitSignup { profile, .. }] => {
                assert_eq!(profile.email, "ada@example.com");
                assert_eq!(profile.password, "abc123!");
            }
            other => panic!("unexpected effects: {other:?}"),
        }
    }

    #[test]
    fn signup_settles_into_redirect_then_login_screen() {
        let mut state = signup_app();

        let effects = update(&mut state, UiEvent::SignupSettled);
        assert!(matches!(
            effects.as_slice(),
            [UiEffect::ScheduleEvent {
                kind: TaskKind::SignupRedirect,
                ..
            }]
        ));
        let Screen::Signup(screen) = &state.screen else {
            unreachable!()
        };
        assert!(screen.redirecting);
        assert!(screen.message.is_some());

        // Edits are frozen during the redirect window.
        assert!(update(&mut state, key(KeyCode::Char('x'))).is_empty());

        update(&mut state, UiEvent::NavigateToLogin);
        assert!(matches!(state.screen, Screen::Login(_)));
    }

    #[test]
    fn password_keystroke_replaces_pending_strength_eval() {
        let mut state = signup_app();
        let Screen::Signup(screen) = &mut state.screen else {
            unreachable!()
        };
        screen.focus = SignupFocus::Password;

        let effects = update(&mut state, key(KeyCode::Char('a')));
        let first_task = match effects.as_slice() {
            [UiEffect::ScheduleEvent {
                task,
                kind: TaskKind::StrengthEval,
                cancelable: true,
                ..
            }] => *task,
            other => panic!("unexpected effects: {other:?}"),
        };
        update(
            &mut state,
            UiEvent::TaskStarted {
                kind: TaskKind::StrengthEval,
                started: TaskStarted {
                    id: first_task,
                    cancel: None,
                },
            },
        );

        // The next keystroke cancels the pending task and schedules a
        // replacement.
        let effects = update(&mut state, key(KeyCode::Char('b')));
        let second_task = match effects.as_slice() {
            [
                UiEffect::CancelTask {
                    kind: TaskKind::StrengthEval,
                    ..
                },
                UiEffect::ScheduleEvent {
                    task,
                    kind: TaskKind::StrengthEval,
                    ..
                },
            ] => *task,
            other => panic!("unexpected effects: {other:?}"),
        };
        update(
            &mut state,
            UiEvent::TaskStarted {
                kind: TaskKind::StrengthEval,
                started: TaskStarted {
                    id: second_task,
                    cancel: None,
                },
            },
        );

        // The stale completion is dropped: no popup appears.
        update(
            &mut state,
            UiEvent::TaskCompleted {
                kind: TaskKind::StrengthEval,
                completed: crate::common::TaskCompleted {
                    id: first_task,
                    result: Box::new(UiEvent::StrengthEvalDue),
                },
            },
        );
        let Screen::Signup(screen) = &state.screen else {
            unreachable!()
        };
        assert_eq!(screen.strength, StrengthPopup::Hidden);

        // The live one lands.
        update(
            &mut state,
            UiEvent::TaskCompleted {
                kind: TaskKind::StrengthEval,
                completed: crate::common::TaskCompleted {
                    id: second_task,
                    result: Box::new(UiEvent::StrengthEvalDue),
                },
            },
        );
        let Screen::Signup(screen) = &state.screen else {
            unreachable!()
        };
        assert!(matches!(screen.strength, StrengthPopup::Visible(_)));
    }

    #[test]
    fn strength_eval_maps_length_bands_to_popups() {
        let mut state = signup_app();
        let Screen::Signup(screen) = &mut state.screen else {
            unreachable!()
        };
        screen.focus = SignupFocus::Password;

        type_str(&mut state, "abcdefgh");
        update(&mut state, UiEvent::StrengthEvalDue);
        let Screen::Signup(screen) = &state.screen else {
            unreachable!()
        };
        assert!(screen.length_error);
        assert_eq!(screen.strength, StrengthPopup::Hidden);

        // Trim back under the cap: the error clears and a rating shows.
        update(&mut state, key(KeyCode::Backspace));
        let Screen::Signup(screen) = &state.screen else {
            unreachable!()
        };
        assert!(!screen.length_error);
        update(&mut state, UiEvent::StrengthEvalDue);
        let Screen::Signup(screen) = &state.screen else {
            unreachable!()
        };
        assert!(matches!(screen.strength, StrengthPopup::Visible(_)));
    }

    #[test]
    fn ctrl_c_quits_from_any_view() {
        let mut state = login_app();
        assert!(matches!(
            update(&mut state, ctrl_key('c')).as_slice(),
            [UiEffect::Quit]
        ));

        open_otp_view(&mut state);
        assert!(matches!(
            update(&mut state, ctrl_key('c')).as_slice(),
            [UiEffect::Quit]
        ));
    }

    #[test]
    fn keys_are_inert_during_card_fade() {
        let mut state = login_app();
        let Screen::Login(screen) = &mut state.screen else {
            unreachable!()
        };
        screen.focus = LoginFocus::ForgotPassword;
        update(&mut state, key(KeyCode::Enter));

        // Mid-fade: typing and Enter do nothing.
        assert!(update(&mut state, key(KeyCode::Char('x'))).is_empty());
        assert!(update(&mut state, key(KeyCode::Enter)).is_empty());
        assert_eq!(login_screen(&state).email.text(), "");
    }
}
