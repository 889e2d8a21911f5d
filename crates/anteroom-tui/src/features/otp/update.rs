//! Passcode view reducer.

use std::time::Instant;

use anteroom_core::config::TimingConfig;
use anteroom_core::otp::CellEvent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::common::fx::{Pulse, Shake, SubmitState};
use crate::common::{TaskKind, TaskSeq};
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::login::state::{LoginScreen, LoginView};
use crate::state::{AppState, Screen};

use super::state::ResendState;

pub fn handle_key(
    screen: &mut LoginScreen,
    task_seq: &mut TaskSeq,
    timing: &TimingConfig,
    key: KeyEvent,
) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        // Back to the credentials card.
        KeyCode::Esc => {
            screen.view = LoginView::HidingOtp;
            vec![UiEffect::schedule(
                task_seq,
                TaskKind::ViewSwitch,
                timing.view_fade(),
                UiEvent::ShowLoginView,
                false,
            )]
        }
        KeyCode::Char('r') if ctrl => {
            if screen.otp.resend == ResendState::Sending {
                return vec![];
            }
            screen.otp.resend = ResendState::Sending;
            vec![UiEffect::ResendCode {
                task: task_seq.next_id(),
            }]
        }
        KeyCode::Char('v') if ctrl => vec![UiEffect::ReadClipboard],
        KeyCode::Left => {
            if screen.otp.focus_armed {
                screen.otp.cells.focus_prev();
            }
            vec![]
        }
        KeyCode::Right => {
            if screen.otp.focus_armed {
                screen.otp.cells.focus_next();
            }
            vec![]
        }
        KeyCode::Backspace => {
            if screen.otp.focus_armed {
                screen.otp.cells.backspace();
            }
            vec![]
        }
        KeyCode::Enter => {
            if !screen.otp.focus_armed {
                return vec![];
            }
            // Enter in a non-last cell with a value moves on instead of
            // submitting.
            if screen.otp.cells.enter() == CellEvent::Moved {
                return vec![];
            }
            submit_code(screen, task_seq, timing)
        }
        KeyCode::Char(ch) if !ctrl => {
            if !screen.otp.focus_armed {
                return vec![];
            }
            if let CellEvent::Filled(index) = screen.otp.cells.input(ch) {
                screen.otp.cell_pulse[index] = Some(Pulse::start(Instant::now(), timing.pulse()));
            }
            vec![]
        }
        _ => vec![],
    }
}

/// Reads all six cells; an incomplete code shakes and goes no further.
fn submit_code(
    screen: &mut LoginScreen,
    task_seq: &mut TaskSeq,
    timing: &TimingConfig,
) -> Vec<UiEffect> {
    if screen.otp.verify.is_loading() {
        return vec![];
    }

    let Some(code) = screen.otp.cells.code() else {
        screen.otp.shake = Some(Shake::start(Instant::now(), timing.shake()));
        return vec![];
    };

    screen.otp.verify = SubmitState::Loading;
    vec![UiEffect::VerifyOtp {
        task: task_seq.next_id(),
        code,
    }]
}

/// Bracketed paste (or a clipboard read) on the passcode view.
pub fn handle_paste(screen: &mut LoginScreen, timing: &TimingConfig, text: &str) {
    if !screen.otp.focus_armed {
        return;
    }
    if screen.otp.cells.paste(text) == CellEvent::FilledAll {
        let now = Instant::now();
        for slot in &mut screen.otp.cell_pulse {
            *slot = Some(Pulse::start(now, timing.pulse()));
        }
    }
}

/// The simulated verification settled.
pub fn otp_settled(state: &mut AppState) -> Vec<UiEffect> {
    let Screen::Login(screen) = &mut state.screen else {
        return vec![];
    };

    screen
        .otp
        .verify
        .settle(Instant::now(), state.timing.pulse());
    vec![]
}

/// The simulated resend settled; show the "Sent!" label for a while.
pub fn code_resent(state: &mut AppState) -> Vec<UiEffect> {
    let AppState {
        screen,
        task_seq,
        timing,
        ..
    } = state;
    let Screen::Login(screen) = screen else {
        return vec![];
    };

    screen.otp.resend = ResendState::Sent;
    vec![UiEffect::schedule(
        task_seq,
        TaskKind::ResendLabel,
        timing.resend_label(),
        UiEvent::ResendLabelExpired,
        false,
    )]
}

/// The "Sent!" label window elapsed.
pub fn resend_label_expired(state: &mut AppState) -> Vec<UiEffect> {
    let Screen::Login(screen) = &mut state.screen else {
        return vec![];
    };

    if screen.otp.resend == ResendState::Sent {
        screen.otp.resend = ResendState::Idle;
    }
    vec![]
}
