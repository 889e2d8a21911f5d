//! Login screen view.

use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::features::otp;
use crate::render::{button_line, card_area, entrance_style, field_line, render_card, render_lines};
use crate::state::AppState;

use super::state::{LoginFocus, LoginScreen, LoginView};

/// Content height of the credentials card (without borders).
const CREDENTIALS_LINES: u16 = 12;

pub fn render(state: &AppState, screen: &LoginScreen, frame: &mut Frame, area: Rect) {
    let now = Instant::now();
    let stage = screen.entrance.stage(now, state.timing.entrance());
    let Some(base) = entrance_style(stage) else {
        return;
    };

    match screen.view {
        // Mid-fade the card is hidden entirely.
        LoginView::HidingCredentials | LoginView::HidingOtp => {}
        LoginView::Credentials => render_credentials(state, screen, frame, area, base),
        LoginView::Otp => otp::render::render(state, screen, frame, area, base),
    }
}

fn render_credentials(
    state: &AppState,
    screen: &LoginScreen,
    frame: &mut Frame,
    area: Rect,
    base: Style,
) {
    let card = card_area(area, CREDENTIALS_LINES + 2);
    let inner = render_card(frame, card, "Sign in", base);

    let mask_hint = if screen.password_masked {
        " [hidden]"
    } else {
        " [shown]"
    };
    let mut password_line = field_line(
        "Password",
        &screen.password,
        screen.password_masked,
        screen.focus == LoginFocus::Password,
        false,
        base,
    );
    password_line
        .spans
        .push(Span::styled(mask_hint, base.fg(Color::DarkGray)));

    let remember_style = if screen.focus == LoginFocus::RememberMe {
        base.fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        base.fg(Color::Gray)
    };
    let remember_mark = if screen.remember_me { "x" } else { " " };

    let forgot_style = if screen.focus == LoginFocus::ForgotPassword {
        base.fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        base.fg(Color::Cyan)
    };

    let lines = vec![
        Line::from(""),
        field_line(
            "Email",
            &screen.email,
            false,
            screen.focus == LoginFocus::Email,
            false,
            base,
        ),
        Line::from(""),
        password_line,
        Line::from(""),
        Line::from(Span::styled(
            format!("[{remember_mark}] Remember me"),
            remember_style,
        )),
        Line::from(""),
        button_line(
            "Sign In",
            "Signing in...",
            &screen.submit,
            screen.focus == LoginFocus::Submit,
            state.spinner_frame,
            base,
        ),
        Line::from(""),
        Line::from(Span::styled("Forgot password?", forgot_style)).alignment(Alignment::Center),
        Line::from(""),
        Line::from(Span::styled(
            "Tab next · Ctrl+T show/hide · Esc quit",
            base.fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center),
    ];

    render_lines(frame, inner, lines);
}
