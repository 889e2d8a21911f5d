//! Passcode view rendering.

use std::time::Instant;

use anteroom_core::otp::OTP_LEN;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::features::login::state::LoginScreen;
use crate::render::{button_line, card_area, render_card, render_lines};
use crate::state::AppState;

use super::state::ResendState;

/// Content height of the passcode card (without borders).
const OTP_LINES: u16 = 10;

pub fn render(state: &AppState, screen: &LoginScreen, frame: &mut Frame, area: Rect, base: Style) {
    let now = Instant::now();
    let card = card_area(area, OTP_LINES + 2);
    let inner = render_card(frame, card, "Verify your identity", base);

    let resend_line = match screen.otp.resend {
        ResendState::Idle => Line::from(Span::styled(
            "Didn't get it? Resend code (Ctrl+R)",
            base.fg(Color::Cyan),
        )),
        ResendState::Sending => Line::from(Span::styled(
            "Sending...",
            base.fg(Color::Cyan).add_modifier(Modifier::DIM),
        )),
        ResendState::Sent => Line::from(Span::styled(
            "Sent!",
            base.fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Enter the 6-digit code we sent you.",
            base.fg(Color::Gray),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        cells_row(screen, inner.width, now, base),
        Line::from(""),
        button_line(
            "Verify",
            "Verifying...",
            &screen.otp.verify,
            true,
            state.spinner_frame,
            base,
        ),
        Line::from(""),
        resend_line.alignment(Alignment::Center),
        Line::from(""),
        Line::from(Span::styled(
            "Enter verify · Esc back",
            base.fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center),
    ];

    render_lines(frame, inner, lines);
}

/// The six cells as one row, centered by hand so the shake offset can
/// shift it without re-centering.
fn cells_row(screen: &LoginScreen, width: u16, now: Instant, base: Style) -> Line<'static> {
    let row_width = (OTP_LEN * 4 - 1) as u16;
    let mut pad = i32::from(width.saturating_sub(row_width) / 2);
    if let Some(shake) = screen.otp.shake {
        pad += i32::from(shake.offset(now));
    }

    let mut spans = vec![Span::raw(" ".repeat(pad.max(0) as usize))];
    for index in 0..OTP_LEN {
        let digit = screen.otp.cells.cell(index).unwrap_or(' ');
        let focused = screen.otp.focus_armed && screen.otp.cells.focused() == index;
        let pulsing = screen.otp.cell_pulse[index].is_some_and(|p| p.active(now));

        let style = if pulsing {
            base.fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else if focused {
            base.fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if screen.otp.focus_armed {
            base.fg(Color::White)
        } else {
            base.fg(Color::DarkGray)
        };

        spans.push(Span::styled(format!("[{digit}]"), style));
        if index < OTP_LEN - 1 {
            spans.push(Span::raw(" "));
        }
    }

    Line::from(spans)
}
