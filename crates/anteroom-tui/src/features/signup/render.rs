//! Signup screen view.

use std::time::Instant;

use anteroom_core::strength::Strength;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::render::{
    button_line, card_area, entrance_style, field_line, render_card, render_lines, shift_line,
};
use crate::state::AppState;

use super::state::{SignupFocus, SignupScreen, StrengthPopup};

/// Content height of the signup card (without borders).
const SIGNUP_LINES: u16 = 12;

/// Width of the strength fill bar, in cells.
const BAR_WIDTH: usize = 12;

pub fn render(state: &AppState, screen: &SignupScreen, frame: &mut Frame, area: Rect) {
    let now = Instant::now();
    let stage = screen.entrance.stage(now, state.timing.entrance());
    let Some(base) = entrance_style(stage) else {
        return;
    };

    let card = card_area(area, SIGNUP_LINES + 2);
    let inner = render_card(frame, card, "Create your account", base);

    let mask_hint = if screen.password_masked {
        " [hidden]"
    } else {
        " [shown]"
    };
    let mut password_line = field_line(
        "Password",
        &screen.password,
        screen.password_masked,
        screen.focus == SignupFocus::Password,
        screen.length_error,
        base,
    );
    password_line
        .spans
        .push(Span::styled(mask_hint, base.fg(Color::DarkGray)));
    if let Some(shake) = screen.password_shake {
        password_line = shift_line(password_line, 1 + shake.offset(now));
    }

    let message_line = screen.message.map_or_else(
        || Line::from(""),
        |message| {
            let style = if screen.redirecting {
                base.fg(Color::Green)
            } else {
                base.fg(Color::Red)
            };
            Line::from(Span::styled(message, style)).alignment(Alignment::Center)
        },
    );

    let lines = vec![
        Line::from(""),
        field_line(
            "First name",
            &screen.first_name,
            false,
            screen.focus == SignupFocus::FirstName,
            false,
            base,
        ),
        field_line(
            "Last name",
            &screen.last_name,
            false,
            screen.focus == SignupFocus::LastName,
            false,
            base,
        ),
        field_line(
            "Email",
            &screen.email,
            false,
            screen.focus == SignupFocus::Email,
            false,
            base,
        ),
        password_line,
        feedback_line(screen, base),
        Line::from(""),
        button_line(
            "Create Account",
            "Creating Account...",
            &screen.submit,
            screen.focus == SignupFocus::Submit,
            state.spinner_frame,
            base,
        ),
        Line::from(""),
        message_line,
        Line::from(""),
        Line::from(Span::styled(
            "Tab next · Ctrl+T show/hide · Esc quit",
            base.fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center),
    ];

    render_lines(frame, inner, lines);
}

/// The line under the password field: too-long error, strength bar,
/// or nothing.
fn feedback_line(screen: &SignupScreen, base: Style) -> Line<'static> {
    if screen.length_error {
        return Line::from(Span::styled(
            "           Password must be less than 8 characters",
            base.fg(Color::Red),
        ));
    }

    match screen.strength {
        StrengthPopup::Hidden => Line::from(""),
        StrengthPopup::Visible(strength) => {
            let color = match strength {
                Strength::Weak => Color::Red,
                Strength::Average => Color::Yellow,
                Strength::Strong => Color::Green,
            };
            let filled = BAR_WIDTH * usize::from(strength.level()) / 3;
            let bar: String = "█".repeat(filled) + &"░".repeat(BAR_WIDTH - filled);
            Line::from(vec![
                Span::raw("           "),
                Span::styled(format!("{:<8}", strength.label()), base.fg(color)),
                Span::styled(bar, base.fg(color)),
            ])
        }
    }
}
