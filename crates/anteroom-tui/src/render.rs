//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState` by immutable reference, draw to a
//! ratatui Frame, and never mutate state or return effects.

use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::common::FieldBuffer;
use crate::common::fx::{EntranceStage, SubmitState};
use crate::features::{login, signup};
use crate::state::{AppState, Screen};

/// Card width for both screens.
pub const CARD_WIDTH: u16 = 52;

/// Spinner frames for loading buttons.
pub const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Renders the entire TUI to the frame.
pub fn render(state: &AppState, frame: &mut Frame) {
    let area = frame.area();
    match &state.screen {
        Screen::Login(screen) => login::render::render(state, screen, frame, area),
        Screen::Signup(screen) => signup::render::render(state, screen, frame, area),
    }
}

/// Centers a card of the given height in the terminal area.
pub fn card_area(area: Rect, height: u16) -> Rect {
    let width = CARD_WIDTH.min(area.width);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height.min(area.height))
}

/// Draws the card container and returns the inner content area.
pub fn render_card(frame: &mut Frame, area: Rect, title: &str, base: Style) -> Rect {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(base.fg(Color::DarkGray))
        .title(Span::styled(format!(" {title} "), base.fg(Color::Cyan)));
    frame.render_widget(block, area);

    Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    )
}

/// Base style for the entrance reveal: hidden cards render nothing,
/// easing cards render dimmed.
pub fn entrance_style(stage: EntranceStage) -> Option<Style> {
    match stage {
        EntranceStage::Hidden => None,
        EntranceStage::Easing => Some(Style::default().add_modifier(Modifier::DIM)),
        EntranceStage::Settled => Some(Style::default()),
    }
}

/// Visible width budget for a field value inside the card.
const FIELD_VALUE_WIDTH: usize = 28;

/// Renders a labeled single-line field with an inline cursor.
pub fn field_line(
    label: &str,
    field: &FieldBuffer,
    masked: bool,
    focused: bool,
    error: bool,
    base: Style,
) -> Line<'static> {
    let label_style = if focused {
        base.fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        base.fg(Color::Gray)
    };
    let value_style = if error {
        base.fg(Color::Red)
    } else {
        base.fg(Color::White)
    };

    let mut spans = vec![Span::styled(format!("{label:<11}"), label_style)];

    let display = field.display(masked);
    let (visible, clipped) = clip_field(&display, FIELD_VALUE_WIDTH);
    if focused {
        // Cursor position inside the visible tail; the leading ellipsis
        // occupies one slot when the value is clipped.
        let cursor = field
            .cursor()
            .saturating_sub(clipped)
            .saturating_add(usize::from(clipped > 0));
        let before: String = visible.chars().take(cursor).collect();
        let at: String = visible
            .chars()
            .nth(cursor)
            .map_or_else(|| " ".to_string(), |c| c.to_string());
        let after: String = visible.chars().skip(cursor + 1).collect();

        spans.push(Span::styled(before, value_style));
        spans.push(Span::styled(at, value_style.add_modifier(Modifier::REVERSED)));
        spans.push(Span::styled(after, value_style));
    } else {
        spans.push(Span::styled(visible, value_style));
    }

    Line::from(spans)
}

/// Clips a field value to its width budget, keeping the tail (where the
/// cursor usually is). Returns the visible string and how many leading
/// chars were dropped.
fn clip_field(display: &str, max: usize) -> (String, usize) {
    if display.width() <= max {
        return (display.to_string(), 0);
    }

    let chars: Vec<char> = display.chars().collect();
    let mut start = 0;
    while start < chars.len() {
        let tail: String = chars[start..].iter().collect();
        if tail.width() + 1 <= max {
            return (format!("…{tail}"), start);
        }
        start += 1;
    }
    ("…".to_string(), chars.len())
}

/// Renders a button line reflecting its submit state.
pub fn button_line(
    label: &str,
    loading_label: &str,
    submit: &SubmitState,
    focused: bool,
    spinner_frame: usize,
    base: Style,
) -> Line<'static> {
    let line = match submit {
        SubmitState::Loading => {
            let spinner = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
            Line::from(Span::styled(
                format!("{spinner} {loading_label}"),
                base.fg(Color::Yellow).add_modifier(Modifier::DIM),
            ))
        }
        SubmitState::Success(pulse) if pulse.active(Instant::now()) => Line::from(Span::styled(
            format!("✓ {label}"),
            base.fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        _ => {
            let style = if focused {
                base.fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                base.fg(Color::Cyan)
            };
            Line::from(Span::styled(format!("[ {label} ]"), style))
        }
    };
    line.alignment(Alignment::Center)
}

/// Pads a line with leading spaces, used to apply a shake offset.
pub fn shift_line(line: Line<'static>, offset: i16) -> Line<'static> {
    if offset <= 0 {
        return line;
    }
    let mut spans = vec![Span::raw(" ".repeat(offset as usize))];
    spans.extend(line.spans);
    Line::from(spans)
}

/// Draws content lines inside the card's inner area.
pub fn render_lines(frame: &mut Frame, inner: Rect, lines: Vec<Line<'static>>) {
    let para = Paragraph::new(lines);
    frame.render_widget(para, inner);
}
