//! UI event types.
//!
//! All external inputs (terminal, timers, simulated submissions) are
//! converted to `UiEvent` before being processed by the reducer.
//!
//! ## Inbox Pattern
//!
//! Async work sends events directly to the runtime's event inbox; the
//! runtime drains the inbox each frame.
//!
//! ## Task Lifecycle Events
//!
//! Timed work uses a uniform lifecycle:
//! - The runtime emits `UiEvent::TaskStarted` once a task is actually spawned
//! - The runtime emits `UiEvent::TaskCompleted` with the result event when done
//! - The reducer is the only place that mutates `TaskState`
//!
//! Stale completions (a replaced debounce timer, for example) are
//! dropped by the reducer's `finish_if_active` check before the inner
//! event is dispatched.

use crossterm::event::Event as CrosstermEvent;

use crate::common::{TaskCompleted, TaskKind, TaskStarted};

/// The unified event enum for the TUI.
#[derive(Debug)]
pub enum UiEvent {
    /// Frame tick; drives animation expiry and render pacing.
    Tick,
    /// Raw terminal input (keys, bracketed paste, resize).
    Terminal(CrosstermEvent),

    /// A timed task was spawned.
    TaskStarted { kind: TaskKind, started: TaskStarted },
    /// A timed task finished; carries the event it resolved to.
    TaskCompleted { kind: TaskKind, completed: TaskCompleted },
    /// A timed task was cancelled before its deadline.
    TimerCancelled,

    // View sequencing (delivered through TaskCompleted)
    /// The credentials card finished fading; show the passcode view.
    ShowOtpView,
    /// The passcode card finished fading; show the credentials view.
    ShowLoginView,
    /// The post-transition focus delay elapsed.
    FocusOtpFirstCell,

    // Debounce / label timers
    /// The password quiet period elapsed; evaluate strength now.
    StrengthEvalDue,
    /// The "Sent!" resend label window elapsed.
    ResendLabelExpired,
    /// The post-signup redirect delay elapsed.
    NavigateToLogin,

    // Simulated submission completions
    /// The login exchange settled.
    LoginSettled,
    /// The passcode verification settled.
    OtpSettled,
    /// The passcode resend settled.
    CodeResent,
    /// The account creation settled.
    SignupSettled,

    /// Clipboard contents read for a Ctrl+V paste.
    ClipboardPasted(String),
}
