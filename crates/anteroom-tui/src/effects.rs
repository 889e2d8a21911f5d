//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime
//! executes. They represent timer spawning, logging, and clipboard I/O
//! only — never direct UI mutations.
//!
//! This keeps the reducer pure: it only mutates state and returns
//! effects.
//!
//! ## Cancellation Effects
//!
//! Cancellation is initiated from the reducer via `UiEffect::CancelTask`.
//! The runtime executes these by calling `token.cancel()` on the provided
//! token. The reducer decides when to cancel, the runtime executes.

use std::time::Duration;

use anteroom_core::validate::{Credentials, SignupProfile};
use tokio_util::sync::CancellationToken;

use crate::common::{TaskId, TaskKind, TaskSeq};
use crate::events::UiEvent;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Dispatch `event` after `delay` via the task lifecycle.
    ///
    /// Cancelable schedules resolve to `TimerCancelled` when their
    /// token fires first; either way a `TaskCompleted` clears the
    /// task slot.
    ScheduleEvent {
        task: TaskId,
        kind: TaskKind,
        delay: Duration,
        event: UiEvent,
        cancelable: bool,
    },

    /// Cancel an in-progress task.
    CancelTask {
        kind: TaskKind,
        token: Option<CancellationToken>,
    },

    /// Run the simulated login exchange.
    SubmitLogin {
        task: TaskId,
        credentials: Credentials,
    },

    /// Run the simulated passcode verification.
    VerifyOtp { task: TaskId, code: String },

    /// Run the simulated passcode resend.
    ResendCode { task: TaskId },

    /// Run the simulated account creation.
    SubmitSignup { task: TaskId, profile: SignupProfile },

    /// Read the system clipboard (Ctrl+V paste fallback).
    ReadClipboard,
}

impl UiEffect {
    /// Builds a `ScheduleEvent` with a fresh task id.
    pub fn schedule(
        task_seq: &mut TaskSeq,
        kind: TaskKind,
        delay: Duration,
        event: UiEvent,
        cancelable: bool,
    ) -> Self {
        UiEffect::ScheduleEvent {
            task: task_seq.next_id(),
            kind,
            delay,
            event,
            cancelable,
        }
    }
}
