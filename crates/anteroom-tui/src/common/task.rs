use tokio_util::sync::CancellationToken;

use crate::events::UiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(pub u64);

#[derive(Debug, Default)]
pub struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    /// Debounced password-strength evaluation (cancelable, replaced on
    /// every keystroke).
    StrengthEval,
    /// Card fade between the credentials and passcode views.
    ViewSwitch,
    /// Delayed focus of the first passcode cell.
    OtpFocus,
    /// Simulated login exchange.
    LoginSubmit,
    /// Simulated passcode verification.
    OtpVerify,
    /// Simulated passcode resend.
    Resend,
    /// Reverting the "Sent!" resend label.
    ResendLabel,
    /// Simulated account creation.
    SignupSubmit,
    /// Delay before switching to the login screen after signup.
    SignupRedirect,
}

#[derive(Debug, Clone)]
pub struct TaskStarted {
    pub id: TaskId,
    pub cancel: Option<CancellationToken>,
}

#[derive(Debug)]
pub struct TaskCompleted {
    pub id: TaskId,
    pub result: Box<UiEvent>,
}

/// Task lifecycle state (stored in AppState, mutated only by the reducer).
#[derive(Debug, Default, Clone)]
pub struct TaskState {
    pub active: Option<TaskId>,
    pub cancel: Option<CancellationToken>,
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn on_started(&mut self, started: &TaskStarted) {
        self.active = Some(started.id);
        self.cancel = started.cancel.clone();
    }

    pub fn finish_if_active(&mut self, id: TaskId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.active = None;
            self.cancel = None;
        }
        ok
    }
}

#[derive(Debug, Default, Clone)]
pub struct Tasks {
    pub strength_eval: TaskState,
    pub view_switch: TaskState,
    pub otp_focus: TaskState,
    pub login_submit: TaskState,
    pub otp_verify: TaskState,
    pub resend: TaskState,
    pub resend_label: TaskState,
    pub signup_submit: TaskState,
    pub signup_redirect: TaskState,
}

impl Tasks {
    pub fn state(&self, kind: TaskKind) -> &TaskState {
        match kind {
            TaskKind::StrengthEval => &self.strength_eval,
            TaskKind::ViewSwitch => &self.view_switch,
            TaskKind::OtpFocus => &self.otp_focus,
            TaskKind::LoginSubmit => &self.login_submit,
            TaskKind::OtpVerify => &self.otp_verify,
            TaskKind::Resend => &self.resend,
            TaskKind::ResendLabel => &self.resend_label,
            TaskKind::SignupSubmit => &self.signup_submit,
            TaskKind::SignupRedirect => &self.signup_redirect,
        }
    }

    pub fn state_mut(&mut self, kind: TaskKind) -> &mut TaskState {
        match kind {
            TaskKind::StrengthEval => &mut self.strength_eval,
            TaskKind::ViewSwitch => &mut self.view_switch,
            TaskKind::OtpFocus => &mut self.otp_focus,
            TaskKind::LoginSubmit => &mut self.login_submit,
            TaskKind::OtpVerify => &mut self.otp_verify,
            TaskKind::Resend => &mut self.resend,
            TaskKind::ResendLabel => &mut self.resend_label,
            TaskKind::SignupSubmit => &mut self.signup_submit,
            TaskKind::SignupRedirect => &mut self.signup_redirect,
        }
    }

    pub fn is_any_running(&self) -> bool {
        self.strength_eval.is_running()
            || self.view_switch.is_running()
            || self.otp_focus.is_running()
            || self.login_submit.is_running()
            || self.otp_verify.is_running()
            || self.resend.is_running()
            || self.resend_label.is_running()
            || self.signup_submit.is_running()
            || self.signup_redirect.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_if_active_drops_stale_ids() {
        let mut seq = TaskSeq::default();
        let old = seq.next_id();
        let new = seq.next_id();

        let mut state = TaskState::default();
        state.on_started(&TaskStarted {
            id: old,
            cancel: None,
        });
        state.on_started(&TaskStarted {
            id: new,
            cancel: None,
        });

        assert!(!state.finish_if_active(old));
        assert!(state.is_running());
        assert!(state.finish_if_active(new));
        assert!(!state.is_running());
    }

    #[test]
    fn is_any_running_sees_every_kind() {
        let mut tasks = Tasks::default();
        assert!(!tasks.is_any_running());

        let mut seq = TaskSeq::default();
        tasks
            .state_mut(TaskKind::StrengthEval)
            .on_started(&TaskStarted {
                id: seq.next_id(),
                cancel: Some(CancellationToken::new()),
            });
        assert!(tasks.is_any_running());
    }
}
