//! Effect handler implementations.
//!
//! Pure async functions that resolve to the `UiEvent` the runtime
//! feeds back through the inbox. The submission handlers simulate a
//! backend: log the attempt, wait the configured latency, settle.
//! There is no failure branch; a real backend would return one.

use std::time::Duration;

use anteroom_core::validate::{Credentials, SignupProfile};
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::events::UiEvent;

/// Resolves to `event` after `delay`, or to `TimerCancelled` if the
/// token fires first.
pub async fn delay_event(
    delay: Duration,
    event: UiEvent,
    cancel: Option<CancellationToken>,
) -> UiEvent {
    match cancel {
        Some(token) => {
            tokio::select! {
                () = token.cancelled() => UiEvent::TimerCancelled,
                () = tokio::time::sleep(delay) => event,
            }
        }
        None => {
            tokio::time::sleep(delay).await;
            event
        }
    }
}

/// Simulated login exchange. The password itself never reaches the log.
pub async fn login_exchange(credentials: Credentials, latency: Duration) -> UiEvent {
    info!(
        email = %credentials.email,
        remember_me = credentials.remember_me,
        password_len = credentials.password.chars().count(),
        "login attempt"
    );
    tokio::time::sleep(latency).await;
    info!(email = %credentials.email, "login settled");
    UiEvent::LoginSettled
}

/// Simulated passcode verification.
pub async fn verify_code(code: String, latency: Duration) -> UiEvent {
    info!(code = %code, "passcode verification");
    tokio::time::sleep(latency).await;
    info!("passcode verification settled");
    UiEvent::OtpSettled
}

/// Simulated passcode resend.
pub async fn resend_code(latency: Duration) -> UiEvent {
    info!("resending passcode");
    tokio::time::sleep(latency).await;
    info!("passcode resent");
    UiEvent::CodeResent
}

/// Simulated account creation. The password itself never reaches the log.
pub async fn create_account(profile: SignupProfile, latency: Duration) -> UiEvent {
    info!(
        first_name = %profile.first_name,
        last_name = %profile.last_name,
        email = %profile.email,
        password_len = profile.password.chars().count(),
        "signup attempt"
    );
    tokio::time::sleep(latency).await;
    info!(email = %profile.email, "account created");
    UiEvent::SignupSettled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn delay_event_resolves_after_its_delay() {
        let handle = tokio::spawn(delay_event(
            Duration::from_millis(500),
            UiEvent::StrengthEvalDue,
            None,
        ));
        tokio::time::advance(Duration::from_millis(501)).await;
        let event = handle.await.expect("join");
        assert!(matches!(event, UiEvent::StrengthEvalDue));
    }

    #[tokio::test(start_paused = true)]
    async fn delay_event_cancels_early() {
        let token = CancellationToken::new();
        let handle = tokio::spawn(delay_event(
            Duration::from_millis(500),
            UiEvent::StrengthEvalDue,
            Some(token.clone()),
        ));
        token.cancel();
        tokio::time::advance(Duration::from_millis(1)).await;
        let event = handle.await.expect("join");
        assert!(matches!(event, UiEvent::TimerCancelled));
    }

    #[tokio::test(start_paused = true)]
    async fn submissions_always_settle() {
        let handle = tokio::spawn(verify_code("123456".to_string(), Duration::from_millis(1500)));
        tokio::time::advance(Duration::from_millis(1501)).await;
        assert!(matches!(handle.await.expect("join"), UiEvent::OtpSettled));
    }
}
