//! One-time passcode entry view (part of the login screen).

pub mod render;
pub mod state;
pub mod update;

pub use state::{OtpEntry, ResendState};
