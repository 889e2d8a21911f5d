//! Feature modules for the TUI.
//!
//! Each screen follows the same layout: `state.rs` owns the data,
//! `update.rs` handles events for that screen, `render.rs` draws it.

pub mod login;
pub mod otp;
pub mod signup;
