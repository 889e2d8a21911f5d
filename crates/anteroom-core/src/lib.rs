//! Core domain logic for Anteroom.
//!
//! Everything in this crate is pure and terminal-free: the password
//! strength classifier, the signup validation chain, the one-time
//! passcode cell machine, and configuration loading. The TUI crate
//! layers focus handling and rendering on top.

pub mod config;
pub mod otp;
pub mod strength;
pub mod validate;
