//! Application state composition.
//!
//! This module defines the top-level state hierarchy for the TUI:
//!
//! ```text
//! AppState
//! ├── screen: Screen              (Login | Signup, one at a time)
//! │   ├── LoginScreen             (fields, view switcher, OtpEntry)
//! │   └── SignupScreen            (fields, strength popup, messages)
//! ├── tasks: Tasks                (timed-task lifecycle per kind)
//! ├── task_seq: TaskSeq           (task id generator)
//! └── timing: TimingConfig        (durations from config)
//! ```
//!
//! All mutation happens in the reducer; the runtime only executes
//! effects and feeds results back as events.

use std::time::Instant;

use anteroom_core::config::{Config, TimingConfig};

use crate::common::{TaskSeq, Tasks};
use crate::features::login::LoginScreen;
use crate::features::signup::SignupScreen;

/// Which page the binary was asked to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartPage {
    Login,
    Signup,
}

/// The active screen. Navigation replaces the whole screen state.
#[derive(Debug)]
pub enum Screen {
    Login(LoginScreen),
    Signup(SignupScreen),
}

/// TUI application state.
pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// The active screen.
    pub screen: Screen,
    /// Timed-task lifecycle state.
    pub tasks: Tasks,
    /// Task id sequence for timed operations.
    pub task_seq: TaskSeq,
    /// Durations for animations, debounce, and simulated latency.
    pub timing: TimingConfig,
    /// Spinner animation frame counter (for loading buttons).
    pub spinner_frame: usize,
}

impl AppState {
    pub fn new(config: &Config, page: StartPage) -> Self {
        let now = Instant::now();
        let screen = match page {
            StartPage::Login => Screen::Login(LoginScreen::new(now)),
            StartPage::Signup => Screen::Signup(SignupScreen::new(now)),
        };

        Self {
            should_quit: false,
            screen,
            tasks: Tasks::default(),
            task_seq: TaskSeq::default(),
            timing: config.timing.clone(),
            spinner_frame: 0,
        }
    }

    /// Clears expired feedback timers on the active screen.
    pub fn expire_fx(&mut self, now: Instant) {
        match &mut self.screen {
            Screen::Login(screen) => screen.expire_fx(now),
            Screen::Signup(screen) => screen.expire_fx(now),
        }
    }

    /// True while any visual feedback or entrance animation is live;
    /// drives the fast tick cadence.
    pub fn is_animating(&self, now: Instant) -> bool {
        let entrance_window = self.timing.entrance();
        match &self.screen {
            Screen::Login(screen) => {
                screen.is_animating(now) || screen.entrance.is_settling(now, entrance_window)
            }
            Screen::Signup(screen) => {
                screen.is_animating(now) || screen.entrance.is_settling(now, entrance_window)
            }
        }
    }
}
