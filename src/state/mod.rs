//! State management module
//!
//! This module contains the timer state, the display state and the shared
//! application state handed to the HTTP handlers.

pub mod app_state;
pub mod commands;
pub mod display_state;
pub mod timer_state;

// Re-export main types
pub use app_state::AppState;
pub use commands::{Action, Command, StopwatchReport};
pub use display_state::DisplayState;
pub use timer_state::{Snapshot, TimerState};
