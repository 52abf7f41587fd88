//! Workout Stopwatch - A state-managed HTTP stopwatch for timing workout sets
//!
//! This library provides the stopwatch controller (timer state, tick loop,
//! set counting), the queue that drives it, and the HTTP API exposing it.

pub mod config;
pub mod error;
pub mod state;
pub mod stopwatch;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::StopwatchError;
pub use state::AppState;
pub use api::create_router;
pub use stopwatch::{format_time, StopwatchController};
pub use utils::signals::shutdown_signal;
