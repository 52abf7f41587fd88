//! Stopwatch core
//!
//! The controller and the capabilities it is built from: a clock, a tick
//! scheduler and a display sink. Nothing here depends on the HTTP layer.

pub mod clock;
pub mod controller;
pub mod display;
pub mod format;
pub mod scheduler;

#[cfg(test)]
pub(crate) mod testing;

use std::time::Duration;

use crate::error::{Result, StopwatchError};

pub use clock::{ClockSource, MonotonicClock};
pub use controller::StopwatchController;
pub use display::{Controls, DisplaySink, ToggleLabel, WatchDisplay};
pub use format::{format_time, SetsTemplate};
pub use scheduler::{Scheduler, Ticket};

/// Delay between two ticks while running
pub const DEFAULT_REFRESH_DELAY: Duration = Duration::from_millis(100);

/// Tunables shared by every controller instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwatchSettings {
    pub refresh_delay: Duration,
    pub sets_template: SetsTemplate,
}

impl StopwatchSettings {
    pub fn new(refresh_delay: Duration, sets_template: SetsTemplate) -> Result<Self> {
        if refresh_delay < Duration::from_millis(1) {
            return Err(StopwatchError::InvalidRefreshDelay);
        }
        Ok(Self { refresh_delay, sets_template })
    }
}

impl Default for StopwatchSettings {
    fn default() -> Self {
        Self {
            refresh_delay: DEFAULT_REFRESH_DELAY,
            sets_template: SetsTemplate::default(),
        }
    }
}
