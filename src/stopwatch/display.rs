//! Display sinks receiving the stopwatch labels

use std::sync::Arc;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::state::DisplayState;

/// Label shown on the start/pause control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleLabel {
    Start,
    Pause,
}

/// State of the user-facing controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Controls {
    pub toggle: ToggleLabel,
    pub reset_enabled: bool,
    pub reset_sets_enabled: bool,
}

impl Controls {
    /// Controls as they appear on a freshly created paused or running stopwatch
    pub fn for_running(running: bool) -> Self {
        Self {
            toggle: if running { ToggleLabel::Pause } else { ToggleLabel::Start },
            reset_enabled: !running,
            reset_sets_enabled: true,
        }
    }
}

impl Default for Controls {
    fn default() -> Self {
        Self::for_running(false)
    }
}

/// Receives refreshed labels from the controller
pub trait DisplaySink {
    fn show_time(&mut self, text: &str);
    fn show_sets(&mut self, text: &str);
    fn show_controls(&mut self, controls: Controls);
}

/// Publishes the labels on a watch channel; clones publish to the same channel
#[derive(Debug, Clone)]
pub struct WatchDisplay {
    tx: Arc<watch::Sender<DisplayState>>,
}

impl WatchDisplay {
    pub fn new(tx: watch::Sender<DisplayState>) -> Self {
        Self { tx: Arc::new(tx) }
    }

    /// Create a display together with a receiver for its updates
    pub fn channel() -> (Self, watch::Receiver<DisplayState>) {
        let (tx, rx) = watch::channel(DisplayState::default());
        (Self::new(tx), rx)
    }

    pub fn current(&self) -> DisplayState {
        self.tx.borrow().clone()
    }

    fn update<F>(&self, updater: F)
    where
        F: FnOnce(&mut DisplayState) -> bool,
    {
        // Notifies receivers only when something changed, even with none subscribed
        self.tx.send_if_modified(updater);
    }
}

impl DisplaySink for WatchDisplay {
    fn show_time(&mut self, text: &str) {
        self.update(|state| {
            if state.time == text {
                return false;
            }
            state.time = text.to_string();
            true
        });
    }

    fn show_sets(&mut self, text: &str) {
        self.update(|state| {
            if state.sets == text {
                return false;
            }
            state.sets = text.to_string();
            true
        });
    }

    fn show_controls(&mut self, controls: Controls) {
        self.update(|state| {
            if state.controls == controls {
                return false;
            }
            state.controls = controls;
            true
        });
    }
}
