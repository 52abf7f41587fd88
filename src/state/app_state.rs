//! Main application state shared with the HTTP handlers

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, warn};

use crate::error::{Result, StopwatchError};
use super::{Action, Command, DisplayState, StopwatchReport};

/// Handle to the stopwatch loop plus server metadata.
///
/// Holds no timer state itself: every action is sent to the loop's queue and
/// answered with a report.
#[derive(Debug)]
pub struct AppState {
    /// Queue of the stopwatch loop
    commands: mpsc::UnboundedSender<Command>,
    /// Latest labels published by the controller
    display_rx: watch::Receiver<DisplayState>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
}

impl AppState {
    pub fn new(
        port: u16,
        host: String,
        commands: mpsc::UnboundedSender<Command>,
        display_rx: watch::Receiver<DisplayState>,
    ) -> Self {
        Self {
            commands,
            display_rx,
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
        }
    }

    /// Send an action to the stopwatch loop and wait for its report
    pub async fn dispatch(&self, action: Action) -> Result<StopwatchReport> {
        let (reply, rx) = oneshot::channel();
        self.commands
            .send(Command::Action { action, reply })
            .map_err(|_| StopwatchError::LoopClosed)?;

        let report = rx.await.map_err(|_| StopwatchError::NoReply(action.name()))?;

        if action.is_mutation() {
            self.record_action(action.name());
        }
        debug!("Action '{}' done, running={}", action.name(), report.snapshot.running);
        Ok(report)
    }

    /// Ask the stopwatch loop to drop its controller and exit
    pub fn shutdown(&self) {
        if self.commands.send(Command::Shutdown).is_err() {
            warn!("Stopwatch loop already stopped");
        }
    }

    /// Labels currently shown, without going through the queue
    pub fn display(&self) -> DisplayState {
        self.display_rx.borrow().clone()
    }

    /// Subscribe to label changes
    pub fn subscribe_display(&self) -> watch::Receiver<DisplayState> {
        self.display_rx.clone()
    }

    fn record_action(&self, action: &str) {
        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}
