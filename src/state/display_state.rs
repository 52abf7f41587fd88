//! Latest labels shown by the stopwatch

use serde::{Deserialize, Serialize};

use crate::stopwatch::{format_time, Controls, SetsTemplate};

/// What the display currently shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayState {
    pub time: String,
    pub sets: String,
    pub controls: Controls,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            time: format_time(0),
            sets: SetsTemplate::default().render(0),
            controls: Controls::default(),
        }
    }
}
