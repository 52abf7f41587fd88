//! Timer state structure and its snapshot form

use serde::{Deserialize, Serialize};

/// The four fields owned by the stopwatch controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimerState {
    pub running: bool,
    /// Accumulated time, in milliseconds
    pub total_time_ms: u64,
    /// Clock reading at the most recent tick; only meaningful while running
    pub last_tick_ms: u64,
    pub sets_count: u32,
}

impl TimerState {
    /// Create a paused timer with nothing accumulated
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the timer is running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Begin a new set at `now_ms`
    pub fn start(&mut self, now_ms: u64) {
        self.running = true;
        self.sets_count = self.sets_count.saturating_add(1);
        self.last_tick_ms = now_ms;
    }

    /// Fold the time since the last tick into the total and return it.
    ///
    /// Does nothing while paused. A clock reading older than the last tick
    /// counts as zero.
    pub fn accumulate(&mut self, now_ms: u64) -> u64 {
        if !self.running {
            return 0;
        }
        let elapsed = now_ms.saturating_sub(self.last_tick_ms);
        self.total_time_ms = self.total_time_ms.saturating_add(elapsed);
        self.last_tick_ms = now_ms;
        elapsed
    }

    /// Stop accumulating. Time since the last tick is not counted.
    pub fn pause(&mut self) {
        self.running = false;
    }
}

/// Serialized form of [`TimerState`], kept across a teardown/recreate cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub running: bool,
    #[serde(rename = "totalTime")]
    pub total_time_ms: u64,
    #[serde(rename = "lastTick")]
    pub last_tick_ms: u64,
    #[serde(rename = "setsCount")]
    pub sets_count: u32,
}

impl From<TimerState> for Snapshot {
    fn from(state: TimerState) -> Self {
        Self {
            running: state.running,
            total_time_ms: state.total_time_ms,
            last_tick_ms: state.last_tick_ms,
            sets_count: state.sets_count,
        }
    }
}

impl From<Snapshot> for TimerState {
    fn from(snapshot: Snapshot) -> Self {
        Self {
            running: snapshot.running,
            total_time_ms: snapshot.total_time_ms,
            last_tick_ms: snapshot.last_tick_ms,
            sets_count: snapshot.sets_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn start_counts_a_set_and_records_tick() {
        let mut state = TimerState::new();
        state.start(1_500);

        assert!(state.is_running());
        assert_eq!(state.sets_count, 1);
        assert_eq!(state.last_tick_ms, 1_500);
    }

    #[test]
    fn accumulate_only_while_running() {
        let mut state = TimerState::new();
        assert_eq!(state.accumulate(10_000), 0);
        assert_eq!(state.total_time_ms, 0);

        state.start(1_000);
        assert_eq!(state.accumulate(1_100), 100);
        assert_eq!(state.accumulate(1_350), 250);
        assert_eq!(state.total_time_ms, 350);
        assert_eq!(state.last_tick_ms, 1_350);

        state.pause();
        assert_eq!(state.accumulate(9_000), 0);
        assert_eq!(state.total_time_ms, 350);
    }

    #[test]
    fn accumulate_ignores_clock_going_backwards() {
        let mut state = TimerState::new();
        state.start(5_000);
        assert_eq!(state.accumulate(4_000), 0);
        assert_eq!(state.total_time_ms, 0);
        assert_eq!(state.last_tick_ms, 4_000);
    }

    #[test]
    fn snapshot_uses_stable_keys() {
        let snapshot = Snapshot {
            running: true,
            total_time_ms: 61_234,
            last_tick_ms: 42,
            sets_count: 3,
        };
        let json = serde_json::to_value(snapshot).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "running": true,
                "totalTime": 61_234,
                "lastTick": 42,
                "setsCount": 3,
            })
        );
        let state: TimerState = snapshot.into();
        assert_eq!(Snapshot::from(state), snapshot);
    }
}
