//! The stopwatch controller: timer state, tick loop and label refresh

use std::time::Duration;
use tracing::{debug, info, trace};

use crate::state::{Snapshot, TimerState};
use super::{
    clock::ClockSource,
    display::{Controls, DisplaySink, ToggleLabel},
    format::format_time,
    scheduler::{Scheduler, Ticket},
    StopwatchSettings,
};

/// Owns the timer state and drives it from user actions, ticks and host
/// lifecycle events.
///
/// Every method runs on the one queue that also delivers ticks, so a tick
/// never interleaves with an action. Dropping the controller cancels any
/// pending tick.
pub struct StopwatchController<C, S, D>
where
    C: ClockSource,
    S: Scheduler,
    D: DisplaySink,
{
    state: TimerState,
    controls: Controls,
    settings: StopwatchSettings,
    clock: C,
    scheduler: S,
    display: D,
}

impl<C, S, D> StopwatchController<C, S, D>
where
    C: ClockSource,
    S: Scheduler,
    D: DisplaySink,
{
    /// Create a paused controller and render its initial labels
    pub fn new(clock: C, scheduler: S, display: D, settings: StopwatchSettings) -> Self {
        let mut controller = Self {
            state: TimerState::new(),
            controls: Controls::default(),
            settings,
            clock,
            scheduler,
            display,
        };
        controller.refresh_all();
        controller
    }

    /// Start a new set, or pause the running one
    pub fn toggle_start(&mut self) {
        if self.state.is_running() {
            // Time since the last tick is not counted; only ticks accumulate
            self.state.pause();
            self.scheduler.cancel();
            info!(
                "Stopwatch paused at {} after set {}",
                format_time(self.state.total_time_ms),
                self.state.sets_count
            );
        } else {
            self.state.start(self.clock.now_ms());
            self.refresh_sets();
            self.scheduler.schedule(Duration::ZERO);
            info!("Stopwatch started, set {}", self.state.sets_count);
        }

        self.refresh_buttons();
    }

    /// Clear the accumulated time. Ignored while running.
    pub fn reset(&mut self) {
        if self.state.is_running() {
            debug!("Ignoring reset while the stopwatch is running");
            return;
        }

        self.controls.reset_sets_enabled = true;
        self.state.total_time_ms = 0;
        self.refresh_time();
        self.controls.reset_enabled = false;
        self.display.show_controls(self.controls);
        info!("Stopwatch time reset");
    }

    /// Clear the set count, whether running or not
    pub fn reset_sets_count(&mut self) {
        self.state.sets_count = 0;
        self.controls.reset_sets_enabled = false;
        self.display.show_controls(self.controls);
        self.refresh_sets();
        info!("Set count reset");
    }

    /// Accumulate the time since the last tick and schedule the next one.
    ///
    /// Does nothing while paused, which ends the tick loop.
    pub fn tick(&mut self) {
        if !self.state.is_running() {
            return;
        }

        let elapsed = self.state.accumulate(self.clock.now_ms());
        self.refresh_time();
        self.scheduler.schedule(self.settings.refresh_delay);
        trace!("Tick: +{}ms, total {}ms", elapsed, self.state.total_time_ms);
    }

    /// Deliver a scheduled tick. Returns false if the ticket is stale.
    pub fn fire(&mut self, ticket: Ticket) -> bool {
        if !self.scheduler.claim(ticket) {
            debug!("Ignoring stale tick {:?}", ticket);
            return false;
        }
        self.tick();
        true
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.into()
    }

    /// Replace the state with `snapshot`; ticking resumes if it was running
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.scheduler.cancel();
        self.state = snapshot.into();
        self.controls = Controls::for_running(self.state.is_running());
        self.refresh_all();

        if self.state.is_running() {
            self.scheduler.schedule(Duration::ZERO);
        }
        info!(
            "Stopwatch restored: running={}, total={}, sets={}",
            self.state.running,
            format_time(self.state.total_time_ms),
            self.state.sets_count
        );
    }

    /// Host went to the background: stop ticking but keep the running flag
    pub fn host_stop(&mut self) {
        self.scheduler.cancel();
        info!("Host stopped, tick loop suspended");
    }

    /// Host came back: resume ticking if running. The first tick covers the
    /// whole time spent stopped, since the last tick reading was kept.
    pub fn host_start(&mut self) {
        if self.state.is_running() && !self.scheduler.is_pending() {
            self.scheduler.schedule(Duration::ZERO);
            info!("Host started, tick loop resumed");
        } else {
            debug!("Host started, nothing to resume");
        }
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn controls(&self) -> Controls {
        self.controls
    }

    /// Whether a tick is currently scheduled
    pub fn is_ticking(&self) -> bool {
        self.scheduler.is_pending()
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    fn refresh_buttons(&mut self) {
        let running = self.state.is_running();
        self.controls.reset_enabled = !running;
        self.controls.toggle = if running { ToggleLabel::Pause } else { ToggleLabel::Start };
        self.display.show_controls(self.controls);
    }

    fn refresh_time(&mut self) {
        self.display.show_time(&format_time(self.state.total_time_ms));
    }

    fn refresh_sets(&mut self) {
        let text = self.settings.sets_template.render(self.state.sets_count);
        self.display.show_sets(&text);
    }

    fn refresh_all(&mut self) {
        self.display.show_controls(self.controls);
        self.refresh_time();
        self.refresh_sets();
    }
}

impl<C, S, D> Drop for StopwatchController<C, S, D>
where
    C: ClockSource,
    S: Scheduler,
    D: DisplaySink,
{
    fn drop(&mut self) {
        self.scheduler.cancel();
    }
}
