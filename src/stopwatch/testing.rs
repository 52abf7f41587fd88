//! Test support: a settable clock, a hand-driven scheduler and a recording display

use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};

use super::{
    clock::ClockSource,
    display::{Controls, DisplaySink},
    scheduler::{Scheduler, Ticket},
};

/// Clock that only moves when told to; clones share the same reading
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new(now_ms: u64) -> Self {
        Self { now: Arc::new(AtomicU64::new(now_ms)) }
    }

    pub fn set(&self, now_ms: u64) {
        self.now.store(now_ms, Ordering::SeqCst);
    }

    pub fn advance(&self, ms: u64) {
        self.now.fetch_add(ms, Ordering::SeqCst);
    }
}

impl ClockSource for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}

/// Scheduler that records requests and lets the caller deliver ticks by hand
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_ticket: u64,
    pending: Option<(Ticket, Duration)>,
    cancellations: usize,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// The pending ticket and the delay it was scheduled with
    pub fn pending(&self) -> Option<(Ticket, Duration)> {
        self.pending
    }

    /// How many times a pending tick was cancelled
    pub fn cancellations(&self) -> usize {
        self.cancellations
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration) {
        self.next_ticket += 1;
        self.pending = Some((Ticket(self.next_ticket), delay));
    }

    fn cancel(&mut self) {
        if self.pending.take().is_some() {
            self.cancellations += 1;
        }
    }

    fn claim(&mut self, ticket: Ticket) -> bool {
        match self.pending {
            Some((pending, _)) if pending == ticket => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Keeps everything it was shown, latest last
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub times: Vec<String>,
    pub sets: Vec<String>,
    pub controls: Vec<Controls>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_time(&self) -> Option<&str> {
        self.times.last().map(String::as_str)
    }

    pub fn last_sets(&self) -> Option<&str> {
        self.sets.last().map(String::as_str)
    }

    pub fn last_controls(&self) -> Option<Controls> {
        self.controls.last().copied()
    }
}

impl DisplaySink for RecordingDisplay {
    fn show_time(&mut self, text: &str) {
        self.times.push(text.to_string());
    }

    fn show_sets(&mut self, text: &str) {
        self.sets.push(text.to_string());
    }

    fn show_controls(&mut self, controls: Controls) {
        self.controls.push(controls);
    }
}

#[test]
fn manual_clock_is_shared_between_clones() {
    let clock = ManualClock::new(100);
    let view = clock.clone();
    clock.advance(50);
    assert_eq!(view.now_ms(), 150);
    view.set(10);
    assert_eq!(clock.now_ms(), 10);
}

#[test]
fn superseded_ticket_is_rejected() {
    let mut scheduler = ManualScheduler::new();
    scheduler.schedule(Duration::ZERO);
    let (first, _) = scheduler.pending().unwrap();
    scheduler.schedule(Duration::from_millis(100));
    let (second, delay) = scheduler.pending().unwrap();

    assert_eq!(delay, Duration::from_millis(100));
    assert!(!scheduler.claim(first));
    assert!(scheduler.claim(second));
    assert!(!scheduler.claim(second));
    assert!(!scheduler.is_pending());
}

#[test]
fn cancel_counts_only_pending_ticks() {
    let mut scheduler = ManualScheduler::new();
    scheduler.cancel();
    assert_eq!(scheduler.cancellations(), 0);

    scheduler.schedule(Duration::ZERO);
    let (ticket, _) = scheduler.pending().unwrap();
    scheduler.cancel();
    assert_eq!(scheduler.cancellations(), 1);
    assert!(!scheduler.claim(ticket));
}
