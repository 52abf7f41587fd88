//! Deferred tick scheduling

use std::time::Duration;

/// Identifies one scheduled tick. Only the currently pending ticket is honored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(pub u64);

/// Schedules a single deferred tick at a time
pub trait Scheduler {
    /// Arrange for a tick after `delay`, replacing any pending one
    fn schedule(&mut self, delay: Duration);

    /// Drop the pending tick, if any
    fn cancel(&mut self);

    /// Accept a delivered tick. Returns false for cancelled or superseded tickets.
    fn claim(&mut self, ticket: Ticket) -> bool;

    fn is_pending(&self) -> bool;
}
