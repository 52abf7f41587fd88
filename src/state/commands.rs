//! Messages accepted by the stopwatch loop

use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;

use crate::stopwatch::Ticket;
use super::{DisplayState, Snapshot};

/// Something the user or the host asks the stopwatch to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ToggleStart,
    Reset,
    ResetSetsCount,
    /// Report the current state without changing it
    Inspect,
    Restore(Snapshot),
    HostStop,
    HostStart,
    /// Tear the controller down and rebuild it from its own snapshot
    Recreate,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::ToggleStart => "toggle",
            Action::Reset => "reset",
            Action::ResetSetsCount => "reset-sets",
            Action::Inspect => "inspect",
            Action::Restore(_) => "restore",
            Action::HostStop => "host-stop",
            Action::HostStart => "host-start",
            Action::Recreate => "recreate",
        }
    }

    /// Whether the action changes stopwatch state
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Action::Inspect)
    }
}

/// An entry on the stopwatch queue
#[derive(Debug)]
pub enum Command {
    Action {
        action: Action,
        reply: oneshot::Sender<StopwatchReport>,
    },
    /// A deferred tick coming due
    Tick(Ticket),
    Shutdown,
}

/// State of the stopwatch after an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopwatchReport {
    pub snapshot: Snapshot,
    pub display: DisplayState,
    /// Whether a tick is scheduled
    pub ticking: bool,
}
