//! Stopwatch loop background task
//!
//! Owns the controller and applies every command from a single queue, in
//! order. Ticks are posted back onto the same queue by [`QueueScheduler`].

use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};
use tokio::{
    sync::{mpsc, watch},
    task::{AbortHandle, JoinHandle},
    time::sleep,
};
use tracing::{debug, info, warn};

use crate::{
    state::{Action, Command, DisplayState, StopwatchReport},
    stopwatch::{
        MonotonicClock, Scheduler, StopwatchController, StopwatchSettings, Ticket, WatchDisplay,
    },
};

/// Controller wired to the tokio runtime
pub type LiveController = StopwatchController<MonotonicClock, QueueScheduler, WatchDisplay>;

/// Posts ticks onto the stopwatch queue after a delay.
///
/// Tickets come from a counter shared by every scheduler on the same queue, so
/// a tick left over from a torn down controller never matches a new one.
#[derive(Debug)]
pub struct QueueScheduler {
    queue: mpsc::UnboundedSender<Command>,
    tickets: Arc<AtomicU64>,
    pending: Option<(Ticket, AbortHandle)>,
}

impl QueueScheduler {
    pub fn new(queue: mpsc::UnboundedSender<Command>, tickets: Arc<AtomicU64>) -> Self {
        Self { queue, tickets, pending: None }
    }
}

impl Scheduler for QueueScheduler {
    fn schedule(&mut self, delay: Duration) {
        self.cancel();

        let ticket = Ticket(self.tickets.fetch_add(1, Ordering::Relaxed) + 1);
        let queue = self.queue.clone();
        let task = tokio::spawn(async move {
            if !delay.is_zero() {
                sleep(delay).await;
            }
            if queue.send(Command::Tick(ticket)).is_err() {
                debug!("Stopwatch queue closed, dropping tick {:?}", ticket);
            }
        });
        self.pending = Some((ticket, task.abort_handle()));
    }

    fn cancel(&mut self) {
        if let Some((_, handle)) = self.pending.take() {
            handle.abort();
        }
    }

    fn claim(&mut self, ticket: Ticket) -> bool {
        match &self.pending {
            Some((pending, _)) if *pending == ticket => {
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

impl Drop for QueueScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Channels of a running stopwatch loop
pub struct StopwatchHandle {
    pub commands: mpsc::UnboundedSender<Command>,
    pub display_rx: watch::Receiver<DisplayState>,
    pub task: JoinHandle<()>,
}

/// Spawn the stopwatch loop on the current runtime
pub fn spawn_stopwatch_loop(settings: StopwatchSettings) -> StopwatchHandle {
    let (commands, rx) = mpsc::unbounded_channel();
    let (display, display_rx) = WatchDisplay::channel();

    let queue = commands.clone();
    let task = tokio::spawn(async move {
        stopwatch_loop_task(rx, queue, display, settings).await;
    });

    StopwatchHandle { commands, display_rx, task }
}

/// Process commands until a shutdown command arrives.
///
/// `queue` is the sending side of `rx`, handed to the schedulers for ticks.
pub async fn stopwatch_loop_task(
    mut rx: mpsc::UnboundedReceiver<Command>,
    queue: mpsc::UnboundedSender<Command>,
    display: WatchDisplay,
    settings: StopwatchSettings,
) {
    info!(
        "Starting stopwatch loop (refresh every {}ms)",
        settings.refresh_delay.as_millis()
    );

    let clock = MonotonicClock::new();
    let tickets = Arc::new(AtomicU64::new(0));
    let build = || {
        LiveController::new(
            clock,
            QueueScheduler::new(queue.clone(), Arc::clone(&tickets)),
            display.clone(),
            settings.clone(),
        )
    };

    let mut controller = build();

    while let Some(command) = rx.recv().await {
        match command {
            Command::Tick(ticket) => {
                controller.fire(ticket);
            }
            Command::Action { action, reply } => {
                match action {
                    Action::ToggleStart => controller.toggle_start(),
                    Action::Reset => controller.reset(),
                    Action::ResetSetsCount => controller.reset_sets_count(),
                    Action::Inspect => {}
                    Action::Restore(snapshot) => controller.restore(snapshot),
                    Action::HostStop => controller.host_stop(),
                    Action::HostStart => controller.host_start(),
                    Action::Recreate => {
                        let snapshot = controller.snapshot();
                        // Teardown cancels the pending tick before the new one exists
                        drop(controller);
                        controller = build();
                        controller.restore(snapshot);
                        info!("Stopwatch recreated from snapshot");
                    }
                }

                if reply.send(report(&controller)).is_err() {
                    warn!("Requester went away before the '{}' report", action.name());
                }
            }
            Command::Shutdown => {
                info!("Stopwatch loop shutting down");
                break;
            }
        }
    }

    drop(controller);
    info!("Stopwatch loop stopped");
}

fn report(controller: &LiveController) -> StopwatchReport {
    StopwatchReport {
        snapshot: controller.snapshot(),
        display: controller.display().current(),
        ticking: controller.is_ticking(),
    }
}
