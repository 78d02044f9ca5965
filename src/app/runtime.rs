//! Command execution and the inbound event queue.
//!
//! The dispatcher never performs I/O itself. It returns [`Command`]s, and the
//! [`Runtime`] turns them into background work whose completion comes back as
//! an [`AppEvent`] on a single channel drained by the main loop.
//!
//! - `ScheduleTick` spawns a one-shot timer that sends `Tick` at the next
//!   deadline. Deadlines advance by whole intervals from the first one, so
//!   the time a tick waits in the queue does not stretch the period. Only a
//!   handled tick re-arms the clock: at most one tick is outstanding, and
//!   deadlines already missed are skipped rather than delivered in a burst.
//! - `Load` and `Save` are queued to one persistence worker and run in issue
//!   order. A stalled write delays the writes queued behind it; nothing is
//!   cancelled or dropped.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{debug, warn};

use super::App;
use crate::app::state::{AppEvent, Command, LoadOutcome};
use crate::core::Snapshot;
use crate::fs::SnapshotStore;

/// Delay between clock ticks.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Channel buffer size for completion events.
const EVENT_CHANNEL_SIZE: usize = 64;

/// Work item for the persistence worker.
#[derive(Debug)]
enum PersistJob {
    Load,
    Save(Snapshot),
}

/// Owns the event queue and executes dispatcher commands.
pub struct Runtime {
    event_tx: mpsc::Sender<AppEvent>,
    event_rx: mpsc::Receiver<AppEvent>,
    job_tx: mpsc::UnboundedSender<PersistJob>,
    tick_interval: Duration,
    /// Deadline of the most recently scheduled tick.
    tick_deadline: Option<Instant>,
}

/// Spawns the task that performs persistence jobs one at a time.
///
/// Each job produces exactly one completion event. The worker exits when the
/// job queue closes or the event receiver is gone.
fn spawn_persistence_worker(
    store: Arc<dyn SnapshotStore>,
    mut job_rx: mpsc::UnboundedReceiver<PersistJob>,
    event_tx: mpsc::Sender<AppEvent>,
) {
    tokio::spawn(async move {
        while let Some(job) = job_rx.recv().await {
            let event = match job {
                PersistJob::Load => {
                    let outcome = match store.load().await {
                        Ok(Some(snapshot)) => LoadOutcome::Loaded(snapshot),
                        Ok(None) => LoadOutcome::Missing,
                        Err(e) => LoadOutcome::Failed(e.to_string()),
                    };
                    AppEvent::Loaded(outcome)
                }
                PersistJob::Save(snapshot) => {
                    AppEvent::Saved(store.save(snapshot).await.map_err(|e| e.to_string()))
                }
            };
            if event_tx.send(event).await.is_err() {
                debug!("event queue closed, stopping persistence worker");
                break;
            }
        }
    });
}

/// Returns the first deadline after `now` on the grid started by `previous`.
///
/// Without a previous deadline the clock starts one interval from `now`.
fn next_deadline(previous: Option<Instant>, now: Instant, interval: Duration) -> Instant {
    let Some(previous) = previous else {
        return now + interval;
    };
    let next = previous + interval;
    if next > now || interval.is_zero() {
        return next;
    }
    let behind = now.duration_since(next).as_nanos();
    let skipped = behind / interval.as_nanos() + 1;
    let skipped = u32::try_from(skipped).unwrap_or(u32::MAX);
    debug!(skipped, "clock fell behind, skipping ticks");
    next + interval.saturating_mul(skipped)
}

impl Runtime {
    /// Creates a runtime that ticks once per second.
    ///
    /// Must be called from within a Tokio runtime.
    #[must_use]
    pub fn new(store: Arc<dyn SnapshotStore>) -> Self {
        Self::with_tick_interval(store, TICK_INTERVAL)
    }

    /// Creates a runtime with a custom tick interval.
    #[must_use]
    pub fn with_tick_interval(store: Arc<dyn SnapshotStore>, tick_interval: Duration) -> Self {
        let (event_tx, event_rx) = mpsc::channel(EVENT_CHANNEL_SIZE);
        let (job_tx, job_rx) = mpsc::unbounded_channel();
        spawn_persistence_worker(store, job_rx, event_tx.clone());
        Self {
            event_tx,
            event_rx,
            job_tx,
            tick_interval,
            tick_deadline: None,
        }
    }

    /// Starts the work for each command. Never blocks.
    pub fn execute(&mut self, commands: Vec<Command>) {
        for command in commands {
            match command {
                Command::ScheduleTick => self.schedule_tick(),
                Command::Load => self.enqueue(PersistJob::Load),
                Command::Save(snapshot) => self.enqueue(PersistJob::Save(snapshot)),
            }
        }
    }

    /// Feeds one event to `app` and executes the resulting commands.
    pub fn dispatch(&mut self, app: &mut App, event: AppEvent) {
        let commands = app.update(event);
        self.execute(commands);
    }

    /// Returns the next queued event without waiting.
    pub fn try_next_event(&mut self) -> Option<AppEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Waits for the next queued event.
    pub async fn next_event(&mut self) -> Option<AppEvent> {
        self.event_rx.recv().await
    }

    fn schedule_tick(&mut self) {
        let now = Instant::now();
        let deadline = next_deadline(self.tick_deadline, now, self.tick_interval);
        self.tick_deadline = Some(deadline);

        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            let _ = tx.send(AppEvent::Tick).await;
        });
    }

    fn enqueue(&self, job: PersistJob) {
        if self.job_tx.send(job).is_err() {
            warn!("persistence worker has stopped; dropping job");
        }
    }
}
