use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;

use study_core::{CountdownTimer, TICK_INTERVAL, TickHandle, TimeSource, TimerPhase};

/// Read-only view of the timer for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerSnapshot {
    pub remaining_seconds: u32,
    pub running: bool,
    pub phase: TimerPhase,
    pub display: String,
    pub status: &'static str,
}

impl From<&CountdownTimer> for TimerSnapshot {
    fn from(timer: &CountdownTimer) -> Self {
        Self {
            remaining_seconds: timer.remaining_seconds(),
            running: timer.is_running(),
            phase: timer.phase(),
            display: timer.format_display(),
            status: timer.status_label(),
        }
    }
}

struct TimerCell {
    timer: CountdownTimer,
    subscription: Option<TickHandle>,
    // Bumped on every subscribe; a tick carrying an older value is stale.
    generation: u64,
}

/// A countdown timer wired to a tick source.
///
/// Holds at most one tick subscription. It is taken on `start`, and given
/// back on `pause`, `reset`, expiry and drop.
pub struct StudyTimer {
    source: Arc<dyn TimeSource>,
    cell: Arc<Mutex<TimerCell>>,
    updates: Arc<watch::Sender<TimerSnapshot>>,
    interval: Duration,
}

impl StudyTimer {
    #[must_use]
    pub fn new(source: Arc<dyn TimeSource>, duration_secs: u32) -> Self {
        Self::with_interval(source, duration_secs, TICK_INTERVAL)
    }

    #[must_use]
    pub fn with_interval(source: Arc<dyn TimeSource>, duration_secs: u32, interval: Duration) -> Self {
        let timer = CountdownTimer::new(duration_secs);
        let (updates, _) = watch::channel(TimerSnapshot::from(&timer));
        Self {
            source,
            cell: Arc::new(Mutex::new(TimerCell {
                timer,
                subscription: None,
                generation: 0,
            })),
            updates: Arc::new(updates),
            interval,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot::from(&self.cell.lock().timer)
    }

    /// Receiver that wakes on every state change, including ticks.
    #[must_use]
    pub fn watch(&self) -> watch::Receiver<TimerSnapshot> {
        self.updates.subscribe()
    }

    /// Whether a tick subscription is currently held.
    #[must_use]
    pub fn is_subscribed(&self) -> bool {
        self.cell.lock().subscription.is_some()
    }

    /// Returns true if the timer started.
    pub fn start(&self) -> bool {
        let mut cell = self.cell.lock();
        if !cell.timer.start() {
            return false;
        }
        if cell.subscription.is_none() {
            cell.generation += 1;
            let callback = tick_callback(
                Arc::clone(&self.cell),
                Arc::clone(&self.updates),
                cell.generation,
            );
            cell.subscription = Some(self.source.subscribe(self.interval, callback));
        }
        let snapshot = TimerSnapshot::from(&cell.timer);
        drop(cell);
        tracing::debug!(remaining = snapshot.remaining_seconds, "timer started");
        self.updates.send_replace(snapshot);
        true
    }

    /// Returns true if the timer was running.
    pub fn pause(&self) -> bool {
        let mut cell = self.cell.lock();
        let was_running = cell.timer.pause();
        self.release(&mut cell);
        let snapshot = TimerSnapshot::from(&cell.timer);
        drop(cell);
        if was_running {
            tracing::debug!(remaining = snapshot.remaining_seconds, "timer paused");
            self.updates.send_replace(snapshot);
        }
        was_running
    }

    /// Start when paused, pause when running. Returns the new running flag.
    pub fn toggle(&self) -> bool {
        let running = self.cell.lock().timer.is_running();
        if running {
            self.pause();
            false
        } else {
            self.start()
        }
    }

    /// Stop and reload. Negative durations clamp to zero.
    pub fn reset(&self, duration_secs: i64) -> u32 {
        let mut cell = self.cell.lock();
        let loaded = cell.timer.reset(duration_secs);
        self.release(&mut cell);
        let snapshot = TimerSnapshot::from(&cell.timer);
        drop(cell);
        if loaded == 0 && duration_secs < 0 {
            tracing::warn!(requested = duration_secs, "negative timer duration clamped to zero");
        }
        tracing::debug!(remaining = loaded, "timer reset");
        self.updates.send_replace(snapshot);
        loaded
    }

    fn release(&self, cell: &mut TimerCell) {
        if let Some(handle) = cell.subscription.take() {
            self.source.unsubscribe(handle);
        }
    }
}

impl Drop for StudyTimer {
    fn drop(&mut self) {
        let handle = self.cell.lock().subscription.take();
        if let Some(handle) = handle {
            self.source.unsubscribe(handle);
        }
    }
}

fn tick_callback(
    cell: Arc<Mutex<TimerCell>>,
    updates: Arc<watch::Sender<TimerSnapshot>>,
    generation: u64,
) -> study_core::TickCallback {
    Box::new(move || {
        let mut guard = cell.lock();
        if guard.generation != generation || guard.subscription.is_none() {
            return ControlFlow::Break(());
        }
        let phase = guard.timer.on_tick();
        let expired = phase == TimerPhase::Expired;
        if expired {
            guard.subscription = None;
        }
        let snapshot = TimerSnapshot::from(&guard.timer);
        drop(guard);

        updates.send_replace(snapshot);
        if expired {
            tracing::info!("study timer finished");
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    })
}
