use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

use study_core::{TickCallback, TickHandle, TimeSource};

#[derive(Default)]
struct TickerState {
    next_id: u64,
    tasks: HashMap<TickHandle, JoinHandle<()>>,
}

/// `TimeSource` backed by `tokio::time::interval`, one spawned task per
/// subscription.
///
/// The first tick fires one full interval after subscribing.
#[derive(Clone)]
pub struct TokioTimeSource {
    runtime: Handle,
    state: Arc<Mutex<TickerState>>,
}

impl TokioTimeSource {
    #[must_use]
    pub fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            state: Arc::new(Mutex::new(TickerState::default())),
        }
    }

    /// Bind to the runtime the caller is running on.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    #[must_use]
    pub fn current() -> Self {
        Self::new(Handle::current())
    }

    /// Abort every live subscription.
    pub fn shutdown(&self) {
        let tasks: Vec<_> = self.state.lock().tasks.drain().collect();
        for (_, task) in tasks {
            task.abort();
        }
    }
}

impl TimeSource for TokioTimeSource {
    fn subscribe(&self, interval: Duration, mut on_tick: TickCallback) -> TickHandle {
        let period = interval.max(Duration::from_millis(1));
        let mut state = self.state.lock();
        state.next_id += 1;
        let handle = TickHandle::new(state.next_id);

        let registry = Arc::clone(&self.state);
        let task = self.runtime.spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if on_tick().is_break() {
                    break;
                }
            }
            registry.lock().tasks.remove(&handle);
            tracing::trace!(handle = handle.value(), "tick subscription finished");
        });

        // Registered while still holding the lock, so the task cannot
        // deregister itself before it is known.
        state.tasks.insert(handle, task);
        tracing::trace!(handle = handle.value(), ?period, "tick subscription started");
        handle
    }

    fn unsubscribe(&self, handle: TickHandle) {
        let task = self.state.lock().tasks.remove(&handle);
        if let Some(task) = task {
            task.abort();
            tracing::trace!(handle = handle.value(), "tick subscription cancelled");
        }
    }

    fn active_subscriptions(&self) -> usize {
        self.state.lock().tasks.len()
    }
}
