use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;

//
// ─── WALL CLOCK ────────────────────────────────────────────────────────────────
//

/// Wall-clock abstraction so note timestamps and intake receipts stay
/// deterministic in tests.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    #[default]
    System,
    Fixed(DateTime<Utc>),
}

impl Clock {
    #[must_use]
    pub fn system() -> Self {
        Self::System
    }

    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(t) => *t,
        }
    }
}

/// Deterministic timestamp for tests (2023-11-14T22:13:20Z).
pub const FIXED_TEST_TIMESTAMP: i64 = 1_700_000_000;

/// # Panics
///
/// Panics if the fixed timestamp cannot be represented.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(FIXED_TEST_TIMESTAMP, 0)
        .expect("fixed timestamp should be valid")
}

//
// ─── TICK SOURCE ───────────────────────────────────────────────────────────────
//

/// Callback run once per elapsed interval. Returning `Break` ends the
/// subscription from the source side.
pub type TickCallback = Box<dyn FnMut() -> ControlFlow<()> + Send + 'static>;

/// Opaque handle for one live tick subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickHandle(u64);

impl TickHandle {
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// A recurring tick provider.
///
/// `unsubscribe` with a handle that already ended (or never existed) is a no-op.
pub trait TimeSource: Send + Sync {
    fn subscribe(&self, interval: Duration, on_tick: TickCallback) -> TickHandle;

    fn unsubscribe(&self, handle: TickHandle);

    /// Number of subscriptions that can still fire.
    fn active_subscriptions(&self) -> usize;
}

struct ManualSubscription {
    handle: TickHandle,
    interval: Duration,
    elapsed: Duration,
    on_tick: TickCallback,
}

#[derive(Default)]
struct ManualState {
    next_id: u64,
    subscriptions: Vec<ManualSubscription>,
    in_flight: Vec<TickHandle>,
    cancelled: Vec<TickHandle>,
}

/// Time source driven by hand. Nothing fires until `advance` is called.
#[derive(Clone, Default)]
pub struct ManualTimeSource {
    state: Arc<Mutex<ManualState>>,
}

impl ManualTimeSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward, firing every subscription once per whole interval
    /// that fits in the accumulated elapsed time.
    ///
    /// Callbacks run without the internal lock held, so they may subscribe
    /// or unsubscribe freely.
    pub fn advance(&self, by: Duration) {
        let mut running = {
            let mut state = self.state.lock();
            let taken = std::mem::take(&mut state.subscriptions);
            state.in_flight = taken.iter().map(|sub| sub.handle).collect();
            taken
        };

        let mut finished = Vec::new();
        for sub in &mut running {
            sub.elapsed += by;
            while sub.elapsed >= sub.interval {
                sub.elapsed -= sub.interval;
                if self.state.lock().cancelled.contains(&sub.handle) {
                    break;
                }
                if (sub.on_tick)().is_break() {
                    finished.push(sub.handle);
                    break;
                }
            }
        }

        let mut state = self.state.lock();
        let cancelled = std::mem::take(&mut state.cancelled);
        state.in_flight.clear();
        running.retain(|sub| !finished.contains(&sub.handle) && !cancelled.contains(&sub.handle));
        running.append(&mut state.subscriptions);
        state.subscriptions = running;
    }

    /// Advance by `n` whole seconds, one second at a time.
    pub fn advance_secs(&self, n: u64) {
        for _ in 0..n {
            self.advance(Duration::from_secs(1));
        }
    }
}

impl TimeSource for ManualTimeSource {
    fn subscribe(&self, interval: Duration, on_tick: TickCallback) -> TickHandle {
        let mut state = self.state.lock();
        state.next_id += 1;
        let handle = TickHandle::new(state.next_id);
        state.subscriptions.push(ManualSubscription {
            handle,
            interval: interval.max(Duration::from_millis(1)),
            elapsed: Duration::ZERO,
            on_tick,
        });
        handle
    }

    fn unsubscribe(&self, handle: TickHandle) {
        let mut state = self.state.lock();
        state.subscriptions.retain(|sub| sub.handle != handle);
        if state.in_flight.contains(&handle) {
            state.cancelled.push(handle);
        }
    }

    fn active_subscriptions(&self) -> usize {
        let state = self.state.lock();
        let in_flight = state
            .in_flight
            .iter()
            .filter(|handle| !state.cancelled.contains(handle))
            .count();
        state.subscriptions.len() + in_flight
    }
}
