#![forbid(unsafe_code)]

pub mod model;
pub mod navigator;
pub mod time;
pub mod timer;

pub use navigator::{DeckNavigator, NavigatorState};
pub use time::{Clock, ManualTimeSource, TickCallback, TickHandle, TimeSource};
pub use timer::{
    CountdownTimer, DEFAULT_DURATION_SECS, TICK_INTERVAL, TimerPhase, TimerState, format_mm_ss,
    parse_mm_ss,
};
