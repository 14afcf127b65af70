//! Countdown timer state machine.
//!
//! ```text
//!   Idle ──start──▶ Running ──(remaining hits 0)──▶ Expired
//!    ▲               │                                 │
//!    └────pause──────┘                                 │
//!    ▲                                                 │
//!    └──────────────────────reset──────────────────────┘
//! ```
//!
//! The timer itself knows nothing about wall time; whoever owns it feeds
//! `on_tick` once per elapsed second while it is running.

use std::time::Duration;

/// Length of one focus session.
pub const DEFAULT_DURATION_SECS: u32 = 25 * 60;

/// Tick period expected by `CountdownTimer::on_tick`.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerPhase {
    /// Paused with time left.
    Idle,
    Running,
    /// Reached zero; only `reset` leaves this phase.
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerState {
    pub remaining_seconds: u32,
    pub running: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownTimer {
    remaining_seconds: u32,
    running: bool,
}

impl Default for CountdownTimer {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_SECS)
    }
}

impl CountdownTimer {
    /// A paused timer holding `duration_secs`.
    #[must_use]
    pub fn new(duration_secs: u32) -> Self {
        Self {
            remaining_seconds: duration_secs,
            running: false,
        }
    }

    #[must_use]
    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn state(&self) -> TimerState {
        TimerState {
            remaining_seconds: self.remaining_seconds,
            running: self.running,
        }
    }

    #[must_use]
    pub fn phase(&self) -> TimerPhase {
        if self.running {
            TimerPhase::Running
        } else if self.remaining_seconds == 0 {
            TimerPhase::Expired
        } else {
            TimerPhase::Idle
        }
    }

    /// Returns true if the timer moved from Idle to Running.
    pub fn start(&mut self) -> bool {
        if self.running || self.remaining_seconds == 0 {
            return false;
        }
        self.running = true;
        true
    }

    /// Returns true if the timer was running.
    pub fn pause(&mut self) -> bool {
        std::mem::replace(&mut self.running, false)
    }

    /// Start when paused, pause when running. Returns the new running flag.
    pub fn toggle(&mut self) -> bool {
        if self.running {
            self.pause();
        } else {
            self.start();
        }
        self.running
    }

    /// Stop and load a fresh duration.
    ///
    /// Negative durations clamp to zero, which leaves the timer Expired.
    /// Returns the duration actually loaded.
    pub fn reset(&mut self, duration_secs: i64) -> u32 {
        let clamped = u32::try_from(duration_secs.max(0)).unwrap_or(u32::MAX);
        self.running = false;
        self.remaining_seconds = clamped;
        clamped
    }

    /// Reset to the default 25 minute session.
    pub fn reset_default(&mut self) -> u32 {
        self.reset(i64::from(DEFAULT_DURATION_SECS))
    }

    /// Consume one elapsed second.
    ///
    /// Ignored unless running. Hitting zero stops the timer.
    pub fn on_tick(&mut self) -> TimerPhase {
        if self.running && self.remaining_seconds > 0 {
            self.remaining_seconds -= 1;
        }
        if self.remaining_seconds == 0 {
            self.running = false;
        }
        self.phase()
    }

    #[must_use]
    pub fn format_display(&self) -> String {
        format_mm_ss(self.remaining_seconds)
    }

    #[must_use]
    pub fn status_label(&self) -> &'static str {
        if self.remaining_seconds > 0 {
            "Focus Time"
        } else {
            "Time for a break!"
        }
    }
}

/// `MM:SS` with both parts zero-padded; minutes grow past two digits as needed.
#[must_use]
pub fn format_mm_ss(total_seconds: u32) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Inverse of [`format_mm_ss`]. Rejects anything `format_mm_ss` would not produce.
#[must_use]
pub fn parse_mm_ss(display: &str) -> Option<u32> {
    let (minutes, seconds) = display.split_once(':')?;
    if minutes.len() < 2
        || seconds.len() != 2
        || !minutes.bytes().all(|b| b.is_ascii_digit())
        || !seconds.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    let minutes: u32 = minutes.parse().ok()?;
    let seconds: u32 = seconds.parse().ok()?;
    if seconds >= 60 {
        return None;
    }
    minutes.checked_mul(60)?.checked_add(seconds)
}
