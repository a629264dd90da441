//! Rolling-window rate limiting for outbound model calls
//!
//! Two independent counters (per minute, per day), each paired with an
//! absolute reset instant. A counter is reset exactly once when the current
//! time reaches its reset instant, and the instant then advances one full
//! window from the reset moment. The clock is injected so tests can drive
//! the windows without real timers.

use crate::core::error::{HubError, RateScope, Result};
use std::sync::Mutex;
use std::time::{Duration, Instant};

const MINUTE_WINDOW: Duration = Duration::from_secs(60);
const DAY_WINDOW: Duration = Duration::from_secs(24 * 60 * 60);

/// Source of the current time
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Wall-clock time, used outside of tests
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

struct Windows {
    minute_count: u32,
    day_count: u32,
    minute_reset: Instant,
    day_reset: Instant,
}

/// Gates outbound model calls against per-minute and per-day budgets
///
/// State is Mutex-guarded so `check_and_consume` stays correct on a
/// multi-threaded runtime.
pub struct RateLimiter {
    per_minute: u32,
    per_day: u32,
    clock: Box<dyn Clock>,
    windows: Mutex<Windows>,
}

impl RateLimiter {
    pub fn new(per_minute: u32, per_day: u32) -> Self {
        Self::with_clock(per_minute, per_day, Box::new(SystemClock))
    }

    pub fn with_clock(per_minute: u32, per_day: u32, clock: Box<dyn Clock>) -> Self {
        let now = clock.now();
        Self {
            per_minute,
            per_day,
            clock,
            windows: Mutex::new(Windows {
                minute_count: 0,
                day_count: 0,
                minute_reset: now + MINUTE_WINDOW,
                day_reset: now + DAY_WINDOW,
            }),
        }
    }

    /// Consume one call from both budgets, or fail with the exhausted scope
    ///
    /// The day budget is checked before the minute budget: a caller over the
    /// daily limit should not be told to retry in a minute.
    pub fn check_and_consume(&self) -> Result<()> {
        let now = self.clock.now();
        let mut w = self.windows.lock().expect("rate limiter lock poisoned");

        if now >= w.minute_reset {
            w.minute_count = 0;
            w.minute_reset = now + MINUTE_WINDOW;
        }
        if now >= w.day_reset {
            w.day_count = 0;
            w.day_reset = now + DAY_WINDOW;
        }

        if w.day_count >= self.per_day {
            return Err(HubError::RateLimitExceeded {
                scope: RateScope::Day,
            });
        }
        if w.minute_count >= self.per_minute {
            return Err(HubError::RateLimitExceeded {
                scope: RateScope::Minute,
            });
        }

        w.minute_count += 1;
        w.day_count += 1;
        Ok(())
    }

    /// Current (minute, day) consumption, for the status surface
    pub fn counts(&self) -> (u32, u32) {
        let w = self.windows.lock().expect("rate limiter lock poisoned");
        (w.minute_count, w.day_count)
    }
}
