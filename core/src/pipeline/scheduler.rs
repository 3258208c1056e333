//! Refresh throttling.
//!
//! Scanning every loaded entity is the expensive step of a refresh, so
//! the pipeline runs at a fixed cadence instead of every frame. The
//! interval is short enough that badge changes still read as near-real-
//! time. Time is always passed in by the caller; the scheduler never
//! consults a clock of its own.

use chrono::NaiveDateTime;

/// Seconds between full pipeline refreshes.
pub const REFRESH_INTERVAL_SECONDS: i64 = 5;

/// Decides when a full refresh may run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RefreshScheduler {
    last_refresh: Option<NaiveDateTime>,
}

impl RefreshScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// True on the first call ever and on any call at least
    /// [`REFRESH_INTERVAL_SECONDS`] after the last granted one. Granting
    /// stamps `now`, so a caller that is granted a refresh must perform it.
    pub fn should_refresh(&mut self, now: NaiveDateTime) -> bool {
        let due = match self.last_refresh {
            None => true,
            Some(last) => {
                now.signed_duration_since(last).num_seconds() >= REFRESH_INTERVAL_SECONDS
            }
        };
        if due {
            self.last_refresh = Some(now);
        }
        due
    }

    pub fn last_refresh(&self) -> Option<NaiveDateTime> {
        self.last_refresh
    }
}
