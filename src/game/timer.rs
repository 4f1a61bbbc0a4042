//! Session Timer
//!
//! Start and finish timestamps for one play-through.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};

/// Elapsed play time in whole minutes and seconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ElapsedTime {
    /// Whole minutes
    pub minutes: u64,
    /// Remaining seconds (0-59)
    pub seconds: u8,
}

impl ElapsedTime {
    /// Split whole seconds into minutes and seconds.
    pub fn from_secs(total: u64) -> Self {
        Self {
            minutes: total / 60,
            seconds: (total % 60) as u8,
        }
    }

    /// Total whole seconds.
    pub fn as_secs(&self) -> u64 {
        self.minutes * 60 + u64::from(self.seconds)
    }
}

impl fmt::Display for ElapsedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.minutes, self.seconds)
    }
}

/// Start and finish timestamps of a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTimer {
    started_at: Option<DateTime<Utc>>,
    finished_at: Option<DateTime<Utc>>,
}

impl SessionTimer {
    /// Timer with neither timestamp set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the start of a session, clearing any previous finish.
    pub fn start(&mut self, now: DateTime<Utc>) {
        self.started_at = Some(now);
        self.finished_at = None;
    }

    /// Record the finish time.
    ///
    /// Only the first call has an effect; returns whether this call recorded it.
    /// A finish earlier than the start (clock stepped backwards) is clamped to
    /// the start.
    pub fn finish(&mut self, now: DateTime<Utc>) -> bool {
        if self.finished_at.is_some() {
            return false;
        }
        let finish = match self.started_at {
            Some(start) if now < start => start,
            _ => now,
        };
        self.finished_at = Some(finish);
        true
    }

    /// Clear both timestamps.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// When the session started.
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    /// When the session finished.
    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    /// Elapsed whole seconds between start and finish, truncated.
    ///
    /// `None` unless both timestamps are set.
    pub fn elapsed(&self) -> Option<ElapsedTime> {
        let start = self.started_at?;
        let finish = self.finished_at?;
        let secs = (finish - start).num_seconds().max(0) as u64;
        Some(ElapsedTime::from_secs(secs))
    }
}
