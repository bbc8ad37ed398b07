//! Contest lifecycle timing.
//!
//! The feed anchors the contest start at epoch zero. Submissions are placed
//! by their relative time, so their real wall-clock times never appear.

use chrono::DateTime;
use thiserror::Error;

use crate::feed;

/// Gap between the closing lifecycle events. The resolver expects it.
pub const RESOLVER_BUFFER_SECONDS: i64 = 300;

/// A time value that cannot be rendered as a timestamp.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("time out of range: {0} seconds")]
pub struct TimeOutOfRange(pub i64);

/// Lifecycle times in seconds from contest start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateTimes {
    pub started: i64,
    pub frozen: i64,
    pub ended: Option<i64>,
    pub thawed: i64,
    pub finalized: Option<i64>,
    pub end_of_updates: Option<i64>,
}

impl StateTimes {
    /// Derives lifecycle times from the contest duration and freeze window.
    ///
    /// `ended`, `finalized` and `end_of_updates` are only set when `closing`.
    pub fn compute(
        duration_seconds: i64,
        freeze_seconds: i64,
        closing: bool,
    ) -> Result<Self, TimeOutOfRange> {
        let after_buffer = |t: i64| {
            t.checked_add(RESOLVER_BUFFER_SECONDS)
                .ok_or(TimeOutOfRange(t))
        };
        let thawed = after_buffer(duration_seconds)?;
        let finalized = after_buffer(thawed)?;
        let end_of_updates = after_buffer(finalized)?;
        let frozen = duration_seconds
            .checked_sub(freeze_seconds)
            .ok_or(TimeOutOfRange(duration_seconds))?;

        Ok(Self {
            started: 0,
            frozen,
            ended: closing.then_some(duration_seconds),
            thawed,
            finalized: closing.then_some(finalized),
            end_of_updates: closing.then_some(end_of_updates),
        })
    }

    /// Renders the times as a feed `state` payload.
    pub fn to_state(&self) -> Result<feed::State, TimeOutOfRange> {
        let iso = |s: Option<i64>| s.map(epoch_to_iso).transpose();
        Ok(feed::State {
            started: Some(epoch_to_iso(self.started)?),
            frozen: Some(epoch_to_iso(self.frozen)?),
            ended: iso(self.ended)?,
            thawed: Some(epoch_to_iso(self.thawed)?),
            finalized: iso(self.finalized)?,
            end_of_updates: iso(self.end_of_updates)?,
        })
    }
}

/// Formats epoch seconds as a feed timestamp, e.g. `1970-01-01T01:00:00.000+00`.
pub fn epoch_to_iso(seconds: i64) -> Result<String, TimeOutOfRange> {
    let dt = DateTime::from_timestamp(seconds, 0).ok_or(TimeOutOfRange(seconds))?;
    Ok(format!("{}+00", dt.format("%Y-%m-%dT%H:%M:%S%.3f")))
}

/// Formats a duration or contest-relative time, e.g. `05:00:00.000`.
///
/// Hours are not wrapped at 24.
#[must_use]
pub fn contest_time(seconds: i64) -> String {
    let sign = if seconds < 0 { "-" } else { "" };
    let total = seconds.unsigned_abs();
    let (hours, minutes, secs) = (total / 3600, total % 3600 / 60, total % 60);
    format!("{sign}{hours:02}:{minutes:02}:{secs:02}.000")
}
