use std::fmt::Write as _;

use chrono::{DateTime, Duration, Months, Utc};
use serde::{Deserialize, Serialize};

use crate::core::types::unix_seconds_to_datetime;
use crate::error::{GanttError, GanttResult};

/// Step unit used to generate time-axis ticks.
///
/// Serialized externally tagged, e.g. `{"hours": 2}` or `{"days": 1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimeInterval {
    Seconds(u32),
    Minutes(u32),
    Hours(u32),
    Days(u32),
    Weeks(u32),
    Months(u32),
}

impl Default for TimeInterval {
    fn default() -> Self {
        Self::Hours(1)
    }
}

impl TimeInterval {
    pub fn validate(self) -> GanttResult<()> {
        if self.step_count() == 0 {
            return Err(GanttError::InvalidConfig(
                "tick interval step must be >= 1".to_owned(),
            ));
        }
        Ok(())
    }

    fn step_count(self) -> u32 {
        match self {
            Self::Seconds(count)
            | Self::Minutes(count)
            | Self::Hours(count)
            | Self::Days(count)
            | Self::Weeks(count)
            | Self::Months(count) => count,
        }
    }

    fn advance(self, tick: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Self::Seconds(count) => tick.checked_add_signed(Duration::seconds(i64::from(count))),
            Self::Minutes(count) => tick.checked_add_signed(Duration::minutes(i64::from(count))),
            Self::Hours(count) => tick.checked_add_signed(Duration::hours(i64::from(count))),
            Self::Days(count) => tick.checked_add_signed(Duration::days(i64::from(count))),
            Self::Weeks(count) => tick.checked_add_signed(Duration::weeks(i64::from(count))),
            Self::Months(count) => tick.checked_add_months(Months::new(count)),
        }
    }

    /// Ticks across `[start, end]` (Unix seconds), starting at `start` and
    /// stepping until the range end is passed. Both edges are inclusive; a
    /// zero-length range yields exactly one tick.
    pub fn walk(self, start: f64, end: f64) -> GanttResult<TickWalk> {
        self.validate()?;
        let start = unix_seconds_to_datetime(start)?;
        let end = unix_seconds_to_datetime(end)?;
        if end < start {
            return Err(GanttError::InvalidData(
                "tick range must be ordered".to_owned(),
            ));
        }

        Ok(TickWalk {
            next: Some(start),
            end,
            interval: self,
        })
    }
}

/// Lazy, finite tick sequence. Cloning restarts the walk from wherever the
/// clone was taken, so a freshly built walk can be replayed any number of
/// times.
#[derive(Debug, Clone)]
pub struct TickWalk {
    next: Option<DateTime<Utc>>,
    end: DateTime<Utc>,
    interval: TimeInterval,
}

impl Iterator for TickWalk {
    type Item = DateTime<Utc>;

    fn next(&mut self) -> Option<Self::Item> {
        let tick = self.next?;
        if tick > self.end {
            self.next = None;
            return None;
        }
        // Stepping past the representable datetime range ends the walk.
        self.next = self.interval.advance(tick);
        Some(tick)
    }
}

/// Formats one tick with a chrono format string, surfacing bad specifiers as
/// configuration errors instead of panicking mid-draw.
pub fn try_format_tick(tick: DateTime<Utc>, format: &str) -> GanttResult<String> {
    let mut label = String::new();
    write!(label, "{}", tick.format(format))
        .map_err(|_| GanttError::InvalidConfig(format!("invalid tick label format `{format}`")))?;
    Ok(label)
}
