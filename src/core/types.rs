use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{GanttError, GanttResult};
use crate::render::Color;

/// Content size of the chart plot area in pixels.
///
/// Dimensions are `f64` because dynamic sizing derives them from fractional
/// tick distances and element heights. Zero-sized charts are valid and draw
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartSize {
    pub width: f64,
    pub height: f64,
}

impl ChartSize {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn validate(self) -> GanttResult<()> {
        for (side, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_finite() || value < 0.0 {
                return Err(GanttError::InvalidData(format!(
                    "chart {side} must be finite and >= 0, got {value}"
                )));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}

pub fn unix_seconds_to_datetime(seconds: f64) -> GanttResult<DateTime<Utc>> {
    if !seconds.is_finite() {
        return Err(GanttError::InvalidData(
            "timestamp must be finite".to_owned(),
        ));
    }
    DateTime::from_timestamp_millis((seconds * 1000.0).round() as i64)
        .ok_or_else(|| GanttError::InvalidData(format!("timestamp {seconds} is out of range")))
}

/// One row on the categorical axis. The name is the unique row key; list
/// order is row order, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Activity {
    pub name: String,
    /// Shown by host tooltips when hovering the row label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Activity {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// One time-bounded bar tied to an activity row.
///
/// `start` and `end` are Unix seconds; `start <= end` is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GanttEvent {
    pub activity: String,
    pub text: String,
    pub start: f64,
    pub end: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_color: Option<Color>,
}

impl GanttEvent {
    #[must_use]
    pub fn new(activity: impl Into<String>, text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            activity: activity.into(),
            text: text.into(),
            start,
            end,
            fill_color: None,
            stroke_color: None,
        }
    }

    #[must_use]
    pub fn from_datetimes(
        activity: impl Into<String>,
        text: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        Self::new(
            activity,
            text,
            datetime_to_unix_seconds(start),
            datetime_to_unix_seconds(end),
        )
    }

    #[must_use]
    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_stroke_color(mut self, color: Color) -> Self {
        self.stroke_color = Some(color);
        self
    }

    pub fn validate(&self) -> GanttResult<()> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(GanttError::InvalidData(format!(
                "event `{}` has non-finite times",
                self.text
            )));
        }
        if self.end < self.start {
            return Err(GanttError::InvalidData(format!(
                "event `{}` ends before it starts ({} > {})",
                self.text, self.start, self.end
            )));
        }
        if let Some(fill) = self.fill_color {
            fill.validate()?;
        }
        if let Some(stroke) = self.stroke_color {
            stroke.validate()?;
        }
        Ok(())
    }
}
