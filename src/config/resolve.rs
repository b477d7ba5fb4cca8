use std::collections::HashSet;

use tracing::debug;

use crate::core::types::unix_seconds_to_datetime;
use crate::core::{Activity, GanttEvent, TimeScale, try_format_tick};
use crate::error::{GanttError, GanttResult};

use super::{GanttConfig, GanttConfigPatch, XAxisConfig, YAxisConfig};

/// Validated configuration with the time domain resolved.
///
/// Built once, then threaded explicitly into every layout call and never
/// mutated. Repeated draws from the same value are idempotent.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub node: String,
    pub width: f64,
    pub height: f64,
    /// Active `[start, end]` window, explicit or inferred from events.
    /// `None` when there is no data and no explicit domain.
    pub time_domain: Option<(f64, f64)>,
    pub y_axis: YAxisConfig,
    pub x_axis: XAxisConfig,
    pub activities: Vec<Activity>,
    pub events: Vec<GanttEvent>,
}

impl GanttConfig {
    /// Merges `overrides` onto the default tree and resolves the result.
    pub fn resolve(overrides: GanttConfigPatch) -> GanttResult<ResolvedConfig> {
        Self::default().apply(overrides).into_resolved()
    }

    /// Validates this tree and resolves the active time domain.
    ///
    /// Malformed options and events referencing unknown activities are
    /// rejected here so no geometry is ever computed from bad input.
    pub fn into_resolved(self) -> GanttResult<ResolvedConfig> {
        validate_dimension("width", self.width)?;
        validate_dimension("height", self.height)?;
        validate_dimension("yAxis.width", self.y_axis.width)?;
        validate_dimension("yAxis.elementHeight", self.y_axis.element_height)?;
        validate_dimension("xAxis.height", self.x_axis.height)?;
        validate_dimension("xAxis.tickDistance", self.x_axis.tick_distance)?;
        self.x_axis.interval.validate()?;

        // Probe the label format once so a bad format fails at init, not mid-draw.
        try_format_tick(unix_seconds_to_datetime(0.0)?, &self.x_axis.label.format)?;
        for (name, value) in [
            ("xAxis.label.rotation", self.x_axis.label.rotation),
            ("xAxis.label.dx", self.x_axis.label.dx),
            ("xAxis.label.dy", self.x_axis.label.dy),
        ] {
            if !value.is_finite() {
                return Err(GanttError::InvalidConfig(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }

        let mut names = HashSet::with_capacity(self.activities.len());
        for activity in &self.activities {
            if activity.name.is_empty() {
                return Err(GanttError::InvalidConfig(
                    "activity names must not be empty".to_owned(),
                ));
            }
            if !names.insert(activity.name.as_str()) {
                return Err(GanttError::InvalidConfig(format!(
                    "duplicate activity name `{}`",
                    activity.name
                )));
            }
        }

        for event in &self.data {
            event.validate()?;
            if !names.contains(event.activity.as_str()) {
                return Err(GanttError::UnknownActivity(event.activity.clone()));
            }
        }

        let inferred = TimeScale::infer_domain(&self.data)?;
        let time_domain = resolve_domain(self.start_time, self.end_time, inferred)?;
        debug!(
            node = %self.node,
            activities = self.activities.len(),
            events = self.data.len(),
            ?time_domain,
            "resolved configuration"
        );

        Ok(ResolvedConfig {
            node: self.node,
            width: self.width,
            height: self.height,
            time_domain,
            y_axis: self.y_axis,
            x_axis: self.x_axis,
            activities: self.activities,
            events: self.data,
        })
    }
}

/// Each endpoint prefers the explicit config value over the inferred one.
fn resolve_domain(
    start_time: Option<f64>,
    end_time: Option<f64>,
    inferred: Option<(f64, f64)>,
) -> GanttResult<Option<(f64, f64)>> {
    let start = start_time.or(inferred.map(|domain| domain.0));
    let end = end_time.or(inferred.map(|domain| domain.1));

    match (start, end) {
        (Some(start), Some(end)) => {
            if !start.is_finite() || !end.is_finite() {
                return Err(GanttError::InvalidConfig(
                    "time domain must be finite".to_owned(),
                ));
            }
            if end < start {
                return Err(GanttError::InvalidConfig(format!(
                    "time domain is reversed: start {start} > end {end}"
                )));
            }
            Ok(Some((start, end)))
        }
        (None, None) => Ok(None),
        _ => Err(GanttError::InvalidConfig(
            "time domain needs both endpoints; only one of startTime/endTime could be resolved"
                .to_owned(),
        )),
    }
}

fn validate_dimension(name: &str, value: f64) -> GanttResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(GanttError::InvalidConfig(format!(
            "{name} must be finite and >= 0, got {value}"
        )));
    }
    Ok(())
}
