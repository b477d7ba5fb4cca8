use serde::{Deserialize, Serialize};

use crate::core::{Activity, GanttEvent, TimeInterval};
use crate::error::{GanttError, GanttResult};

/// Full configuration tree with every option present.
///
/// `GanttConfig::default()` is the baseline that hosts override through
/// [`super::GanttConfigPatch`]. The type is serializable so applications can
/// persist/load chart setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GanttConfig {
    /// Identifier of the host container the rendering backend anchors to.
    pub node: String,
    /// Static chart width in pixels; ignored when `x_axis.dynamic_width`.
    pub width: f64,
    /// Static chart height in pixels; ignored when `y_axis.dynamic_height`.
    pub height: f64,
    /// Explicit time-domain start (Unix seconds). Inferred from data when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<f64>,
    /// Explicit time-domain end (Unix seconds). Inferred from data when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<f64>,
    pub y_axis: YAxisConfig,
    pub x_axis: XAxisConfig,
    /// Row definitions; list order is row order.
    pub activities: Vec<Activity>,
    /// Timed events plotted as bars.
    pub data: Vec<GanttEvent>,
}

impl Default for GanttConfig {
    fn default() -> Self {
        Self {
            node: "gantt".to_owned(),
            width: 800.0,
            height: 400.0,
            start_time: None,
            end_time: None,
            y_axis: YAxisConfig::default(),
            x_axis: XAxisConfig::default(),
            activities: Vec::new(),
            data: Vec::new(),
        }
    }
}

impl GanttConfig {
    /// Sets the host container identifier.
    #[must_use]
    pub fn with_node(mut self, node: impl Into<String>) -> Self {
        self.node = node.into();
        self
    }

    /// Sets static chart dimensions.
    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets an explicit time domain instead of inferring it from data.
    #[must_use]
    pub fn with_time_domain(mut self, start_time: f64, end_time: f64) -> Self {
        self.start_time = Some(start_time);
        self.end_time = Some(end_time);
        self
    }

    /// Replaces the activity rows.
    #[must_use]
    pub fn with_activities(mut self, activities: Vec<Activity>) -> Self {
        self.activities = activities;
        self
    }

    /// Replaces the event data.
    #[must_use]
    pub fn with_data(mut self, data: Vec<GanttEvent>) -> Self {
        self.data = data;
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> GanttResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GanttError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes a full config tree from JSON.
    pub fn from_json_str(input: &str) -> GanttResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| GanttError::InvalidConfig(format!("failed to parse config: {e}")))
    }
}

/// Categorical (row) axis options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct YAxisConfig {
    /// Width reserved for row labels, in pixels.
    pub width: f64,
    /// Derive chart height as `element_height * activity count`.
    pub dynamic_height: bool,
    /// Per-row height used by dynamic sizing.
    pub element_height: f64,
}

impl Default for YAxisConfig {
    fn default() -> Self {
        Self {
            width: 80.0,
            dynamic_height: true,
            element_height: 40.0,
        }
    }
}

/// Time axis options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct XAxisConfig {
    /// Height reserved for tick labels, in pixels.
    pub height: f64,
    /// Derive chart width as `tick_distance * tick count`.
    pub dynamic_width: bool,
    /// Horizontal pixels between adjacent ticks under dynamic sizing.
    pub tick_distance: f64,
    /// Step unit generating the tick sequence over the time domain.
    pub interval: TimeInterval,
    pub label: TickLabelConfig,
}

impl Default for XAxisConfig {
    fn default() -> Self {
        Self {
            height: 30.0,
            dynamic_width: true,
            tick_distance: 60.0,
            interval: TimeInterval::default(),
            label: TickLabelConfig::default(),
        }
    }
}

/// Tick label formatting plus the rotation/offset pair passed through to the
/// rendering backend unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TickLabelConfig {
    /// chrono format string, e.g. `%H:%M` or `%d.%m.%Y`.
    pub format: String,
    /// Rotation in degrees, applied by the backend around the tick anchor.
    pub rotation: f64,
    pub dx: f64,
    pub dy: f64,
}

impl Default for TickLabelConfig {
    fn default() -> Self {
        Self {
            format: "%H:%M".to_owned(),
            rotation: 0.0,
            dx: 0.0,
            dy: 0.0,
        }
    }
}
