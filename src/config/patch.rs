use serde::{Deserialize, Serialize};

use crate::core::{Activity, GanttEvent, TimeInterval};
use crate::error::{GanttError, GanttResult};

use super::{GanttConfig, TickLabelConfig, XAxisConfig, YAxisConfig};

/// Partial configuration merged over [`GanttConfig::default`].
///
/// Every field is optional and every nested section has its own patch type,
/// so overrides merge key-by-key at each nesting level. Scalars and arrays
/// (activities, data) replace the default wholesale. Unknown keys are
/// rejected during deserialization at every level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct GanttConfigPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<YAxisPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<XAxisPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activities: Option<Vec<Activity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<GanttEvent>>,
}

impl GanttConfigPatch {
    /// Deserializes overrides from JSON, rejecting unknown keys.
    pub fn from_json_str(input: &str) -> GanttResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            GanttError::InvalidConfig(format!("failed to parse config overrides: {e}"))
        })
    }

    #[must_use]
    pub fn with_node(mut self, node: impl Into<String>) -> Self {
        self.node = Some(node.into());
        self
    }

    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn with_time_domain(mut self, start_time: f64, end_time: f64) -> Self {
        self.start_time = Some(start_time);
        self.end_time = Some(end_time);
        self
    }

    #[must_use]
    pub fn with_y_axis(mut self, y_axis: YAxisPatch) -> Self {
        self.y_axis = Some(y_axis);
        self
    }

    #[must_use]
    pub fn with_x_axis(mut self, x_axis: XAxisPatch) -> Self {
        self.x_axis = Some(x_axis);
        self
    }

    #[must_use]
    pub fn with_activities(mut self, activities: Vec<Activity>) -> Self {
        self.activities = Some(activities);
        self
    }

    #[must_use]
    pub fn with_data(mut self, data: Vec<GanttEvent>) -> Self {
        self.data = Some(data);
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct YAxisPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_height: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element_height: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct XAxisPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_width: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick_distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<TimeInterval>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<TickLabelPatch>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct TickLabelPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dx: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dy: Option<f64>,
}

impl GanttConfig {
    /// Deep-merges `patch` onto `self`, returning a new tree.
    ///
    /// Every default key survives unless explicitly overridden; nested
    /// sections merge recursively.
    #[must_use]
    pub fn apply(self, patch: GanttConfigPatch) -> Self {
        Self {
            node: patch.node.unwrap_or(self.node),
            width: patch.width.unwrap_or(self.width),
            height: patch.height.unwrap_or(self.height),
            start_time: patch.start_time.or(self.start_time),
            end_time: patch.end_time.or(self.end_time),
            y_axis: self.y_axis.apply(patch.y_axis),
            x_axis: self.x_axis.apply(patch.x_axis),
            activities: patch.activities.unwrap_or(self.activities),
            data: patch.data.unwrap_or(self.data),
        }
    }
}

impl YAxisConfig {
    fn apply(self, patch: Option<YAxisPatch>) -> Self {
        let Some(patch) = patch else {
            return self;
        };
        Self {
            width: patch.width.unwrap_or(self.width),
            dynamic_height: patch.dynamic_height.unwrap_or(self.dynamic_height),
            element_height: patch.element_height.unwrap_or(self.element_height),
        }
    }
}

impl XAxisConfig {
    fn apply(self, patch: Option<XAxisPatch>) -> Self {
        let Some(patch) = patch else {
            return self;
        };
        Self {
            height: patch.height.unwrap_or(self.height),
            dynamic_width: patch.dynamic_width.unwrap_or(self.dynamic_width),
            tick_distance: patch.tick_distance.unwrap_or(self.tick_distance),
            interval: patch.interval.unwrap_or(self.interval),
            label: self.label.apply(patch.label),
        }
    }
}

impl TickLabelConfig {
    fn apply(self, patch: Option<TickLabelPatch>) -> Self {
        let Some(patch) = patch else {
            return self;
        };
        Self {
            format: patch.format.unwrap_or(self.format),
            rotation: patch.rotation.unwrap_or(self.rotation),
            dx: patch.dx.unwrap_or(self.dx),
            dy: patch.dy.unwrap_or(self.dy),
        }
    }
}
