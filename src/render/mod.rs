mod frame;
mod null_renderer;
mod primitives;

pub use frame::GanttFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{AxisTick, BarLabel, BarRect, Color, RowBand};

use crate::error::GanttResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `GanttFrame` so
/// painting code stays isolated from layout and configuration logic.
pub trait Renderer {
    fn render(&mut self, frame: &GanttFrame) -> GanttResult<()>;
}
