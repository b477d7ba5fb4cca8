mod options;
mod patch;
mod resolve;

pub use options::{GanttConfig, TickLabelConfig, XAxisConfig, YAxisConfig};
pub use patch::{GanttConfigPatch, TickLabelPatch, XAxisPatch, YAxisPatch};
pub use resolve::ResolvedConfig;
