//! gantt-rs: renderer-agnostic Gantt chart layout engine.
//!
//! The crate turns named activity rows, timed events, and display options
//! into pixel-space geometry: chart dimensions, per-row bands, time-axis
//! ticks, and bar rectangles with centered label offsets. The result is a
//! backend-neutral [`render::GanttFrame`] consumed by a pluggable
//! [`render::Renderer`]; painting, scroll sync, and tooltip wiring stay in
//! the host adapter.

pub mod api;
pub mod config;
pub mod core;
pub mod error;
pub mod layout;
pub mod render;
pub mod telemetry;

pub use api::GanttChart;
pub use config::{GanttConfig, GanttConfigPatch, ResolvedConfig};
pub use error::{GanttError, GanttResult};
