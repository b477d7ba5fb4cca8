pub mod band_scale;
pub mod interval;
pub mod time_scale;
pub mod types;

pub use band_scale::{Band, BandScale};
pub use interval::{TickWalk, TimeInterval, try_format_tick};
pub use time_scale::TimeScale;
pub use types::{Activity, ChartSize, GanttEvent, datetime_to_unix_seconds, unix_seconds_to_datetime};
