mod chart;

pub use chart::GanttChart;
