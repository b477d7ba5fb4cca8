use crate::error::GanttResult;
use crate::render::{GanttFrame, Renderer};

/// No-op renderer used by tests and headless layout runs.
///
/// It still validates frame content so callers can catch invalid geometry
/// before a real backend is wired in.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_row_count: usize,
    pub last_tick_count: usize,
    pub last_bar_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &GanttFrame) -> GanttResult<()> {
        frame.validate()?;
        self.last_row_count = frame.rows.len();
        self.last_tick_count = frame.ticks.len();
        self.last_bar_count = frame.bars.len();
        Ok(())
    }
}
