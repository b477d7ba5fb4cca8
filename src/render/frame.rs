use crate::core::ChartSize;
use crate::error::GanttResult;
use crate::render::{AxisTick, BarRect, RowBand};

/// Backend-agnostic scene for one chart draw pass.
///
/// Rows, ticks, and bars are emitted in draw order; a zero-sized frame is
/// valid and simply draws nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct GanttFrame {
    pub size: ChartSize,
    pub rows: Vec<RowBand>,
    pub ticks: Vec<AxisTick>,
    pub bars: Vec<BarRect>,
}

impl GanttFrame {
    #[must_use]
    pub fn new(size: ChartSize) -> Self {
        Self {
            size,
            rows: Vec::new(),
            ticks: Vec::new(),
            bars: Vec::new(),
        }
    }

    pub fn validate(&self) -> GanttResult<()> {
        self.size.validate()?;
        for row in &self.rows {
            row.validate()?;
        }
        for tick in &self.ticks {
            tick.validate()?;
        }
        for bar in &self.bars {
            bar.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.ticks.is_empty() && self.bars.is_empty()
    }
}
