use tracing::{debug, trace};

use crate::config::ResolvedConfig;
use crate::core::types::datetime_to_unix_seconds;
use crate::core::{BandScale, ChartSize, TimeScale, try_format_tick};
use crate::error::GanttResult;
use crate::render::{AxisTick, BarLabel, BarRect, GanttFrame, RowBand};

/// Pure geometry pass over one resolved configuration.
///
/// The engine holds no state of its own; every call recomputes from the
/// borrowed config, so repeated layout runs are idempotent.
#[derive(Debug, Clone, Copy)]
pub struct LayoutEngine<'a> {
    config: &'a ResolvedConfig,
}

impl<'a> LayoutEngine<'a> {
    #[must_use]
    pub fn new(config: &'a ResolvedConfig) -> Self {
        Self { config }
    }

    /// Number of ticks the configured interval yields over the resolved
    /// domain; 0 when there is no domain.
    pub fn tick_count(&self) -> GanttResult<usize> {
        let Some((start, end)) = self.config.time_domain else {
            return Ok(0);
        };
        Ok(self.config.x_axis.interval.walk(start, end)?.count())
    }

    /// Chart content size, either static or derived from row/tick counts.
    ///
    /// Zero activities under dynamic height, or an empty domain under
    /// dynamic width, yield a zero-sized but valid chart.
    pub fn content_size(&self) -> GanttResult<ChartSize> {
        let height = if self.config.y_axis.dynamic_height {
            self.config.y_axis.element_height * self.config.activities.len() as f64
        } else {
            self.config.height
        };

        let width = if self.config.x_axis.dynamic_width {
            self.config.x_axis.tick_distance * self.tick_count()? as f64
        } else {
            self.config.width
        };

        let size = ChartSize::new(width, height);
        size.validate()?;
        Ok(size)
    }

    /// Builds the draw-command frame: row bands in activity order, axis
    /// ticks, and one bar per event with a centered label offset.
    pub fn build_frame(&self) -> GanttResult<GanttFrame> {
        let size = self.content_size()?;
        let rows = BandScale::new(
            self.config.activities.iter().map(|a| a.name.clone()),
            size.height,
        )?;

        let mut frame = GanttFrame::new(size);
        for activity in &self.config.activities {
            let band = rows.band(&activity.name)?;
            frame.rows.push(RowBand {
                name: activity.name.clone(),
                description: activity.description.clone(),
                top: band.top,
                height: band.height,
            });
        }

        if let Some((start, end)) = self.config.time_domain {
            let scale = TimeScale::new(start, end)?;
            let label = &self.config.x_axis.label;
            for tick in self.config.x_axis.interval.walk(start, end)? {
                frame.ticks.push(AxisTick {
                    x: scale.time_to_pixel(datetime_to_unix_seconds(tick), size.width),
                    label: try_format_tick(tick, &label.format)?,
                    rotation: label.rotation,
                    dx: label.dx,
                    dy: label.dy,
                });
            }

            for event in &self.config.events {
                let band = rows.band(&event.activity)?;
                let x = scale.time_to_pixel(event.start, size.width);
                let width = scale.time_to_pixel(event.end, size.width) - x;
                trace!(activity = %event.activity, x, width, "layout bar");
                frame.bars.push(BarRect {
                    x,
                    y: band.top,
                    width,
                    height: band.height,
                    fill: event.fill_color,
                    stroke: event.stroke_color,
                    label: BarLabel {
                        text: event.text.clone(),
                        dx: width / 2.0,
                        dy: band.height / 2.0,
                    },
                });
            }
        }

        debug!(
            width = size.width,
            height = size.height,
            rows = frame.rows.len(),
            ticks = frame.ticks.len(),
            bars = frame.bars.len(),
            "built gantt frame"
        );
        Ok(frame)
    }
}
