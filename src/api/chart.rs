use tracing::debug;

use crate::config::{GanttConfig, GanttConfigPatch, ResolvedConfig};
use crate::error::GanttResult;
use crate::layout::LayoutEngine;
use crate::render::{GanttFrame, Renderer};

/// Two-call host surface: [`GanttChart::init`] resolves configuration once,
/// [`GanttChart::draw`] lays out and hands the frame to the backend.
///
/// Each chart instance owns its resolved configuration; instances share
/// nothing.
#[derive(Debug, Clone)]
pub struct GanttChart {
    config: ResolvedConfig,
}

impl GanttChart {
    /// Merges `overrides` onto the default configuration and validates the
    /// result. Fails fast on malformed options and on events referencing
    /// unknown activities.
    pub fn init(overrides: GanttConfigPatch) -> GanttResult<Self> {
        Ok(Self {
            config: GanttConfig::resolve(overrides)?,
        })
    }

    /// Builds a chart from a fully explicit configuration tree.
    pub fn from_config(config: GanttConfig) -> GanttResult<Self> {
        Ok(Self {
            config: config.into_resolved()?,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    /// Runs layout for the current configuration.
    pub fn frame(&self) -> GanttResult<GanttFrame> {
        LayoutEngine::new(&self.config).build_frame()
    }

    /// Lays out and paints through `renderer`.
    pub fn draw<R: Renderer>(&self, renderer: &mut R) -> GanttResult<()> {
        let frame = self.frame()?;
        debug!(
            node = %self.config.node,
            rows = frame.rows.len(),
            ticks = frame.ticks.len(),
            bars = frame.bars.len(),
            "draw"
        );
        renderer.render(&frame)
    }
}
