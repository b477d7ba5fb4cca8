use crate::core::types::GanttEvent;
use crate::error::{GanttError, GanttResult};

/// Clamped linear map from the time domain onto `[0, width]` pixels.
///
/// Inputs before the domain start map to 0 and inputs after the domain end
/// map to `width`. A degenerate domain (`start == end`) maps every input to
/// 0 instead of dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    domain_start: f64,
    domain_end: f64,
}

impl TimeScale {
    pub fn new(domain_start: f64, domain_end: f64) -> GanttResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() {
            return Err(GanttError::InvalidData(
                "time domain must be finite".to_owned(),
            ));
        }
        if domain_end < domain_start {
            return Err(GanttError::InvalidData(format!(
                "time domain is reversed: {domain_start} > {domain_end}"
            )));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    /// Full-scan `(min(start), max(end))` over all events.
    ///
    /// Returns `None` for empty input so callers keep whatever domain was
    /// configured. Independent of input ordering and stable under duplicate
    /// timestamps.
    pub fn infer_domain(events: &[GanttEvent]) -> GanttResult<Option<(f64, f64)>> {
        if events.is_empty() {
            return Ok(None);
        }

        let mut start = f64::INFINITY;
        let mut end = f64::NEG_INFINITY;
        for event in events {
            event.validate()?;
            start = start.min(event.start);
            end = end.max(event.end);
        }
        Ok(Some((start, end)))
    }

    /// Builds a scale over the inferred domain, `None` when there is no data.
    pub fn from_events(events: &[GanttEvent]) -> GanttResult<Option<Self>> {
        match Self::infer_domain(events)? {
            Some((start, end)) => Ok(Some(Self::new(start, end)?)),
            None => Ok(None),
        }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.domain_end - self.domain_start
    }

    #[must_use]
    pub fn time_to_pixel(self, time: f64, width: f64) -> f64 {
        let span = self.span();
        if !time.is_finite() || span <= 0.0 || !width.is_finite() || width <= 0.0 {
            return 0.0;
        }

        let clamped = time.clamp(self.domain_start, self.domain_end);
        (clamped - self.domain_start) / span * width
    }
}
