use indexmap::IndexSet;

use crate::error::{GanttError, GanttResult};

/// Vertical pixel range allocated to one row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub top: f64,
    pub height: f64,
}

/// Equal-band partition of `[0, height]` over ordered row names.
///
/// The n bands are contiguous and cover the full height with no gaps or
/// overlaps; each band is `height / n` tall. Row order follows insertion
/// order of the names.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    rows: IndexSet<String>,
    height: f64,
}

impl BandScale {
    pub fn new<I, S>(names: I, height: f64) -> GanttResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !height.is_finite() || height < 0.0 {
            return Err(GanttError::InvalidData(format!(
                "band scale height must be finite and >= 0, got {height}"
            )));
        }

        let mut rows = IndexSet::new();
        for name in names {
            let name = name.into();
            if !rows.insert(name.clone()) {
                return Err(GanttError::InvalidConfig(format!(
                    "duplicate activity name `{name}`"
                )));
            }
        }

        Ok(Self { rows, height })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Height of one band; 0 when there are no rows.
    #[must_use]
    pub fn band_height(&self) -> f64 {
        if self.rows.is_empty() {
            0.0
        } else {
            self.height / self.rows.len() as f64
        }
    }

    /// Band for one row name. Unknown names have no defined band and are
    /// rejected rather than defaulted to band zero.
    pub fn band(&self, name: &str) -> GanttResult<Band> {
        let index = self
            .rows
            .get_index_of(name)
            .ok_or_else(|| GanttError::UnknownActivity(name.to_owned()))?;
        let band_height = self.band_height();
        Ok(Band {
            top: index as f64 * band_height,
            height: band_height,
        })
    }

    /// All bands in row order.
    pub fn bands(&self) -> impl Iterator<Item = (&str, Band)> + '_ {
        let band_height = self.band_height();
        self.rows.iter().enumerate().map(move |(index, name)| {
            (
                name.as_str(),
                Band {
                    top: index as f64 * band_height,
                    height: band_height,
                },
            )
        })
    }
}
