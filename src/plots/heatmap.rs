//! 2-D density heatmap over paired (x, y) samples.
//!
//! Shares the accumulation and quantization engine with the scatter plot;
//! the heatmap is the reading of the same grid as area density rather than
//! individual markers, and is typically used with smoothing enabled so the
//! tiers shade smoothly across neighboring cells.

use crate::config::PlotConfig;
use crate::error::{Error, Result};
use crate::legend;
use crate::model::PlotModel;
use crate::plots::density::DensityGrid;
use crate::plots::PlotKind;
use crate::series::{DataSeries, Range};

/// Density heatmap of two equally long data series.
#[derive(Debug, Clone)]
pub struct Heatmap {
    x: DataSeries,
    y: DataSeries,
    x_range: Range,
    y_range: Range,
    width: usize,
    height: usize,
    smoothing: bool,
    legend: bool,
}

impl Heatmap {
    /// Build a heatmap, validating configuration and pairing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] when the series differ in
    /// length, [`Error::OutOfRangeConfig`] for invalid dimensions, and
    /// [`Error::InvalidRange`] when user bounds invert an axis range.
    pub fn new(x: DataSeries, y: DataSeries, config: &PlotConfig) -> Result<Self> {
        config.validate()?;
        if x.len() != y.len() {
            return Err(Error::DimensionMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        let (x_min, x_max) = x.min_max();
        let x_range = Range { min: x_min, max: x_max }.with_overrides(config.min, config.max)?;
        let (y_min, y_max) = y.min_max();
        let y_range =
            Range { min: y_min, max: y_max }.with_overrides(config.min_y, config.max_y)?;

        Ok(Self {
            x,
            y,
            x_range,
            y_range,
            width: config.width,
            height: config.height,
            smoothing: config.smoothing,
            legend: config.legend,
        })
    }

    /// Horizontal display range.
    #[must_use]
    pub const fn x_range(&self) -> Range {
        self.x_range
    }

    /// Vertical display range.
    #[must_use]
    pub const fn y_range(&self) -> Range {
        self.y_range
    }

    /// Accumulate the samples into a density grid.
    #[must_use]
    pub fn grid(&self) -> DensityGrid {
        DensityGrid::build(
            self.x.values(),
            self.y.values(),
            self.width,
            self.height,
            self.x_range,
            self.y_range,
            self.smoothing,
        )
    }

    /// Exactly `height` rendered rows of `width` characters, top row first.
    #[must_use]
    pub fn rows(&self) -> Vec<String> {
        self.grid().render_rows()
    }

    /// The rendered rows tied to both axis ranges and series names.
    #[must_use]
    pub fn model(&self) -> PlotModel {
        PlotModel::new(
            PlotKind::Heatmap,
            self.rows(),
            vec![self.x.name().to_string(), self.y.name().to_string()],
            self.x_range,
            Some(self.y_range),
        )
    }

    /// Assemble the printable plot text, legend included when configured.
    #[must_use]
    pub fn to_text(&self) -> String {
        let rows = self.rows();
        if self.legend {
            legend::grid_text(
                self.x.name(),
                self.y.name(),
                &rows,
                self.x_range,
                self.y_range,
                self.width,
            )
        } else {
            legend::bare_text(&rows)
        }
    }
}
