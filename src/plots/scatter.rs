//! Scatter plot over paired (x, y) samples.
//!
//! Thin shell over [`DensityGrid`]: the samples are accumulated into the
//! grid and rendered through the shared density-tier quantization, so dense
//! clusters read darker than isolated points.

use crate::config::PlotConfig;
use crate::error::{Error, Result};
use crate::legend;
use crate::model::PlotModel;
use crate::plots::density::DensityGrid;
use crate::plots::PlotKind;
use crate::series::{DataSeries, Range};

/// Scatter plot of two equally long data series.
#[derive(Debug, Clone)]
pub struct Scatterplot {
    x: DataSeries,
    y: DataSeries,
    x_range: Range,
    y_range: Range,
    width: usize,
    height: usize,
    smoothing: bool,
    legend: bool,
}

impl Scatterplot {
    /// Build a scatter plot, validating configuration and pairing.
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
            PlotKind::Scatterplot,
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

#[cfg(test)]
mod tests {
    use super::*;

    fn series(name: &str, values: &[f64]) -> DataSeries {
        DataSeries::new(name, values.to_vec()).unwrap()
    }

    #[test]
    fn test_scatterplot_dimensions() {
        let plot = Scatterplot::new(
            series("x", &[1.0, 2.0, 3.0, 4.0]),
            series("y", &[4.0, 3.0, 2.0, 1.0]),
            &PlotConfig::default(),
        )
        .unwrap();
        let rows = plot.rows();
        assert_eq!(rows.len(), 20);
        for row in &rows {
            assert_eq!(row.chars().count(), 50);
        }
    }

    #[test]
    fn test_scatterplot_rejects_unequal_lengths() {
        let result = Scatterplot::new(
            series("x", &[1.0, 2.0, 3.0]),
            series("y", &[1.0, 2.0]),
            &PlotConfig::default(),
        );
        assert!(matches!(
            result,
            Err(Error::DimensionMismatch { x_len: 3, y_len: 2 })
        ));
    }

    #[test]
    fn test_scatterplot_axis_overrides() {
        let config = PlotConfig {
            min: Some(0.0),
            max: Some(10.0),
            min_y: Some(-1.0),
            max_y: Some(1.0),
            ..PlotConfig::default()
        };
        let plot = Scatterplot::new(
            series("x", &[1.0, 2.0]),
            series("y", &[0.1, 0.2]),
            &config,
        )
        .unwrap();
        assert_eq!(plot.x_range(), Range { min: 0.0, max: 10.0 });
        assert_eq!(plot.y_range(), Range { min: -1.0, max: 1.0 });
    }

    #[test]
    fn test_scatterplot_rejects_inverted_y_limits() {
        let config = PlotConfig {
            min_y: Some(5.0),
            max_y: Some(-5.0),
            ..PlotConfig::default()
        };
        let result = Scatterplot::new(
            series("x", &[1.0, 2.0]),
            series("y", &[1.0, 2.0]),
            &config,
        );
        assert!(matches!(result, Err(Error::InvalidRange { .. })));
    }

    #[test]
    fn test_scatterplot_model_carries_both_ranges() {
        let plot = Scatterplot::new(
            series("time", &[1.0, 2.0]),
            series("speed", &[3.0, 4.0]),
            &PlotConfig::default(),
        )
        .unwrap();
        let model = plot.model();
        assert_eq!(model.kind(), PlotKind::Scatterplot);
        assert_eq!(
            model.series_names(),
            ["time".to_string(), "speed".to_string()]
        );
        assert!(model.y_range().is_some());
    }
}
