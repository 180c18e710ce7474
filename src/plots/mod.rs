//! Plot types and dispatch.
//!
//! The four plot kinds form a closed set dispatched through [`PlotKind`] and
//! the [`Plot`] variant type; every variant renders to the same
//! [`PlotModel`](crate::model::PlotModel) contract.

mod boxplot;
mod density;
mod heatmap;
mod histogram;
mod scatter;

pub use boxplot::{
    render_box_row, Boxplot, GLYPH_BOX_FILL, GLYPH_MEDIAN, GLYPH_MINMAX, GLYPH_QUARTILE_HIGH,
    GLYPH_QUARTILE_LOW, GLYPH_WHISKER,
};
pub use density::{
    DensityGrid, DensityTier, GLYPH_HIGH_DENSITY, GLYPH_LOW_DENSITY, GLYPH_MEDIUM_DENSITY,
    GLYPH_NO_DENSITY,
};
pub use heatmap::Heatmap;
pub use histogram::{bar_length, equal_frequency_bins, Histogram, HistogramBin, GLYPH_BAR};
pub use scatter::Scatterplot;

use std::str::FromStr;

use crate::config::PlotConfig;
use crate::error::{Error, Result};
use crate::model::PlotModel;
use crate::series::DataSeries;

/// Glyph for an untouched cell, shared by every plot type.
pub const GLYPH_EMPTY: char = ' ';

/// The supported plot types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotKind {
    /// One five-number-summary row per series.
    Boxplot,
    /// Equal-frequency bar rows for a single series.
    Histogram,
    /// 2-D density grid read as individual markers.
    Scatterplot,
    /// 2-D density grid read as area density.
    Heatmap,
}

impl PlotKind {
    /// Canonical lowercase name, as accepted on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Boxplot => "boxplot",
            Self::Histogram => "histogram",
            Self::Scatterplot => "scatterplot",
            Self::Heatmap => "heatmap",
        }
    }
}

impl FromStr for PlotKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "boxplot" => Ok(Self::Boxplot),
            "histogram" => Ok(Self::Histogram),
            "scatterplot" => Ok(Self::Scatterplot),
            "heatmap" => Ok(Self::Heatmap),
            other => Err(Error::UnknownPlotType(other.to_string())),
        }
    }
}

impl std::fmt::Display for PlotKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A built plot of any kind, ready to render.
#[derive(Debug, Clone)]
pub enum Plot {
    /// Box plot over one or more series.
    Boxplot(Boxplot),
    /// Histogram over a single series.
    Histogram(Histogram),
    /// Scatter plot over an (x, y) pair of series.
    Scatterplot(Scatterplot),
    /// Heatmap over an (x, y) pair of series.
    Heatmap(Heatmap),
}

impl Plot {
    /// Build a plot of the given kind, enforcing the per-kind series-count
    /// contract: box plots take one or more series, histograms exactly one,
    /// the 2-D kinds exactly two (x then y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::SeriesCount`] on a count violation, plus whatever
    /// the selected plot type's constructor reports.
    pub fn build(kind: PlotKind, series: Vec<DataSeries>, config: &PlotConfig) -> Result<Self> {
        match kind {
            PlotKind::Boxplot => Ok(Self::Boxplot(Boxplot::new(series, config)?)),
            PlotKind::Histogram => {
                let mut series = take_exactly(series, 1)?;
                let data = series.remove(0);
                Ok(Self::Histogram(Histogram::new(data, config)?))
            }
            PlotKind::Scatterplot => {
                let mut series = take_exactly(series, 2)?;
                let y = series.remove(1);
                let x = series.remove(0);
                Ok(Self::Scatterplot(Scatterplot::new(x, y, config)?))
            }
            PlotKind::Heatmap => {
                let mut series = take_exactly(series, 2)?;
                let y = series.remove(1);
                let x = series.remove(0);
                Ok(Self::Heatmap(Heatmap::new(x, y, config)?))
            }
        }
    }

    /// Which kind this plot is.
    #[must_use]
    pub const fn kind(&self) -> PlotKind {
        match self {
            Self::Boxplot(_) => PlotKind::Boxplot,
            Self::Histogram(_) => PlotKind::Histogram,
            Self::Scatterplot(_) => PlotKind::Scatterplot,
            Self::Heatmap(_) => PlotKind::Heatmap,
        }
    }

    /// Render to the shared model contract.
    #[must_use]
    pub fn model(&self) -> PlotModel {
        match self {
            Self::Boxplot(plot) => plot.model(),
            Self::Histogram(plot) => plot.model(),
            Self::Scatterplot(plot) => plot.model(),
            Self::Heatmap(plot) => plot.model(),
        }
    }

    /// Assemble the printable plot text, legend included when configured.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Boxplot(plot) => plot.to_text(),
            Self::Histogram(plot) => plot.to_text(),
            Self::Scatterplot(plot) => plot.to_text(),
            Self::Heatmap(plot) => plot.to_text(),
        }
    }
}

fn take_exactly(series: Vec<DataSeries>, expected: usize) -> Result<Vec<DataSeries>> {
    if series.len() != expected {
        return Err(Error::SeriesCount {
            expected,
            actual: series.len(),
        });
    }
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(name: &str, values: &[f64]) -> DataSeries {
        DataSeries::new(name, values.to_vec()).unwrap()
    }

    #[test]
    fn test_plot_kind_from_str() {
        assert_eq!("boxplot".parse::<PlotKind>().unwrap(), PlotKind::Boxplot);
        assert_eq!("HISTOGRAM".parse::<PlotKind>().unwrap(), PlotKind::Histogram);
        assert_eq!(
            "scatterplot".parse::<PlotKind>().unwrap(),
            PlotKind::Scatterplot
        );
        assert_eq!("heatmap".parse::<PlotKind>().unwrap(), PlotKind::Heatmap);
    }

    #[test]
    fn test_unknown_plot_kind() {
        let result = "sparkline".parse::<PlotKind>();
        assert!(matches!(result, Err(Error::UnknownPlotType(_))));
    }

    #[test]
    fn test_build_dispatches_by_kind() {
        let plot = Plot::build(
            PlotKind::Boxplot,
            vec![series("a", &[1.0, 2.0, 3.0])],
            &PlotConfig::default(),
        )
        .unwrap();
        assert_eq!(plot.kind(), PlotKind::Boxplot);

        let plot = Plot::build(
            PlotKind::Heatmap,
            vec![series("x", &[1.0, 2.0]), series("y", &[3.0, 4.0])],
            &PlotConfig::default(),
        )
        .unwrap();
        assert_eq!(plot.kind(), PlotKind::Heatmap);
        assert_eq!(plot.model().rows().len(), 20);
    }

    #[test]
    fn test_build_enforces_series_count() {
        let result = Plot::build(
            PlotKind::Scatterplot,
            vec![series("x", &[1.0, 2.0])],
            &PlotConfig::default(),
        );
        assert!(matches!(
            result,
            Err(Error::SeriesCount { expected: 2, actual: 1 })
        ));

        let result = Plot::build(
            PlotKind::Histogram,
            vec![series("a", &[1.0]), series("b", &[2.0])],
            &PlotConfig::default(),
        );
        assert!(matches!(
            result,
            Err(Error::SeriesCount { expected: 1, actual: 2 })
        ));
    }
}
