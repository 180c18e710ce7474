//! Histogram with equal-frequency bucketing.
//!
//! Buckets are placed so each holds, as nearly as possible, N/bins samples;
//! the boundaries are exact order statistics of the data, not equal-width
//! cuts. The first interval is closed on the left, all later ones are
//! left-open/right-closed, matching the half-open convention of statistical
//! histograms.

use crate::bins::locate_bin;
use crate::config::PlotConfig;
use crate::error::{Error, Result};
use crate::legend;
use crate::model::PlotModel;
use crate::plots::{PlotKind, GLYPH_EMPTY};
use crate::series::{DataSeries, Range};
use crate::stats::sorted_copy;

/// Glyph used for histogram bars.
pub const GLYPH_BAR: char = '#';

/// One histogram bucket: its value interval and sample count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    /// Left interval boundary (inclusive for the first bin, exclusive
    /// otherwise).
    pub left: f64,
    /// Right interval boundary (inclusive).
    pub right: f64,
    /// Number of samples in the interval.
    pub count: usize,
}

/// Histogram over a single data series.
#[derive(Debug, Clone)]
pub struct Histogram {
    series: DataSeries,
    bins: Vec<HistogramBin>,
    width: usize,
    legend: bool,
}

impl Histogram {
    /// Build a histogram, validating configuration and computing the
    /// equal-frequency buckets.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRangeConfig`] for an invalid width or bin
    /// count.
    pub fn new(series: DataSeries, config: &PlotConfig) -> Result<Self> {
        config.validate()?;
        let bins = equal_frequency_bins(series.values(), config.bins);
        Ok(Self {
            series,
            bins,
            width: config.width,
            legend: config.legend,
        })
    }

    /// The computed buckets, left to right.
    #[must_use]
    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    /// Total sample count across all buckets.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.series.len()
    }

    /// One bar row per bucket, each of exactly `width` characters.
    #[must_use]
    pub fn rows(&self) -> Vec<String> {
        let total = self.sample_count();
        self.bins
            .iter()
            .map(|bin| bar_row(bar_length(bin.count, total, self.width), self.width))
            .collect()
    }

    /// The rendered rows tied to the value range and series name.
    #[must_use]
    pub fn model(&self) -> PlotModel {
        let (min, max) = self.series.min_max();
        PlotModel::new(
            PlotKind::Histogram,
            self.rows(),
            vec![self.series.name().to_string()],
            Range { min, max },
            None,
        )
    }

    /// Assemble the printable plot text, legend included when configured.
    #[must_use]
    pub fn to_text(&self) -> String {
        let rows = self.rows();
        if self.legend {
            legend::histogram_text(&self.bins, &rows, self.sample_count(), self.width)
        } else {
            legend::bare_text(&rows)
        }
    }
}

/// Partition `values` into `bin_count` equal-frequency buckets.
///
/// Boundary `i` is the order statistic at the cumulative target count
/// `round((i+1) * N / bin_count)`; duplicate boundaries simply produce
/// zero-count buckets. Counts come from actual interval membership, so they
/// always sum to N.
#[must_use]
pub fn equal_frequency_bins(values: &[f64], bin_count: usize) -> Vec<HistogramBin> {
    if values.is_empty() {
        return Vec::new();
    }
    let sorted = sorted_copy(values);
    let n = sorted.len();
    let min = sorted[0];

    let mut bins = Vec::with_capacity(bin_count);
    let mut previous_cumulative = 0usize;
    let mut left = min;

    for i in 1..=bin_count {
        let target = ((i * n) as f64 / bin_count as f64).round() as usize;
        let right = sorted[target.clamp(1, n) - 1];

        // Samples at or below the boundary that are not already counted.
        let cumulative = if i == bin_count {
            n
        } else {
            sorted.partition_point(|&v| v <= right)
        };
        bins.push(HistogramBin {
            left,
            right,
            count: cumulative - previous_cumulative,
        });
        previous_cumulative = cumulative;
        left = right;
    }

    bins
}

/// Number of bar cells for a bucket holding `n` of `total` samples.
///
/// The share of the total count is mapped onto `width` cells through the
/// same bin mapper used everywhere else; independent rounding per bucket
/// means the bar lengths sum to `width` only within ±1.
#[must_use]
pub fn bar_length(n: usize, total: usize, width: usize) -> usize {
    let share = 100.0 * n as f64 / total as f64;
    locate_bin(share, width, 0.0, 100.0).max(0) as usize
}

fn bar_row(length: usize, width: usize) -> String {
    (0..width)
        .map(|i| if i < length { GLYPH_BAR } else { GLYPH_EMPTY })
        .collect()
}
