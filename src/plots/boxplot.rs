//! Box plot rendering.
//!
//! Each series becomes one fixed-width character row built from its
//! five-number summary. Marker placement follows a fixed priority order
//! (quartiles, median, box fill, series min/max, whisker fill) with
//! first-writer-wins semantics: when two markers collapse into the same cell
//! the earlier one in the order keeps it. The order is a contract, not an
//! implementation detail, since it decides which glyph survives at shared
//! cells.

use crate::bins::{bound_bins, locate_bin, out_of_bounds};
use crate::config::PlotConfig;
use crate::error::{Error, Result};
use crate::legend;
use crate::model::PlotModel;
use crate::plots::{PlotKind, GLYPH_EMPTY};
use crate::series::{DataSeries, Range};
use crate::stats::FiveNumberSummary;

/// Glyph marking the series minimum and maximum.
pub const GLYPH_MINMAX: char = '|';
/// Glyph marking the median.
pub const GLYPH_MEDIAN: char = '|';
/// Glyph marking the lower quartile.
pub const GLYPH_QUARTILE_LOW: char = '[';
/// Glyph marking the upper quartile.
pub const GLYPH_QUARTILE_HIGH: char = ']';
/// Glyph filling the whiskers.
pub const GLYPH_WHISKER: char = '-';
/// Glyph filling the box body.
pub const GLYPH_BOX_FILL: char = '░';

/// Box plot over one or more data series sharing a display range.
#[derive(Debug, Clone)]
pub struct Boxplot {
    series: Vec<DataSeries>,
    summaries: Vec<FiveNumberSummary>,
    range: Range,
    width: usize,
    legend: bool,
}

impl Boxplot {
    /// Build a box plot, validating configuration and computing the shared
    /// display range and per-series summaries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRangeConfig`] for an invalid width,
    /// [`Error::SeriesCount`] when no series are supplied, and
    /// [`Error::InvalidRange`] when user bounds invert the range.
    pub fn new(series: Vec<DataSeries>, config: &PlotConfig) -> Result<Self> {
        config.validate()?;
        if series.is_empty() {
            return Err(Error::SeriesCount {
                expected: 1,
                actual: 0,
            });
        }

        let range = Range::of_series(&series)?.with_overrides(config.min, config.max)?;

        let mut summaries = Vec::with_capacity(series.len());
        for s in &series {
            match FiveNumberSummary::from_values(s.values()) {
                Some(summary) => summaries.push(summary),
                None => {
                    return Err(Error::EmptyInput {
                        name: s.name().to_string(),
                    })
                }
            }
        }

        Ok(Self {
            series,
            summaries,
            range,
            width: config.width,
            legend: config.legend,
        })
    }

    /// Display range the rows are binned against.
    #[must_use]
    pub const fn range(&self) -> Range {
        self.range
    }

    /// Per-series five-number summaries, in input order.
    #[must_use]
    pub fn summaries(&self) -> &[FiveNumberSummary] {
        &self.summaries
    }

    /// One rendered row per series.
    #[must_use]
    pub fn rows(&self) -> Vec<String> {
        self.summaries
            .iter()
            .map(|summary| render_box_row(self.range, summary, self.width))
            .collect()
    }

    /// The rendered rows tied to their range and series names.
    #[must_use]
    pub fn model(&self) -> PlotModel {
        PlotModel::new(
            PlotKind::Boxplot,
            self.rows(),
            self.series.iter().map(|s| s.name().to_string()).collect(),
            self.range,
            None,
        )
    }

    /// Assemble the printable plot text, legend included when configured.
    #[must_use]
    pub fn to_text(&self) -> String {
        let rows = self.rows();
        if self.legend {
            let names: Vec<&str> = self.series.iter().map(DataSeries::name).collect();
            legend::boxplot_text(&names, &rows, self.range, self.width)
        } else {
            legend::bare_text(&rows)
        }
    }
}

/// Render one box-plot row of exactly `width` characters.
///
/// Markers outside the display envelope are dropped, not clamped, so a
/// user-restricted window simply cuts off whiskers and quartiles that fall
/// outside it.
#[must_use]
pub fn render_box_row(display: Range, summary: &FiveNumberSummary, width: usize) -> String {
    let mut cells = vec![GLYPH_EMPTY; width];
    let bounds = bound_bins(width, display.min, display.max);
    let locate = |value: f64| locate_bin(value, width, display.min, display.max);

    let bin_q1 = locate(summary.q1);
    let bin_q3 = locate(summary.q3);
    let bin_median = locate(summary.median);
    let bin_min = locate(summary.min);
    let bin_max = locate(summary.max);

    place(&mut cells, bin_q1, bounds, GLYPH_QUARTILE_LOW);
    place(&mut cells, bin_q3, bounds, GLYPH_QUARTILE_HIGH);
    place(&mut cells, bin_median, bounds, GLYPH_MEDIAN);
    fill_between(&mut cells, bin_q1, bin_median, bounds, GLYPH_BOX_FILL);
    fill_between(&mut cells, bin_median, bin_q3, bounds, GLYPH_BOX_FILL);
    place(&mut cells, bin_min, bounds, GLYPH_MINMAX);
    place(&mut cells, bin_max, bounds, GLYPH_MINMAX);
    fill_between(&mut cells, bin_min, bin_q1, bounds, GLYPH_WHISKER);
    fill_between(&mut cells, bin_q3, bin_max, bounds, GLYPH_WHISKER);

    cells.into_iter().collect()
}

/// Write `glyph` at `bin` if the bin is inside the envelope and the cell is
/// still empty.
fn place(cells: &mut [char], bin: i64, bounds: (i64, i64), glyph: char) {
    if out_of_bounds(bin, bounds.0, bounds.1) {
        return;
    }
    let cell = &mut cells[bin as usize];
    if *cell == GLYPH_EMPTY {
        *cell = glyph;
    }
}

/// Fill the cells strictly between two bins; empty ranges are no-ops.
fn fill_between(cells: &mut [char], lower: i64, upper: i64, bounds: (i64, i64), glyph: char) {
    for bin in (lower + 1)..upper {
        place(cells, bin, bounds, glyph);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlotConfig;

    fn series(name: &str, values: &[f64]) -> DataSeries {
        DataSeries::new(name, values.to_vec()).unwrap()
    }

    fn summary(values: &[f64]) -> FiveNumberSummary {
        FiveNumberSummary::from_values(values).unwrap()
    }

    #[test]
    fn test_row_has_requested_width() {
        let row = render_box_row(
            Range { min: 0.0, max: 22.0 },
            &summary(&[1.0, 2.0, 5.0, 20.0, 3.0, 22.0, 4.0, 4.0, 2.0, 5.0]),
            50,
        );
        assert_eq!(row.chars().count(), 50);
    }

    #[test]
    fn test_marker_placement() {
        // sorted: [1, 2, 2, 3, 4, 4, 5, 5, 20, 22]
        // q1 = 2.25, median = 4.0, q3 = 5.0; bin width = 22/50 = 0.44
        let row: Vec<char> = render_box_row(
            Range { min: 0.0, max: 22.0 },
            &summary(&[1.0, 2.0, 5.0, 20.0, 3.0, 22.0, 4.0, 4.0, 2.0, 5.0]),
            50,
        )
        .chars()
        .collect();

        assert_eq!(row[2], GLYPH_MINMAX); // series min 1.0
        assert_eq!(row[5], GLYPH_QUARTILE_LOW); // q1 2.25
        assert_eq!(row[9], GLYPH_MEDIAN); // median 4.0
        assert_eq!(row[11], GLYPH_QUARTILE_HIGH); // q3 5.0
        assert_eq!(row[49], GLYPH_MINMAX); // series max 22.0
        assert_eq!(row[7], GLYPH_BOX_FILL);
        assert_eq!(row[10], GLYPH_BOX_FILL);
        assert_eq!(row[3], GLYPH_WHISKER);
        assert_eq!(row[30], GLYPH_WHISKER);
        assert_eq!(row[0], GLYPH_EMPTY);
    }

    #[test]
    fn test_degenerate_series_shows_first_writer() {
        // All quartile bins coincide: only the Q1 glyph survives.
        let row: Vec<char> = render_box_row(
            Range { min: 0.0, max: 10.0 },
            &summary(&[5.0, 5.0, 5.0, 5.0]),
            20,
        )
        .chars()
        .collect();

        let occupied: Vec<(usize, char)> = row
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c != GLYPH_EMPTY)
            .map(|(i, &c)| (i, c))
            .collect();
        assert_eq!(occupied, vec![(10, GLYPH_QUARTILE_LOW)]);
    }

    #[test]
    fn test_markers_outside_window_dropped() {
        // Display window [3, 5]; series min (0.0) and max (10.0) fall
        // outside it. Their markers are dropped, not clamped into the edge
        // cells; the whisker fill still runs up to the window edges.
        let row: Vec<char> = render_box_row(
            Range { min: 3.0, max: 5.0 },
            &summary(&[0.0, 3.5, 4.0, 4.5, 10.0]),
            20,
        )
        .chars()
        .collect();
        assert_eq!(row.len(), 20);
        assert_eq!(row[0], GLYPH_WHISKER);
        assert_eq!(row[19], GLYPH_WHISKER);
    }

    #[test]
    fn test_boxplot_rejects_no_series() {
        let result = Boxplot::new(vec![], &PlotConfig::default());
        assert!(matches!(result, Err(Error::SeriesCount { .. })));
    }

    #[test]
    fn test_boxplot_rejects_bad_width() {
        let config = PlotConfig {
            width: 19,
            ..PlotConfig::default()
        };
        let result = Boxplot::new(vec![series("a", &[1.0, 2.0])], &config);
        assert!(matches!(result, Err(Error::OutOfRangeConfig { .. })));
    }

    #[test]
    fn test_boxplot_rejects_inverted_limits() {
        let config = PlotConfig {
            min: Some(10.0),
            max: Some(0.0),
            ..PlotConfig::default()
        };
        let result = Boxplot::new(vec![series("a", &[1.0, 2.0])], &config);
        assert!(matches!(result, Err(Error::InvalidRange { .. })));
    }

    #[test]
    fn test_boxplot_one_row_per_series() {
        let plot = Boxplot::new(
            vec![series("a", &[1.0, 2.0, 3.0]), series("b", &[4.0, 5.0, 6.0])],
            &PlotConfig::default(),
        )
        .unwrap();
        assert_eq!(plot.rows().len(), 2);
        let model = plot.model();
        assert_eq!(model.series_names().len(), 2);
        assert_eq!(model.x_range(), Range { min: 1.0, max: 6.0 });
    }

    #[test]
    fn test_explicit_limits_widen_range() {
        let config = PlotConfig {
            min: Some(0.0),
            max: Some(22.0),
            ..PlotConfig::default()
        };
        let plot = Boxplot::new(
            vec![series(
                "sample",
                &[1.0, 2.0, 5.0, 20.0, 3.0, 22.0, 4.0, 4.0, 2.0, 5.0],
            )],
            &config,
        )
        .unwrap();
        assert_eq!(plot.range(), Range { min: 0.0, max: 22.0 });
    }
}
