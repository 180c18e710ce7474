//! 2-D density accumulation and quantization.
//!
//! Scatter plots and heatmaps share one engine: paired (x, y) samples are
//! accumulated into a width × height occurrence grid, then occupied cells are
//! quantized into four density tiers by percentile rank among the non-zero
//! cell weights. Characters are therefore chosen relative to the density
//! distribution at hand, not against fixed absolute cutoffs.

use crate::bins::{bound_bins, locate_bin, locate_bins, out_of_bounds};
use crate::series::Range;
use crate::stats::{percentile, sorted_copy};

/// Glyph for a cell with no density.
pub const GLYPH_NO_DENSITY: char = ' ';
/// Glyph for a low-density cell.
pub const GLYPH_LOW_DENSITY: char = '·';
/// Glyph for a medium-density cell.
pub const GLYPH_MEDIUM_DENSITY: char = '+';
/// Glyph for a high-density cell.
pub const GLYPH_HIGH_DENSITY: char = '#';

/// Percentile thresholds separating the density tiers.
const BOUNDARY_LOW: f64 = 10.0;
const BOUNDARY_MEDIUM: f64 = 50.0;
const BOUNDARY_HIGH: f64 = 80.0;

/// Discrete visual density category of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DensityTier {
    /// No density worth showing.
    Empty,
    /// Below the 50th percentile of occupied cells.
    Low,
    /// Below the 80th percentile of occupied cells.
    Medium,
    /// The densest cells.
    High,
}

impl DensityTier {
    /// Character used to render this tier.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Empty => GLYPH_NO_DENSITY,
            Self::Low => GLYPH_LOW_DENSITY,
            Self::Medium => GLYPH_MEDIUM_DENSITY,
            Self::High => GLYPH_HIGH_DENSITY,
        }
    }
}

/// Accumulated occurrence weights on a width × height grid.
///
/// Stored row-major with row 0 at the TOP of the plot: the vertical axis is
/// inverted during accumulation (`height - bin_y - 1`) so that a plot whose
/// y axis increases upward prints in conventional top-to-bottom screen order.
#[derive(Debug, Clone)]
pub struct DensityGrid {
    width: usize,
    height: usize,
    cells: Vec<f64>,
}

impl DensityGrid {
    /// Accumulate paired samples into a grid.
    ///
    /// Samples whose x or y bin falls outside that axis's display envelope
    /// are dropped entirely, never clamped into the edge cells. With
    /// `smoothing` enabled each sample is split across the diagonal pairing
    /// of its two x-bin and two y-bin candidates: two cells per sample, not
    /// the full cross product.
    #[must_use]
    pub fn build(
        x_values: &[f64],
        y_values: &[f64],
        width: usize,
        height: usize,
        x_range: Range,
        y_range: Range,
        smoothing: bool,
    ) -> Self {
        debug_assert_eq!(x_values.len(), y_values.len());

        let x_bounds = bound_bins(width, x_range.min, x_range.max);
        let y_bounds = bound_bins(height, y_range.min, y_range.max);

        let mut grid = Self {
            width,
            height,
            cells: vec![0.0; width * height],
        };

        for (&x, &y) in x_values.iter().zip(y_values) {
            if smoothing {
                let bins_x = locate_bins(x, width, x_range.min, x_range.max);
                let bins_y = locate_bins(y, height, y_range.min, y_range.max);
                for k in 0..2 {
                    let (bin_x, weight_x) = bins_x[k];
                    let (bin_y, weight_y) = bins_y[k];
                    grid.deposit(bin_x, bin_y, (weight_x + weight_y) / 2.0, x_bounds, y_bounds);
                }
            } else {
                let bin_x = locate_bin(x, width, x_range.min, x_range.max);
                let bin_y = locate_bin(y, height, y_range.min, y_range.max);
                grid.deposit(bin_x, bin_y, 1.0, x_bounds, y_bounds);
            }
        }

        grid
    }

    /// Add `weight` at (bin_x, bin_y) if both bins are inside their display
    /// envelopes; out-of-window contributions are discarded.
    fn deposit(
        &mut self,
        bin_x: i64,
        bin_y: i64,
        weight: f64,
        x_bounds: (i64, i64),
        y_bounds: (i64, i64),
    ) {
        if out_of_bounds(bin_x, x_bounds.0, x_bounds.1)
            || out_of_bounds(bin_y, y_bounds.0, y_bounds.1)
        {
            return;
        }
        let row = self.height - bin_y as usize - 1;
        self.cells[row * self.width + bin_x as usize] += weight;
    }

    /// Grid width in cells.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Accumulated weight at output position (col, row); row 0 is the top.
    #[must_use]
    pub fn weight(&self, col: usize, row: usize) -> f64 {
        self.cells[row * self.width + col]
    }

    /// Quantize a cell weight against the distribution of occupied cells.
    ///
    /// A weight of 0 is always [`DensityTier::Empty`], regardless of where
    /// the percentile thresholds fall.
    #[must_use]
    pub fn tier(&self, weight: f64) -> DensityTier {
        let reference = self.occupied_weights();
        Self::match_tier(weight, &reference)
    }

    /// Render the quantized grid as `height` strings of `width` characters.
    #[must_use]
    pub fn render_rows(&self) -> Vec<String> {
        let reference = self.occupied_weights();
        self.cells
            .chunks(self.width)
            .map(|row| {
                row.iter()
                    .map(|&w| Self::match_tier(w, &reference).glyph())
                    .collect()
            })
            .collect()
    }

    /// Strictly positive cell weights, sorted, as the quantization reference
    /// distribution.
    fn occupied_weights(&self) -> Vec<f64> {
        let positive: Vec<f64> = self.cells.iter().copied().filter(|&w| w > 0.0).collect();
        sorted_copy(&positive)
    }

    fn match_tier(weight: f64, reference: &[f64]) -> DensityTier {
        if weight <= 0.0 {
            return DensityTier::Empty;
        }
        if weight < percentile(reference, BOUNDARY_LOW) {
            DensityTier::Empty
        } else if weight < percentile(reference, BOUNDARY_MEDIUM) {
            DensityTier::Low
        } else if weight < percentile(reference, BOUNDARY_HIGH) {
            DensityTier::Medium
        } else {
            DensityTier::High
        }
    }
}
