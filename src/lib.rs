//! # textviz
//!
//! Character-grid visualizations for the terminal: box plots, histograms,
//! scatter plots and 2-D density heatmaps, rendered as fixed-width rows of
//! plain characters with no graphics stack behind them.
//!
//! The core is a bin-mapping engine: continuous value ranges are divided
//! into equal-width cells, markers and densities are placed by bin index,
//! and out-of-window values are dropped rather than clamped. Everything is
//! a pure, synchronous transform over `f64` slices: no I/O and no shared
//! state, with nothing mutated after construction.
//!
//! ## Quick Start
//!
//! ```
//! use textviz::prelude::*;
//!
//! let series = DataSeries::new("sample", vec![1.0, 2.0, 5.0, 20.0, 3.0, 22.0])?;
//! let plot = Boxplot::new(vec![series], &PlotConfig::default())?;
//! println!("{}", plot.to_text());
//! # Ok::<(), textviz::Error>(())
//! ```
//!
//! ## Plot types
//!
//! - [`plots::Boxplot`]: one five-number-summary row per series
//! - [`plots::Histogram`]: equal-frequency buckets with proportional bars
//! - [`plots::Scatterplot`] / [`plots::Heatmap`]: percentile-quantized 2-D
//!   density grids

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in grid/binning code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::module_name_repetitions)]

// ============================================================================
// Core Modules
// ============================================================================

/// Bin mapping between continuous values and discrete cell indices.
pub mod bins;

/// Plot configuration value and its allowed intervals.
pub mod config;

/// Named data series and display-range computation.
pub mod series;

/// Order-statistic helpers (percentiles, five-number summaries).
pub mod stats;

// ============================================================================
// Visualization Modules
// ============================================================================

/// Plot types (box plot, histogram, scatter plot, heatmap) and dispatch.
pub mod plots;

/// Rendered plot model handed to the printing layer.
pub mod model;

// ============================================================================
// Output Modules
// ============================================================================

/// Numeric label formatting.
pub mod format;

/// Legend and axis-label assembly around rendered rows.
pub mod legend;

/// Parser for the `{name|v1,v2,...}` series format.
pub mod parse;

/// Command-line interface.
pub mod cli;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for textviz operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types for convenient imports.
///
/// ```
/// use textviz::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::PlotConfig;
    pub use crate::error::{Error, Result};
    pub use crate::model::PlotModel;
    pub use crate::plots::{Boxplot, Heatmap, Histogram, Plot, PlotKind, Scatterplot};
    pub use crate::series::{DataSeries, Range};
    pub use crate::stats::FiveNumberSummary;
}
