//! Error types for textviz operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building or rendering plots.
///
/// All validation happens eagerly when a plot is constructed; rendering a
/// successfully built plot cannot fail.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (reading series text from stdin in the CLI).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A data series contained no values.
    #[error("series '{name}' contains no values")]
    EmptyInput {
        /// Name of the offending series.
        name: String,
    },

    /// Display range inverted after applying user overrides.
    #[error("minimum value {min} needs to be smaller than the maximum {max}")]
    InvalidRange {
        /// Effective minimum bound.
        min: f64,
        /// Effective maximum bound.
        max: f64,
    },

    /// Paired series of unequal length for a 2-D plot.
    #[error("input vectors need to be of the same length: x has {x_len} values, y has {y_len}")]
    DimensionMismatch {
        /// Length of the x series.
        x_len: usize,
        /// Length of the y series.
        y_len: usize,
    },

    /// Wrong number of series for the selected plot type.
    #[error("plot type expects {expected} series, got {actual}")]
    SeriesCount {
        /// Number of series the plot type requires.
        expected: usize,
        /// Number of series actually supplied.
        actual: usize,
    },

    /// A width/height/bin-count setting outside its allowed closed interval.
    #[error("{name} is set to {value} but needs to be in [{min},{max}]")]
    OutOfRangeConfig {
        /// Name of the offending setting.
        name: &'static str,
        /// The supplied value.
        value: usize,
        /// Lower bound of the allowed interval.
        min: usize,
        /// Upper bound of the allowed interval.
        max: usize,
    },

    /// Unrecognized plot type name.
    #[error("unknown plot type '{0}'")]
    UnknownPlotType(String),

    /// Malformed series input text.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
