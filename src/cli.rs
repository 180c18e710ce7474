//! Command-line interface.
//!
//! A thin shell over the library: parse arguments, hand the typed
//! configuration to the core, print whatever it renders. All numeric
//! validation stays in the core so the CLI cannot accept what the library
//! would reject.

use std::io::Read;

use clap::Parser;

use crate::config::{PlotConfig, DEFAULT_BINS, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::error::Result;
use crate::parse::parse_series;
use crate::plots::{Plot, PlotKind};

/// Character-grid plots for the terminal.
#[derive(Parser, Debug)]
#[command(
    name = "textviz",
    about = "Render box plots, histograms, scatter plots and heatmaps as text",
    version
)]
pub struct Cli {
    /// Series input in `{name|v1,v2,...}` form (`-` reads stdin)
    #[arg(value_name = "SERIES", default_value = "-")]
    pub input: String,

    /// Plot type: boxplot, histogram, scatterplot or heatmap
    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        default_value = "boxplot"
    )]
    pub plot_type: String,

    /// Plot width in cells
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Plot height in cells (2-D plots)
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Number of histogram bins
    #[arg(long, default_value_t = DEFAULT_BINS)]
    pub bins: usize,

    /// Lower display bound (x axis for 2-D plots)
    #[arg(long)]
    pub min: Option<f64>,

    /// Upper display bound (x axis for 2-D plots)
    #[arg(long)]
    pub max: Option<f64>,

    /// Lower y display bound (2-D plots)
    #[arg(long)]
    pub min_y: Option<f64>,

    /// Upper y display bound (2-D plots)
    #[arg(long)]
    pub max_y: Option<f64>,

    /// Commit each sample to a single cell instead of smoothing
    #[arg(long)]
    pub no_smoothing: bool,

    /// Print the raw grid without axis labels
    #[arg(long)]
    pub no_legend: bool,
}

impl Cli {
    /// Translate the parsed arguments into the core configuration value.
    #[must_use]
    pub fn to_config(&self) -> PlotConfig {
        PlotConfig {
            width: self.width,
            height: self.height,
            bins: self.bins,
            min: self.min,
            max: self.max,
            min_y: self.min_y,
            max_y: self.max_y,
            smoothing: !self.no_smoothing,
            legend: !self.no_legend,
        }
    }
}

/// Build and render the requested plot.
///
/// # Errors
///
/// Surfaces every core error kind unchanged, plus I/O errors from reading
/// stdin.
pub fn run(cli: &Cli) -> Result<String> {
    let text = if cli.input == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        cli.input.clone()
    };

    let kind: PlotKind = cli.plot_type.parse()?;
    let series = parse_series(&text)?;
    let plot = Plot::build(kind, series, &cli.to_config())?;
    Ok(plot.to_text())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("textviz").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let config = cli(&["{a|1,2}"]).to_config();
        assert_eq!(config, PlotConfig::default());
    }

    #[test]
    fn test_toggles_invert() {
        let config = cli(&["{a|1,2}", "--no-smoothing", "--no-legend"]).to_config();
        assert!(!config.smoothing);
        assert!(!config.legend);
    }

    #[test]
    fn test_run_boxplot() {
        let out = run(&cli(&["{a|1,2,5,20,3,22,4,4,2,5}"])).unwrap();
        assert!(out.contains('░'));
        assert!(out.lines().count() == 2);
    }

    #[test]
    fn test_run_rejects_unknown_type() {
        let result = run(&cli(&["{a|1,2}", "--type", "piechart"]));
        assert!(matches!(result, Err(Error::UnknownPlotType(_))));
    }

    #[test]
    fn test_run_rejects_narrow_width() {
        let result = run(&cli(&["{a|1,2}", "--width", "19"]));
        assert!(matches!(result, Err(Error::OutOfRangeConfig { .. })));
    }

    #[test]
    fn test_run_scatterplot_needs_two_series() {
        let result = run(&cli(&["{a|1,2}", "--type", "scatterplot"]));
        assert!(matches!(result, Err(Error::SeriesCount { .. })));
    }
}
