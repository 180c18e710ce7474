//! Legend and axis-label assembly.
//!
//! Pure string layout around already-rendered rows: the core renders
//! fixed-width character rows, this module frames them with `|` dividers,
//! series names and numeric bound labels. No binning logic lives here.

use crate::format::format_label;
use crate::plots::HistogramBin;
use crate::series::Range;

/// Column divider between labels and plot cells.
const DIVISOR: char = '|';
/// Filler for label padding.
const EMPTY: char = ' ';

/// First histogram interval is closed on the left.
const INTERVAL_LEFT_FIRST: char = '[';
/// Later histogram intervals are open on the left.
const INTERVAL_LEFT: char = '(';
/// All histogram intervals are closed on the right.
const INTERVAL_RIGHT: char = ']';

fn pad(count: usize) -> String {
    EMPTY.to_string().repeat(count)
}

/// Rows joined as-is, one per line, for legend-less output.
#[must_use]
pub fn bare_text(rows: &[String]) -> String {
    let mut out = String::new();
    for row in rows {
        out.push_str(row);
        out.push('\n');
    }
    out
}

/// Frame box-plot rows with series names and the shared range bounds.
///
/// Each series renders as `name|cells|`; a final line carries the display
/// minimum under the left edge and the maximum under the right edge.
#[must_use]
pub fn boxplot_text(names: &[&str], rows: &[String], range: Range, width: usize) -> String {
    let name_width = names.iter().map(|n| n.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    for (name, row) in names.iter().zip(rows) {
        out.push_str(name);
        out.push_str(&pad(name_width - name.chars().count()));
        out.push(DIVISOR);
        out.push_str(row);
        out.push(DIVISOR);
        out.push('\n');
    }

    let min_label = format_label(range.min);
    let max_label = format_label(range.max);
    out.push_str(&pad(name_width));
    out.push(DIVISOR);
    out.push_str(&min_label);
    out.push_str(&pad(
        width.saturating_sub(min_label.chars().count() + max_label.chars().count()),
    ));
    out.push_str(&max_label);
    out.push(DIVISOR);
    out.push('\n');

    out
}

/// Interval label for one histogram bucket.
#[must_use]
pub fn interval_label(first: bool, bin: &HistogramBin) -> String {
    format!(
        "{}{},{}{}",
        if first { INTERVAL_LEFT_FIRST } else { INTERVAL_LEFT },
        format_label(bin.left),
        format_label(bin.right),
        INTERVAL_RIGHT
    )
}

/// Frame histogram bar rows with interval labels and per-bucket counts.
///
/// Each bucket renders as `[l,r]|bar|n=count`; a final line carries the
/// percentage axis from 0% to 100%.
#[must_use]
pub fn histogram_text(
    bins: &[HistogramBin],
    rows: &[String],
    total: usize,
    width: usize,
) -> String {
    let labels: Vec<String> = bins
        .iter()
        .enumerate()
        .map(|(i, bin)| interval_label(i == 0, bin))
        .collect();
    let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let count_width = total.to_string().chars().count();

    let mut out = String::new();
    for ((label, bin), row) in labels.iter().zip(bins).zip(rows) {
        out.push_str(label);
        out.push_str(&pad(label_width - label.chars().count()));
        out.push(DIVISOR);
        out.push_str(row);
        out.push(DIVISOR);
        out.push_str("n=");
        let count = bin.count.to_string();
        out.push_str(&pad(count_width.saturating_sub(count.chars().count())));
        out.push_str(&count);
        out.push('\n');
    }

    out.push_str(&pad(label_width));
    out.push(DIVISOR);
    out.push_str("0%");
    out.push_str(&pad(width.saturating_sub(6)));
    out.push_str("100%");
    out.push(DIVISOR);
    out.push('\n');

    out
}

/// Frame a 2-D grid with y labels on the left and the x axis below.
///
/// The y-series name heads the first row next to the upper y bound; the
/// lower bound sits beside the last grid row. Below the grid come the x
/// bounds and a right-aligned x-series name.
#[must_use]
pub fn grid_text(
    x_name: &str,
    y_name: &str,
    rows: &[String],
    x_range: Range,
    y_range: Range,
    width: usize,
) -> String {
    let min_y_label = format_label(y_range.min);
    let max_y_label = format_label(y_range.max);
    let y_label_width = min_y_label.chars().count().max(max_y_label.chars().count());
    let name_width = y_name.chars().count();

    let mut out = String::new();
    for (i, row) in rows.iter().enumerate() {
        if i == 0 {
            out.push_str(y_name);
        } else {
            out.push_str(&pad(name_width));
        }
        out.push(DIVISOR);
        let label = if i == 0 {
            max_y_label.as_str()
        } else if i == rows.len() - 1 {
            min_y_label.as_str()
        } else {
            ""
        };
        out.push_str(label);
        out.push_str(&pad(y_label_width - label.chars().count()));
        out.push(DIVISOR);
        out.push_str(row);
        out.push(DIVISOR);
        out.push('\n');
    }

    let min_x_label = format_label(x_range.min);
    let max_x_label = format_label(x_range.max);
    out.push_str(&pad(name_width + y_label_width + 1));
    out.push(DIVISOR);
    out.push_str(&min_x_label);
    out.push_str(&pad(
        width.saturating_sub(min_x_label.chars().count() + max_x_label.chars().count()),
    ));
    out.push_str(&max_x_label);
    out.push(DIVISOR);
    out.push('\n');

    out.push_str(&pad(name_width + y_label_width + 1));
    out.push(DIVISOR);
    out.push_str(&pad(width.saturating_sub(x_name.chars().count())));
    out.push_str(x_name);
    out.push(DIVISOR);
    out.push('\n');

    out
}
