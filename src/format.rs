//! Numeric label formatting.
//!
//! A stateless replacement for a shared decimal formatter: every call site
//! passes the precision it wants, so there is no global formatting state.

/// Decimal places used for axis and legend labels.
pub const LABEL_PRECISION: usize = 2;

/// Format a value with a fixed number of decimal places.
#[must_use]
pub fn format_value(value: f64, precision: usize) -> String {
    format!("{value:.precision$}")
}

/// Format an axis/legend label with the default precision.
#[must_use]
pub fn format_label(value: f64) -> String {
    format_value(value, LABEL_PRECISION)
}
