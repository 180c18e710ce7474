//! Bin mapping between continuous values and discrete cell indices.
//!
//! The closed interval `[min, max]` is divided into `bin_count` equal-width
//! sub-intervals. A value at `min` maps to bin 0 and a value at `max` maps to
//! bin `bin_count - 1`; the exact upper boundary collapses into the last bin
//! instead of opening a bin of its own.
//!
//! Values outside `[min, max]` are NOT clamped: they keep their raw
//! (out-of-envelope, possibly negative) index so that callers with a display
//! window narrower than the data range can drop them via [`out_of_bounds`]
//! rather than piling them into the edge cells.

/// Locate the bin index for `value` in `[min, max]` split into `bin_count`
/// equal-width sub-intervals.
///
/// For any value in `[min, max]` the result lies in `[0, bin_count)` and is
/// monotonic non-decreasing in `value`. A degenerate range (`min == max`)
/// maps every value to bin 0.
#[must_use]
pub fn locate_bin(value: f64, bin_count: usize, min: f64, max: f64) -> i64 {
    let span = max - min;
    if span <= 0.0 {
        return 0;
    }
    let bin_width = span / bin_count as f64;
    let bin = ((value - min) / bin_width).floor() as i64;
    // The upper boundary lands exactly on bin_count; fold it into the last
    // bin. Values beyond max keep their out-of-envelope index.
    if bin == bin_count as i64 && value <= max {
        bin_count as i64 - 1
    } else {
        bin
    }
}

/// Locate the two bins adjacent to `value` with proximity weights.
///
/// Committing a value entirely to one bin skews densities toward whichever
/// bin the floor operation favors; instead the contribution is split between
/// the bin below and the bin above the exact fractional position, weights
/// summing to 1.0. At the upper boundary (`value == max`) both slots collapse
/// to the last bin with equal 0.5 weights.
#[must_use]
pub fn locate_bins(value: f64, bin_count: usize, min: f64, max: f64) -> [(i64, f64); 2] {
    let span = max - min;
    if span <= 0.0 {
        return [(0, 0.5), (0, 0.5)];
    }
    let bin_width = span / bin_count as f64;
    let position = (value - min) / bin_width;

    if position >= bin_count as f64 && value <= max {
        let last = bin_count as i64 - 1;
        return [(last, 0.5), (last, 0.5)];
    }

    let lower = position.floor();
    let upper_weight = position - lower;
    [
        (lower as i64, 1.0 - upper_weight),
        (lower as i64 + 1, upper_weight),
    ]
}

/// Bin indices of the display bounds themselves: `(min_bound, max_bound)`.
///
/// A computed bin is inside the display envelope iff it lies within this
/// closed interval; see [`out_of_bounds`].
#[must_use]
pub fn bound_bins(bin_count: usize, min: f64, max: f64) -> (i64, i64) {
    (
        locate_bin(min, bin_count, min, max),
        locate_bin(max, bin_count, min, max),
    )
}

/// Whether `bin` falls outside the `[min_bound, max_bound]` envelope.
#[must_use]
pub fn out_of_bounds(bin: i64, min_bound: i64, max_bound: i64) -> bool {
    bin > max_bound || bin < min_bound
}
