//! Rounding policy for presented averages.
//!
//! Averages leave the store unrounded and are rounded here so the policy does
//! not depend on the store's `ROUND()` implementation:
//!
//! 1. the mean is snapped to an integer number of `1e-8` units, absorbing
//!    binary representation noise (`2.345` is stored as `2.34499999...`),
//! 2. that integer is rounded half away from zero to whole hundredths.

/// Number of decimals every presented average carries.
pub const AVERAGE_DECIMALS: i32 = 2;

const NOISE_SCALE: f64 = 1e8;

/// Round an average to [`AVERAGE_DECIMALS`] places, half away from zero.
#[must_use]
pub fn round_average(value: f64) -> f64 {
    let scale = 10f64.powi(AVERAGE_DECIMALS);
    let snapped = (value * NOISE_SCALE).round();
    (snapped / (NOISE_SCALE / scale)).round() / scale
}

/// Round an optional average; `None` (empty row set) stays `None`.
#[must_use]
pub fn round_optional(value: Option<f64>) -> Option<f64> {
    value.map(round_average)
}
