//! Stateless conversions between the raw byte and its typed views.
//!
//! The raw 0..=127 byte is the only stored representation of a parameter.
//! Every typed view is computed from it on demand by the functions below, so
//! repeated reads never drift and there is no typed copy to keep in sync.
//!
//! # Binned values
//!
//! The raw span `[0, 128)` is partitioned into `bin_count` equal-width
//! buckets, numbered from 1:
//!
//! ```text
//! bin = 1 + floor(raw * bin_count / 128)
//! ```
//!
//! Setting a bin writes the smallest raw value inside its bucket
//! (`ceil((bin - 1) * 128 / bin_count)`), which guarantees that reading the
//! bin back yields the same bin for every `bin_count` in `1..=128`.

use crate::types::{MAX_BIN_COUNT, RAW_MAX, RAW_SPAN};

/// Smallest raw value that reads back as `true`.
pub const BOOL_THRESHOLD: u8 = 64;

/// Clamp a raw value into `0..=127`.
#[inline]
pub fn clamp_raw(raw: u8) -> u8 {
    raw.min(RAW_MAX)
}

/// Map a raw value to a magnitude in `[0.0, 1.0]`.
#[inline]
pub fn raw_to_magnitude(raw: u8) -> f32 {
    clamp_raw(raw) as f32 / RAW_MAX as f32
}

/// Map a magnitude to the nearest raw value.
///
/// Out-of-range magnitudes are clamped; NaN maps to 0.
#[inline]
pub fn magnitude_to_raw(magnitude: f32) -> u8 {
    if magnitude.is_nan() {
        return 0;
    }
    (magnitude.clamp(0.0, 1.0) * RAW_MAX as f32).round() as u8
}

/// Map a raw value to a bool using the midpoint threshold.
#[inline]
pub fn raw_to_bool(raw: u8) -> bool {
    raw >= BOOL_THRESHOLD
}

/// Map a bool to the raw extremes (127 / 0).
#[inline]
pub fn bool_to_raw(value: bool) -> u8 {
    if value {
        RAW_MAX
    } else {
        0
    }
}

#[inline]
fn clamp_bin_count(bin_count: u8) -> u32 {
    bin_count.clamp(1, MAX_BIN_COUNT) as u32
}

/// Map a raw value to its bin in `1..=bin_count`.
#[inline]
pub fn raw_to_bin(raw: u8, bin_count: u8) -> u8 {
    let bins = clamp_bin_count(bin_count);
    let bin = 1 + clamp_raw(raw) as u32 * bins / RAW_SPAN;
    bin.min(bins) as u8
}

/// Map a bin (clamped to `1..=bin_count`) to the lower edge of its bucket.
#[inline]
pub fn bin_to_raw(bin: u8, bin_count: u8) -> u8 {
    let bins = clamp_bin_count(bin_count);
    let index = (bin as u32).clamp(1, bins) - 1;
    let raw = (index * RAW_SPAN).div_ceil(bins);
    raw.min(RAW_MAX as u32) as u8
}
