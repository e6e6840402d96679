//! Numeric prefixes for generated filenames

use std::ffi::{OsStr, OsString};

use crate::constants::{NAME_SEPARATOR, PAD_CHAR};

/// Number of decimal digits needed for the largest index of a run
///
/// A run over `pairs` pairs hands out indices up to `2 * pairs`, so the
/// width is the digit count of that number. Zero pairs still give a width of 1.
pub fn pad_width(pairs: usize) -> usize {
    (pairs * 2).to_string().len()
}

/// Renders `index` as exactly `width` characters, left-padded with zeros
///
/// Only the last `width` digits are kept if the index is wider than that.
pub fn pad_index(index: usize, width: usize) -> String {
    let digits = index.to_string();
    if digits.len() >= width {
        return digits[digits.len() - width..].to_string();
    }

    let mut padded = String::with_capacity(width);
    padded.extend(std::iter::repeat_n(PAD_CHAR, width - digits.len()));
    padded.push_str(&digits);
    padded
}

/// Builds the output filename `<padded index>-<original name>`
///
/// The original name is appended as-is, so names that are not valid Unicode
/// survive unchanged.
pub fn numbered_name(index: usize, width: usize, original: &OsStr) -> OsString {
    let mut name = OsString::from(format!("{}{NAME_SEPARATOR}", pad_index(index, width)));
    name.push(original);
    name
}
