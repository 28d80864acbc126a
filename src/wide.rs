//! Wide string routines
//!
//! Bounded replacements for `wcscpy`, `wcscat`, `wcsncat` and `wcslen`.
//! Each copy and concatenation comes in a `_chars` form taking the capacity
//! in `wchar_t` elements and a `_bytes` form taking it in bytes.

use crate::capacity::{concat_bounded_bytes, concat_bounded_n_bytes, copy_bounded_bytes};
use crate::cat::{concat_bounded, concat_bounded_n};
use crate::copy::copy_bounded;
use crate::error::Result;
use crate::length::length_bounded;
use crate::types::wchar_t;

/// Length of a wide string that must be terminated within `cch_max` elements.
pub fn wcslen_strsafe(s: &[wchar_t], cch_max: usize) -> Result<usize> {
    length_bounded(s, cch_max)
}

/// Replacement for `wcscpy`; `cch_dest` counts elements.
///
/// # Examples
/// ```
/// use safestrings::types::wchar_t;
/// use safestrings::wide::wcscpy_chars_strsafe;
///
/// let src = [b'h' as wchar_t, b'i' as wchar_t, 0];
/// let mut dest = [0 as wchar_t; 3];
/// assert!(wcscpy_chars_strsafe(&mut dest, 3, &src).is_ok());
/// assert_eq!(dest, src);
/// ```
pub fn wcscpy_chars_strsafe(dest: &mut [wchar_t], cch_dest: usize, src: &[wchar_t]) -> Result {
    copy_bounded(dest, cch_dest, src)
}

/// Replacement for `wcscpy`; `cb_dest` counts bytes.
pub fn wcscpy_bytes_strsafe(dest: &mut [wchar_t], cb_dest: usize, src: &[wchar_t]) -> Result {
    copy_bounded_bytes(dest, cb_dest, src)
}

/// Replacement for `wcscat`; `cch_dest` counts elements.
pub fn wcscat_chars_strsafe(dest: &mut [wchar_t], cch_dest: usize, src: &[wchar_t]) -> Result {
    concat_bounded(dest, cch_dest, src)
}

/// Replacement for `wcscat`; `cb_dest` counts bytes.
pub fn wcscat_bytes_strsafe(dest: &mut [wchar_t], cb_dest: usize, src: &[wchar_t]) -> Result {
    concat_bounded_bytes(dest, cb_dest, src)
}

/// Replacement for `wcsncat`; appends at most `cch_to_append` elements.
pub fn wcsncat_chars_strsafe(
    dest: &mut [wchar_t],
    cch_dest: usize,
    src: &[wchar_t],
    cch_to_append: usize,
) -> Result {
    concat_bounded_n(dest, cch_dest, src, cch_to_append)
}

/// Replacement for `wcsncat` with both sizes in bytes.
pub fn wcsncat_bytes_strsafe(
    dest: &mut [wchar_t],
    cb_dest: usize,
    src: &[wchar_t],
    cb_to_append: usize,
) -> Result {
    concat_bounded_n_bytes(dest, cb_dest, src, cb_to_append)
}
