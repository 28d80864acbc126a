//! Capacity validation and the byte-count entry points.
//!
//! Element-count routines live next to their engines; the wrappers here take
//! the destination size in bytes, divide by the element width, and then apply
//! the same validation as the element-count forms.

use crate::cat::cat_worker;
use crate::copy::copy_worker;
use crate::error::{traced, Error, Result, STRSAFE_MAX_CCH};
use crate::length::length_worker;
use crate::types::StrChar;

/// Rejects element counts above [`STRSAFE_MAX_CCH`].
#[inline]
pub fn validate_cch(cch: usize) -> Result<usize> {
    if cch > STRSAFE_MAX_CCH {
        return Err(Error::InvalidParameter);
    }
    Ok(cch)
}

/// Converts a byte count to a validated element count for `C`.
///
/// Trailing bytes that do not form a whole element are ignored.
///
/// # Examples
/// ```
/// use safestrings::capacity::cb_to_cch;
/// assert_eq!(cb_to_cch::<u16>(9), Ok(4));
/// assert_eq!(cb_to_cch::<u8>(9), Ok(9));
/// ```
#[inline]
pub fn cb_to_cch<C: StrChar>(cb: usize) -> Result<usize> {
    validate_cch(cb / C::WIDTH)
}

/// Validates `cch_dest` and narrows `dest` to it.
///
/// A stated capacity larger than the slice is a caller error.
#[inline]
pub(crate) fn dest_view<C: StrChar>(dest: &mut [C], cch_dest: usize) -> Result<&mut [C]> {
    let cch = validate_cch(cch_dest)?;
    dest.get_mut(..cch).ok_or(Error::InvalidParameter)
}

/// [`length_bounded`](crate::length::length_bounded) with the scan limit in bytes.
pub fn length_bounded_bytes<C: StrChar>(s: &[C], cb_max: usize) -> Result<usize> {
    traced(
        "length_bounded_bytes",
        cb_max,
        cb_to_cch::<C>(cb_max).and_then(|cch| length_worker(s, cch)),
    )
}

/// [`copy_bounded`](crate::copy::copy_bounded) with the capacity in bytes.
///
/// # Examples
/// ```
/// use safestrings::capacity::copy_bounded_bytes;
/// use safestrings::error::Error;
///
/// let mut dest = [0u16; 4];
/// let src = [0x68u16, 0x69, 0x21, 0];
/// // 6 bytes hold three u16 elements.
/// assert_eq!(copy_bounded_bytes(&mut dest, 6, &src), Err(Error::InsufficientBuffer));
/// assert_eq!(dest, [0x68, 0x69, 0, 0]);
/// ```
pub fn copy_bounded_bytes<C: StrChar>(dest: &mut [C], cb_dest: usize, src: &[C]) -> Result {
    traced(
        "copy_bounded_bytes",
        cb_dest,
        cb_to_cch::<C>(cb_dest)
            .and_then(|cch| dest_view(dest, cch))
            .and_then(|view| copy_worker(view, src, None)),
    )
}

/// [`copy_bounded_n`](crate::copy::copy_bounded_n) with both sizes in bytes.
pub fn copy_bounded_n_bytes<C: StrChar>(
    dest: &mut [C],
    cb_dest: usize,
    src: &[C],
    cb_src: usize,
) -> Result {
    traced(
        "copy_bounded_n_bytes",
        cb_dest,
        cb_to_cch::<C>(cb_src).and_then(|cch_src| {
            cb_to_cch::<C>(cb_dest)
                .and_then(|cch| dest_view(dest, cch))
                .and_then(|view| copy_worker(view, src, Some(cch_src)))
        }),
    )
}

/// [`concat_bounded`](crate::cat::concat_bounded) with the capacity in bytes.
pub fn concat_bounded_bytes<C: StrChar>(dest: &mut [C], cb_dest: usize, src: &[C]) -> Result {
    traced(
        "concat_bounded_bytes",
        cb_dest,
        cb_to_cch::<C>(cb_dest)
            .and_then(|cch| dest_view(dest, cch))
            .and_then(|view| cat_worker(view, src, None)),
    )
}

/// [`concat_bounded_n`](crate::cat::concat_bounded_n) with both sizes in bytes.
pub fn concat_bounded_n_bytes<C: StrChar>(
    dest: &mut [C],
    cb_dest: usize,
    src: &[C],
    cb_to_append: usize,
) -> Result {
    traced(
        "concat_bounded_n_bytes",
        cb_dest,
        cb_to_cch::<C>(cb_to_append).and_then(|cch_src| {
            cb_to_cch::<C>(cb_dest)
                .and_then(|cch| dest_view(dest, cch))
                .and_then(|view| cat_worker(view, src, Some(cch_src)))
        }),
    )
}
