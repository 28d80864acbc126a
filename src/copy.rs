//! Bounded copy.
//!
//! Both entry points share [`copy_worker`]; the `_n` form only adds a second
//! exhaustion counter on the source side.

use crate::capacity::{dest_view, validate_cch};
use crate::error::{traced, Error, Result};
use crate::types::{nul_position, StrChar};

/// Copies the terminated string `src` into the first `cch_dest` elements of
/// `dest`, always terminating the result.
///
/// Returns `InsufficientBuffer` when the source did not fit; `dest` then holds
/// the first `cch_dest - 1` source elements and a terminator. A `cch_dest` of
/// zero, above [`STRSAFE_MAX_CCH`](crate::error::STRSAFE_MAX_CCH), or larger
/// than `dest` is rejected with `InvalidParameter` and nothing is written.
///
/// # Examples
/// ```
/// use safestrings::copy::copy_bounded;
/// use safestrings::error::Error;
///
/// let mut dest = [0xAAu8; 8];
/// assert_eq!(copy_bounded(&mut dest, 6, b"hello\0"), Ok(()));
/// assert_eq!(&dest[..6], b"hello\0");
///
/// assert_eq!(copy_bounded(&mut dest, 5, b"hello\0"), Err(Error::InsufficientBuffer));
/// assert_eq!(&dest[..5], b"hell\0");
/// ```
pub fn copy_bounded<C: StrChar>(dest: &mut [C], cch_dest: usize, src: &[C]) -> Result {
    traced(
        "copy_bounded",
        cch_dest,
        dest_view(dest, cch_dest).and_then(|view| copy_worker(view, src, None)),
    )
}

/// Like [`copy_bounded`], but considers at most `cch_src` elements of `src`.
///
/// # Examples
/// ```
/// use safestrings::copy::copy_bounded_n;
///
/// let mut dest = [0u8; 8];
/// assert_eq!(copy_bounded_n(&mut dest, 8, b"hello\0", 3), Ok(()));
/// assert_eq!(&dest[..4], b"hel\0");
/// ```
pub fn copy_bounded_n<C: StrChar>(
    dest: &mut [C],
    cch_dest: usize,
    src: &[C],
    cch_src: usize,
) -> Result {
    traced(
        "copy_bounded_n",
        cch_dest,
        validate_cch(cch_src)
            .and_then(|_| dest_view(dest, cch_dest))
            .and_then(|view| copy_worker(view, src, Some(cch_src))),
    )
}

/// Copies into all of `dest`, stopping at the source terminator, at
/// `max_src` elements, or when `dest` is full, whichever comes first.
///
/// If `dest` filled up, the last element written is replaced by the
/// terminator and `InsufficientBuffer` is returned.
pub(crate) fn copy_worker<C: StrChar>(
    dest: &mut [C],
    src: &[C],
    max_src: Option<usize>,
) -> Result {
    if dest.is_empty() {
        return Err(Error::InvalidParameter);
    }

    let limit = max_src
        .map_or(dest.len(), |n| n.min(dest.len()))
        .min(src.len());
    let run = nul_position(&src[..limit]).unwrap_or(limit);

    if run == dest.len() {
        let keep = run - 1;
        dest[..keep].copy_from_slice(&src[..keep]);
        dest[keep] = C::NUL;
        return Err(Error::InsufficientBuffer);
    }

    dest[..run].copy_from_slice(&src[..run]);
    dest[run] = C::NUL;
    Ok(())
}
