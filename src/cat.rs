//! Bounded concatenation.
//!
//! Concatenation is the length scan followed by a bounded copy into the
//! space left after the existing content.

use crate::capacity::{dest_view, validate_cch};
use crate::copy::copy_worker;
use crate::error::{traced, Result};
use crate::length::length_worker;
use crate::types::StrChar;

/// Appends the terminated string `src` to the string already held in the
/// first `cch_dest` elements of `dest`.
///
/// The existing content must be terminated within `cch_dest`; if it is not,
/// `InvalidParameter` is returned and `dest` is left untouched. Truncation
/// follows [`copy_bounded`](crate::copy::copy_bounded) applied to the space
/// remaining after the existing content.
///
/// # Examples
/// ```
/// use safestrings::cat::concat_bounded;
/// use safestrings::error::Error;
///
/// let mut dest = *b"ab\0\0\0";
/// assert_eq!(concat_bounded(&mut dest, 5, b"cde\0"), Err(Error::InsufficientBuffer));
/// assert_eq!(&dest, b"abcd\0");
/// ```
pub fn concat_bounded<C: StrChar>(dest: &mut [C], cch_dest: usize, src: &[C]) -> Result {
    traced(
        "concat_bounded",
        cch_dest,
        dest_view(dest, cch_dest).and_then(|view| cat_worker(view, src, None)),
    )
}

/// Like [`concat_bounded`], but appends at most `cch_to_append` elements of
/// `src`.
///
/// # Examples
/// ```
/// use safestrings::cat::concat_bounded_n;
///
/// let mut dest = [0u8; 16];
/// dest[..4].copy_from_slice(b"foo\0");
/// assert_eq!(concat_bounded_n(&mut dest, 16, b"barbaz\0", 3), Ok(()));
/// assert_eq!(&dest[..7], b"foobar\0");
/// ```
pub fn concat_bounded_n<C: StrChar>(
    dest: &mut [C],
    cch_dest: usize,
    src: &[C],
    cch_to_append: usize,
) -> Result {
    traced(
        "concat_bounded_n",
        cch_dest,
        validate_cch(cch_to_append)
            .and_then(|_| dest_view(dest, cch_dest))
            .and_then(|view| cat_worker(view, src, Some(cch_to_append))),
    )
}

pub(crate) fn cat_worker<C: StrChar>(
    dest: &mut [C],
    src: &[C],
    max_src: Option<usize>,
) -> Result {
    let cch = dest.len();
    let existing = length_worker(dest, cch)?;
    copy_worker(&mut dest[existing..], src, max_src)
}

#[cfg(test)]
mod tests {
    use super::{cat_worker, concat_bounded, concat_bounded_n};
    use crate::error::Error;

    #[test]
    fn test_cat_fits() {
        let mut dest = [0u8; 12];
        dest[..6].copy_from_slice(b"hello\0");
        assert_eq!(concat_bounded(&mut dest, 12, b" world\0"), Ok(()));
        assert_eq!(&dest, b"hello world\0");
    }

    #[test]
    fn test_cat_truncates_on_remaining_capacity() {
        let mut dest = *b"ab\0\0\0";
        assert_eq!(cat_worker(&mut dest, b"cde\0", None), Err(Error::InsufficientBuffer));
        assert_eq!(&dest, b"abcd\0");
    }

    #[test]
    fn test_cat_full_destination_truncates_without_appending() {
        // Existing content already uses every slot but the terminator.
        let mut dest = *b"abcd\0";
        assert_eq!(concat_bounded(&mut dest, 5, b"x\0"), Err(Error::InsufficientBuffer));
        assert_eq!(&dest, b"abcd\0");
    }

    #[test]
    fn test_cat_empty_source() {
        let mut dest = *b"ab\0\0";
        assert_eq!(concat_bounded(&mut dest, 4, b"\0"), Ok(()));
        assert_eq!(&dest, b"ab\0\0");
    }

    #[test]
    fn test_cat_untrusted_destination_is_untouched() {
        let mut dest = *b"abcde";
        assert_eq!(concat_bounded(&mut dest, 5, b"x\0"), Err(Error::InvalidParameter));
        assert_eq!(&dest, b"abcde");
    }

    #[test]
    fn test_cat_terminator_beyond_stated_capacity_is_untrusted() {
        let mut dest = *b"abc\0\0\0";
        assert_eq!(concat_bounded(&mut dest, 3, b"x\0"), Err(Error::InvalidParameter));
        assert_eq!(&dest, b"abc\0\0\0");
    }

    #[test]
    fn test_cat_zero_capacity() {
        let mut dest = [0u8; 4];
        assert_eq!(concat_bounded(&mut dest, 0, b"x\0"), Err(Error::InvalidParameter));
    }

    #[test]
    fn test_cat_n_limits_appended_run() {
        let mut dest = [0xAAu8; 8];
        dest[..3].copy_from_slice(b"ab\0");
        assert_eq!(concat_bounded_n(&mut dest, 8, b"cdefgh\0", 2), Ok(()));
        assert_eq!(&dest[..5], b"abcd\0");
        assert_eq!(dest[5], 0xAA);
    }

    #[test]
    fn test_cat_n_truncates() {
        let mut dest = *b"ab\0\0";
        assert_eq!(
            concat_bounded_n(&mut dest, 4, b"cdef\0", 3),
            Err(Error::InsufficientBuffer)
        );
        assert_eq!(&dest, b"abc\0");
    }

    #[test]
    fn test_cat_wide() {
        let mut dest: [u16; 4] = [0x61, 0, 0, 0];
        assert_eq!(concat_bounded(&mut dest, 4, &[0x62u16, 0x63, 0]), Ok(()));
        assert_eq!(dest, [0x61, 0x62, 0x63, 0]);
    }
}
