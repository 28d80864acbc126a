//! Bounded length scan.

use crate::capacity::validate_cch;
use crate::error::{traced, Error, Result};
use crate::types::{nul_position, StrChar};

/// Measures `s` without looking past `cch_max` elements.
///
/// Returns the number of elements before the terminator. The terminator must
/// sit strictly inside the first `cch_max` elements of `s`; otherwise the
/// sequence is untrusted and `InvalidParameter` is returned. Running off the
/// end of the slice counts as not finding it.
///
/// # Examples
/// ```
/// use safestrings::error::Error;
/// use safestrings::length::length_bounded;
/// assert_eq!(length_bounded(b"hello\0world", 16), Ok(5));
/// assert_eq!(length_bounded(b"hello\0", 5), Err(Error::InvalidParameter));
/// assert_eq!(length_bounded(b"hello", 16), Err(Error::InvalidParameter));
/// ```
pub fn length_bounded<C: StrChar>(s: &[C], cch_max: usize) -> Result<usize> {
    traced(
        "length_bounded",
        cch_max,
        validate_cch(cch_max).and_then(|cch| length_worker(s, cch)),
    )
}

pub(crate) fn length_worker<C: StrChar>(s: &[C], cch_max: usize) -> Result<usize> {
    let limit = cch_max.min(s.len());
    nul_position(&s[..limit]).ok_or(Error::InvalidParameter)
}

#[cfg(test)]
mod tests {
    use super::{length_bounded, length_worker};
    use crate::error::{Error, STRSAFE_MAX_CCH};

    #[test]
    fn test_length_found() {
        assert_eq!(length_worker(b"abc\0", 4), Ok(3));
        assert_eq!(length_worker(b"\0", 1), Ok(0));
    }

    #[test]
    fn test_length_terminator_at_limit_is_rejected() {
        assert_eq!(length_worker(b"abc\0", 3), Err(Error::InvalidParameter));
    }

    #[test]
    fn test_length_zero_limit() {
        assert_eq!(length_worker(b"\0", 0), Err(Error::InvalidParameter));
    }

    #[test]
    fn test_length_never_reads_past_limit() {
        // The byte after the limit is a terminator but must not be seen.
        assert_eq!(length_worker(b"ab\0", 2), Err(Error::InvalidParameter));
    }

    #[test]
    fn test_length_oversized_limit() {
        assert_eq!(
            length_bounded(b"a\0", STRSAFE_MAX_CCH + 1),
            Err(Error::InvalidParameter)
        );
        assert_eq!(length_bounded(b"a\0", STRSAFE_MAX_CCH), Ok(1));
    }

    #[test]
    fn test_length_wide() {
        let s: [u16; 4] = [0x41, 0x42, 0, 0x43];
        assert_eq!(length_bounded(&s, 4), Ok(2));
    }

    #[test]
    fn test_length_is_repeatable() {
        let s = b"repeat\0";
        assert_eq!(length_bounded(s, 7), length_bounded(s, 7));
    }
}
