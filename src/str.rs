//! Narrow string routines
//!
//! Bounded replacements for `strcpy`, `strncpy`, `strcat`, `strncat` and
//! `strlen` on byte strings. Every routine takes the destination capacity
//! explicitly and reports truncation through [`Error::InsufficientBuffer`].
//!
//! [`Error::InsufficientBuffer`]: crate::error::Error::InsufficientBuffer

use crate::capacity::copy_bounded_bytes;
use crate::cat::{concat_bounded, concat_bounded_n};
use crate::copy::{copy_bounded, copy_bounded_n};
use crate::error::Result;
use crate::length::length_bounded;

/// Length of a byte string that must be terminated within `cch_max` bytes.
pub fn strlen_strsafe(s: &[u8], cch_max: usize) -> Result<usize> {
    length_bounded(s, cch_max)
}

/// Replacement for `strcpy`/`strncpy` taking the destination size in bytes.
///
/// # Examples
/// ```
/// use safestrings::str::strncpy_strsafe;
/// use safestrings::error::Error;
///
/// let mut buffer = [0u8; 5];
/// let rc = strncpy_strsafe(&mut buffer, 5, b"123456789\0");
/// assert_eq!(rc, Err(Error::InsufficientBuffer));
/// assert_eq!(&buffer, b"1234\0");
/// ```
pub fn strncpy_strsafe(dest: &mut [u8], cb_dest: usize, src: &[u8]) -> Result {
    copy_bounded_bytes(dest, cb_dest, src)
}

/// Replacement for `strcpy` taking the destination size in characters.
pub fn strcpy_strsafe(dest: &mut [u8], cch_dest: usize, src: &[u8]) -> Result {
    copy_bounded(dest, cch_dest, src)
}

/// Copies at most `cch_src` bytes of `src`.
pub fn strncpy_n_strsafe(dest: &mut [u8], cch_dest: usize, src: &[u8], cch_src: usize) -> Result {
    copy_bounded_n(dest, cch_dest, src, cch_src)
}

/// Replacement for `strcat`.
///
/// # Examples
/// ```
/// use safestrings::str::strcat_strsafe;
///
/// let mut dest = [0u8; 20];
/// dest[..6].copy_from_slice(b"hello\0");
/// assert!(strcat_strsafe(&mut dest, 20, b" world\0").is_ok());
/// assert_eq!(&dest[..12], b"hello world\0");
/// ```
pub fn strcat_strsafe(dest: &mut [u8], cch_dest: usize, src: &[u8]) -> Result {
    concat_bounded(dest, cch_dest, src)
}

/// Replacement for `strncat`: appends at most `cch_to_append` bytes.
pub fn strncat_strsafe(
    dest: &mut [u8],
    cch_dest: usize,
    src: &[u8],
    cch_to_append: usize,
) -> Result {
    concat_bounded_n(dest, cch_dest, src, cch_to_append)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_strncpy_strsafe_overflow_input() {
        // Nine characters into a five byte buffer.
        let mut buffer = [0xAAu8; 5];
        assert_eq!(
            strncpy_strsafe(&mut buffer, 5, b"123456789\0"),
            Err(Error::InsufficientBuffer)
        );
        assert_eq!(&buffer, b"1234\0");
    }

    #[test]
    fn test_strcpy_strsafe_fits() {
        let mut buffer = [0xAAu8; 9];
        assert_eq!(strcpy_strsafe(&mut buffer, 9, b"Password\0"), Ok(()));
        assert_eq!(&buffer, b"Password\0");
    }

    #[test]
    fn test_strncpy_n_strsafe() {
        let mut buffer = [0u8; 9];
        assert_eq!(strncpy_n_strsafe(&mut buffer, 9, b"Password\0", 4), Ok(()));
        assert_eq!(&buffer[..5], b"Pass\0");
    }

    #[test]
    fn test_strcat_then_strncat() {
        let mut buffer = [0u8; 16];
        assert_eq!(strcat_strsafe(&mut buffer, 16, b"key=\0"), Ok(()));
        assert_eq!(strncat_strsafe(&mut buffer, 16, b"value;junk\0", 5), Ok(()));
        assert_eq!(strlen_strsafe(&buffer, 16), Ok(9));
        assert_eq!(&buffer[..10], b"key=value\0");
    }

    #[test]
    fn test_strlen_strsafe_unterminated() {
        assert_eq!(strlen_strsafe(b"abc", 3), Err(Error::InvalidParameter));
    }
}
