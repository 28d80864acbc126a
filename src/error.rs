//! Outcome codes shared by every bounded routine.
//!
//! Operations return [`Result`]. For callers that need the integer form
//! (FFI shims, logs), [`to_hresult`] maps an outcome onto the HRESULT-style
//! values below, where success is any non-negative code.

use thiserror::Error;

/// Success.
pub const S_OK: i32 = 0x0000_0000;
/// The destination was too small; its content is truncated but terminated.
pub const STRSAFE_E_INSUFFICIENT_BUFFER: i32 = 0x8007_007A_u32 as i32;
/// A capacity or sequence argument was rejected before any write.
pub const STRSAFE_E_INVALID_PARAMETER: i32 = 0x8007_0057_u32 as i32;
/// Reserved for scanning routines that hit an input boundary.
pub const STRSAFE_E_END_OF_FILE: i32 = 0x8007_0026_u32 as i32;

/// Largest element count any routine accepts (`i32::MAX`).
pub const STRSAFE_MAX_CCH: usize = 2_147_483_647;

/// Failure outcome of a bounded routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Error {
    /// The source did not fit. The destination holds a terminated prefix.
    #[error("insufficient buffer: output was truncated")]
    InsufficientBuffer,

    /// Zero or oversized capacity, or a sequence with no terminator in bounds.
    #[error("invalid parameter")]
    InvalidParameter,

    /// Input boundary reached while scanning.
    #[error("end of file")]
    EndOfFile,
}

impl Error {
    /// HRESULT-style code for this outcome.
    pub const fn code(self) -> i32 {
        match self {
            Error::InsufficientBuffer => STRSAFE_E_INSUFFICIENT_BUFFER,
            Error::InvalidParameter => STRSAFE_E_INVALID_PARAMETER,
            Error::EndOfFile => STRSAFE_E_END_OF_FILE,
        }
    }

    /// Returns `true` when the destination is valid but truncated.
    pub const fn is_truncation(self) -> bool {
        matches!(self, Error::InsufficientBuffer)
    }
}

pub type Result<T = ()> = core::result::Result<T, Error>;

/// Returns `true` for any success code.
///
/// # Examples
/// ```
/// use safestrings::error::{succeeded, S_OK, STRSAFE_E_INSUFFICIENT_BUFFER};
/// assert!(succeeded(S_OK));
/// assert!(!succeeded(STRSAFE_E_INSUFFICIENT_BUFFER));
/// ```
pub const fn succeeded(code: i32) -> bool {
    code >= 0
}

/// Returns `true` for any failure code.
pub const fn failed(code: i32) -> bool {
    code < 0
}

/// Collapses an outcome into its integer code.
pub fn to_hresult<T>(result: &Result<T>) -> i32 {
    match result {
        Ok(_) => S_OK,
        Err(e) => e.code(),
    }
}

/// Maps an integer code back onto an outcome.
///
/// Non-negative codes are success. Unknown negative codes are reported as
/// `InvalidParameter`.
pub fn from_hresult(code: i32) -> Result {
    match code {
        c if succeeded(c) => Ok(()),
        STRSAFE_E_INSUFFICIENT_BUFFER => Err(Error::InsufficientBuffer),
        STRSAFE_E_END_OF_FILE => Err(Error::EndOfFile),
        _ => Err(Error::InvalidParameter),
    }
}

/// Emits a trace event for a failed public call and passes the result through.
#[inline]
pub(crate) fn traced<T>(op: &'static str, cch: usize, result: Result<T>) -> Result<T> {
    if let Err(error) = &result {
        tracing::trace!(op, cch, code = error.code(), %error, "bounded string operation failed");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_failures() {
        for e in [Error::InsufficientBuffer, Error::InvalidParameter, Error::EndOfFile] {
            assert!(failed(e.code()));
            assert_eq!(from_hresult(e.code()), Err(e));
        }
        assert!(succeeded(S_OK));
    }

    #[test]
    fn test_hresult_values() {
        assert_eq!(STRSAFE_E_INSUFFICIENT_BUFFER as u32, 0x8007_007A);
        assert_eq!(STRSAFE_E_INVALID_PARAMETER as u32, 0x8007_0057);
        assert_eq!(STRSAFE_E_END_OF_FILE as u32, 0x8007_0026);
        assert_eq!(STRSAFE_MAX_CCH, i32::MAX as usize);
    }

    #[test]
    fn test_to_hresult() {
        assert_eq!(to_hresult(&Ok::<usize, Error>(3)), S_OK);
        assert_eq!(
            to_hresult::<()>(&Err(Error::InsufficientBuffer)),
            STRSAFE_E_INSUFFICIENT_BUFFER
        );
    }

    #[test]
    fn test_from_hresult_positive_is_success() {
        assert_eq!(from_hresult(1), Ok(()));
        assert_eq!(from_hresult(-1), Err(Error::InvalidParameter));
    }

    #[test]
    fn test_truncation_predicate() {
        assert!(Error::InsufficientBuffer.is_truncation());
        assert!(!Error::InvalidParameter.is_truncation());
    }

    #[test]
    fn test_display() {
        assert_eq!(Error::InvalidParameter.to_string(), "invalid parameter");
    }
}
