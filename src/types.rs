//! C-compatible type aliases and the element trait the bounded routines are
//! generic over.

#![allow(non_camel_case_types)]

/// C `wchar_t` equivalent.
///
/// Windows uses 16-bit UTF-16 code units, while Unix-like targets typically
/// use 32-bit wide characters.
#[cfg(target_os = "windows")]
pub type wchar_t = u16;

/// C `wchar_t` equivalent on non-Windows targets.
#[cfg(not(target_os = "windows"))]
pub type wchar_t = i32;

/// A character element stored in a terminated buffer.
///
/// Narrow and wide strings differ only in the element type; every engine in
/// this crate is written once against this trait.
pub trait StrChar: Copy + Eq + 'static {
    /// The terminator value.
    const NUL: Self;

    /// Width of one element in bytes.
    const WIDTH: usize = core::mem::size_of::<Self>();

    /// Returns `true` if this element terminates a sequence.
    #[inline]
    fn is_nul(self) -> bool {
        self == Self::NUL
    }
}

macro_rules! impl_str_char {
    ($($t:ty),* $(,)?) => {
        $(
            impl StrChar for $t {
                const NUL: Self = 0;
            }
        )*
    };
}

impl_str_char!(u8, i8, u16, i16, u32, i32);

impl StrChar for char {
    const NUL: Self = '\0';
}

/// Position of the first terminator in `s`, if any.
#[inline]
pub(crate) fn nul_position<C: StrChar>(s: &[C]) -> Option<usize> {
    s.iter().position(|&c| c.is_nul())
}
