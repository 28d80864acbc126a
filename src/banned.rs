//! Catalogue of legacy unbounded APIs and a scanner for their call sites.
//!
//! The catalogue lists functions that should not appear in new code along
//! with the bounded routines from this crate that replace them. Lint tooling
//! and pre-commit hooks can use [`BannedCalls`] to flag call sites in C or
//! Rust sources.
//!
//! Two policies are supported. Under [`Mode::Deny`] every entry of the full
//! deny list is an error. Under [`Mode::WarnOnly`] a shorter list of the most
//! common offenders is reported as deprecation warnings, carrying a
//! [`hint`](BannedApi::hint) where the legacy API has a well-known bounded
//! sibling.
//!
//! # Examples
//! ```
//! use safestrings::banned::{lookup, BannedCalls, Category};
//!
//! let api = lookup("strcpy").unwrap();
//! assert_eq!(api.category, Category::Copy);
//! assert!(api.replacements.contains(&"str::strncpy_strsafe"));
//!
//! let src = "int main() {\n  strcpy(buf, input); // strcat(x)\n}\n";
//! let hits: Vec<_> = BannedCalls::new(src).collect();
//! assert_eq!(hits.len(), 1);
//! assert_eq!((hits[0].api.name, hits[0].line, hits[0].column), ("strcpy", 2, 3));
//! ```

/// What a banned API does, which decides the kind of replacement offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Copy,
    Concat,
    Format,
    Input,
    Memory,
    Length,
    Tokenize,
    Path,
    Scan,
    IntToString,
    Alloca,
}

/// Which policy lists an API appears on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lists {
    /// Denied, and deprecated under the warn-only policy.
    Both,
    /// Only on the full deny list.
    Deny,
    /// Only deprecated under the warn-only policy.
    Warn,
}

/// Scanning policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Every denied API is an error.
    #[default]
    Deny,
    /// Only the deprecation list is reported, as warnings.
    WarnOnly,
}

/// How a finding should be surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Warn,
    Deny,
}

/// One catalogued API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BannedApi {
    pub name: &'static str,
    pub category: Category,
    /// Suggested bounded routines, as paths relative to this crate. Empty when
    /// the call should simply be removed or has no equivalent here.
    pub replacements: &'static [&'static str],
    pub lists: Lists,
    /// Free-form advice for APIs outside this crate's scope, e.g. `snprintf`
    /// for `sprintf`.
    pub hint: Option<&'static str>,
}

impl BannedApi {
    /// Severity under `mode`, or `None` if the policy does not list this API.
    pub const fn severity(&self, mode: Mode) -> Option<Severity> {
        match (mode, self.lists) {
            (Mode::Deny, Lists::Both | Lists::Deny) => Some(Severity::Deny),
            (Mode::WarnOnly, Lists::Both | Lists::Warn) => Some(Severity::Warn),
            _ => None,
        }
    }
}

const COPY: &[&str] = &["str::strncpy_strsafe", "str::strcpy_strsafe", "copy::copy_bounded"];
const COPY_N: &[&str] = &["str::strncpy_n_strsafe", "copy::copy_bounded_n"];
const WCOPY: &[&str] = &["wide::wcscpy_chars_strsafe", "wide::wcscpy_bytes_strsafe"];
const CAT: &[&str] = &["str::strcat_strsafe", "cat::concat_bounded"];
const CAT_N: &[&str] = &["str::strncat_strsafe", "cat::concat_bounded_n"];
const WCAT: &[&str] = &["wide::wcscat_chars_strsafe", "wide::wcscat_bytes_strsafe"];
const WCAT_N: &[&str] = &["wide::wcsncat_chars_strsafe", "wide::wcsncat_bytes_strsafe"];
const LEN: &[&str] = &["str::strlen_strsafe", "length::length_bounded"];
const WLEN: &[&str] = &["wide::wcslen_strsafe", "length::length_bounded"];
const NONE: &[&str] = &[];

macro_rules! banned {
    (@hint $hint:literal) => { Some($hint) };
    (@hint) => { None };
    ($($name:literal => $cat:ident, $repl:expr, $lists:ident $(, hint $hint:literal)?;)*) => {
        &[$(BannedApi {
            name: $name,
            category: Category::$cat,
            replacements: $repl,
            lists: Lists::$lists,
            hint: banned!(@hint $($hint)?),
        },)*]
    };
}

/// Every catalogued API, grouped by category.
pub static BANNED_APIS: &[BannedApi] = banned! {
    "strcpy" => Copy, COPY, Both;
    "strcpyA" => Copy, COPY, Deny;
    "strcpyW" => Copy, WCOPY, Deny;
    "wcscpy" => Copy, WCOPY, Both;
    "lstrcpy" => Copy, COPY, Deny;
    "_tccpy" => Copy, COPY, Deny;
    "_mbccpy" => Copy, COPY, Deny;
    "_ftcscpy" => Copy, COPY, Deny;
    "strncpy" => Copy, COPY_N, Both;
    "wcsncpy" => Copy, WCOPY, Both;
    "_tcsncpy" => Copy, COPY_N, Deny;
    "_mbsncpy" => Copy, COPY_N, Deny;
    "_mbsnbcpy" => Copy, COPY_N, Deny;
    "lstrcpyn" => Copy, COPY_N, Deny;

    "strcat" => Concat, CAT, Both;
    "strcatA" => Concat, CAT, Deny;
    "strcatW" => Concat, WCAT, Deny;
    "wcscat" => Concat, WCAT, Both;
    "_tcscat" => Concat, CAT, Deny;
    "_mbscat" => Concat, CAT, Deny;
    "lstrcat" => Concat, CAT, Deny;
    "lstrcatA" => Concat, CAT, Deny;
    "lstrcatW" => Concat, WCAT, Deny;
    "_tccat" => Concat, CAT, Deny;
    "_mbccat" => Concat, CAT, Deny;
    "_ftcscat" => Concat, CAT, Deny;
    "strncat" => Concat, CAT_N, Both;
    "wcsncat" => Concat, WCAT_N, Both;
    "_tcsncat" => Concat, CAT_N, Deny;
    "_mbsncat" => Concat, CAT_N, Deny;
    "_mbsnbcat" => Concat, CAT_N, Deny;
    "lstrncat" => Concat, CAT_N, Deny;
    "lstrcatn" => Concat, CAT_N, Deny;

    "sprintf" => Format, NONE, Both, hint "snprintf";
    "sprintfA" => Format, NONE, Deny;
    "sprintfW" => Format, NONE, Deny;
    "wsprintf" => Format, NONE, Deny;
    "wsprintfA" => Format, NONE, Deny;
    "wsprintfW" => Format, NONE, Deny;
    "swprintf" => Format, NONE, Deny;
    "_stprintf" => Format, NONE, Deny;
    "wvsprintf" => Format, NONE, Deny;
    "vsprintf" => Format, NONE, Both, hint "vsnprintf";
    "_vstprintf" => Format, NONE, Deny;
    "vswprintf" => Format, NONE, Deny;
    "wnsprintf" => Format, NONE, Deny;
    "wnsprintfA" => Format, NONE, Deny;
    "wnsprintfW" => Format, NONE, Deny;
    "_snwprintf" => Format, NONE, Deny;
    "_snprintf" => Format, NONE, Deny;
    "_sntprintf" => Format, NONE, Deny;
    "_vsnprintf" => Format, NONE, Deny;
    "vsnprintf" => Format, NONE, Deny;
    "_vsnwprintf" => Format, NONE, Deny;
    "_vsntprintf" => Format, NONE, Deny;
    "wvnsprintf" => Format, NONE, Deny;

    "gets" => Input, NONE, Both, hint "fgets";
    "_getts" => Input, NONE, Deny;
    "_gettws" => Input, NONE, Deny;

    "memcpy" => Memory, COPY_N, Both;
    "wmemcpy" => Memory, WCOPY, Both;

    "strlen" => Length, LEN, Both;
    "wcslen" => Length, WLEN, Both;
    "_mbslen" => Length, LEN, Deny;
    "_mbstrlen" => Length, LEN, Deny;
    "lstrlen" => Length, LEN, Deny;

    "strtok" => Tokenize, NONE, Deny;
    "_tcstok" => Tokenize, NONE, Deny;
    "_mbstok" => Tokenize, NONE, Deny;

    "makepath" => Path, NONE, Deny;
    "_tmakepath" => Path, NONE, Deny;
    "_makepath" => Path, NONE, Deny;
    "_wmakepath" => Path, NONE, Deny;
    "_splitpath" => Path, NONE, Deny;
    "_tsplitpath" => Path, NONE, Deny;
    "_wsplitpath" => Path, NONE, Deny;

    "scanf" => Scan, NONE, Both;
    "wscanf" => Scan, NONE, Both;
    "_tscanf" => Scan, NONE, Deny;
    "sscanf" => Scan, NONE, Both;
    "swscanf" => Scan, NONE, Both;
    "_stscanf" => Scan, NONE, Deny;
    "snscanf" => Scan, NONE, Deny;
    "snwscanf" => Scan, NONE, Deny;
    "_sntscanf" => Scan, NONE, Deny;

    "_itoa" => IntToString, NONE, Deny;
    "_itow" => IntToString, NONE, Deny;
    "_i64toa" => IntToString, NONE, Deny;
    "_i64tow" => IntToString, NONE, Deny;
    "_ui64toa" => IntToString, NONE, Deny;
    "_ui64tot" => IntToString, NONE, Deny;
    "_ui64tow" => IntToString, NONE, Deny;
    "_ultoa" => IntToString, NONE, Deny;
    "_ultot" => IntToString, NONE, Deny;
    "_ultow" => IntToString, NONE, Deny;
    "itoa" => IntToString, NONE, Warn;
    "itow" => IntToString, NONE, Warn;
    "ultoa" => IntToString, NONE, Warn;
    "ultow" => IntToString, NONE, Warn;

    "alloca" => Alloca, NONE, Both, hint "remove the call";
    "_alloca" => Alloca, NONE, Deny;
};

/// Finds the catalogue entry for `name`.
pub fn lookup(name: &str) -> Option<&'static BannedApi> {
    BANNED_APIS.iter().find(|api| api.name == name)
}

/// A call to a banned API found in source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finding {
    pub api: &'static BannedApi,
    pub severity: Severity,
    /// Byte offset of the identifier.
    pub offset: usize,
    /// 1-based line.
    pub line: usize,
    /// 1-based column, in bytes.
    pub column: usize,
}

/// Iterator over banned call sites in C-family or Rust source.
///
/// An identifier counts as a call when the next non-whitespace byte is `(`.
/// Line and block comments, string literals (including Rust raw strings) and
/// character literals are skipped. Member calls (`x.strcpy(`, `p->strcpy(`)
/// are not reported. Path-qualified calls are reported when the path names
/// the C library: `libc::`, `std::`, `core::ffi::`, `std::ffi::` or a bare
/// leading `::`.
pub struct BannedCalls<'a> {
    src: &'a [u8],
    mode: Mode,
    pos: usize,
    line: usize,
    line_start: usize,
}

/// Path qualifiers under which a catalogued name still means the C function.
const LIBC_PATHS: &[&[u8]] = &[b"", b"libc", b"std", b"core::ffi", b"std::ffi"];

impl<'a> BannedCalls<'a> {
    /// Scans `src` under [`Mode::Deny`].
    pub fn new(src: &'a str) -> Self {
        Self::with_mode(src, Mode::Deny)
    }

    pub fn with_mode(src: &'a str, mode: Mode) -> Self {
        Self {
            src: src.as_bytes(),
            mode,
            pos: 0,
            line: 1,
            line_start: 0,
        }
    }

    fn peek(&self, at: usize) -> u8 {
        self.src.get(at).copied().unwrap_or(0)
    }

    fn advance_to(&mut self, end: usize) {
        let end = end.min(self.src.len());
        for i in self.pos..end {
            if self.src[i] == b'\n' {
                self.line += 1;
                self.line_start = i + 1;
            }
        }
        self.pos = end;
    }

    /// End of a quoted literal starting at `self.pos`, honoring escapes.
    fn literal_end(&self, quote: u8) -> usize {
        let mut i = self.pos + 1;
        while i < self.src.len() {
            match self.src[i] {
                b'\\' => i += 2,
                b'\n' if quote == b'\'' => return i,
                c if c == quote => return i + 1,
                _ => i += 1,
            }
        }
        self.src.len()
    }

    fn is_call(&self, mut after: usize) -> bool {
        while after < self.src.len() && self.src[after].is_ascii_whitespace() {
            after += 1;
        }
        self.peek(after) == b'('
    }

    /// End of a Rust raw string (`r"..."`, `br#"..."#`) starting at
    /// `self.pos`, or `None` if no raw string starts here.
    fn raw_string_end(&self) -> Option<usize> {
        let mut i = self.pos;
        if self.peek(i) == b'b' {
            i += 1;
        }
        if self.peek(i) != b'r' {
            return None;
        }
        i += 1;
        let hashes_start = i;
        while self.peek(i) == b'#' {
            i += 1;
        }
        let hashes = i - hashes_start;
        if self.peek(i) != b'"' {
            return None;
        }

        i += 1;
        while i < self.src.len() {
            if self.src[i] == b'"' {
                let closing = self.src.get(i + 1..i + 1 + hashes);
                if closing.is_some_and(|h| h.iter().all(|&b| b == b'#')) {
                    return Some(i + 1 + hashes);
                }
            }
            i += 1;
        }
        Some(self.src.len())
    }

    /// Whether the identifier at `start` refers to the C function rather than
    /// to a method or an item of some other module.
    fn names_libc(&self, start: usize) -> bool {
        let before = &self.src[..start];
        if before.ends_with(b".") || before.ends_with(b"->") {
            return false;
        }
        if !before.ends_with(b"::") {
            return true;
        }

        // Walk back over `seg::seg::` to the start of the qualifier.
        let mut q_start = start;
        while self.src[..q_start].ends_with(b"::") {
            let seg_end = q_start - 2;
            let mut seg_start = seg_end;
            while seg_start > 0 && is_ident_continue(self.src[seg_start - 1]) {
                seg_start -= 1;
            }
            q_start = seg_start;
            if seg_start == seg_end {
                break;
            }
        }
        let mut path = &self.src[q_start..start - 2];
        if let Some(rest) = path.strip_prefix(b"::") {
            path = rest;
        }
        LIBC_PATHS.contains(&path)
    }
}

fn is_ident_start(c: u8) -> bool {
    c == b'_' || c.is_ascii_alphabetic()
}

fn is_ident_continue(c: u8) -> bool {
    c == b'_' || c.is_ascii_alphanumeric()
}

fn utf8_width(lead: u8) -> usize {
    match lead {
        0xF0..=0xFF => 4,
        0xE0..=0xEF => 3,
        0xC0..=0xDF => 2,
        _ => 1,
    }
}

impl Iterator for BannedCalls<'_> {
    type Item = Finding;

    fn next(&mut self) -> Option<Finding> {
        while self.pos < self.src.len() {
            let c = self.src[self.pos];
            let next = self.peek(self.pos + 1);

            if c == b'/' && next == b'/' {
                let end = self.src[self.pos..]
                    .iter()
                    .position(|&b| b == b'\n')
                    .map_or(self.src.len(), |n| self.pos + n);
                self.advance_to(end);
            } else if c == b'/' && next == b'*' {
                let end = self.src[self.pos + 2..]
                    .windows(2)
                    .position(|w| w == b"*/")
                    .map_or(self.src.len(), |n| self.pos + 2 + n + 2);
                self.advance_to(end);
            } else if c == b'"' {
                let end = self.literal_end(b'"');
                self.advance_to(end);
            } else if c == b'\'' {
                // A lone quote is a Rust lifetime or label, not a literal.
                if next == b'\\' {
                    let end = self.literal_end(b'\'');
                    self.advance_to(end);
                } else {
                    let close = self.pos + 1 + utf8_width(next);
                    if self.peek(close) == b'\'' {
                        self.advance_to(close + 1);
                    } else {
                        self.advance_to(self.pos + 1);
                    }
                }
            } else if let Some(end) = self.raw_string_end() {
                self.advance_to(end);
            } else if is_ident_start(c) {
                let start = self.pos;
                let mut end = start + 1;
                while end < self.src.len() && is_ident_continue(self.src[end]) {
                    end += 1;
                }
                let column = start - self.line_start + 1;
                let line = self.line;
                self.advance_to(end);

                // The identifier bytes are ASCII, so this cannot fail.
                let Ok(name) = core::str::from_utf8(&self.src[start..end]) else {
                    continue;
                };
                let Some(api) = lookup(name) else {
                    continue;
                };
                let Some(severity) = api.severity(self.mode) else {
                    continue;
                };
                if self.is_call(end) && self.names_libc(start) {
                    return Some(Finding {
                        api,
                        severity,
                        offset: start,
                        line,
                        column,
                    });
                }
            } else if c.is_ascii_digit() {
                // Skip numeric literals so suffixes are not read as identifiers.
                let mut end = self.pos + 1;
                while end < self.src.len() && is_ident_continue(self.src[end]) {
                    end += 1;
                }
                self.advance_to(end);
            } else {
                self.advance_to(self.pos + 1);
            }
        }
        None
    }
}
