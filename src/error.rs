//! The error taxonomy returned by [`crate::validate`].
//!
//! Every [`ErrorKind`] carries a distinct positional meaning, documented
//! on the variant itself. The `{,2,3}` family of C-original error codes
//! (`EXPECTED_CONT`/`EXPECTED_CONT2`/`EXPECTED_CONT3`, and similarly for
//! `TRUNC` and `SURROGATE_TRUNC`) is folded into a single variant per
//! family carrying a [`Missing`] payload, rather than three numerically
//! adjacent enum variants — a tagged union instead of an encoded gap.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How many continuation bytes were still missing when the sequence
/// broke off, for the `ExpectedContinuation`, `Truncated`, and
/// `SurrogateTruncated` error families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Missing {
    One,
    Two,
    Three,
}

impl Missing {
    #[inline]
    pub(crate) const fn from_count(missing: usize) -> Self {
        match missing {
            1 => Missing::One,
            2 => Missing::Two,
            _ => Missing::Three,
        }
    }

    /// The numeric count this value represents (1, 2, or 3).
    #[inline]
    pub const fn count(self) -> usize {
        match self {
            Missing::One => 1,
            Missing::Two => 2,
            Missing::Three => 3,
        }
    }
}

impl fmt::Display for Missing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count())
    }
}

/// The specific kind of UTF-8 (or variant) validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub enum ErrorKind {
    /// A byte in the range 0x80-0xBF appeared where a lead byte was
    /// expected. These bytes are only valid as continuation bytes.
    UnexpectedContinuation,

    /// A lead byte in the range 0xF8-0xFF, which never starts a valid
    /// sequence under any variant this crate supports.
    InvalidStartByte,

    /// The decoded code point exceeds U+10FFFF, the top of the Unicode
    /// range.
    Range,

    /// The sequence used more bytes than necessary for its code point.
    /// Requires `BAN_OVERLONG` or `BAN_OVERLONG_EXCEPT_NULL`.
    Overlong,

    /// The decoded code point is a Unicode noncharacter
    /// (U+FDD0..=U+FDEF, or any U+nFFFE/U+nFFFF). Requires
    /// `BAN_NONCHARACTERS`.
    Noncharacter,

    /// A zero byte was found in explicit-length mode. Requires
    /// `BAN_NULL_BYTE`.
    NullByte,

    /// The decoded code point falls in the surrogate range
    /// (U+D800..=U+DFFF). Requires `BAN_SURROGATES`.
    Surrogate,

    /// A low surrogate (U+DC00..=U+DFFF) appeared without a preceding
    /// high surrogate. Requires `CHECK_SURROGATES`.
    SurrogateLow,

    /// A high surrogate (U+D800..=U+DBFF) appeared immediately after
    /// another high surrogate, with no intervening low surrogate to
    /// complete the first pair. Requires `CHECK_SURROGATES`.
    SurrogateHigh,

    /// The sequence expected more continuation bytes but a
    /// non-continuation, non-terminating byte appeared instead.
    ExpectedContinuation(Missing),

    /// The buffer ended before the sequence's continuation bytes were
    /// fully read. Restart validation at `offset` once more bytes are
    /// available.
    Truncated(Missing),

    /// A high surrogate was the last complete sequence read, but the
    /// buffer ended (or, in sentinel mode, terminated) before its
    /// pairing low surrogate could be read. `offset`/`length` refer to
    /// the orphaned high surrogate, not the point of truncation, so the
    /// caller can buffer more input and resume there. Requires
    /// `CHECK_SURROGATES`.
    SurrogateTruncated(Missing),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::UnexpectedContinuation => write!(f, "unexpected continuation byte"),
            ErrorKind::InvalidStartByte => write!(f, "invalid start byte"),
            ErrorKind::Range => write!(f, "code point above U+10FFFF"),
            ErrorKind::Overlong => write!(f, "overlong encoding"),
            ErrorKind::Noncharacter => write!(f, "encoded Unicode noncharacter"),
            ErrorKind::NullByte => write!(f, "null byte"),
            ErrorKind::Surrogate => write!(f, "surrogate code point"),
            ErrorKind::SurrogateLow => write!(f, "unpaired low surrogate"),
            ErrorKind::SurrogateHigh => write!(f, "unpaired high surrogate"),
            ErrorKind::ExpectedContinuation(missing) => {
                write!(f, "expected {} more continuation byte(s)", missing)
            }
            ErrorKind::Truncated(missing) => {
                write!(f, "sequence truncated, {} byte(s) missing", missing)
            }
            ErrorKind::SurrogateTruncated(missing) => write!(
                f,
                "high surrogate orphaned, {} byte(s) missing for its pair",
                missing
            ),
        }
    }
}

/// A validation failure: which kind of violation, and exactly which
/// bytes of the input it covers.
///
/// `offset + length` never exceeds the length of the buffer that was
/// validated (see the restart property documented on [`crate::validate`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValidationError {
    /// What went wrong.
    pub kind: ErrorKind,
    /// Byte index into the buffer where the caller should restart or
    /// inspect. Exact meaning depends on `kind` (see the variant docs).
    pub offset: usize,
    /// Number of bytes belonging to the offending sequence that were
    /// already consumed before the error was detected.
    pub length: usize,
}

impl ValidationError {
    #[inline]
    pub(crate) const fn new(kind: ErrorKind, offset: usize, length: usize) -> Self {
        Self {
            kind,
            offset,
            length,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at byte {}", self.kind, self.offset)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ValidationError {}

/// The successful result of a validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Success {
    /// Index of the sentinel terminator (sentinel mode) or the end of
    /// the buffer (explicit-length mode).
    pub offset: usize,
}
