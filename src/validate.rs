//! The validation engine itself: a single pass, left to right, over a
//! byte buffer.
//!
//! See [`validate`] for the entry point. The algorithm is a direct
//! generalization of a scalar byte-by-byte UTF-8 scanner (the same shape
//! this crate's ancestry uses for its own UTF-8 validator) to a
//! caller-selected [`Flags`] set, plus cross-sequence surrogate-pairing
//! state for the CESU-8/MUTF-8 variants.

use crate::error::{ErrorKind, Missing, Success, ValidationError};
use crate::flags::Flags;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How much of `buffer` is in scope for a [`validate`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LengthMode {
    /// Validate exactly this many bytes of `buffer` (clamped to
    /// `buffer.len()` if the caller passes a count longer than the
    /// buffer actually is).
    Explicit(usize),

    /// Validate bytes up to, but not including, the first zero byte.
    /// If no zero byte appears before `buffer` ends, the entire buffer
    /// is treated as valid content once the rest of it validates
    /// cleanly — there is no implicit terminator beyond what the slice
    /// actually contains.
    UntilNul,
}

impl From<usize> for LengthMode {
    /// Convenience conversion for callers migrating from a
    /// sentinel-integer API: any concrete count becomes
    /// [`LengthMode::Explicit`]. To get [`LengthMode::UntilNul`],
    /// construct it directly.
    #[inline]
    fn from(len: usize) -> Self {
        LengthMode::Explicit(len)
    }
}

/// Validate `buffer` against `flags`, scanning left to right exactly
/// once.
///
/// Returns `Ok(Success)` iff the in-scope portion of `buffer` (per
/// `length_mode`) is entirely well-formed under `flags`. On the first
/// violation, returns `Err(ValidationError)` describing its kind and
/// exact byte range; scanning stops immediately and no later violation
/// is reported even if one exists.
///
/// # Restart property
///
/// If the error is one of the truncation-class kinds
/// ([`ErrorKind::Truncated`] or [`ErrorKind::SurrogateTruncated`]),
/// re-validating `&buffer[..error.offset]` under the same flags is
/// guaranteed to return `Ok`. This lets a streaming caller buffer more
/// input and resume the scan at `error.offset` without re-checking
/// bytes it has already accepted.
///
/// # Examples
///
/// ```
/// use utf8chk::{validate, Flags, LengthMode};
///
/// let ok = validate(b"Hello, world!", LengthMode::Explicit(13), Flags::UTF8);
/// assert!(ok.is_ok());
///
/// let err = validate(&[0xC0, 0x80], LengthMode::Explicit(2), Flags::UTF8).unwrap_err();
/// assert_eq!(err.offset, 0);
/// assert_eq!(err.length, 2);
/// ```
pub fn validate(
    buffer: &[u8],
    length_mode: LengthMode,
    flags: Flags,
) -> Result<Success, ValidationError> {
    let sentinel = matches!(length_mode, LengthMode::UntilNul);
    let scoped_len = match length_mode {
        LengthMode::Explicit(n) => n.min(buffer.len()),
        LengthMode::UntilNul => buffer.len(),
    };
    let buffer = &buffer[..scoped_len];

    let mut cursor = 0usize;
    let mut expect_low_surrogate = false;
    let mut cached_high: u32 = 0;
    let mut last_sequence_length = 0usize;

    while cursor < buffer.len() {
        let c = buffer[cursor];

        if c == 0 {
            if sentinel {
                return Ok(Success { offset: cursor });
            }
            if flags.ban_null_byte() {
                return Err(ValidationError::new(ErrorKind::NullByte, cursor, 1));
            }
            // Falls through: a permitted zero byte is ordinary ASCII.
        }

        let (n, mut u, u_min) = if c < 0x80 {
            // ASCII bytes can never be surrogates, so unlike a
            // multi-byte non-surrogate sequence, this does not cancel
            // a pending high surrogate: a later low surrogate still
            // pairs with it across the intervening ASCII.
            cursor += 1;
            last_sequence_length = 1;
            continue;
        } else if c < 0xC0 {
            return Err(ValidationError::new(
                ErrorKind::UnexpectedContinuation,
                cursor,
                1,
            ));
        } else if c < 0xE0 {
            (2usize, (c & 0x1F) as u32, 0x80u32)
        } else if c < 0xF0 {
            (3usize, (c & 0x0F) as u32, 0x800u32)
        } else if c < 0xF8 {
            (4usize, (c & 0x07) as u32, 0x10000u32)
        } else {
            return Err(ValidationError::new(ErrorKind::InvalidStartByte, cursor, 1));
        };

        let remaining = buffer.len() - cursor;
        if remaining < n {
            let missing = Missing::from_count(n - remaining);
            if expect_low_surrogate {
                return Err(ValidationError::new(
                    ErrorKind::SurrogateTruncated(missing),
                    cursor - last_sequence_length,
                    last_sequence_length,
                ));
            }
            return Err(ValidationError::new(
                ErrorKind::Truncated(missing),
                cursor,
                remaining,
            ));
        }

        let mut stray = None;
        for i in 1..n {
            let b = buffer[cursor + i];
            if (b & 0xC0) != 0x80 {
                stray = Some(i);
                break;
            }
            u = (u << 6) | (b & 0x3F) as u32;
        }

        if let Some(i) = stray {
            if sentinel && buffer[cursor + i] == 0 {
                let missing = Missing::from_count(n - i);
                if expect_low_surrogate {
                    return Err(ValidationError::new(
                        ErrorKind::SurrogateTruncated(missing),
                        cursor - last_sequence_length,
                        last_sequence_length,
                    ));
                }
                return Err(ValidationError::new(ErrorKind::Truncated(missing), cursor, i));
            }
            return Err(ValidationError::new(
                ErrorKind::ExpectedContinuation(Missing::from_count(n - i)),
                cursor,
                i,
            ));
        }

        // --- Sequence checks, in fixed order: range, overlong, surrogate, noncharacter. ---

        if u > 0x10FFFF {
            return Err(ValidationError::new(ErrorKind::Range, cursor, n));
        }

        if (flags.ban_overlong() || flags.ban_overlong_except_null()) && u < u_min {
            let null_exemption = flags.ban_overlong_except_null() && !flags.ban_overlong();
            let is_canonical_null = u == 0 && n == 2;
            if !(null_exemption && is_canonical_null) {
                return Err(ValidationError::new(ErrorKind::Overlong, cursor, n));
            }
        }

        if (0xD800..=0xDFFF).contains(&u) {
            let is_low = (u & 0x400) != 0;

            if flags.ban_surrogates() {
                return Err(ValidationError::new(ErrorKind::Surrogate, cursor, n));
            }

            if flags.check_surrogates() {
                if is_low && !expect_low_surrogate {
                    return Err(ValidationError::new(ErrorKind::SurrogateLow, cursor, n));
                }
                if !is_low && expect_low_surrogate {
                    return Err(ValidationError::new(ErrorKind::SurrogateHigh, cursor, n));
                }

                expect_low_surrogate = !is_low;

                if !is_low {
                    cached_high = 0x10000 + ((u & 0x3FF) << 10);
                    cursor += n;
                    last_sequence_length = n;
                    continue;
                }
                u = cached_high | (u & 0x3FF);
            }
            // Neither flag set: surrogates pass through unchanged (WTF-8).
        } else {
            expect_low_surrogate = false;
        }

        if flags.ban_noncharacters()
            && ((u & 0xFFFE) == 0xFFFE || (0xFDD0..=0xFDEF).contains(&u))
        {
            return Err(ValidationError::new(ErrorKind::Noncharacter, cursor, n));
        }

        cursor += n;
        last_sequence_length = n;
    }

    if flags.check_surrogates() && expect_low_surrogate {
        return Err(ValidationError::new(
            ErrorKind::SurrogateTruncated(Missing::One),
            cursor - last_sequence_length,
            last_sequence_length,
        ));
    }

    Ok(Success { offset: cursor })
}
