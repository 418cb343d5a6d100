//! Validation flag sets and the named presets built from them.
//!
//! [`Flags`] is a small bitset over a `u32`, in the same spirit as the
//! `Config` struct the rest of this crate's ancestry uses for its own
//! tunables: a plain data type with a `Default` impl and no external
//! bitflags dependency.

use core::ops::{BitOr, BitOrAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Any overlong encoding is an error.
const BAN_OVERLONG: u32 = 1 << 0;
/// As [`BAN_OVERLONG`], but the canonical two-byte encoding of U+0000
/// (`C0 80`) is permitted. Overruled if `BAN_OVERLONG` is also set.
const BAN_OVERLONG_EXCEPT_NULL: u32 = 1 << 1;
/// Any code point in U+D800..=U+DFFF is an error.
const BAN_SURROGATES: u32 = 1 << 2;
/// Surrogates are permitted but must form well-formed UTF-16 pairs.
/// Overruled by `BAN_SURROGATES`.
const CHECK_SURROGATES: u32 = 1 << 3;
/// U+FDD0..=U+FDEF and any U+nFFFE/U+nFFFF are errors.
const BAN_NONCHARACTERS: u32 = 1 << 4;
/// A zero byte is an error. Only observable in [`crate::LengthMode::Explicit`] mode.
const BAN_NULL_BYTE: u32 = 1 << 5;

/// A combinable set of validation policy flags.
///
/// Individual bits are combined with `|`; six named presets
/// ([`Flags::UTF8`], [`Flags::MUTF8`], [`Flags::CESU8`], [`Flags::WTF8`],
/// [`Flags::LAX`], [`Flags::STRICT`]) cover the encodings this crate is
/// built to validate. The validator core never special-cases a preset —
/// it only ever inspects individual bits, so a caller assembling a
/// custom combination gets identical behavior to a named one with the
/// same bits set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Flags(u32);

impl Flags {
    /// No extra validation: any structurally well-formed sequence of
    /// 1-4 byte groups is accepted, including surrogates, noncharacters,
    /// overlong encodings, and embedded null bytes.
    pub const LAX: Self = Self(0);

    /// Every flag set: the strictest validation this crate supports.
    pub const STRICT: Self = Self(
        BAN_OVERLONG
            | BAN_OVERLONG_EXCEPT_NULL
            | BAN_SURROGATES
            | CHECK_SURROGATES
            | BAN_NONCHARACTERS
            | BAN_NULL_BYTE,
    );

    /// Standard UTF-8: overlong encodings and surrogates are both errors.
    pub const UTF8: Self = Self(BAN_OVERLONG | BAN_SURROGATES);

    /// Modified UTF-8: overlong encodings are banned except the 2-byte
    /// `C0 80` encoding of NUL, and surrogates are permitted but must
    /// pair up as in UTF-16.
    pub const MUTF8: Self = Self(BAN_OVERLONG_EXCEPT_NULL | CHECK_SURROGATES);

    /// CESU-8: overlong encodings are banned outright, surrogates are
    /// permitted but must pair up as in UTF-16.
    pub const CESU8: Self = Self(BAN_OVERLONG | CHECK_SURROGATES);

    /// WTF-8: overlong encodings are banned, surrogates are permitted
    /// and not validated for pairing (may appear unpaired).
    pub const WTF8: Self = Self(BAN_OVERLONG);

    /// An empty flag set, identical to [`Flags::LAX`]. Useful as a
    /// starting point for building a custom combination with the
    /// `with_*` builder methods.
    #[inline]
    pub const fn empty() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn with_ban_overlong(self) -> Self {
        Self(self.0 | BAN_OVERLONG)
    }

    #[inline]
    pub const fn with_ban_overlong_except_null(self) -> Self {
        Self(self.0 | BAN_OVERLONG_EXCEPT_NULL)
    }

    #[inline]
    pub const fn with_ban_surrogates(self) -> Self {
        Self(self.0 | BAN_SURROGATES)
    }

    #[inline]
    pub const fn with_check_surrogates(self) -> Self {
        Self(self.0 | CHECK_SURROGATES)
    }

    #[inline]
    pub const fn with_ban_noncharacters(self) -> Self {
        Self(self.0 | BAN_NONCHARACTERS)
    }

    #[inline]
    pub const fn with_ban_null_byte(self) -> Self {
        Self(self.0 | BAN_NULL_BYTE)
    }

    #[inline]
    pub(crate) const fn ban_overlong(self) -> bool {
        self.0 & BAN_OVERLONG != 0
    }

    #[inline]
    pub(crate) const fn ban_overlong_except_null(self) -> bool {
        self.0 & BAN_OVERLONG_EXCEPT_NULL != 0
    }

    #[inline]
    pub(crate) const fn ban_surrogates(self) -> bool {
        self.0 & BAN_SURROGATES != 0
    }

    #[inline]
    pub(crate) const fn check_surrogates(self) -> bool {
        self.0 & CHECK_SURROGATES != 0
    }

    #[inline]
    pub(crate) const fn ban_noncharacters(self) -> bool {
        self.0 & BAN_NONCHARACTERS != 0
    }

    #[inline]
    pub(crate) const fn ban_null_byte(self) -> bool {
        self.0 & BAN_NULL_BYTE != 0
    }
}

impl BitOr for Flags {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}
