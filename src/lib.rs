//! # utf8chk
//!
//! A single-pass validation engine for UTF-8 and its close cousins:
//! standard UTF-8, Modified UTF-8 (MUTF-8), CESU-8, WTF-8, and a fully
//! lax mode that only checks structural well-formedness.
//!
//! The engine does one thing: scan a byte buffer left to right and
//! report either success or the exact byte range of the first
//! violation. It does not decode to code points for a caller, does not
//! normalize, and does not transcode between variants — see
//! [`validate`] for the full contract.
//!
//! ## Quick Start
//!
//! ```
//! use utf8chk::{validate, Flags, LengthMode};
//!
//! // Standard UTF-8.
//! assert!(validate(b"Hello, world!", LengthMode::Explicit(13), Flags::UTF8).is_ok());
//!
//! // CESU-8 permits a well-formed surrogate pair that UTF-8 rejects outright.
//! let cesu8_pair = [0xED, 0xA0, 0x81, 0xED, 0xB0, 0x80];
//! assert!(validate(&cesu8_pair, LengthMode::Explicit(6), Flags::UTF8).is_err());
//! assert!(validate(&cesu8_pair, LengthMode::Explicit(6), Flags::CESU8).is_ok());
//! ```
//!
//! ## Module Organization
//!
//! - [`validate`] and [`LengthMode`] - the engine entry point and its length convention.
//! - [`Flags`] - the combinable validation policy bits and their named presets.
//! - [`ErrorKind`], [`ValidationError`], [`Success`] - the result types.
//!
//! ## Features
//!
//! - `std` (default) - enables `std::error::Error` for [`ValidationError`].
//!   Without it the crate is `no_std` (the validator core never allocates).
//! - `serde` - derives `Serialize`/`Deserialize` for every public type
//!   ([`Flags`], [`LengthMode`], [`Missing`], [`ErrorKind`], [`ValidationError`], [`Success`]).
//! - `cli` - builds the `utf8chk` binary for ad hoc file/stdin validation.

// Use no_std unless std feature is enabled or we're in test mode
#![cfg_attr(not(any(test, feature = "std")), no_std)]

// When using no_std, we need to explicitly link the alloc crate
#[cfg(not(any(test, feature = "std")))]
extern crate alloc;

// When using std, re-export alloc types from std for compatibility
#[cfg(any(test, feature = "std"))]
extern crate std as alloc;

mod error;
mod flags;
mod validate;

pub use error::{ErrorKind, Missing, Success, ValidationError};
pub use flags::Flags;
pub use validate::{validate, LengthMode};
