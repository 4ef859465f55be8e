//! Strict conversion between nanosecond time spans and XML Schema durations.
//!
//! Durations are written in the `PnYnMnDTnHnMnS` lexical form, with an optional
//! leading `-` and optional fractional seconds. Encoding always produces the
//! shortest canonical string; decoding accepts any well-formed string and
//! reports exactly which rule a malformed one breaks.
//!
//! Years and months have no calendar here: they are fixed nominal lengths
//! (356 and 30 days by default) shared by both directions, so every value
//! round-trips through its string form.
//!
//! ```
//! use xsd_duration::{decode, encode, ErrorKind};
//!
//! let value = decode("P1DT2H")?;
//! assert_eq!(26 * 3_600 * 1_000_000_000, value);
//! assert_eq!("P1DT2H", encode(value));
//!
//! // 20 nominal months are rewritten as years, months and days
//! assert_eq!("P1Y8M4D", encode(decode("P20M")?));
//!
//! assert_eq!(ErrorKind::OutOfOrderDesignator, decode("P2M1Y").unwrap_err().kind());
//! assert_eq!(ErrorKind::MissingSeparator, decode("P1D2H").unwrap_err().kind());
//! #
//! # Ok::<(), xsd_duration::ParseError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, missing_docs, clippy::cargo)]
#![deny(clippy::unwrap_used)]
#![warn(clippy::indexing_slicing)]
#![warn(clippy::pedantic, clippy::nursery)]
#![warn(clippy::expect_used)]
#![allow(clippy::missing_const_for_fn)]
#![warn(clippy::multiple_crate_versions)]
#![warn(clippy::result_unit_err)]

mod codec;
mod components;
mod duration;
mod error;
mod format;

#[doc(hidden)]
pub mod parse;

pub mod units;

/// Signed elapsed time in nanoseconds.
pub type ElapsedTime = i64;

pub use codec::{Builder, Codec};
pub use components::{Components, Seconds};
pub use duration::Duration;
pub use error::{Error, ErrorKind, ParseError, Result};
pub use format::ZERO;
pub use units::{Unit, UnitTable};

/// Renders a value as its canonical duration string, using the default unit table.
///
/// Never fails; zero is written as `PT0S`.
#[must_use]
pub fn encode(value: ElapsedTime) -> String {
    Codec::new().encode(value)
}

/// Decodes a duration string, using the default unit table.
///
/// Fraction digits past the ninth (below one nanosecond) are truncated.
///
/// # Errors
///
/// Returns an error naming the first rule the input breaks.
pub fn decode(s: &str) -> std::result::Result<ElapsedTime, ParseError> {
    Codec::new().decode(s)
}

/// Decodes a duration from UTF-8 bytes, using the default unit table.
///
/// Fraction digits past the ninth (below one nanosecond) are truncated.
///
/// # Errors
///
/// Returns an error naming the first rule the input breaks.
pub fn decode_bytes(bytes: &[u8]) -> std::result::Result<ElapsedTime, ParseError> {
    Codec::new().decode_bytes(bytes)
}

/// Decodes a duration into `target`, which is only written on success.
///
/// # Errors
///
/// Returns an error naming the first rule the input breaks.
pub fn decode_into(s: &str, target: &mut ElapsedTime) -> std::result::Result<(), ParseError> {
    Codec::new().decode_into(s, target)
}
