//! Character sets
//!
//! Read-only, process-wide character sets for [`generate`](crate::generate).
//! Every set is plain ASCII, so each character is exactly one byte and a
//! generated index maps directly onto a character.
//!
//! Composite sets are spelled out in full because `&str` constants cannot be
//! concatenated at compile time; the unit tests below pin each composite to
//! its parts.

/// Decimal digits: `[0-9]`.
pub const DIGITS: &str = "0123456789";

/// Lowercase ASCII letters: `[a-z]`.
pub const ASCII_LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// Uppercase ASCII letters: `[A-Z]`.
pub const ASCII_UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// ASCII letters: `[a-zA-Z]`.
pub const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// ASCII letters and digits: `[a-zA-Z0-9]`.
///
/// This is the default set used by [`secure_string`](crate::secure_string)
/// and [`insecure_string`](crate::insecure_string).
pub const ASCII_ALPHANUMERIC: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Hexadecimal digits in both cases: `[0-9a-fA-F]`.
pub const HEX_DIGITS: &str = "0123456789abcdefABCDEF";

/// Octal digits: `[0-7]`.
pub const OCT_DIGITS: &str = "01234567";

/// ASCII punctuation and special characters.
pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Digits, letters and punctuation.
pub const PRINTABLES: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
