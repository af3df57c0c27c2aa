//! Random strings from a character set
//!
//! Each character of the output is drawn independently and uniformly, with
//! replacement, from the bytes of the character set. Character sets must be
//! ASCII so that every byte is a whole character; all sets in
//! [`charset`](crate::charset) satisfy this.

use crate::charset::ASCII_ALPHANUMERIC;
use crate::error::{RandomError, Result};
use crate::rng::int_range;
use crate::rng::secure::{EntropySource, OsEntropy, fill_below_from};

fn check_charset(charset: &str) -> Result<()> {
    if charset.is_empty() {
        return Err(RandomError::invalid("character set must not be empty"));
    }

    if !charset.is_ascii() {
        return Err(RandomError::invalid("character set must be ASCII"));
    }

    Ok(())
}

pub(crate) fn generate_from<E: EntropySource>(
    src: &mut E,
    n: usize,
    charset: &str,
) -> Result<String> {
    if n == 0 {
        return Ok(String::new());
    }

    check_charset(charset)?;

    let set = charset.as_bytes();

    let mut indices = vec![0u64; n];
    fill_below_from(src, set.len() as u64, &mut indices)?;

    Ok(indices.iter().map(|&i| set[i as usize] as char).collect())
}

fn generate_insecure(n: usize, charset: &str) -> String {
    use rand::Rng;

    if n == 0 {
        return String::new();
    }

    assert!(!charset.is_empty(), "character set must not be empty");
    assert!(charset.is_ascii(), "character set must be ASCII");

    let set = charset.as_bytes();
    let mut rng = crate::rng::insecure::time_seeded();

    (0..n)
        .map(|_| set[rng.random_range(0..set.len())] as char)
        .collect()
}

/// Generates a string of exactly `n` characters drawn from `charset`.
///
/// With `secure` set, every character index comes from operating system
/// entropy. Otherwise a single time-seeded generator is built for this call
/// and all characters are drawn from it.
///
/// `n == 0` always yields an empty string.
///
/// # Errors
/// - [`RandomError::InvalidArgument`] if `secure` is set and `charset` is
///   empty or not ASCII.
/// - [`RandomError::EntropyUnavailable`] if the OS entropy source fails.
///   No partial string is returned.
///
/// # Panics
/// In insecure mode an empty or non-ASCII `charset` is a caller error and
/// panics.
///
/// # Example
/// ```
/// use randgen::charset::HEX_DIGITS;
///
/// let id = randgen::generate(16, HEX_DIGITS, true).unwrap();
/// assert_eq!(id.len(), 16);
/// assert!(id.chars().all(|c| HEX_DIGITS.contains(c)));
/// ```
pub fn generate(n: usize, charset: &str, secure: bool) -> Result<String> {
    if n == 0 {
        return Ok(String::new());
    }

    if secure {
        generate_from(&mut OsEntropy, n, charset)
    } else {
        Ok(generate_insecure(n, charset))
    }
}

/// Generates a secure alphanumeric (`[a-zA-Z0-9]`) string of length `n`.
///
/// # Errors
/// [`RandomError::EntropyUnavailable`] if the OS entropy source fails.
pub fn secure_string(n: usize) -> Result<String> {
    generate(n, ASCII_ALPHANUMERIC, true)
}

/// Generates an alphanumeric (`[a-zA-Z0-9]`) string of length `n` from a
/// time-seeded generator.
///
/// Only for data that does not need to be secret, such as test fixtures.
#[cfg(feature = "insecure")]
pub fn insecure_string(n: usize) -> String {
    generate_insecure(n, ASCII_ALPHANUMERIC)
}

/// Generates a secure alphanumeric string whose length is drawn uniformly
/// from `[min, max)`.
///
/// # Errors
/// - [`RandomError::InvalidArgument`] if `max <= min`, or if a bound does
///   not fit in an `i64`.
/// - [`RandomError::EntropyUnavailable`] if the OS entropy source fails.
pub fn ranged_string(min: usize, max: usize) -> Result<String> {
    let to_i64 = |v: usize| {
        i64::try_from(v)
            .map_err(|_| RandomError::invalid(format!("length bound {v} is too large")))
    };

    let len = int_range(to_i64(min)?, to_i64(max)?)?;

    // int_range returned a value in [min, max), so it is a valid usize.
    secure_string(len as usize)
}
