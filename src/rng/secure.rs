//! Secure integer generation
//!
//! Integers are drawn from operating system entropy and reduced to the
//! requested bound with rejection sampling, so every value in `[0, bound)`
//! is equally likely.
//!
//! Entropy failures abort the call immediately. The only loop in this module
//! is the rejection loop, which discards words that would bias the modulo
//! reduction; a rejected word is not an error and zero is never rejected
//! for being small.

use std::io;

use crate::error::{RandomError, Result};
use crate::os::sys_random;

/// A source of cryptographically secure bytes.
///
/// Production code always uses [`OsEntropy`]. The trait exists so the
/// generators can be driven by a failing or scripted source in tests.
pub(crate) trait EntropySource {
    fn fill(&mut self, buf: &mut [u8]) -> io::Result<()>;
}

/// The operating system entropy source.
pub(crate) struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&mut self, buf: &mut [u8]) -> io::Result<()> {
        sys_random(buf)
    }
}

impl<F> EntropySource for F
where
    F: FnMut(&mut [u8]) -> io::Result<()>,
{
    fn fill(&mut self, buf: &mut [u8]) -> io::Result<()> {
        self(buf)
    }
}

/// Fills `buf` from `src`, logging and wrapping any failure.
pub(crate) fn read_entropy<E: EntropySource>(src: &mut E, buf: &mut [u8]) -> Result<()> {
    let len = buf.len();

    src.fill(buf).map_err(|err| {
        tracing::warn!(error = %err, len, "entropy source failed");
        RandomError::EntropyUnavailable(err)
    })
}

/// Number of low 64-bit words that must be discarded for `bound`.
///
/// Equal to `2^64 mod bound`. Words at or above this threshold span a whole
/// number of `bound`-sized blocks, so reducing them modulo `bound` is
/// unbiased.
#[inline]
fn rejection_threshold(bound: u64) -> u64 {
    bound.wrapping_neg() % bound
}

pub(crate) fn u64_below_from<E: EntropySource>(src: &mut E, bound: u64) -> Result<u64> {
    if bound == 0 {
        return Err(RandomError::invalid("upper bound must be positive, got 0"));
    }

    let threshold = rejection_threshold(bound);
    let mut word = [0u8; 8];

    loop {
        read_entropy(src, &mut word)?;

        let v = u64::from_le_bytes(word);
        if v >= threshold {
            return Ok(v % bound);
        }
    }
}

// Words read per entropy call when filling many values at once.
const BATCH_WORDS: usize = 256;

/// Fills `out` with independent uniform values in `[0, bound)`.
///
/// Entropy is read in batches of up to `BATCH_WORDS` words; a rejected word
/// is replaced by a single draw. The first entropy failure aborts the fill.
pub(crate) fn fill_below_from<E: EntropySource>(
    src: &mut E,
    bound: u64,
    out: &mut [u64],
) -> Result<()> {
    if bound == 0 {
        return Err(RandomError::invalid("upper bound must be positive, got 0"));
    }

    let threshold = rejection_threshold(bound);
    let mut bytes = [0u8; BATCH_WORDS * 8];

    for chunk in out.chunks_mut(BATCH_WORDS) {
        let raw = &mut bytes[..chunk.len() * 8];
        read_entropy(src, raw)?;

        for (slot, word) in chunk.iter_mut().zip(raw.chunks_exact(8)) {
            let mut w = [0u8; 8];
            w.copy_from_slice(word);

            let v = u64::from_le_bytes(w);
            *slot = if v >= threshold {
                v % bound
            } else {
                u64_below_from(src, bound)?
            };
        }
    }

    Ok(())
}

/// Returns a uniformly distributed integer in `[0, bound)` drawn from
/// operating system entropy.
///
/// # Errors
/// - [`RandomError::InvalidArgument`] if `bound` is zero.
/// - [`RandomError::EntropyUnavailable`] if the OS entropy source fails.
pub fn secure_u64_below(bound: u64) -> Result<u64> {
    u64_below_from(&mut OsEntropy, bound)
}

pub(crate) fn int_from<E: EntropySource>(src: &mut E, max: i64) -> Result<i64> {
    if max <= 0 {
        return Err(RandomError::invalid(format!(
            "upper bound must be positive, got {max}"
        )));
    }

    // max > 0, so the conversion is lossless and the result fits back into i64.
    u64_below_from(src, max as u64).map(|v| v as i64)
}

/// Returns a cryptographically secure, uniformly distributed integer in
/// `[0, max)`.
///
/// # Errors
/// - [`RandomError::InvalidArgument`] if `max <= 0`. The bound is never
///   clamped or corrected.
/// - [`RandomError::EntropyUnavailable`] if the OS entropy source fails.
///
/// # Example
/// ```
/// let die = randgen::secure_int(6).unwrap();
/// assert!((0..6).contains(&die));
/// ```
pub fn secure_int(max: i64) -> Result<i64> {
    int_from(&mut OsEntropy, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays `words` as little-endian u64 draws.
    fn scripted(words: Vec<u64>) -> impl FnMut(&mut [u8]) -> io::Result<()> {
        let mut words = words.into_iter();
        move |buf: &mut [u8]| {
            let w = words.next().expect("script exhausted");
            buf.copy_from_slice(&w.to_le_bytes());
            Ok(())
        }
    }

    fn failing(buf: &mut [u8]) -> io::Result<()> {
        let _ = buf;
        Err(io::Error::other("no entropy"))
    }

    #[test]
    fn threshold_is_two_pow_64_mod_bound() {
        assert_eq!(rejection_threshold(1), 0);
        assert_eq!(rejection_threshold(2), 0);
        assert_eq!(rejection_threshold(3), 1);
        assert_eq!(rejection_threshold(10), 6);
        assert_eq!(rejection_threshold(u64::MAX), 1);
    }

    #[test]
    fn zero_word_is_a_valid_draw() {
        // Powers of two never reject, so the all-zero word maps to 0.
        let mut src = scripted(vec![0]);
        assert_eq!(u64_below_from(&mut src, 8).unwrap(), 0);
    }

    #[test]
    fn biased_words_are_rejected() {
        // threshold(10) == 6: words 0..6 are discarded, 16 maps to 6.
        let mut src = scripted(vec![3, 5, 16]);
        assert_eq!(u64_below_from(&mut src, 10).unwrap(), 6);
    }

    #[test]
    fn entropy_failure_is_surfaced() {
        let mut src = failing;
        let err = int_from(&mut src, 10).unwrap_err();
        assert!(matches!(err, RandomError::EntropyUnavailable(_)));
    }

    #[test]
    fn non_positive_bound_is_rejected_before_reading_entropy() {
        let mut src = failing;
        for max in [0, -1, i64::MIN] {
            let err = int_from(&mut src, max).unwrap_err();
            assert!(matches!(err, RandomError::InvalidArgument(_)));
        }
    }

    #[test]
    fn batched_fill_redraws_only_rejected_words() {
        // threshold(10) == 6: the batch holds 12, 2, 25; only 2 is redrawn.
        let mut reads = Vec::new();
        let mut batch = Some(vec![12u64, 2, 25]);
        let mut src = |buf: &mut [u8]| -> io::Result<()> {
            reads.push(buf.len());
            let words = batch.take().unwrap_or_else(|| vec![47]);
            for (chunk, w) in buf.chunks_exact_mut(8).zip(words) {
                chunk.copy_from_slice(&w.to_le_bytes());
            }
            Ok(())
        };

        let mut out = [0u64; 3];
        fill_below_from(&mut src, 10, &mut out).unwrap();

        assert_eq!(out, [2, 7, 5]);
        assert_eq!(reads, vec![24, 8]);
    }

    #[test]
    fn full_range_bound_accepts_max_word() {
        let mut src = scripted(vec![u64::MAX]);
        assert_eq!(u64_below_from(&mut src, u64::MAX).unwrap(), 0);
    }
}
