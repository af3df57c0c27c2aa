use crate::error::{RandomError, Result};
use crate::rng::secure::{EntropySource, OsEntropy, u64_below_from};

pub(crate) fn int_range_from<E: EntropySource>(src: &mut E, min: i64, max: i64) -> Result<i64> {
    if max <= min {
        return Err(RandomError::invalid(format!(
            "empty range: max ({max}) must be greater than min ({min})"
        )));
    }

    // The width of any non-empty i64 range fits in a u64, and so does the
    // offset drawn below it; wrapping arithmetic lands back inside [min, max).
    let width = max.wrapping_sub(min) as u64;
    let offset = u64_below_from(src, width)?;

    Ok(min.wrapping_add(offset as i64))
}

/// Returns a cryptographically secure, uniformly distributed integer in
/// `[min, max)`.
///
/// # Errors
/// - [`RandomError::InvalidArgument`] if `max <= min`.
/// - [`RandomError::EntropyUnavailable`] if the OS entropy source fails.
pub fn int_range(min: i64, max: i64) -> Result<i64> {
    int_range_from(&mut OsEntropy, min, max)
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    fn constant(word: u64) -> impl FnMut(&mut [u8]) -> io::Result<()> {
        move |buf: &mut [u8]| {
            buf.copy_from_slice(&word.to_le_bytes());
            Ok(())
        }
    }

    #[test]
    fn offset_is_added_to_min() {
        // threshold(20) == 16, so 23 is accepted and reduces to 3.
        let mut src = constant(23);
        assert_eq!(int_range_from(&mut src, -10, 10).unwrap(), -7);
    }

    #[test]
    fn full_i64_span_does_not_overflow() {
        let mut src = constant(u64::MAX - 1);
        let v = int_range_from(&mut src, i64::MIN, i64::MAX).unwrap();
        assert!(v < i64::MAX);
    }

    #[test]
    fn empty_range_is_rejected() {
        let mut src = constant(0);
        assert!(matches!(
            int_range_from(&mut src, 5, 5),
            Err(RandomError::InvalidArgument(_))
        ));
        assert!(matches!(
            int_range_from(&mut src, 5, -5),
            Err(RandomError::InvalidArgument(_))
        ));
    }
}
