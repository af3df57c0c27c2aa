//! Picking one element of a sequence

use crate::error::{RandomError, Result};
use crate::rng::secure::{EntropySource, OsEntropy, u64_below_from};

pub(crate) fn choice_from<'a, E, T>(src: &mut E, items: &'a [T]) -> Result<&'a T>
where
    E: EntropySource,
{
    if items.is_empty() {
        return Err(RandomError::invalid("cannot choose from an empty sequence"));
    }

    let idx = u64_below_from(src, items.len() as u64)? as usize;

    Ok(&items[idx])
}

/// Returns a uniformly chosen element of `items`, using operating system
/// entropy for the index.
///
/// # Errors
/// - [`RandomError::InvalidArgument`] if `items` is empty.
/// - [`RandomError::EntropyUnavailable`] if the OS entropy source fails.
///
/// # Example
/// ```
/// let colors = ["red", "green", "blue"];
/// let pick = randgen::choice(&colors).unwrap();
/// assert!(colors.contains(pick));
/// ```
pub fn choice<T>(items: &[T]) -> Result<&T> {
    choice_from(&mut OsEntropy, items)
}

/// Returns an element of `items` chosen with a time-seeded generator.
///
/// Not cryptographically secure.
///
/// # Panics
/// Panics if `items` is empty. An empty sequence is forbidden input on
/// this path; use [`choice`] to get an error instead.
#[cfg(feature = "insecure")]
pub fn insecure_choice<T>(items: &[T]) -> &T {
    use rand::Rng;

    assert!(!items.is_empty(), "cannot choose from an empty sequence");

    let idx = crate::rng::insecure::time_seeded().random_range(0..items.len());

    &items[idx]
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn index_comes_from_entropy() {
        let items = ["a", "b", "c", "d"];
        let mut src = |buf: &mut [u8]| -> io::Result<()> {
            buf.copy_from_slice(&6u64.to_le_bytes());
            Ok(())
        };

        assert_eq!(*choice_from(&mut src, &items).unwrap(), "c");
    }

    #[test]
    fn empty_sequence_is_invalid() {
        let items: [&str; 0] = [];
        let mut src = |_: &mut [u8]| -> io::Result<()> { Ok(()) };

        assert!(matches!(
            choice_from(&mut src, &items),
            Err(RandomError::InvalidArgument(_))
        ));
    }
}
