//! Fast, time-seeded integer generation
//!
//! Every call builds its own [`SmallRng`] seeded from the wall clock, so no
//! generator state is shared between calls or threads. The price is weaker
//! independence: two calls that observe the same clock reading produce the
//! same value.
//!
//! Nothing in this module is suitable for tokens, keys or any other
//! security-sensitive value. Use [`secure_int`](crate::secure_int) for those.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{SeedableRng, rngs::SmallRng};

/// Builds a generator seeded from the current time in nanoseconds.
///
/// A clock set before the Unix epoch seeds with zero.
pub(crate) fn time_seeded() -> SmallRng {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);

    tracing::trace!(seed, "seeding insecure generator");

    SmallRng::seed_from_u64(seed)
}

/// Returns a pseudo-random integer in `[0, n)` from a freshly time-seeded
/// generator.
///
/// Not cryptographically secure.
///
/// # Panics
/// Panics if `n <= 0`. A non-positive bound is a caller error on this path.
#[cfg(feature = "insecure")]
pub fn insecure_int(n: i64) -> i64 {
    use rand::Rng;

    assert!(n > 0, "insecure_int requires a positive bound, got {n}");

    time_seeded().random_range(0..n)
}
