//! Integer generation
//!
//! Two families of generators live here:
//!
//! - **Secure**: draws from operating system entropy and rejects biased
//!   words, so results are uniform and unpredictable. Failures are returned
//!   as [`RandomError`](crate::RandomError).
//! - **Insecure**: a small, fast generator seeded from the wall clock on
//!   every call. It never fails, and its invalid inputs are documented
//!   panics. The standalone `insecure_*` functions sit behind the
//!   `insecure` feature; the insecure mode of `generate` is always built.
//!
//! Neither family keeps state between calls.

mod range;
pub(crate) mod secure;

pub(crate) mod insecure;

pub use range::int_range;
pub use secure::{secure_int, secure_u64_below};

#[cfg(feature = "insecure")]
pub use insecure::insecure_int;
