//! Random values for identifiers, tokens and test data
//!
//! This crate produces random integers, strings drawn from configurable
//! character sets, byte buffers, and choices from a list. Every operation
//! comes in a **secure** flavor backed by operating system entropy, and
//! most also come in a fast **insecure** flavor for data that does not need
//! to be secret.
//!
//! # Module overview
//!
//! - `os`
//!   Platform entropy layer (`getrandom` on Linux, `arc4random_buf` on
//!   macOS, `BCryptGenRandom` on Windows). Failures are reported, never
//!   panicked on.
//!
//! - [`charset`]
//!   Read-only ASCII character sets: digits, letters, hex and octal digits,
//!   punctuation, printables, and their compositions.
//!
//! - `rng`
//!   Integer generators. Secure integers use rejection sampling so that
//!   every value below the bound is equally likely.
//!
//! - `string`, `bytes`, `choice`
//!   Strings, byte buffers and element selection built on the integer
//!   generators.
//!
//! # Secure and insecure
//!
//! Secure operations return [`Result`] and fail with
//! [`RandomError::InvalidArgument`] or [`RandomError::EntropyUnavailable`].
//! Nothing is retried, clamped or substituted internally.
//!
//! Insecure operations seed a small generator from the wall clock on every
//! call. The insecure mode of [`generate`] is always available; the
//! standalone `insecure_int`, `insecure_string` and `insecure_choice` sit
//! behind the `insecure` feature, which is on by default. They never fail; invalid
//! input such as an empty sequence is a caller error and panics.
//!
//! # Concurrency
//!
//! No operation keeps state between calls, so all of them can be used from
//! any number of threads without synchronization.

mod bytes;
mod choice;
mod error;
mod os;
mod rng;
mod string;

pub mod charset;

pub use bytes::{fill_bytes, random_bytes};
pub use choice::choice;
pub use error::{RandomError, Result};
pub use rng::{int_range, secure_int, secure_u64_below};
pub use string::{generate, ranged_string, secure_string};

#[cfg(feature = "insecure")]
pub use choice::insecure_choice;
#[cfg(feature = "insecure")]
pub use rng::insecure_int;
#[cfg(feature = "insecure")]
pub use string::insecure_string;
