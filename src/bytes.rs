//! Random byte buffers

use crate::error::Result;
use crate::rng::secure::{EntropySource, OsEntropy, read_entropy};

pub(crate) fn fill_from<E: EntropySource>(src: &mut E, buf: &mut [u8]) -> Result<()> {
    read_entropy(src, buf).inspect_err(|_| buf.fill(0))
}

/// Returns `n` cryptographically secure random bytes.
///
/// # Errors
/// [`RandomError::EntropyUnavailable`](crate::RandomError::EntropyUnavailable)
/// if the OS entropy source fails. No buffer is returned in that case.
pub fn random_bytes(n: usize) -> Result<Vec<u8>> {
    let mut buf = vec![0u8; n];
    fill_from(&mut OsEntropy, &mut buf)?;

    Ok(buf)
}

/// Fills `buf` with cryptographically secure random bytes.
///
/// On failure the buffer is zeroed rather than left partially filled.
///
/// # Errors
/// [`RandomError::EntropyUnavailable`](crate::RandomError::EntropyUnavailable)
/// if the OS entropy source fails.
pub fn fill_bytes(buf: &mut [u8]) -> Result<()> {
    fill_from(&mut OsEntropy, buf)
}
