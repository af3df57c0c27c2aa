//! macOS entropy backend
//!
//! Reads from `arc4random_buf`, which the kernel keeps seeded from its own
//! entropy pool. The call never blocks once the system has booted.

use std::io;

use libc::{c_void, arc4random_buf};

/// Fills `buf` with cryptographically secure random bytes from the kernel.
///
/// # Errors
/// Never returns an error: `arc4random_buf` has no failure mode. The
/// `io::Result` keeps the signature identical to the other backends.
pub(crate) fn sys_random(buf: &mut [u8]) -> io::Result<()> {
    unsafe {
        arc4random_buf(buf.as_mut_ptr() as *mut c_void, buf.len());
    }

    Ok(())
}
