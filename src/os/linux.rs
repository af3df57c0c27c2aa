//! Linux entropy backend
//!
//! Reads from the kernel entropy pool through the `getrandom(2)` system
//! call. The call blocks only until the pool is initialized at boot, after
//! which it never blocks.

use std::io;

use libc::{EINTR, c_void, getrandom};

/// Fills `buf` with cryptographically secure random bytes from the kernel.
///
/// Partial reads are continued until the whole buffer is filled and
/// `EINTR` is retried. Any other failure is returned as the OS error.
///
/// # Errors
/// Returns the `errno` reported by `getrandom` (for instance `ENOSYS` on
/// kernels older than 3.17).
pub(crate) fn sys_random(buf: &mut [u8]) -> io::Result<()> {
    let mut filled = 0;

    while filled < buf.len() {
        let ret = unsafe {
            getrandom(
                buf[filled..].as_mut_ptr() as *mut c_void,
                buf.len() - filled,
                0,
            )
        };

        if ret < 0 {
            let err = io::Error::last_os_error();
            if err.raw_os_error() == Some(EINTR) {
                continue;
            }
            return Err(err);
        }

        filled += ret as usize;
    }

    Ok(())
}
