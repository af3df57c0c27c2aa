//! Operating system entropy layer
//!
//! This module provides a unified, platform-independent way to read
//! cryptographically secure random bytes from the operating system.
//!
//! Platform-specific implementations are selected at compile time using
//! conditional compilation. Each submodule exposes the same `sys_random`
//! function, so the generators above it stay fully portable.
//!
//! Unlike a panicking entropy reader, every backend reports failure as an
//! [`std::io::Error`]. The generators turn that into
//! [`RandomError::EntropyUnavailable`](crate::RandomError::EntropyUnavailable)
//! and leave the decision to retry with the caller.

#[cfg(target_os = "macos")]
pub(crate) mod macos;

#[cfg(target_os = "macos")]
pub(crate) use macos::*;

#[cfg(target_os = "linux")]
pub(crate) mod linux;

#[cfg(target_os = "linux")]
pub(crate) use linux::*;

#[cfg(target_os = "windows")]
pub(crate) mod windows;

#[cfg(target_os = "windows")]
pub(crate) use windows::*;

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
compile_error!("randgen supports only linux, macos and windows targets");
