// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Safe slice wrappers over the platform `getrandom`.

use libc::c_uint;

use crate::error::RandomError;
use crate::sys;

/// Fills `dest` with cryptographically secure random bytes.
///
/// Blocks until the kernel pool is initialised (Linux). Never fails on BSD
/// and Apple targets.
///
/// # Errors
///
/// See [`fill_bytes_with_flags`].
///
/// # Example
///
/// ```rust
/// let mut key = [0u8; 32];
/// sysrandom::fill_bytes(&mut key).expect("Failed to fill_bytes(..)");
/// ```
pub fn fill_bytes(dest: &mut [u8]) -> Result<(), RandomError> {
    fill_bytes_with_flags(dest, 0)
}

/// Fills `dest` completely, passing `flags` to every `getrandom` call.
///
/// Short reads are continued and `EINTR` is retried.
///
/// # Errors
///
/// - [`RandomError::WouldBlock`] on `EAGAIN` (only with `GRND_NONBLOCK`)
/// - [`RandomError::Os`] on any other `errno`
/// - [`RandomError::EntropyNotAvailable`] if a call makes no progress
pub fn fill_bytes_with_flags(dest: &mut [u8], flags: c_uint) -> Result<(), RandomError> {
    fill_bytes_with(|chunk| sys::fill_raw(chunk, flags), dest)
}

/// Drives `fill_fn` until `dest` is full.
///
/// `fill_fn` receives the unfilled tail and returns the number of bytes it
/// wrote, or the `errno` of a failed attempt. An empty `dest` never calls it.
///
/// # Example
///
/// ```rust
/// use sysrandom::fill_bytes_with;
///
/// let mut buf = [0u8; 10];
/// fill_bytes_with(
///     |chunk| {
///         chunk[0] = 0xAA;
///         Ok(1)
///     },
///     &mut buf,
/// )
/// .expect("Failed to fill_bytes_with(..)");
///
/// assert_eq!(buf, [0xAA; 10]);
/// ```
pub fn fill_bytes_with<F>(mut fill_fn: F, dest: &mut [u8]) -> Result<(), RandomError>
where
    F: FnMut(&mut [u8]) -> Result<usize, i32>,
{
    let mut filled = 0;

    while filled < dest.len() {
        let remaining = dest.len() - filled;

        match fill_fn(&mut dest[filled..]) {
            Ok(0) => return Err(RandomError::EntropyNotAvailable),
            Ok(written) => filled += written.min(remaining),
            Err(libc::EINTR) => continue,
            Err(libc::EAGAIN) => return Err(RandomError::WouldBlock),
            Err(errno) => return Err(RandomError::Os(errno)),
        }
    }

    Ok(())
}
