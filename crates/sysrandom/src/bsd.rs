// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `getrandom` for FreeBSD, OpenBSD, NetBSD and Apple via `arc4random_buf`.
//!
//! `arc4random_buf` is a ChaCha20-based generator reseeded by the kernel. It
//! cannot fail and never under-fills, so every call reports the full length.

use libc::{c_uint, c_void, size_t, ssize_t};

/// Fills `buflen` bytes at `buf` with cryptographically secure random bytes.
///
/// Drop-in for the Linux `getrandom(2)` signature. `flags` are accepted and
/// ignored: `arc4random_buf` has no blocking or pool selection to control.
///
/// Always returns `buflen`. Never returns `-1` and never touches `errno`.
///
/// # Safety
///
/// `buf` must be valid for writes of `buflen` bytes. When `buflen` is 0, `buf`
/// is not dereferenced and may be null.
///
/// # Example
///
/// ```rust
/// let mut buf = [0u8; 16];
/// let written = unsafe { sysrandom::getrandom(buf.as_mut_ptr().cast(), buf.len(), 0) };
/// assert_eq!(written, 16);
/// ```
pub unsafe extern "C" fn getrandom(buf: *mut c_void, buflen: size_t, _flags: c_uint) -> ssize_t {
    if buflen != 0 {
        unsafe { libc::arc4random_buf(buf, buflen) };
    }

    // A valid buffer never exceeds isize::MAX bytes.
    buflen as ssize_t
}

pub(crate) fn fill_raw(dest: &mut [u8], flags: c_uint) -> Result<usize, i32> {
    let ret = unsafe { getrandom(dest.as_mut_ptr().cast(), dest.len(), flags) };

    Ok(ret as usize)
}
