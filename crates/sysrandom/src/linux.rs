// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Linux and Android: the system declaration, untouched.

use libc::c_uint;

/// The native `getrandom(2)` declaration from `libc`, re-exported unchanged.
///
/// No wrapper is introduced: `sysrandom::getrandom` and `libc::getrandom`
/// are the same item.
pub use libc::getrandom;

pub(crate) fn fill_raw(dest: &mut [u8], flags: c_uint) -> Result<usize, i32> {
    let ret = unsafe { getrandom(dest.as_mut_ptr().cast(), dest.len(), flags) };

    if ret < 0 {
        Err(errno())
    } else {
        Ok(ret as usize)
    }
}

#[cfg(target_os = "linux")]
#[inline(always)]
pub(crate) fn errno() -> i32 {
    unsafe { *libc::__errno_location() }
}

#[cfg(target_os = "android")]
#[inline(always)]
pub(crate) fn errno() -> i32 {
    unsafe { *libc::__errno() }
}
