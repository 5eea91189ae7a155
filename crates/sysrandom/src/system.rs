// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use libc::c_uint;

use crate::error::RandomError;
use crate::fill::fill_bytes_with_flags;
use crate::flags::GRND_NONBLOCK;
use crate::traits::EntropySource;

/// Operating system CSPRNG via [`getrandom`](crate::getrandom).
///
/// - Linux/Android: `getrandom()` syscall with the configured flags
/// - FreeBSD/OpenBSD/NetBSD/Apple: `arc4random_buf()`, flags ignored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemEntropySource {
    flags: c_uint,
}

impl SystemEntropySource {
    /// Creates a source that blocks until the kernel pool is initialised.
    pub const fn new() -> Self {
        Self { flags: 0 }
    }

    /// Creates a source that fails with [`RandomError::WouldBlock`] instead
    /// of blocking (Linux only).
    pub const fn non_blocking() -> Self {
        Self {
            flags: GRND_NONBLOCK,
        }
    }

    /// Creates a source passing `flags` through to every call.
    pub const fn with_flags(flags: c_uint) -> Self {
        Self { flags }
    }

    /// Flags passed to `getrandom`.
    pub const fn flags(&self) -> c_uint {
        self.flags
    }
}

impl EntropySource for SystemEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), RandomError> {
        fill_bytes_with_flags(dest, self.flags)
    }
}
