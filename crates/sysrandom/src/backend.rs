// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// The implementation behind [`getrandom`](crate::getrandom) on this target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// `arc4random_buf` shim (FreeBSD, OpenBSD, NetBSD, Apple).
    Arc4Random,
    /// Native `getrandom(2)` system call (Linux, Android).
    LinuxGetrandom,
}

impl Backend {
    /// Whether `GRND_*` flags change behaviour on this backend.
    pub const fn honours_flags(self) -> bool {
        matches!(self, Backend::LinuxGetrandom)
    }
}

/// Backend compiled into this build.
#[cfg(any(
    target_os = "freebsd",
    target_os = "openbsd",
    target_os = "netbsd",
    target_vendor = "apple"
))]
pub const BACKEND: Backend = Backend::Arc4Random;

/// Backend compiled into this build.
#[cfg(any(target_os = "linux", target_os = "android"))]
pub const BACKEND: Backend = Backend::LinuxGetrandom;
