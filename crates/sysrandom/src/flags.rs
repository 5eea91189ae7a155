// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! `getrandom` flag bits, available on every supported target.
//!
//! Values are the Linux ABI values. The BSD/Apple backend accepts and ignores
//! them; check [`Backend::honours_flags`](crate::Backend::honours_flags) when
//! the distinction matters.

use libc::c_uint;

/// Return `EAGAIN` instead of blocking when the pool is not initialised.
pub const GRND_NONBLOCK: c_uint = 0x0001;

/// Draw from the blocking `/dev/random` pool instead of `/dev/urandom`.
pub const GRND_RANDOM: c_uint = 0x0002;

/// Return bytes even before the pool is initialised (Linux 5.6+).
pub const GRND_INSECURE: c_uint = 0x0004;
