// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Errors that can occur when filling a buffer with random bytes.
///
/// Only the Linux backend produces these. On BSD and Apple targets the
/// underlying `arc4random_buf` cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RandomError {
    /// `GRND_NONBLOCK` was passed and the kernel pool is not initialised yet.
    #[error("WouldBlock")]
    WouldBlock,

    /// `getrandom` failed with the contained `errno`.
    #[error("Os({0})")]
    Os(i32),

    /// `getrandom` made no progress on a non-empty buffer.
    #[error("EntropyNotAvailable")]
    EntropyNotAvailable,
}
