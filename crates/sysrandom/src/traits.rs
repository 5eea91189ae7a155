// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::RandomError;

/// Trait for cryptographically secure random byte sources.
///
/// Lets callers take "something that fills bytes" instead of binding to the
/// platform call directly, so tests can substitute their own source.
pub trait EntropySource {
    /// Fills the destination buffer with cryptographically secure random bytes.
    ///
    /// # Errors
    ///
    /// Returns a [`RandomError`] if the underlying source fails. Sources backed
    /// by `arc4random_buf` never fail.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), RandomError>;
}
