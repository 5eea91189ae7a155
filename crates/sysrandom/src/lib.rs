// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # sysrandom
//!
//! `getrandom(2)` with one signature across Linux, the BSDs and Apple platforms.
//!
//! Linux and Android ship the system call, so [`getrandom`] is
//! `libc::getrandom` as-is.
//! FreeBSD, OpenBSD, NetBSD and Apple targets get a drop-in function of the
//! same name backed by `arc4random_buf`. Any other target fails to build.
//!
//! ## Core Items
//!
//! - [`getrandom`]: raw C-ABI entry point, `(buf, buflen, flags) -> ssize_t`
//! - [`fill_bytes`] / [`fill_bytes_with_flags`]: safe slice wrappers
//! - [`SystemEntropySource`]: [`EntropySource`] over the platform call
//! - [`BACKEND`]: which path was compiled in
//!
//! ## Example
//!
//! ```rust
//! use sysrandom::{EntropySource, SystemEntropySource, fill_bytes};
//!
//! let mut key = [0u8; 32];
//! fill_bytes(&mut key).expect("Failed to fill_bytes(..)");
//!
//! let source = SystemEntropySource::new();
//! let mut nonce = [0u8; 24];
//! source.fill_bytes(&mut nonce).expect("Failed to fill_bytes(..)");
//! ```
//!
//! ## Platform Support
//!
//! - Linux/Android: `getrandom()` syscall, flags honoured
//! - FreeBSD/OpenBSD/NetBSD: `arc4random_buf()`, flags ignored
//! - macOS/iOS/tvOS/watchOS/visionOS: `arc4random_buf()`, flags ignored

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "freebsd",
    target_os = "openbsd",
    target_os = "netbsd",
    target_vendor = "apple"
)))]
compile_error!("Unsupported platform for secure random number generation");

#[cfg(test)]
mod tests;

#[cfg(any(
    target_os = "freebsd",
    target_os = "openbsd",
    target_os = "netbsd",
    target_vendor = "apple"
))]
#[path = "bsd.rs"]
mod sys;

#[cfg(any(target_os = "linux", target_os = "android"))]
#[path = "linux.rs"]
mod sys;

mod backend;
mod error;
mod fill;
mod system;
mod traits;

pub mod flags;

pub use backend::{BACKEND, Backend};
pub use error::RandomError;
pub use fill::{fill_bytes, fill_bytes_with, fill_bytes_with_flags};
pub use flags::{GRND_INSECURE, GRND_NONBLOCK, GRND_RANDOM};
pub use sys::getrandom;
pub use system::SystemEntropySource;
pub use traits::EntropySource;

/// Signature shared by every [`getrandom`] this crate exposes.
///
/// Matches the Linux system call: fill `buflen` bytes at `buf`, return the
/// number of bytes written or `-1` with `errno` set.
pub type GetRandomFn =
    unsafe extern "C" fn(*mut libc::c_void, libc::size_t, libc::c_uint) -> libc::ssize_t;
