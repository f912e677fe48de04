// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # cryptenv_rand
//!
//! All-or-nothing secure random fill for cryptographic engine callbacks.
//!
//! The engine asks the host to fill a buffer with randomness and only wants a
//! binary answer: every byte was written by the OS source, or the call failed.
//! [`fill_random`] hides partial reads behind a retry loop and aborts on read
//! errors or a premature end of data, always releasing the source handle.
//!
//! ## Core Types
//!
//! - [`DeviceRandomSource`]: random device (`/dev/urandom` by default), unix only
//! - [`SyscallRandomSource`]: `getrandom(2)` on Linux/Android, `getrandom` crate elsewhere
//! - [`SystemRandomSource`]: either of the above, picked by [`RandomBackend`]
//!
//! ## Traits
//!
//! - [`RandomSource`]: opens a per-call [`RandomReader`]
//! - [`RandomReader`]: one read attempt, possibly partial; released on drop
//!
//! ## Example
//!
//! ```rust
//! use cryptenv_rand::{SystemRandomSource, fill_random};
//!
//! let source = SystemRandomSource::default();
//!
//! let mut key = [0u8; 32];
//! fill_random(&source, &mut key).expect("Failed to fill_random(..)");
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(any(test, feature = "test-utils"))]
extern crate alloc;

#[cfg(test)]
mod tests;

mod backend;
#[cfg(unix)]
mod device;
mod error;
mod fill;
mod support;
mod syscall;
mod traits;

pub use backend::{RandomBackend, SystemRandomSource, SystemReader};
#[cfg(unix)]
pub use device::{DeviceHandle, DeviceRandomSource, URANDOM_PATH};
pub use error::EntropyError;
pub use fill::{fill_random, fill_random_raw};
pub use syscall::{SyscallRandomSource, SyscallReader};
pub use traits::{RandomReader, RandomSource};

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
