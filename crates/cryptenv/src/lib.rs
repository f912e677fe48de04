// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # cryptenv
//!
//! Host environment callbacks for an external cryptographic engine.
//!
//! The engine does not talk to the platform itself. It calls back into the
//! host for two things: aligned heap memory and secure random bytes. This
//! crate provides both, as a Rust value ([`Environment`]) and as the C-ABI
//! symbols the engine links against.
//!
//! ## Setup
//!
//! Callback registration is explicit. Call [`install()`] once during process
//! setup, before the engine asks for randomness:
//!
//! ```rust
//! use cryptenv::{RandomBackend, install, installed_backend};
//!
//! install(RandomBackend::Syscall).expect("Failed to install(..)");
//! assert_eq!(installed_backend(), Some(RandomBackend::Syscall));
//! ```
//!
//! Rust-side callers can skip the global and hold an [`Environment`] directly:
//!
//! ```rust
//! use cryptenv::{Environment, Status};
//!
//! let env = Environment::system();
//!
//! let ptr = env.alloc(100);
//! assert!(!ptr.is_null());
//! unsafe { env.free(ptr) };
//!
//! let mut nonce = [0u8; 24];
//! let status = unsafe { env.fill_random(nonce.as_mut_ptr(), nonce.len()) };
//! assert_eq!(status, Status::SUCCESS);
//! ```
//!
//! ## Engine Callbacks
//!
//! With the `engine-callbacks` feature (default) the crate exports:
//!
//! - `SymCryptCallbackAlloc(size_t) -> void*`
//! - `SymCryptCallbackFree(void*)`
//! - `SymCryptCallbackRandom(unsigned char*, size_t) -> SYMCRYPT_ERROR`

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

#[cfg(feature = "engine-callbacks")]
mod callbacks;
mod environment;
mod error;
mod install;
mod status;

#[cfg(feature = "engine-callbacks")]
pub use callbacks::{SymCryptCallbackAlloc, SymCryptCallbackFree, SymCryptCallbackRandom};
pub use environment::Environment;
pub use error::InstallError;
pub use install::{install, installed_backend, installed_environment};
pub use status::Status;

pub use cryptenv_alloc::{ASYM_ALIGN, AlignedBlock};
pub use cryptenv_rand::{EntropyError, RandomBackend, RandomReader, RandomSource, SystemRandomSource};

#[cfg(feature = "test-utils")]
pub use cryptenv_rand::test_utils;
