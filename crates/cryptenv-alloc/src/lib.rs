// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # cryptenv_alloc
//!
//! Aligned allocation bridge for cryptographic engine callbacks.
//!
//! The engine hands the host a raw byte count and expects back memory aligned
//! to its asymmetric-operation boundary ([`ASYM_ALIGN`]). This crate rounds the
//! request up to that boundary before asking the host allocator, and reports
//! failure only through a null pointer.
//!
//! ## Core API
//!
//! - [`allocate`]: rounds up and allocates, null on failure
//! - [`free`]: releases a handle from [`allocate`], null is a no-op
//! - [`round_up`]: the rounding rule on its own (overflow-checked)
//! - [`AlignedBlock`]: RAII owner for Rust-side callers
//!
//! ## Example
//!
//! ```rust
//! use cryptenv_alloc::{ASYM_ALIGN, allocate, free};
//!
//! let ptr = allocate(100);
//! assert!(!ptr.is_null());
//! assert_eq!(ptr as usize % ASYM_ALIGN, 0);
//!
//! unsafe { free(ptr) };
//! ```
//!
//! ## Platform Support
//!
//! - Unix: `posix_memalign` / `free` via `libc`
//! - Other: Rust global allocator with a size header in front of the handle

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(not(unix))]
extern crate alloc;

#[cfg(test)]
mod tests;

mod align;
mod block;
mod heap;

pub use align::{ASYM_ALIGN, alloc_size, round_up};
pub use block::AlignedBlock;
pub use heap::{allocate, free};
