// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! C-ABI entry points the engine links against.
//!
//! Signatures follow the engine's callback declarations. Failure is reported
//! the way the engine expects: a null pointer from alloc, a nonzero status
//! from random.

#![allow(non_snake_case)]

use core::ffi::c_void;

use cryptenv_alloc::{allocate, free};

use crate::environment::Environment;
use crate::install::{NotInstalled, installed_environment};

/// Allocates `n_bytes` rounded up to [`ASYM_ALIGN`](cryptenv_alloc::ASYM_ALIGN).
///
/// Returns null on failure.
#[unsafe(no_mangle)]
pub extern "C" fn SymCryptCallbackAlloc(n_bytes: usize) -> *mut c_void {
    allocate(n_bytes) as *mut c_void
}

/// Releases memory from [`SymCryptCallbackAlloc`]. Null is a no-op.
///
/// # Safety
///
/// `p_mem` must be null or an unfreed pointer from [`SymCryptCallbackAlloc`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn SymCryptCallbackFree(p_mem: *mut c_void) {
    unsafe { free(p_mem as *mut u8) }
}

/// Fills `cb_buffer` bytes at `pb_buffer` from the installed backend.
///
/// Returns `SYMCRYPT_NO_ERROR` (0) only if every byte was written. A null
/// buffer, a missing [`install`](crate::install()), or any source failure
/// returns `SYMCRYPT_EXTERNAL_FAILURE`.
///
/// # Safety
///
/// If non-null, `pb_buffer` must be valid for writes of `cb_buffer` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn SymCryptCallbackRandom(pb_buffer: *mut u8, cb_buffer: usize) -> u32 {
    let status = match installed_environment() {
        Ok(env) => unsafe { env.fill_random(pb_buffer, cb_buffer) },
        Err(_) => unsafe { Environment::new(NotInstalled).fill_random(pb_buffer, cb_buffer) },
    };

    status.code()
}
