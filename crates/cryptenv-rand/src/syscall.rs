// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Entropy syscall backend.
//!
//! - Linux/Android: `getrandom(2)` via libc, one syscall per read (may be partial)
//! - Other: `getrandom::fill`, which fills the whole slice or fails

use crate::error::EntropyError;
use crate::traits::{RandomReader, RandomSource};

/// Random source backed by the OS entropy syscall.
///
/// There is no descriptor to acquire; opening always succeeds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SyscallRandomSource;

impl RandomSource for SyscallRandomSource {
    type Reader<'a> = SyscallReader;

    fn open(&self) -> Result<SyscallReader, EntropyError> {
        Ok(SyscallReader { _private: () })
    }
}

/// Reader for [`SyscallRandomSource`].
#[derive(Debug)]
pub struct SyscallReader {
    _private: (),
}

impl RandomReader for SyscallReader {
    #[cfg(any(target_os = "linux", target_os = "android"))]
    fn read(&mut self, dest: &mut [u8]) -> Result<usize, EntropyError> {
        let ret = unsafe { libc::getrandom(dest.as_mut_ptr() as *mut libc::c_void, dest.len(), 0) };

        if ret < 0 {
            return Err(EntropyError::ReadFailed);
        }

        Ok(ret as usize)
    }

    #[cfg(not(any(target_os = "linux", target_os = "android")))]
    fn read(&mut self, dest: &mut [u8]) -> Result<usize, EntropyError> {
        getrandom::fill(dest).map_err(|_| EntropyError::ReadFailed)?;

        Ok(dest.len())
    }
}
