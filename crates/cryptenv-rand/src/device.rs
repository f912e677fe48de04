// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Random device backend (`open`/`read`/`close`).

use core::ffi::CStr;

use crate::error::EntropyError;
use crate::traits::{RandomReader, RandomSource};

/// Default random device.
pub const URANDOM_PATH: &CStr = c"/dev/urandom";

/// Random source backed by a character device such as `/dev/urandom`.
///
/// Each [`open`](RandomSource::open) acquires a fresh file descriptor that is
/// closed when the returned [`DeviceHandle`] drops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceRandomSource {
    path: &'static CStr,
}

impl DeviceRandomSource {
    /// Source reading from `path`.
    pub const fn new(path: &'static CStr) -> Self {
        Self { path }
    }

    /// Source reading from [`URANDOM_PATH`].
    pub const fn urandom() -> Self {
        Self::new(URANDOM_PATH)
    }

    /// Device path this source opens.
    pub fn path(&self) -> &'static CStr {
        self.path
    }
}

impl Default for DeviceRandomSource {
    fn default() -> Self {
        Self::urandom()
    }
}

impl RandomSource for DeviceRandomSource {
    type Reader<'a> = DeviceHandle;

    fn open(&self) -> Result<DeviceHandle, EntropyError> {
        DeviceHandle::open(self.path)
    }
}

/// Open file descriptor on a random device. Closed on drop.
#[derive(Debug)]
pub struct DeviceHandle {
    fd: libc::c_int,
}

impl DeviceHandle {
    fn open(path: &CStr) -> Result<Self, EntropyError> {
        let fd = unsafe { libc::open(path.as_ptr(), libc::O_RDONLY | libc::O_CLOEXEC) };

        if fd == -1 {
            return Err(EntropyError::SourceUnavailable);
        }

        Ok(Self { fd })
    }
}

impl RandomReader for DeviceHandle {
    fn read(&mut self, dest: &mut [u8]) -> Result<usize, EntropyError> {
        let ret =
            unsafe { libc::read(self.fd, dest.as_mut_ptr() as *mut libc::c_void, dest.len()) };

        if ret < 0 {
            return Err(EntropyError::ReadFailed);
        }

        Ok(ret as usize)
    }
}

impl Drop for DeviceHandle {
    fn drop(&mut self) {
        unsafe { libc::close(self.fd) };
    }
}
