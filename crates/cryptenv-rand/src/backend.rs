// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(unix)]
use crate::device::{DeviceHandle, DeviceRandomSource};
use crate::error::EntropyError;
use crate::syscall::{SyscallRandomSource, SyscallReader};
use crate::traits::{RandomReader, RandomSource};

/// Host randomness backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum RandomBackend {
    /// OS entropy syscall ([`SyscallRandomSource`]).
    Syscall = 1,
    /// `/dev/urandom` ([`DeviceRandomSource`]).
    #[cfg(unix)]
    Device = 2,
}

impl RandomBackend {
    /// Backend used when none is chosen: the random device on unix, the
    /// syscall elsewhere.
    pub const fn platform_default() -> Self {
        #[cfg(unix)]
        {
            Self::Device
        }

        #[cfg(not(unix))]
        {
            Self::Syscall
        }
    }

    /// Numeric tag, never zero.
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Inverse of [`as_u8`](Self::as_u8). `None` for unknown tags.
    pub const fn from_u8(tag: u8) -> Option<Self> {
        match tag {
            1 => Some(Self::Syscall),
            #[cfg(unix)]
            2 => Some(Self::Device),
            _ => None,
        }
    }
}

impl Default for RandomBackend {
    fn default() -> Self {
        Self::platform_default()
    }
}

/// OS random source selected by a [`RandomBackend`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SystemRandomSource {
    backend: RandomBackend,
}

impl SystemRandomSource {
    /// Source using `backend`.
    pub const fn new(backend: RandomBackend) -> Self {
        Self { backend }
    }

    /// Selected backend.
    pub const fn backend(&self) -> RandomBackend {
        self.backend
    }
}

/// Reader for [`SystemRandomSource`].
#[derive(Debug)]
pub enum SystemReader {
    /// Syscall reader.
    Syscall(SyscallReader),
    /// Open random device.
    #[cfg(unix)]
    Device(DeviceHandle),
}

impl RandomSource for SystemRandomSource {
    type Reader<'a> = SystemReader;

    fn open(&self) -> Result<SystemReader, EntropyError> {
        match self.backend {
            RandomBackend::Syscall => SyscallRandomSource.open().map(SystemReader::Syscall),
            #[cfg(unix)]
            RandomBackend::Device => DeviceRandomSource::urandom()
                .open()
                .map(SystemReader::Device),
        }
    }
}

impl RandomReader for SystemReader {
    fn read(&mut self, dest: &mut [u8]) -> Result<usize, EntropyError> {
        match self {
            Self::Syscall(reader) => reader.read(dest),
            #[cfg(unix)]
            Self::Device(handle) => handle.read(dest),
        }
    }
}
