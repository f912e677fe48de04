// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;

/// A host source of cryptographically secure randomness.
///
/// Every fill opens its own reader and drops it when done, so implementations
/// never share a handle between calls.
pub trait RandomSource {
    /// Open handle on the source. Dropping it releases the handle.
    type Reader<'a>: RandomReader
    where
        Self: 'a;

    /// Acquires a handle on the source.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::SourceUnavailable`] if the source cannot be opened.
    fn open(&self) -> Result<Self::Reader<'_>, EntropyError>;
}

/// An open handle on a [`RandomSource`].
pub trait RandomReader {
    /// Reads up to `dest.len()` bytes into the front of `dest`.
    ///
    /// Returns the number of bytes written. Fewer than requested is allowed;
    /// `Ok(0)` means the source has no more data.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::ReadFailed`] if the underlying read fails.
    fn read(&mut self, dest: &mut [u8]) -> Result<usize, EntropyError>;
}
