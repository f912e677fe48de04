// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use cryptenv_alloc::{AlignedBlock, allocate, free};
use cryptenv_rand::{
    EntropyError, RandomBackend, RandomSource, SystemRandomSource, fill_random, fill_random_raw,
};

use crate::status::Status;

/// Allocation and randomness callbacks bundled with a random source.
///
/// Holds no state besides the source; every fill opens and releases its own
/// handle, so one `Environment` can serve any number of threads when `S` is
/// `Sync`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Environment<S = SystemRandomSource> {
    source: S,
}

impl Environment<SystemRandomSource> {
    /// Environment using the platform default backend.
    pub const fn system() -> Self {
        Self::with_backend(RandomBackend::platform_default())
    }

    /// Environment using `backend`.
    pub const fn with_backend(backend: RandomBackend) -> Self {
        Self {
            source: SystemRandomSource::new(backend),
        }
    }
}

impl<S: RandomSource> Environment<S> {
    /// Environment drawing randomness from `source`.
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Underlying random source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Allocates `n` bytes rounded up to [`ASYM_ALIGN`](cryptenv_alloc::ASYM_ALIGN).
    /// Null on failure.
    pub fn alloc(&self, n: usize) -> *mut u8 {
        allocate(n)
    }

    /// Releases a handle from [`alloc`](Self::alloc). Null is a no-op.
    ///
    /// # Safety
    ///
    /// `ptr` must be null or an unfreed handle from [`alloc`](Self::alloc)
    /// (or the engine's alloc callback).
    pub unsafe fn free(&self, ptr: *mut u8) {
        unsafe { free(ptr) }
    }

    /// Owned, zeroed allocation released on drop.
    pub fn alloc_block(&self, n: usize) -> Option<AlignedBlock> {
        AlignedBlock::new(n)
    }

    /// Fills `len` bytes at `ptr` with randomness, all or nothing.
    ///
    /// Returns [`Status::EXTERNAL_FAILURE`] for a null `ptr` (any `len`) and
    /// for any source failure. On failure the buffer contents are not
    /// trustworthy.
    ///
    /// # Safety
    ///
    /// If non-null, `ptr` must be valid for writes of `len` bytes.
    pub unsafe fn fill_random(&self, ptr: *mut u8, len: usize) -> Status {
        Status::from(unsafe { fill_random_raw(&self.source, ptr, len) })
    }

    /// Fills `dest` with randomness, all or nothing.
    ///
    /// # Errors
    ///
    /// Any [`EntropyError`] from the source.
    pub fn try_fill(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        fill_random(&self.source, dest)
    }
}
