// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ptr::NonNull;

use crate::align::alloc_size;
use crate::heap::{allocate, free};

/// Owned, zero-initialized allocation from the bridge.
///
/// Wraps [`allocate`]/[`free`] so Rust-side callers get the same aligned
/// memory the engine does, released on drop.
///
/// ```rust
/// use cryptenv_alloc::{ASYM_ALIGN, AlignedBlock};
///
/// let mut block = AlignedBlock::new(40).expect("allocation failed");
/// assert_eq!(block.len(), 40);
/// assert_eq!(block.capacity(), 64);
/// assert_eq!(block.as_ptr() as usize % ASYM_ALIGN, 0);
///
/// block.as_mut_slice().fill(0xAA);
/// ```
#[derive(Debug)]
pub struct AlignedBlock {
    ptr: NonNull<u8>,
    len: usize,
    capacity: usize,
}

// The block owns its allocation exclusively.
unsafe impl Send for AlignedBlock {}
unsafe impl Sync for AlignedBlock {}

impl AlignedBlock {
    /// Allocates and zeroes a block for `len` bytes.
    ///
    /// Returns `None` on allocation failure or size overflow.
    pub fn new(len: usize) -> Option<Self> {
        let capacity = alloc_size(len)?;
        let ptr = NonNull::new(allocate(len))?;

        unsafe { ptr.as_ptr().write_bytes(0, capacity) };

        Some(Self { ptr, len, capacity })
    }

    /// Requested length in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the requested length was zero.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Rounded size actually obtained from the host allocator.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Start of the allocation.
    pub fn as_ptr(&self) -> *const u8 {
        self.ptr.as_ptr()
    }

    /// Mutable start of the allocation.
    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        self.ptr.as_ptr()
    }

    /// The first `len` bytes.
    pub fn as_slice(&self) -> &[u8] {
        unsafe { core::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// The first `len` bytes, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        unsafe { core::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Releases ownership, returning the raw handle.
    ///
    /// The caller becomes responsible for passing it to [`free`].
    pub fn into_raw(self) -> *mut u8 {
        let ptr = self.ptr.as_ptr();
        core::mem::forget(self);
        ptr
    }
}

impl Drop for AlignedBlock {
    fn drop(&mut self) {
        unsafe { free(self.ptr.as_ptr()) };
    }
}
