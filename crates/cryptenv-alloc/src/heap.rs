// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Host allocator backends.

use core::ptr;

use crate::align::{ASYM_ALIGN, alloc_size};

/// Allocates at least `requested` bytes aligned to [`ASYM_ALIGN`].
///
/// The size is rounded up with [`alloc_size`] before the host allocator is
/// called. Returns null if rounding overflows or the host allocator fails.
/// The returned memory is uninitialized.
///
/// The handle must be released with [`free`] from this crate and nothing
/// else.
#[inline]
pub fn allocate(requested: usize) -> *mut u8 {
    match alloc_size(requested) {
        Some(size) => unsafe { host_alloc(size) },
        None => ptr::null_mut(),
    }
}

/// Releases a handle returned by [`allocate`].
///
/// A null `ptr` is a no-op.
///
/// # Safety
///
/// `ptr` must be null or a handle returned by [`allocate`] that has not been
/// freed yet.
#[inline]
pub unsafe fn free(ptr: *mut u8) {
    if ptr.is_null() {
        return;
    }

    unsafe { host_free(ptr) }
}

// =============================================================================
// Unix: posix_memalign / free
// =============================================================================

#[cfg(unix)]
unsafe fn host_alloc(size: usize) -> *mut u8 {
    let mut out: *mut libc::c_void = ptr::null_mut();

    // ASYM_ALIGN is a power of two and a multiple of sizeof(void*).
    let ret = unsafe { libc::posix_memalign(&mut out, ASYM_ALIGN, size) };

    if ret != 0 {
        return ptr::null_mut();
    }

    out as *mut u8
}

#[cfg(unix)]
unsafe fn host_free(ptr: *mut u8) {
    unsafe { libc::free(ptr as *mut libc::c_void) };
}

// =============================================================================
// Fallback: global allocator with size header
// =============================================================================
//
// Layout: [ header: ASYM_ALIGN bytes, total size in the first usize ][ payload ]
// The handle points at the payload, so it keeps the block's alignment.

#[cfg(not(unix))]
unsafe fn host_alloc(size: usize) -> *mut u8 {
    use alloc::alloc::{Layout, alloc};

    let Some(total) = size.checked_add(ASYM_ALIGN) else {
        return ptr::null_mut();
    };
    let Ok(layout) = Layout::from_size_align(total, ASYM_ALIGN) else {
        return ptr::null_mut();
    };

    let base = unsafe { alloc(layout) };

    if base.is_null() {
        return ptr::null_mut();
    }

    unsafe {
        (base as *mut usize).write(total);
        base.add(ASYM_ALIGN)
    }
}

#[cfg(not(unix))]
unsafe fn host_free(ptr: *mut u8) {
    use alloc::alloc::{Layout, dealloc};

    unsafe {
        let base = ptr.sub(ASYM_ALIGN);
        let total = (base as *const usize).read();
        let layout = Layout::from_size_align_unchecked(total, ASYM_ALIGN);

        dealloc(base, layout);
    }
}
