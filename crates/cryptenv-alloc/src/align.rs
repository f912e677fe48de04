// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Alignment required by the engine for asymmetric-operation buffers.
///
/// Must match `SYMCRYPT_ASYM_ALIGN_VALUE` of the linked engine exactly. A
/// mismatch is not detectable at runtime.
pub const ASYM_ALIGN: usize = 32;

const _: () = assert!(ASYM_ALIGN.is_power_of_two());
const _: () = assert!(ASYM_ALIGN >= core::mem::size_of::<usize>());

/// Rounds `n` up to the next multiple of [`ASYM_ALIGN`].
///
/// Returns `None` if the rounded value does not fit in `usize`.
///
/// ```rust
/// use cryptenv_alloc::{ASYM_ALIGN, round_up};
///
/// assert_eq!(round_up(0), Some(0));
/// assert_eq!(round_up(1), Some(ASYM_ALIGN));
/// assert_eq!(round_up(ASYM_ALIGN), Some(ASYM_ALIGN));
/// assert_eq!(round_up(usize::MAX), None);
/// ```
#[inline]
pub const fn round_up(n: usize) -> Option<usize> {
    match n.checked_add(ASYM_ALIGN - 1) {
        Some(padded) => Some(padded & !(ASYM_ALIGN - 1)),
        None => None,
    }
}

/// Number of bytes actually requested from the host for an `n`-byte request.
///
/// Zero-byte requests take one alignment unit so every successful
/// allocation is a distinct, freeable handle.
#[inline]
pub const fn alloc_size(n: usize) -> Option<usize> {
    if n == 0 {
        return Some(ASYM_ALIGN);
    }

    round_up(n)
}
