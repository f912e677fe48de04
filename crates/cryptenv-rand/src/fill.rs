// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;
use crate::traits::{RandomReader, RandomSource};

/// Fills `dest` completely from `source`, or fails.
///
/// - Empty `dest` succeeds without opening the source.
/// - Partial reads are retried from the new cursor position.
/// - A read error or a zero-byte read before `dest` is full aborts the fill.
///
/// The reader is dropped (and its handle released) on every path. On error,
/// bytes already written are left in place and must not be used.
///
/// # Errors
///
/// - [`EntropyError::SourceUnavailable`] if the source cannot be opened
/// - [`EntropyError::ReadFailed`] if a read fails or reports more than requested
/// - [`EntropyError::UnexpectedEof`] if the source runs dry early
pub fn fill_random<S>(source: &S, dest: &mut [u8]) -> Result<(), EntropyError>
where
    S: RandomSource + ?Sized,
{
    if dest.is_empty() {
        return Ok(());
    }

    let mut reader = source.open()?;
    let mut cursor = 0;

    while cursor < dest.len() {
        let remaining = &mut dest[cursor..];
        let read = reader.read(remaining)?;

        if read == 0 {
            return Err(EntropyError::UnexpectedEof);
        }

        if read > remaining.len() {
            return Err(EntropyError::ReadFailed);
        }

        cursor += read;
    }

    Ok(())
}

/// Pointer-based form of [`fill_random`] for the engine boundary.
///
/// A null `ptr` fails with [`EntropyError::NullBuffer`] before anything else,
/// even when `len` is zero.
///
/// # Safety
///
/// If non-null, `ptr` must be valid for writes of `len` bytes and not aliased
/// for the duration of the call.
///
/// # Errors
///
/// [`EntropyError::NullBuffer`], or any error of [`fill_random`].
pub unsafe fn fill_random_raw<S>(source: &S, ptr: *mut u8, len: usize) -> Result<(), EntropyError>
where
    S: RandomSource + ?Sized,
{
    if ptr.is_null() {
        return Err(EntropyError::NullBuffer);
    }

    if len == 0 {
        return Ok(());
    }

    let dest = unsafe { core::slice::from_raw_parts_mut(ptr, len) };

    fill_random(source, dest)
}
