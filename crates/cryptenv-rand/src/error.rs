// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Reasons a random fill did not complete.
///
/// All variants mean the same thing to the engine: the buffer does not hold
/// trustworthy randomness.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EntropyError {
    /// Destination pointer was null.
    #[error("destination buffer is null")]
    NullBuffer,

    /// The random source could not be opened.
    #[error("random source unavailable")]
    SourceUnavailable,

    /// A read from the random source failed.
    #[error("random source read failed")]
    ReadFailed,

    /// The random source reported end of data before the buffer was full.
    #[error("random source ended before buffer was filled")]
    UnexpectedEof,

    /// No random backend has been installed for the callbacks.
    #[error("random backend not installed")]
    NotInitialized,
}
