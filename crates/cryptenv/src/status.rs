// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use cryptenv_rand::EntropyError;

/// Engine status code (`SYMCRYPT_ERROR`).
///
/// Only the two codes the callbacks can produce are defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Status(u32);

impl Status {
    /// `SYMCRYPT_NO_ERROR`.
    pub const SUCCESS: Self = Self(0);

    /// `SYMCRYPT_EXTERNAL_FAILURE`.
    pub const EXTERNAL_FAILURE: Self = Self(0x8008);

    /// Raw code passed across the C boundary.
    pub const fn code(self) -> u32 {
        self.0
    }

    /// Returns `true` for [`Status::SUCCESS`].
    pub const fn is_success(self) -> bool {
        self.0 == Self::SUCCESS.0
    }
}

// Every failure reason collapses to EXTERNAL_FAILURE at the engine boundary.
impl From<EntropyError> for Status {
    fn from(_: EntropyError) -> Self {
        Self::EXTERNAL_FAILURE
    }
}

impl From<Result<(), EntropyError>> for Status {
    fn from(result: Result<(), EntropyError>) -> Self {
        match result {
            Ok(()) => Self::SUCCESS,
            Err(err) => err.into(),
        }
    }
}
